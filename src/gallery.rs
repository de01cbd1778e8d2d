//! Portfolio gallery view state.
//!
//! A single tagged state drives both overlays: the project modal and the
//! full-screen lightbox nested inside it. Keeping the lightbox index inside
//! the `Lightbox` variant means a dangling index without an open project
//! cannot be represented. All transitions are total: operations that do not
//! apply to the current state return it unchanged.

use crate::content::Project;

/// Which overlay the portfolio section is showing.
#[derive(Clone, PartialEq, Debug)]
pub enum GalleryView {
    /// Only the thumbnail grid is visible.
    Closed,
    /// The project detail modal is open on its spec sheet and image grid.
    Modal { project: Project },
    /// The modal is open and `project.images[index]` fills the screen.
    /// Invariant: `index < project.images.len()`.
    Lightbox { project: Project, index: usize },
}

/// Wraps `index + delta` into `[0, len)` with a true mathematical modulo,
/// so stepping back from 0 lands on `len - 1` rather than going negative.
fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    (((index as isize + delta) % len + len) % len) as usize
}

impl GalleryView {
    /// Opens `project`'s modal. Any lightbox left over from a previously
    /// open project is discarded, including when re-selecting the project
    /// that is already showing.
    pub fn open(project: Project) -> Self {
        Self::Modal { project }
    }

    /// Closes the modal (and with it the lightbox, if one was showing).
    pub fn close(&self) -> Self {
        Self::Closed
    }

    /// Enlarges `images[index]`. Out-of-range indices and the `Closed`
    /// state are rejected by returning the state unchanged.
    pub fn open_image(&self, index: usize) -> Self {
        match self {
            Self::Modal { project } | Self::Lightbox { project, .. }
                if index < project.images.len() =>
            {
                Self::Lightbox {
                    project: project.clone(),
                    index,
                }
            }
            other => other.clone(),
        }
    }

    /// Dismisses the lightbox, leaving the modal open.
    pub fn close_image(&self) -> Self {
        match self {
            Self::Lightbox { project, .. } => Self::Modal {
                project: project.clone(),
            },
            other => other.clone(),
        }
    }

    /// Advances the lightbox to the next image, wrapping from the last
    /// back to the first. No-op unless the lightbox is showing.
    pub fn next_image(&self) -> Self {
        self.step_image(1)
    }

    /// Steps the lightbox to the previous image, wrapping from the first
    /// to the last. No-op unless the lightbox is showing.
    pub fn previous_image(&self) -> Self {
        self.step_image(-1)
    }

    fn step_image(&self, delta: isize) -> Self {
        match self {
            Self::Lightbox { project, index } => Self::Lightbox {
                project: project.clone(),
                index: wrap_index(*index, delta, project.images.len()),
            },
            other => other.clone(),
        }
    }

    /// Applies the keyboard contract for a `keydown` while the modal is
    /// mounted. Escape peels one layer at a time: the lightbox first if it
    /// is showing, the modal otherwise. The arrow keys navigate only while
    /// the lightbox is showing. Returns `None` when the key changes nothing.
    pub fn on_key(&self, key: &str) -> Option<Self> {
        match (key, self) {
            ("Escape", Self::Lightbox { .. }) => Some(self.close_image()),
            ("Escape", Self::Modal { .. }) => Some(self.close()),
            ("ArrowRight", Self::Lightbox { .. }) => Some(self.next_image()),
            ("ArrowLeft", Self::Lightbox { .. }) => Some(self.previous_image()),
            _ => None,
        }
    }

    /// The project whose modal is open, if any.
    pub fn project(&self) -> Option<&Project> {
        match self {
            Self::Closed => None,
            Self::Modal { project } | Self::Lightbox { project, .. } => Some(project),
        }
    }

    /// The enlarged image index, if the lightbox is showing.
    pub fn lightbox_index(&self) -> Option<usize> {
        match self {
            Self::Lightbox { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Project, ProjectSpecs};

    fn sample_project(id: u32, image_count: usize) -> Project {
        Project {
            id,
            title: format!("Projeto {id}"),
            tag: "Residencial".to_string(),
            cover: "cover.jpg".to_string(),
            images: (0..image_count).map(|i| format!("img-{i}.jpg")).collect(),
            specs: ProjectSpecs {
                area: "100 m²".to_string(),
                year: "2024".to_string(),
                location: "São Paulo, SP".to_string(),
                scope: "Interiores".to_string(),
            },
        }
    }

    #[test]
    fn opening_a_project_shows_its_modal_without_a_lightbox() {
        let view = GalleryView::open(sample_project(1, 3));
        assert!(view.is_open());
        assert_eq!(view.project().map(|p| p.id), Some(1));
        assert_eq!(view.lightbox_index(), None);
    }

    #[test]
    fn switching_projects_discards_the_lightbox() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(2);
        assert_eq!(view.lightbox_index(), Some(2));

        let view = GalleryView::open(sample_project(2, 1));
        assert_eq!(view.project().map(|p| p.id), Some(2));
        assert_eq!(view.lightbox_index(), None);
    }

    #[test]
    fn reopening_the_same_project_discards_the_lightbox() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(1);
        assert_eq!(view.lightbox_index(), Some(1));

        let view = GalleryView::open(sample_project(1, 3));
        assert_eq!(view.lightbox_index(), None);
    }

    #[test]
    fn open_image_rejects_an_out_of_range_index() {
        let modal = GalleryView::open(sample_project(1, 3));
        assert_eq!(modal.open_image(3), modal);
        assert_eq!(modal.open_image(usize::MAX), modal);
        assert_eq!(modal.open_image(2).lightbox_index(), Some(2));
    }

    #[test]
    fn open_image_does_nothing_while_closed() {
        assert_eq!(GalleryView::Closed.open_image(0), GalleryView::Closed);
    }

    #[test]
    fn close_image_keeps_the_modal_open() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(1);
        let view = view.close_image();
        assert_eq!(view.lightbox_index(), None);
        assert_eq!(view.project().map(|p| p.id), Some(1));
    }

    #[test]
    fn next_wraps_from_the_last_image_to_the_first() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(2);
        assert_eq!(view.next_image().lightbox_index(), Some(0));
    }

    #[test]
    fn previous_wraps_from_the_first_image_to_the_last() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(0);
        assert_eq!(view.previous_image().lightbox_index(), Some(2));
    }

    #[test]
    fn a_full_cycle_returns_to_the_starting_image() {
        for n in 1..=5 {
            for start in 0..n {
                let mut forward = GalleryView::open(sample_project(1, n)).open_image(start);
                let mut backward = forward.clone();
                for _ in 0..n {
                    forward = forward.next_image();
                    backward = backward.previous_image();
                }
                assert_eq!(forward.lightbox_index(), Some(start), "next^{n} from {start}");
                assert_eq!(backward.lightbox_index(), Some(start), "prev^{n} from {start}");
            }
        }
    }

    #[test]
    fn next_and_previous_are_inverses() {
        for n in 1..=5 {
            for start in 0..n {
                let view = GalleryView::open(sample_project(1, n)).open_image(start);
                assert_eq!(view.next_image().previous_image(), view);
                assert_eq!(view.previous_image().next_image(), view);
            }
        }
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let view = GalleryView::open(sample_project(1, 1)).open_image(0);
        assert_eq!(view.next_image().lightbox_index(), Some(0));
        assert_eq!(view.previous_image().lightbox_index(), Some(0));
    }

    #[test]
    fn escape_peels_the_lightbox_before_the_modal() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(1);

        let after_first = view.on_key("Escape").expect("lightbox should close");
        assert_eq!(after_first.lightbox_index(), None);
        assert_eq!(after_first.project().map(|p| p.id), Some(1));

        let after_second = after_first.on_key("Escape").expect("modal should close");
        assert_eq!(after_second, GalleryView::Closed);
    }

    #[test]
    fn arrow_keys_navigate_only_inside_the_lightbox() {
        let modal = GalleryView::open(sample_project(1, 3));
        assert_eq!(modal.on_key("ArrowRight"), None);
        assert_eq!(modal.on_key("ArrowLeft"), None);

        let lightbox = modal.open_image(0);
        assert_eq!(
            lightbox.on_key("ArrowRight").and_then(|v| v.lightbox_index()),
            Some(1)
        );
        assert_eq!(
            lightbox.on_key("ArrowLeft").and_then(|v| v.lightbox_index()),
            Some(2)
        );
    }

    #[test]
    fn unrelated_keys_change_nothing() {
        let view = GalleryView::open(sample_project(1, 3)).open_image(0);
        assert_eq!(view.on_key("Enter"), None);
        assert_eq!(view.on_key("a"), None);
        assert_eq!(GalleryView::Closed.on_key("Escape"), None);
    }
}
