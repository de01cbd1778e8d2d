#[cfg(debug_assertions)]
pub fn form_endpoint() -> &'static str {
    "http://localhost:3001/relay"  // Local relay stub when running via trunk serve
}

#[cfg(not(debug_assertions))]
pub fn form_endpoint() -> &'static str {
    "https://formspree.io/f/xyzqwert"
}
