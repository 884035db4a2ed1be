#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    ""  // No backend exists yet; point this at localhost when one does
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}
