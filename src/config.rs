/// Application-level constants
pub const APP_NAME: &str = "Symptra";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
/// Engine rule firings are logged at debug, everything else at info.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}
