use log::{debug, error, info, warn};

/// Console logging with a component tag.
///
/// Messages go through the `log` facade, so they reach the browser console
/// in the running app and stderr when the workflows run under native tests.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        debug!("[{component}] {message}");
    }

    pub fn info_with_component(component: &str, message: &str) {
        info!("[{component}] {message}");
    }

    pub fn warn_with_component(component: &str, message: &str) {
        warn!("[{component}] {message}");
    }

    pub fn error_with_component(component: &str, message: &str) {
        error!("[{component}] {message}");
    }
}
