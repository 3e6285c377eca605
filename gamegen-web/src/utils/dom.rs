//! Small helpers around `web_sys::window()`.

use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Blocking notice followed by the install page in a new tab.
pub fn prompt_install(notice: &str, install_url: &str) {
    let Some(window) = window() else {
        log::error!("No window available for install prompt");
        return;
    };
    if let Err(e) = window.alert_with_message(notice) {
        log::warn!("alert() failed: {:?}", e);
    }
    if let Err(e) = window.open_with_url_and_target(install_url, "_blank") {
        log::warn!("Failed to open {}: {:?}", install_url, e);
    }
}

/// Full page navigation; client state is not carried over.
pub fn navigate_full(path: &str) {
    let Some(window) = window() else {
        log::error!("No window available for navigation to {}", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Navigation to {} failed: {:?}", path, e);
    }
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
