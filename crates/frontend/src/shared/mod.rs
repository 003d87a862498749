pub mod components;
pub mod export;
pub mod icons;
pub mod kml;
pub mod share;
pub mod storage;
pub mod store;

use web_sys::window;

/// Simple confirm dialog via browser
pub fn confirm(message: &str) -> bool {
    window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
