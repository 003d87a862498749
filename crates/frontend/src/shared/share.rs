//! Передача готового текста в WhatsApp через deep-link.

use web_sys::window;

/// Открыть окно WhatsApp с предзаполненным сообщением
pub fn open_whatsapp(message: &str) {
    let url = contracts::share::whatsapp_url(message);
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target(&url, "_blank");
    }
}
