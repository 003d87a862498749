use serde::{Deserialize, Serialize};
use web_sys::window;

const AUTH_KEY: &str = "territory_portal_auth";
const SESSION_KEY: &str = "territory_portal_session";

/// Учётная запись администратора.
///
/// Пароль хранится открытым текстом — осознанное ограничение локального
/// однопользовательского приложения; решение зафиксировано в DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AdminCredentials {
    username: String,
    password: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Настроен ли администратор (первый запуск — нет записи)
pub fn has_admin_configured() -> bool {
    local_storage()
        .and_then(|s| s.get_item(AUTH_KEY).ok().flatten())
        .is_some()
}

/// Сохранить учётную запись администратора
pub fn setup_admin(username: &str, password: &str) {
    let record = AdminCredentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(&record)) {
        let _ = storage.set_item(AUTH_KEY, &raw);
    }
}

/// Логин сравнивается без учёта регистра, пароль — точно
pub fn validate_credentials(username: &str, password: &str) -> bool {
    let Some(raw) = local_storage().and_then(|s| s.get_item(AUTH_KEY).ok().flatten()) else {
        return false;
    };
    let Ok(record) = serde_json::from_str::<AdminCredentials>(&raw) else {
        return false;
    };
    record.username.to_lowercase() == username.to_lowercase() && record.password == password
}

/// Отметить сессию как действительную (живёт до закрытия вкладки)
pub fn save_session_flag() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SESSION_KEY, "true");
    }
}

pub fn has_session_flag() -> bool {
    session_storage()
        .and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
        .as_deref()
        == Some("true")
}

pub fn clear_session_flag() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
