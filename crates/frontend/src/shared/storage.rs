//! Адаптер localStorage: коллекции читаются и пишутся целиком, одной записью
//! на коллекцию. Частичных обновлений и транзакций нет.

use contracts::domain::{Assignment, Territory};
use wasm_bindgen::JsCast;
use web_sys::window;

const TERRITORIES_KEY: &str = "territory_portal_data";
const ASSIGNMENTS_KEY: &str = "territory_portal_assignments";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_territories() -> Vec<Territory> {
    load_collection(TERRITORIES_KEY)
}

pub fn load_assignments() -> Vec<Assignment> {
    load_collection(ASSIGNMENTS_KEY)
}

pub fn save_territories(items: &[Territory]) -> Result<(), String> {
    save_collection(TERRITORIES_KEY, items)
}

pub fn save_assignments(items: &[Assignment]) -> Result<(), String> {
    save_collection(ASSIGNMENTS_KEY, items)
}

fn load_collection<T: serde::de::DeserializeOwned>(key: &str) -> Vec<T> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let Some(raw) = storage.get_item(key).ok().flatten() else {
        // Отсутствующий ключ — это пустая коллекция
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            // Повреждённое значение не должно ронять приложение
            log::error!("Некорректные данные в {}: {}", key, e);
            Vec::new()
        }
    }
}

fn save_collection<T: serde::Serialize>(key: &str, items: &[T]) -> Result<(), String> {
    let storage = local_storage().ok_or_else(|| "localStorage недоступен".to_string())?;
    let raw = serde_json::to_string(items).map_err(|e| e.to_string())?;
    storage.set_item(key, &raw).map_err(describe_save_error)
}

fn describe_save_error(err: wasm_bindgen::JsValue) -> String {
    if let Some(ex) = err.dyn_ref::<web_sys::DomException>() {
        if ex.name() == "QuotaExceededError" || ex.name() == "NS_ERROR_DOM_QUOTA_REACHED" {
            return "Превышен лимит хранилища браузера. Попробуйте более простые KML-файлы."
                .to_string();
        }
    }
    format!("Не удалось сохранить данные: {:?}", err)
}
