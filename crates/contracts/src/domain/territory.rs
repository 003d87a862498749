use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор территории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerritoryId(pub Uuid);

impl TerritoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TerritoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Территория — участок работы с приложенным KML-файлом области.
///
/// Содержимое KML ядро не интерпретирует: это непрозрачный блоб, который
/// отображается внешней картографической библиотекой.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,

    /// Номер на карте (свободный текст: "01", "12A"). Уникальность не гарантируется.
    pub number: String,

    #[serde(rename = "kmlContent")]
    pub kml_content: String,

    #[serde(rename = "mapLink")]
    pub map_link: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Territory {
    /// Создать новую территорию для записи в хранилище
    pub fn new_for_insert(number: String, kml_content: String, map_link: String) -> Self {
        Self {
            id: TerritoryId::new_v4(),
            number,
            kml_content,
            map_link,
            created_at: Utc::now(),
        }
    }

    /// Ссылка на карту по умолчанию, если пользователь её не указал
    pub fn default_map_link(number: &str) -> String {
        format!(
            "https://www.google.com/maps/search/{}",
            urlencoding::encode(&format!("Территория {}", number))
        )
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Укажите номер карты".into());
        }
        if self.kml_content.trim().is_empty() {
            return Err("Приложите KML-файл области".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_number() {
        let t = Territory::new_for_insert("  ".into(), "<kml/>".into(), "link".into());
        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_kml() {
        let t = Territory::new_for_insert("01".into(), String::new(), "link".into());
        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_accepts_filled_territory() {
        let t = Territory::new_for_insert("01".into(), "<kml/>".into(), "link".into());
        assert!(t.validate().is_ok());
    }

    #[test]
    fn default_map_link_is_url_encoded() {
        let link = Territory::default_map_link("12A");
        assert!(link.starts_with("https://www.google.com/maps/search/"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let t = Territory::new_for_insert("01".into(), "<kml/>".into(), "link".into());
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("kmlContent").is_some());
        assert!(json.get("mapLink").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("number").is_some());
    }
}
