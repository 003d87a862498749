use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::territory::TerritoryId;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор назначения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub Uuid);

impl AssignmentId {
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
            .map(AssignmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Назначение: кто и в какой период работал на территории.
///
/// `territory_id` — слабая ссылка: целостность не проверяется, записи с
/// удалённой территорией сохраняются в истории и фильтруются на чтении.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,

    #[serde(rename = "territoryId")]
    pub territory_id: TerritoryId,

    /// Ответственный (свободный текст)
    pub responsible: String,

    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    /// Отсутствие даты завершения означает открытое назначение
    #[serde(
        rename = "endDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

impl Assignment {
    /// Создать открытое назначение (без даты завершения)
    pub fn new_open(territory_id: TerritoryId, responsible: String, start_date: NaiveDate) -> Self {
        Self {
            id: AssignmentId::new_v4(),
            territory_id,
            responsible,
            start_date,
            end_date: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.responsible.trim().is_empty() {
            return Err("Укажите ответственного".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn new_open_assignment_has_no_end_date() {
        let a = Assignment::new_open(TerritoryId::new_v4(), "Иван".into(), date("2024-01-01"));
        assert!(a.is_open());
    }

    #[test]
    fn validate_rejects_empty_responsible() {
        let a = Assignment::new_open(TerritoryId::new_v4(), "   ".into(), date("2024-01-01"));
        assert!(a.validate().is_err());
    }

    #[test]
    fn open_assignment_serializes_without_end_date() {
        let a = Assignment::new_open(TerritoryId::new_v4(), "Иван".into(), date("2024-01-01"));
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("endDate").is_none());
        assert_eq!(json["startDate"], "2024-01-01");
        assert!(json.get("territoryId").is_some());
    }

    #[test]
    fn deserializes_persisted_document_shape() {
        let raw = r#"{
            "id": "6f0a1f1e-1111-4222-8333-444455556666",
            "territoryId": "6f0a1f1e-aaaa-4bbb-8ccc-dddd11112222",
            "responsible": "Мария",
            "startDate": "2024-02-01",
            "endDate": "2024-02-10"
        }"#;
        let a: Assignment = serde_json::from_str(raw).unwrap();
        assert_eq!(a.responsible, "Мария");
        assert_eq!(a.end_date, Some(date("2024-02-10")));
        assert!(!a.is_open());
    }
}
