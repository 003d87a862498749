use chrono::NaiveDate;
use contracts::domain::{Assignment, AssignmentId, Territory, TerritoryId};
use leptos::prelude::*;

use super::storage;

/// Текущая календарная дата по часам браузера
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Реактивное хранилище приложения: две коллекции плюс последняя ошибка
/// сохранения.
///
/// Модель обновлений оптимистичная: сигналы меняются сразу, затем коллекция
/// целиком уходит в localStorage. При отказе сохранения память не
/// откатывается — расхождение фиксируется в `storage_error`.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub territories: RwSignal<Vec<Territory>>,
    pub assignments: RwSignal<Vec<Assignment>>,
    pub storage_error: RwSignal<Option<String>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            territories: RwSignal::new(Vec::new()),
            assignments: RwSignal::new(Vec::new()),
            storage_error: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        self.territories.set(storage::load_territories());
        self.assignments.set(storage::load_assignments());
        log::info!(
            "Загружено территорий: {}, назначений: {}",
            self.territories.with_untracked(|t| t.len()),
            self.assignments.with_untracked(|a| a.len())
        );
    }

    /// Добавить территорию. Пустая ссылка на карту заменяется ссылкой
    /// поиска по номеру.
    pub fn add_territory(
        &self,
        number: &str,
        map_link: &str,
        kml_content: String,
    ) -> Result<(), String> {
        let number = number.trim();
        let map_link = if map_link.trim().is_empty() {
            Territory::default_map_link(number)
        } else {
            map_link.trim().to_string()
        };

        let territory = Territory::new_for_insert(number.to_string(), kml_content, map_link);
        territory.validate()?;

        self.territories.update(|items| items.push(territory));
        self.persist_territories();
        Ok(())
    }

    /// Удалить территорию. Назначения не трогаем: осиротевшие записи
    /// допустимы и отфильтровываются на чтении.
    pub fn delete_territory(&self, id: TerritoryId) {
        self.territories.update(|items| items.retain(|t| t.id != id));
        self.persist_territories();
    }

    /// Создать открытое назначение. Наличие другого открытого назначения
    /// на той же территории не проверяется: текущим считается самое
    /// позднее по дате начала.
    pub fn assign(
        &self,
        territory_id: TerritoryId,
        responsible: &str,
        start_date: NaiveDate,
    ) -> Result<(), String> {
        let exists = self
            .territories
            .with_untracked(|items| items.iter().any(|t| t.id == territory_id));
        if !exists {
            return Err("Территория не найдена".into());
        }

        let assignment = Assignment::new_open(territory_id, responsible.trim().to_string(), start_date);
        assignment.validate()?;

        self.assignments.update(|items| items.push(assignment));
        self.persist_assignments();
        Ok(())
    }

    /// Проставить дату завершения. Дата не сверяется с датой начала —
    /// записывается как есть.
    pub fn finish_assignment(&self, id: AssignmentId, end_date: NaiveDate) {
        self.assignments.update(|items| {
            if let Some(a) = items.iter_mut().find(|a| a.id == id) {
                a.end_date = Some(end_date);
            }
        });
        self.persist_assignments();
    }

    pub fn delete_assignment(&self, id: AssignmentId) {
        self.assignments.update(|items| items.retain(|a| a.id != id));
        self.persist_assignments();
    }

    fn persist_territories(&self) {
        let result = self
            .territories
            .with_untracked(|items| storage::save_territories(items));
        self.note_save_result(result);
    }

    fn persist_assignments(&self) {
        let result = self
            .assignments
            .with_untracked(|items| storage::save_assignments(items));
        self.note_save_result(result);
    }

    fn note_save_result(&self, result: Result<(), String>) {
        match result {
            Ok(()) => self.storage_error.set(None),
            Err(e) => {
                log::error!("Ошибка сохранения: {}", e);
                self.storage_error.set(Some(e));
            }
        }
    }
}

pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore not found in context")
}
