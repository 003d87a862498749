use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::assignment::Assignment;
use super::territory::Territory;

/// Статус территории, выводимый из истории назначений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerritoryStatus {
    NeverAssigned,
    InProgress,
    Completed,
}

impl TerritoryStatus {
    /// Отображаемое имя для UI и выгрузок
    pub fn display_name(&self) -> &'static str {
        match self {
            TerritoryStatus::NeverAssigned => "Не назначался",
            TerritoryStatus::InProgress => "В работе",
            TerritoryStatus::Completed => "Завершён",
        }
    }
}

/// Проекция территории со сводной статистикой назначений.
///
/// Не сохраняется: пересчитывается при каждом изменении исходных коллекций.
#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryView {
    pub territory: Territory,
    pub status: TerritoryStatus,
    /// Открытое назначение, если территория сейчас в работе
    pub current_assignment: Option<Assignment>,
    /// Дата завершения последнего (по дате начала) закрытого назначения
    pub last_completed_date: Option<NaiveDate>,
    /// Сколько раз территория назначалась, включая открытые назначения
    pub total_assignments: usize,
    /// Полных дней в работе; заполняется только для статуса "В работе"
    pub days_in_work: Option<i64>,
}

/// Построить проекции по всем территориям.
///
/// Чистая функция от входных коллекций и переданной даты `today`;
/// входные данные не изменяются. Назначения с несуществующим
/// `territory_id` не попадают ни в одну проекцию.
pub fn build_territory_views(
    territories: &[Territory],
    assignments: &[Assignment],
    today: NaiveDate,
) -> Vec<TerritoryView> {
    territories
        .iter()
        .map(|territory| {
            let mut subset: Vec<&Assignment> = assignments
                .iter()
                .filter(|a| a.territory_id == territory.id)
                .collect();
            // Стабильная сортировка: при равных датах начала сохраняется
            // исходный порядок коллекции.
            subset.sort_by(|a, b| b.start_date.cmp(&a.start_date));

            let latest = subset.first().copied();
            let last_completed_date = subset.iter().find_map(|a| a.end_date);

            let (status, current_assignment, days_in_work) = match latest {
                None => (TerritoryStatus::NeverAssigned, None, None),
                Some(a) if a.is_open() => (
                    TerritoryStatus::InProgress,
                    Some(a.clone()),
                    Some((today - a.start_date).num_days()),
                ),
                Some(_) => (TerritoryStatus::Completed, None, None),
            };

            TerritoryView {
                territory: territory.clone(),
                status,
                current_assignment,
                last_completed_date,
                total_assignments: subset.len(),
                days_in_work,
            }
        })
        .collect()
}

/// Счётчики по статусам для панели управления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTotals {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub never_assigned: usize,
}

pub fn status_totals(views: &[TerritoryView]) -> StatusTotals {
    let mut totals = StatusTotals {
        total: views.len(),
        ..StatusTotals::default()
    };
    for view in views {
        match view.status {
            TerritoryStatus::InProgress => totals.in_progress += 1,
            TerritoryStatus::Completed => totals.completed += 1,
            TerritoryStatus::NeverAssigned => totals.never_assigned += 1,
        }
    }
    totals
}

/// Территории, дольше всего стоящие без работы: не находящиеся в работе,
/// отсортированные по дате последнего завершения по возрастанию.
/// Никогда не работавшиеся идут первыми.
pub fn longest_since_worked(views: &[TerritoryView], limit: usize) -> Vec<TerritoryView> {
    let mut idle: Vec<TerritoryView> = views
        .iter()
        .filter(|v| v.status != TerritoryStatus::InProgress)
        .cloned()
        .collect();
    idle.sort_by_key(|v| v.last_completed_date);
    idle.truncate(limit);
    idle
}

/// Самые востребованные территории: по убыванию числа назначений
pub fn most_worked(views: &[TerritoryView], limit: usize) -> Vec<TerritoryView> {
    let mut popular: Vec<TerritoryView> = views.to_vec();
    popular.sort_by(|a, b| b.total_assignments.cmp(&a.total_assignments));
    popular.truncate(limit);
    popular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::AssignmentId;
    use crate::domain::territory::TerritoryId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn territory(number: &str) -> Territory {
        Territory::new_for_insert(number.into(), "<kml/>".into(), "link".into())
    }

    fn assignment(territory_id: TerritoryId, start: &str, end: Option<&str>) -> Assignment {
        Assignment {
            id: AssignmentId::new_v4(),
            territory_id,
            responsible: "Иван".into(),
            start_date: date(start),
            end_date: end.map(date),
        }
    }

    #[test]
    fn territory_without_assignments_is_never_assigned() {
        let t = territory("01");
        let views = build_territory_views(&[t], &[], date("2024-06-01"));

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].status, TerritoryStatus::NeverAssigned);
        assert_eq!(views[0].total_assignments, 0);
        assert!(views[0].current_assignment.is_none());
        assert!(views[0].last_completed_date.is_none());
        assert!(views[0].days_in_work.is_none());
    }

    #[test]
    fn open_assignment_puts_territory_in_progress() {
        let t = territory("01");
        let a = assignment(t.id, "2024-01-01", None);
        let views = build_territory_views(&[t], &[a.clone()], date("2024-01-15"));

        assert_eq!(views[0].status, TerritoryStatus::InProgress);
        assert_eq!(
            views[0].current_assignment.as_ref().map(|c| c.id),
            Some(a.id)
        );
        assert_eq!(views[0].days_in_work, Some(14));
    }

    #[test]
    fn finished_assignment_marks_territory_completed() {
        let t = territory("01");
        let a = assignment(t.id, "2024-01-01", Some("2024-01-10"));
        let views = build_territory_views(&[t], &[a], date("2024-06-01"));

        assert_eq!(views[0].status, TerritoryStatus::Completed);
        assert!(views[0].current_assignment.is_none());
        assert!(views[0].days_in_work.is_none());
        assert_eq!(views[0].last_completed_date, Some(date("2024-01-10")));
        assert_eq!(views[0].total_assignments, 1);
    }

    #[test]
    fn new_open_assignment_reopens_territory_and_keeps_history() {
        let t = territory("01");
        let closed = assignment(t.id, "2024-01-01", Some("2024-01-10"));
        let open = assignment(t.id, "2024-02-01", None);
        let views = build_territory_views(&[t], &[closed, open.clone()], date("2024-02-05"));

        assert_eq!(views[0].status, TerritoryStatus::InProgress);
        assert_eq!(
            views[0].current_assignment.as_ref().map(|c| c.id),
            Some(open.id)
        );
        assert_eq!(views[0].total_assignments, 2);
        // Последнее завершение определяется порядком по дате начала
        assert_eq!(views[0].last_completed_date, Some(date("2024-01-10")));
    }

    #[test]
    fn two_open_assignments_latest_start_date_wins() {
        let t = territory("01");
        let earlier = assignment(t.id, "2024-03-01", None);
        let later = assignment(t.id, "2024-03-05", None);
        let views = build_territory_views(&[t], &[earlier, later.clone()], date("2024-03-10"));

        assert_eq!(views[0].status, TerritoryStatus::InProgress);
        assert_eq!(
            views[0].current_assignment.as_ref().map(|c| c.id),
            Some(later.id)
        );
        assert_eq!(views[0].days_in_work, Some(5));
    }

    #[test]
    fn equal_start_dates_keep_input_order() {
        let t = territory("01");
        let first = assignment(t.id, "2024-03-01", None);
        let second = assignment(t.id, "2024-03-01", None);
        let views = build_territory_views(&[t], &[first.clone(), second], date("2024-03-10"));

        assert_eq!(
            views[0].current_assignment.as_ref().map(|c| c.id),
            Some(first.id)
        );
    }

    #[test]
    fn last_completed_date_follows_start_date_order_not_end_date_order() {
        let t = territory("01");
        // Более позднее по началу назначение завершилось раньше по дате
        // завершения; политика выбирает именно его.
        let a1 = assignment(t.id, "2024-01-01", Some("2024-05-01"));
        let a2 = assignment(t.id, "2024-02-01", Some("2024-02-10"));
        let views = build_territory_views(&[t], &[a1, a2], date("2024-06-01"));

        assert_eq!(views[0].last_completed_date, Some(date("2024-02-10")));
    }

    #[test]
    fn orphaned_assignments_are_excluded_from_views() {
        let t = territory("01");
        let orphan = assignment(TerritoryId::new_v4(), "2024-01-01", None);
        let views = build_territory_views(&[t], &[orphan], date("2024-06-01"));

        assert_eq!(views[0].status, TerritoryStatus::NeverAssigned);
        assert_eq!(views[0].total_assignments, 0);
    }

    #[test]
    fn aggregation_is_idempotent_for_fixed_today() {
        let t = territory("01");
        let a = assignment(t.id, "2024-01-01", None);
        let today = date("2024-01-15");

        let first = build_territory_views(std::slice::from_ref(&t), std::slice::from_ref(&a), today);
        let second = build_territory_views(&[t], &[a], today);

        assert_eq!(first[0].status, second[0].status);
        assert_eq!(first[0].days_in_work, second[0].days_in_work);
        assert_eq!(first[0].total_assignments, second[0].total_assignments);
    }

    #[test]
    fn status_totals_counts_every_status() {
        let never = territory("01");
        let working = territory("02");
        let done = territory("03");
        let assignments = vec![
            assignment(working.id, "2024-01-01", None),
            assignment(done.id, "2024-01-01", Some("2024-01-10")),
        ];
        let views = build_territory_views(&[never, working, done], &assignments, date("2024-02-01"));
        let totals = status_totals(&views);

        assert_eq!(totals.total, 3);
        assert_eq!(totals.in_progress, 1);
        assert_eq!(totals.completed, 1);
        assert_eq!(totals.never_assigned, 1);
    }

    #[test]
    fn longest_since_worked_puts_never_worked_first_and_skips_active() {
        let never = territory("01");
        let old = territory("02");
        let recent = territory("03");
        let active = territory("04");
        let assignments = vec![
            assignment(old.id, "2023-01-01", Some("2023-01-10")),
            assignment(recent.id, "2024-01-01", Some("2024-01-10")),
            assignment(active.id, "2024-02-01", None),
        ];
        let views = build_territory_views(
            &[never.clone(), old.clone(), recent, active],
            &assignments,
            date("2024-03-01"),
        );

        let idle = longest_since_worked(&views, 2);
        assert_eq!(idle.len(), 2);
        assert_eq!(idle[0].territory.id, never.id);
        assert_eq!(idle[1].territory.id, old.id);
    }

    #[test]
    fn most_worked_sorts_by_total_assignments() {
        let quiet = territory("01");
        let busy = territory("02");
        let assignments = vec![
            assignment(busy.id, "2024-01-01", Some("2024-01-10")),
            assignment(busy.id, "2024-02-01", None),
            assignment(quiet.id, "2024-01-01", Some("2024-01-05")),
        ];
        let views = build_territory_views(&[quiet, busy.clone()], &assignments, date("2024-03-01"));

        let popular = most_worked(&views, 1);
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].territory.id, busy.id);
        assert_eq!(popular[0].total_assignments, 2);
    }
}
