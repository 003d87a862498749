use chrono::NaiveDate;

use crate::domain::{Assignment, Territory};

/// Фильтр истории по дате начала назначения; обе границы включительно
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeFilter {
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// История одной территории для отчёта
#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryHistory {
    pub territory: Territory,
    /// Дата завершения последнего (по дате начала) закрытого назначения,
    /// вычисленная по полной истории независимо от фильтра
    pub last_conclusion: Option<NaiveDate>,
    /// Назначения, прошедшие фильтр, по убыванию даты начала
    pub entries: Vec<Assignment>,
}

/// Построить историю по территориям.
///
/// Территория без подходящих записей выпадает из отчёта только при
/// активном фильтре; без фильтра пустые территории остаются видимыми.
pub fn build_history(
    territories: &[Territory],
    assignments: &[Assignment],
    filter: DateRangeFilter,
) -> Vec<TerritoryHistory> {
    territories
        .iter()
        .filter_map(|territory| {
            let mut subset: Vec<&Assignment> = assignments
                .iter()
                .filter(|a| a.territory_id == territory.id)
                .collect();
            subset.sort_by(|a, b| b.start_date.cmp(&a.start_date));

            let last_conclusion = subset.iter().find_map(|a| a.end_date);

            let entries: Vec<Assignment> = subset
                .into_iter()
                .filter(|a| filter.contains(a.start_date))
                .cloned()
                .collect();

            if entries.is_empty() && filter.is_active() {
                return None;
            }

            Some(TerritoryHistory {
                territory: territory.clone(),
                last_conclusion,
                entries,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssignmentId, TerritoryId};

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
    fn entries_are_sorted_by_start_date_descending() {
        let t = territory("01");
        let a1 = assignment(t.id, "2024-01-01", Some("2024-01-10"));
        let a2 = assignment(t.id, "2024-03-01", None);
        let history = build_history(&[t], &[a1, a2.clone()], DateRangeFilter::default());

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].entries[0].id, a2.id);
        assert_eq!(history[0].entries.len(), 2);
    }

    #[test]
    fn last_conclusion_ignores_the_range_filter() {
        let t = territory("01");
        let closed = assignment(t.id, "2024-01-01", Some("2024-01-10"));
        let open = assignment(t.id, "2024-03-01", None);
        let filter = DateRangeFilter {
            from: Some(date("2024-02-01")),
            to: None,
        };
        let history = build_history(&[t], &[closed, open], filter);

        assert_eq!(history[0].entries.len(), 1);
        assert_eq!(history[0].last_conclusion, Some(date("2024-01-10")));
    }

    #[test]
    fn active_filter_drops_territories_without_matches() {
        let matching = territory("01");
        let empty = territory("02");
        let a = assignment(matching.id, "2024-02-15", None);
        let filter = DateRangeFilter {
            from: Some(date("2024-02-01")),
            to: Some(date("2024-02-28")),
        };
        let history = build_history(&[matching.clone(), empty], &[a], filter);

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].territory.id, matching.id);
    }

    #[test]
    fn inactive_filter_keeps_territories_without_assignments() {
        let t = territory("01");
        let history = build_history(&[t], &[], DateRangeFilter::default());

        assert_eq!(history.len(), 1);
        assert!(history[0].entries.is_empty());
        assert!(history[0].last_conclusion.is_none());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let filter = DateRangeFilter {
            from: Some(date("2024-02-01")),
            to: Some(date("2024-02-28")),
        };
        assert!(filter.contains(date("2024-02-01")));
        assert!(filter.contains(date("2024-02-28")));
        assert!(!filter.contains(date("2024-01-31")));
        assert!(!filter.contains(date("2024-02-29")));
    }
}
