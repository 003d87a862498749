use crate::shared::dates::format_date;

use super::history::TerritoryHistory;

/// Настройки CSV-выгрузки.
///
/// Разделитель — настройка, а не константа: `;` по умолчанию, потому что
/// локализованный Excel ожидает именно его.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: ';' }
    }
}

const HEADERS: [&str; 6] = [
    "Территория",
    "Последнее завершение",
    "Ответственный",
    "Дата начала",
    "Дата завершения",
    "Статус",
];

/// Отрисовать историю в CSV-текст.
///
/// Формат рассчитан на импорт в табличные редакторы: UTF-8 BOM,
/// строка `sep=` с разделителем, все ячейки данных в кавычках.
pub fn render_history_csv(history: &[TerritoryHistory], options: &CsvOptions) -> String {
    let delimiter = options.delimiter.to_string();
    let mut out = String::new();

    // BOM, чтобы Excel распознал UTF-8
    out.push('\u{FEFF}');
    out.push_str(&format!("sep={}\n", delimiter));
    out.push_str(&HEADERS.join(&delimiter));
    out.push('\n');

    for item in history {
        let last_conclusion = item
            .last_conclusion
            .map(format_date)
            .unwrap_or_else(|| "Никогда".to_string());

        for entry in &item.entries {
            let end_date = entry
                .end_date
                .map(format_date)
                .unwrap_or_else(|| "В работе".to_string());
            let status = if entry.end_date.is_some() {
                "Завершён"
            } else {
                "В работе"
            };

            let row = [
                format!("№ {}", item.territory.number),
                last_conclusion.clone(),
                entry.responsible.clone(),
                format_date(entry.start_date),
                end_date,
                status.to_string(),
            ];
            let quoted: Vec<String> = row.iter().map(|cell| quote_cell(cell)).collect();
            out.push_str(&quoted.join(&delimiter));
            out.push('\n');
        }
    }

    out
}

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assignment, AssignmentId, Territory};
    use crate::reports::history::{build_history, DateRangeFilter};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_history() -> Vec<TerritoryHistory> {
        let territory = Territory::new_for_insert("07".into(), "<kml/>".into(), "link".into());
        let closed = Assignment {
            id: AssignmentId::new_v4(),
            territory_id: territory.id,
            responsible: "Иван".into(),
            start_date: date("2024-01-01"),
            end_date: Some(date("2024-01-10")),
        };
        let open = Assignment {
            id: AssignmentId::new_v4(),
            territory_id: territory.id,
            responsible: "Мария".into(),
            start_date: date("2024-02-01"),
            end_date: None,
        };
        build_history(&[territory], &[closed, open], DateRangeFilter::default())
    }

    #[test]
    fn output_starts_with_bom_and_sep_line() {
        let csv = render_history_csv(&sample_history(), &CsvOptions::default());
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv[3..].starts_with("sep=;\n"));
    }

    #[test]
    fn header_has_fixed_column_order() {
        let csv = render_history_csv(&sample_history(), &CsvOptions::default());
        assert!(csv.contains(
            "Территория;Последнее завершение;Ответственный;Дата начала;Дата завершения;Статус"
        ));
    }

    #[test]
    fn open_entry_gets_in_progress_marker() {
        let csv = render_history_csv(&sample_history(), &CsvOptions::default());
        assert!(csv.contains("\"№ 07\";\"10.01.2024\";\"Мария\";\"01.02.2024\";\"В работе\";\"В работе\""));
    }

    #[test]
    fn closed_entry_gets_completed_status() {
        let csv = render_history_csv(&sample_history(), &CsvOptions::default());
        assert!(csv.contains("\"Иван\";\"01.01.2024\";\"10.01.2024\";\"Завершён\""));
    }

    #[test]
    fn delimiter_is_configurable() {
        let csv = render_history_csv(&sample_history(), &CsvOptions { delimiter: ',' });
        assert!(csv[3..].starts_with("sep=,\n"));
        assert!(csv.contains("\"№ 07\",\"10.01.2024\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote_cell(r#"дом "у парка""#), r#""дом ""у парка""""#);
    }
}
