//! Тексты сообщений для отправки через мессенджер.
//!
//! Ядро только формирует текст и ссылку; открытие внешнего окна — забота UI.

use chrono::NaiveDate;

use crate::shared::dates::format_date;

/// Сообщение о новом назначении территории
pub fn assignment_message(
    number: &str,
    responsible: &str,
    start_date: NaiveDate,
    map_link: &str,
) -> String {
    format!(
        "*Назначение территории*\n\n\
         *Карта:* № {number}\n\
         *Ответственный:* {responsible}\n\
         *Дата начала:* {start}\n\
         *Ссылка на карту:* {map_link}\n\n\
         _Откройте портал, чтобы посмотреть размеченную область._",
        number = number,
        responsible = responsible,
        start = format_date(start_date),
        map_link = map_link,
    )
}

/// Сообщение о текущем состоянии активного назначения
pub fn active_assignment_message(
    number: &str,
    responsible: &str,
    start_date: NaiveDate,
    days_in_work: i64,
    map_link: &str,
) -> String {
    format!(
        "*Активное назначение — территория № {number}*\n\n\
         *Ответственный:* {responsible}\n\
         *Начало:* {start}\n\
         *Дней в работе:* {days}\n\
         *Ссылка:* {map_link}\n\n\
         _Область KML доступна на портале._",
        number = number,
        responsible = responsible,
        start = format_date(start_date),
        days = days_in_work,
        map_link = map_link,
    )
}

/// Deep-link на WhatsApp с готовым текстом
pub fn whatsapp_url(message: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn assignment_message_contains_all_fields() {
        let msg = assignment_message("12A", "Иван", date("2024-02-01"), "https://maps.test/1");
        assert!(msg.contains("№ 12A"));
        assert!(msg.contains("Иван"));
        assert!(msg.contains("01.02.2024"));
        assert!(msg.contains("https://maps.test/1"));
    }

    #[test]
    fn active_message_reports_elapsed_days() {
        let msg = active_assignment_message("07", "Мария", date("2024-02-01"), 12, "link");
        assert!(msg.contains("*Дней в работе:* 12"));
        assert!(msg.contains("территория № 07"));
    }

    #[test]
    fn whatsapp_url_encodes_message() {
        let url = whatsapp_url("привет мир");
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(!url.contains(' '));
    }
}
