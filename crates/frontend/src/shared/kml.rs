//! Вспомогательные функции для работы с KML-вложением.
//!
//! Содержимое трактуется как непрозрачный текст: никакого разбора геометрии,
//! только имя первой метки и размер для карточки-паспорта.

/// Проверка расширения выбранного файла
pub fn is_kml_file(name: &str) -> bool {
    name.to_lowercase().ends_with(".kml")
}

/// Имя первой метки (`<name>...</name>`), если оно есть
pub fn placemark_name(kml: &str) -> Option<String> {
    let start = kml.find("<name>")? + "<name>".len();
    let end = kml[start..].find("</name>")? + start;
    let name = kml[start..end].trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Размер вложения в человекочитаемом виде
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} Б", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} КБ", bytes as f64 / 1024.0).replace('.', ",")
    } else {
        format!("{:.1} МБ", bytes as f64 / (1024.0 * 1024.0)).replace('.', ",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_kml_extension_case_insensitively() {
        assert!(is_kml_file("area.kml"));
        assert!(is_kml_file("AREA.KML"));
        assert!(!is_kml_file("area.kmz"));
        assert!(!is_kml_file("area.txt"));
    }

    #[test]
    fn extracts_first_placemark_name() {
        let kml = "<kml><Document><name> Квартал 7 </name></Document></kml>";
        assert_eq!(placemark_name(kml), Some("Квартал 7".to_string()));
    }

    #[test]
    fn missing_or_empty_name_yields_none() {
        assert_eq!(placemark_name("<kml></kml>"), None);
        assert_eq!(placemark_name("<kml><name>  </name></kml>"), None);
    }

    #[test]
    fn formats_sizes_with_russian_units() {
        assert_eq!(format_size(512), "512 Б");
        assert_eq!(format_size(2048), "2,0 КБ");
        assert_eq!(format_size(3 * 1024 * 1024), "3,0 МБ");
    }
}
