use crate::shared::icons::icon;
use crate::shared::kml;
use leptos::prelude::*;

/// Паспорт KML-области: имя метки, размер вложения и внешняя ссылка.
///
/// Интерактивный рендер тайлов выполняет внешняя картографическая
/// библиотека; ядру достаточно показать, что область приложена.
#[component]
pub fn AreaPreview(kml_content: String, map_link: String) -> impl IntoView {
    let placemark =
        kml::placemark_name(&kml_content).unwrap_or_else(|| "Область без названия".to_string());
    let size = kml::format_size(kml_content.len());

    view! {
        <div class="area-preview">
            <div class="area-preview__placemark">{placemark}</div>
            <div class="area-preview__size">{"KML · "}{size}</div>
            <a
                class="area-preview__link"
                href=map_link
                target="_blank"
                rel="noopener noreferrer"
            >
                {icon("location")}
                <span>{"Открыть на карте"}</span>
            </a>
        </div>
    }
}
