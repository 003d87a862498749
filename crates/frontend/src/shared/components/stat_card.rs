use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка-счётчик для панели управления
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Counter value
    #[prop(into)]
    value: Signal<usize>,
    /// Optional visual modifier (stat-card--{modifier})
    #[prop(optional)]
    modifier: &'static str,
) -> impl IntoView {
    let class = if modifier.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", modifier)
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
