use contracts::domain::{build_territory_views, TerritoryId, TerritoryStatus};
use contracts::share::assignment_message;
use contracts::shared::dates::parse_input_date;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::share::open_whatsapp;
use crate::shared::store::{today, use_store};

/// Страница назначения: выбор территории, ответственный и дата начала.
///
/// В списке остаются и территории в работе: новое назначение с более
/// поздней датой начала станет текущим.
#[component]
pub fn AssignPage() -> impl IntoView {
    let store = use_store();

    let views = Memo::new(move |_| {
        build_territory_views(&store.territories.get(), &store.assignments.get(), today())
    });

    let (selected_id, set_selected_id) = signal(String::new());
    let (responsible, set_responsible) = signal(String::new());
    let (start_date, set_start_date) = signal(today().to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    // Текст сообщения о только что созданном назначении для кнопки WhatsApp
    let (last_message, set_last_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_last_message.set(None);

        let territory_id = match TerritoryId::from_string(&selected_id.get_untracked()) {
            Ok(id) => id,
            Err(_) => {
                set_error_message.set(Some("Выберите территорию".to_string()));
                return;
            }
        };
        let date = match parse_input_date(&start_date.get_untracked()) {
            Ok(d) => d,
            Err(e) => {
                set_error_message.set(Some(e));
                return;
            }
        };

        let name = responsible.get_untracked();
        match store.assign(territory_id, &name, date) {
            Ok(()) => {
                let message = store.territories.with_untracked(|items| {
                    items
                        .iter()
                        .find(|t| t.id == territory_id)
                        .map(|t| assignment_message(&t.number, name.trim(), date, &t.map_link))
                });
                set_last_message.set(message);
                set_responsible.set(String::new());
                set_selected_id.set(String::new());
                set_start_date.set(today().to_string());
            }
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="page assign">
            <header class="page__header">
                <h2>"Назначить территорию"</h2>
                <p>"Создание нового назначения с открытой датой завершения."</p>
            </header>

            <form class="form-panel" on:submit=on_submit>
                <div class="form-field">
                    <label>"Территория"</label>
                    <select
                        prop:value=move || selected_id.get()
                        on:change=move |ev| set_selected_id.set(event_target_value(&ev))
                    >
                        <option value="">"— выберите территорию —"</option>
                        {move || {
                            views
                                .get()
                                .into_iter()
                                .map(|v| {
                                    let label = match v.status {
                                        TerritoryStatus::InProgress => {
                                            format!("№ {} (сейчас в работе)", v.territory.number)
                                        }
                                        _ => format!("№ {}", v.territory.number),
                                    };
                                    view! {
                                        <option value=v.territory.id.as_string()>{label}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-field">
                    <label>"Ответственный"</label>
                    <input
                        type="text"
                        placeholder="Имя и фамилия"
                        prop:value=move || responsible.get()
                        on:input=move |ev| set_responsible.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Дата начала"</label>
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="form-message form-message--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <button class="button button--primary" type="submit">
                    {icon("assign")}
                    "Назначить"
                </button>
            </form>

            <Show when=move || last_message.get().is_some()>
                <div class="form-message form-message--success assign__done">
                    <span>"Назначение создано."</span>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Some(message) = last_message.get_untracked() {
                                open_whatsapp(&message);
                            }
                        }
                    >
                        {icon("share")}
                        "Отправить в WhatsApp"
                    </button>
                </div>
            </Show>
        </div>
    }
}
