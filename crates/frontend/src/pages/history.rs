use contracts::reports::{build_history, render_history_csv, CsvOptions, DateRangeFilter};
use contracts::shared::dates::{format_date, parse_input_date};
use leptos::prelude::*;

use crate::shared::confirm;
use crate::shared::export;
use crate::shared::icons::icon;
use crate::shared::store::{today, use_store};

/// История назначений: фильтр по датам начала, таблицы по территориям
/// и выгрузка в CSV.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let store = use_store();

    let (from_value, set_from_value) = signal(String::new());
    let (to_value, set_to_value) = signal(String::new());
    let (export_error, set_export_error) = signal(Option::<String>::None);

    // Нечитаемое значение поля трактуется как отсутствие границы
    let filter = Memo::new(move |_| DateRangeFilter {
        from: parse_input_date(&from_value.get()).ok(),
        to: parse_input_date(&to_value.get()).ok(),
    });

    let history = Memo::new(move |_| {
        build_history(&store.territories.get(), &store.assignments.get(), filter.get())
    });

    let on_export = move |_| {
        let csv = render_history_csv(&history.get_untracked(), &CsvOptions::default());
        let filename = format!("territories_report_{}.csv", today());
        match export::download_csv(&csv, &filename) {
            Ok(()) => set_export_error.set(None),
            Err(e) => {
                log::error!("Ошибка выгрузки CSV: {}", e);
                set_export_error.set(Some("Не удалось сформировать файл выгрузки".to_string()));
            }
        }
    };

    let on_clear_filter = move |_| {
        set_from_value.set(String::new());
        set_to_value.set(String::new());
    };

    view! {
        <div class="page history">
            <header class="page__header">
                <h2>"История назначений"</h2>
                <p>"Полный журнал работ по территориям."</p>
            </header>

            <div class="history__toolbar">
                <div class="form-field">
                    <label>"С даты начала"</label>
                    <input
                        type="date"
                        prop:value=move || from_value.get()
                        on:input=move |ev| set_from_value.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"По дату начала"</label>
                    <input
                        type="date"
                        prop:value=move || to_value.get()
                        on:input=move |ev| set_to_value.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || filter.get().is_active()>
                    <button class="button button--secondary" on:click=on_clear_filter>
                        "Сбросить фильтр"
                    </button>
                </Show>
                <button class="button button--primary" on:click=on_export>
                    {icon("export")}
                    "Выгрузить CSV"
                </button>
            </div>

            <Show when=move || export_error.get().is_some()>
                <div class="form-message form-message--error">
                    {move || export_error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !history.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>
                                {move || {
                                    if filter.get().is_active() {
                                        "За выбранный период назначений не найдено."
                                    } else {
                                        "История пока пуста."
                                    }
                                }}
                            </p>
                        </div>
                    }
                }
            >
                {move || {
                    history
                        .get()
                        .into_iter()
                        .map(|item| {
                            let last_conclusion = item
                                .last_conclusion
                                .map(format_date)
                                .unwrap_or_else(|| "Никогда".to_string());
                            view! {
                                <section class="history__territory">
                                    <div class="history__territory-head">
                                        <h3>{"Территория № "}{item.territory.number.clone()}</h3>
                                        <span class="history__last-conclusion">
                                            {"Последнее завершение: "}{last_conclusion}
                                        </span>
                                    </div>
                                    <table class="history__table">
                                        <thead>
                                            <tr>
                                                <th>"Ответственный"</th>
                                                <th>"Дата начала"</th>
                                                <th>"Дата завершения"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {item
                                                .entries
                                                .into_iter()
                                                .map(|entry| {
                                                    let assignment_id = entry.id;
                                                    let end = entry
                                                        .end_date
                                                        .map(format_date)
                                                        .unwrap_or_else(|| "В работе".to_string());
                                                    let on_delete = move |_| {
                                                        if confirm("Удалить эту запись истории?") {
                                                            store.delete_assignment(assignment_id);
                                                        }
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{entry.responsible.clone()}</td>
                                                            <td>{format_date(entry.start_date)}</td>
                                                            <td>{end}</td>
                                                            <td>
                                                                <button
                                                                    class="icon-button"
                                                                    title="Удалить запись"
                                                                    on:click=on_delete
                                                                >
                                                                    {icon("delete")}
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}
