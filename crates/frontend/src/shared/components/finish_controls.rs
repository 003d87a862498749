use contracts::domain::AssignmentId;
use contracts::shared::dates::parse_input_date;
use leptos::prelude::*;

use crate::shared::store::{today, use_store};

/// Кнопка "отметить завершённым" с раскрывающимся выбором даты.
///
/// Сигналы `completing`/`completion_date` общие для страницы, чтобы в один
/// момент была раскрыта только одна карточка.
#[component]
pub fn FinishControls(
    assignment_id: AssignmentId,
    completing: RwSignal<Option<AssignmentId>>,
    completion_date: RwSignal<String>,
) -> impl IntoView {
    let store = use_store();

    let on_confirm = move |_| match parse_input_date(&completion_date.get_untracked()) {
        Ok(end_date) => {
            store.finish_assignment(assignment_id, end_date);
            completing.set(None);
            completion_date.set(today().to_string());
        }
        Err(e) => log::warn!("{}", e),
    };

    view! {
        <Show
            when=move || completing.get() == Some(assignment_id)
            fallback=move || {
                view! {
                    <button
                        class="button button--primary"
                        on:click=move |_| completing.set(Some(assignment_id))
                    >
                        "Отметить завершённым"
                    </button>
                }
            }
        >
            <div class="finish-controls">
                <label>"Дата завершения"</label>
                <input
                    type="date"
                    prop:value=move || completion_date.get()
                    on:input=move |ev| completion_date.set(event_target_value(&ev))
                />
                <div class="finish-controls__actions">
                    <button class="button button--success" on:click=on_confirm>
                        "Подтвердить"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| completing.set(None)
                    >
                        "Отмена"
                    </button>
                </div>
            </div>
        </Show>
    }
}
