use contracts::domain::{build_territory_views, AssignmentId, TerritoryStatus, TerritoryView};
use contracts::share::active_assignment_message;
use contracts::shared::dates::format_date;
use leptos::prelude::*;

use crate::shared::components::area_preview::AreaPreview;
use crate::shared::components::finish_controls::FinishControls;
use crate::shared::icons::icon;
use crate::shared::share::open_whatsapp;
use crate::shared::store::{today, use_store};

/// Страница активных назначений: только территории в работе
#[component]
pub fn ActiveAssignmentsPage() -> impl IntoView {
    let store = use_store();

    let active = Memo::new(move |_| {
        build_territory_views(&store.territories.get(), &store.assignments.get(), today())
            .into_iter()
            .filter(|v| v.status == TerritoryStatus::InProgress)
            .collect::<Vec<_>>()
    });

    let completing = RwSignal::new(Option::<AssignmentId>::None);
    let completion_date = RwSignal::new(today().to_string());

    view! {
        <div class="page active-assignments">
            <header class="page__header">
                <h2>"Активные назначения"</h2>
                <p>{move || format!("Сейчас в работе: {}", active.get().len())}</p>
            </header>

            <Show
                when=move || !active.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p>"Нет активных назначений."</p>
                            <p class="empty-state__hint">
                                "Назначьте территорию на вкладке \"Назначить\"."
                            </p>
                        </div>
                    }
                }
            >
                <div class="active-grid">
                    {move || {
                        active
                            .get()
                            .into_iter()
                            .map(|v| {
                                view! {
                                    <ActiveCard
                                        card=v
                                        completing=completing
                                        completion_date=completion_date
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ActiveCard(
    card: TerritoryView,
    completing: RwSignal<Option<AssignmentId>>,
    completion_date: RwSignal<String>,
) -> impl IntoView {
    let TerritoryView {
        territory,
        current_assignment,
        days_in_work,
        ..
    } = card;

    // Страница показывает только статус "В работе", назначение всегда есть
    let Some(assignment) = current_assignment else {
        return ().into_any();
    };

    let days = days_in_work.unwrap_or(0);
    let message = active_assignment_message(
        &territory.number,
        &assignment.responsible,
        assignment.start_date,
        days,
        &territory.map_link,
    );
    let assignment_id = assignment.id;

    view! {
        <div class="active-card">
            <div class="active-card__head">
                <h4>{"Территория № "}{territory.number.clone()}</h4>
                <span class="active-card__days">{days}{" дн. в работе"}</span>
            </div>
            <AreaPreview
                kml_content=territory.kml_content.clone()
                map_link=territory.map_link.clone()
            />
            <dl class="active-card__details">
                <dt>"Ответственный"</dt>
                <dd>{assignment.responsible.clone()}</dd>
                <dt>"Дата начала"</dt>
                <dd>{format_date(assignment.start_date)}</dd>
            </dl>
            <div class="active-card__actions">
                <FinishControls
                    assignment_id=assignment_id
                    completing=completing
                    completion_date=completion_date
                />
                <button
                    class="button button--secondary"
                    on:click=move |_| open_whatsapp(&message)
                >
                    {icon("share")}
                    "Напомнить в WhatsApp"
                </button>
            </div>
        </div>
    }
    .into_any()
}
