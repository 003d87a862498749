use contracts::domain::views::{longest_since_worked, most_worked, status_totals};
use contracts::domain::{build_territory_views, AssignmentId, TerritoryStatus, TerritoryView};
use contracts::share::assignment_message;
use contracts::shared::dates::format_date;
use leptos::prelude::*;

use crate::shared::components::area_preview::AreaPreview;
use crate::shared::components::finish_controls::FinishControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::confirm;
use crate::shared::icons::icon;
use crate::shared::share::open_whatsapp;
use crate::shared::store::{today, use_store};

/// Панель управления: счётчики по статусам, подборки территорий и общая
/// сетка карточек.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_store();

    let views = Memo::new(move |_| {
        build_territory_views(&store.territories.get(), &store.assignments.get(), today())
    });
    let totals = Memo::new(move |_| status_totals(&views.get()));

    let completing = RwSignal::new(Option::<AssignmentId>::None);
    let completion_date = RwSignal::new(today().to_string());

    view! {
        <div class="page dashboard">
            <header class="page__header">
                <h2>"Панель управления"</h2>
                <p>"Сводка по территориям и текущим назначениям."</p>
            </header>

            <div class="stat-grid">
                <StatCard
                    label="Всего территорий"
                    icon_name="map"
                    value=Signal::derive(move || totals.get().total)
                />
                <StatCard
                    label="В работе"
                    icon_name="active"
                    value=Signal::derive(move || totals.get().in_progress)
                    modifier="info"
                />
                <StatCard
                    label="Завершены"
                    icon_name="history"
                    value=Signal::derive(move || totals.get().completed)
                    modifier="success"
                />
                <StatCard
                    label="Не начинались"
                    icon_name="dashboard"
                    value=Signal::derive(move || totals.get().never_assigned)
                    modifier="warning"
                />
            </div>

            <div class="dashboard__lists">
                <section class="panel">
                    <h3>"Дольше всего без работы"</h3>
                    {move || {
                        longest_since_worked(&views.get(), 3)
                            .into_iter()
                            .map(|v| {
                                let since = v
                                    .last_completed_date
                                    .map(|d| format!("С {}", format_date(d)))
                                    .unwrap_or_else(|| "Никогда не работалась".to_string());
                                view! {
                                    <div class="panel__row">
                                        <span class="panel__row-title">
                                            {"Территория № "}{v.territory.number.clone()}
                                        </span>
                                        <span class="panel__row-note">{since}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>

                <section class="panel">
                    <h3>"Самые востребованные"</h3>
                    {move || {
                        most_worked(&views.get(), 3)
                            .into_iter()
                            .map(|v| {
                                view! {
                                    <div class="panel__row">
                                        <span class="panel__row-title">
                                            {"Территория № "}{v.territory.number.clone()}
                                        </span>
                                        <span class="panel__row-badge">
                                            {v.total_assignments}{" назн."}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>
            </div>

            <section class="dashboard__all">
                <h3>"Все территории"</h3>
                <div class="territory-grid">
                    {move || {
                        views
                            .get()
                            .into_iter()
                            .map(|v| {
                                view! {
                                    <TerritoryCard
                                        card=v
                                        completing=completing
                                        completion_date=completion_date
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

/// Карточка территории со статусом, превью области и действиями
#[component]
fn TerritoryCard(
    card: TerritoryView,
    completing: RwSignal<Option<AssignmentId>>,
    completion_date: RwSignal<String>,
) -> impl IntoView {
    let store = use_store();
    let TerritoryView {
        territory,
        status,
        current_assignment,
        last_completed_date,
        total_assignments,
        days_in_work,
    } = card;

    let territory_id = territory.id;
    let status_class = match status {
        TerritoryStatus::InProgress => "territory-card__status territory-card__status--progress",
        TerritoryStatus::Completed => "territory-card__status territory-card__status--done",
        TerritoryStatus::NeverAssigned => "territory-card__status territory-card__status--new",
    };

    let on_delete = move |_| {
        if confirm("Удалить территорию? Записи истории останутся и будут скрыты.") {
            store.delete_territory(territory_id);
        }
    };

    let current_panel = current_assignment.map(|a| {
        let message = assignment_message(
            &territory.number,
            &a.responsible,
            a.start_date,
            &territory.map_link,
        );
        let assignment_id = a.id;
        view! {
            <div class="territory-card__assignment">
                <div class="territory-card__assignment-head">
                    <span>"Назначена"</span>
                    <button
                        class="icon-button"
                        title="Поделиться в WhatsApp"
                        on:click=move |_| open_whatsapp(&message)
                    >
                        {icon("share")}
                    </button>
                </div>
                <p class="territory-card__responsible">{a.responsible.clone()}</p>
                <p class="territory-card__start">{"Начало: "}{format_date(a.start_date)}</p>
                <FinishControls
                    assignment_id=assignment_id
                    completing=completing
                    completion_date=completion_date
                />
            </div>
        }
    });

    let idle_footer = (status != TerritoryStatus::InProgress).then(|| {
        view! {
            <div class="territory-card__footer">
                <span>{"Всего назначений: "}{total_assignments}</span>
                {last_completed_date
                    .map(|d| view! { <span>{"Последнее завершение: "}{format_date(d)}</span> })}
            </div>
        }
    });

    view! {
        <div class="territory-card">
            <div class="territory-card__media">
                <AreaPreview
                    kml_content=territory.kml_content.clone()
                    map_link=territory.map_link.clone()
                />
                <div class=status_class>{status.display_name()}</div>
                <button
                    class="icon-button territory-card__delete"
                    title="Удалить территорию"
                    on:click=on_delete
                >
                    {icon("delete")}
                </button>
            </div>
            <div class="territory-card__body">
                <div class="territory-card__title">
                    <h4>{"№ "}{territory.number.clone()}</h4>
                    {days_in_work
                        .map(|d| view! { <span class="territory-card__days">{"В работе "}{d}{" дн."}</span> })}
                </div>
                {current_panel}
                {idle_footer}
            </div>
        </div>
    }
}
