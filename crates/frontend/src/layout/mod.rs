use leptos::prelude::*;

use crate::pages::active::ActiveAssignmentsPage;
use crate::pages::assign::AssignPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::history::HistoryPage;
use crate::pages::territories::TerritoriesPage;
use crate::shared::confirm;
use crate::shared::icons::icon;
use crate::shared::store::use_store;
use crate::system::auth::context::{do_logout, use_auth};

/// Разделы приложения; переключаются сигналом, без маршрутизатора
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Dashboard,
    Active,
    Assign,
    Territories,
    History,
}

impl ActiveTab {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "Панель",
            ActiveTab::Active => "В работе",
            ActiveTab::Assign => "Назначить",
            ActiveTab::Territories => "Карты",
            ActiveTab::History => "Отчёты",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "dashboard",
            ActiveTab::Active => "active",
            ActiveTab::Assign => "assign",
            ActiveTab::Territories => "map",
            ActiveTab::History => "history",
        }
    }

    pub fn all() -> [ActiveTab; 5] {
        [
            ActiveTab::Dashboard,
            ActiveTab::Active,
            ActiveTab::Assign,
            ActiveTab::Territories,
            ActiveTab::History,
        ]
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(ActiveTab::Dashboard);
    let (_, set_auth_state) = use_auth();
    let store = use_store();

    let on_logout = move |_| {
        if confirm("Выйти из системы?") {
            do_logout(set_auth_state);
        }
    };

    view! {
        <div class="shell">
            <nav class="sidebar">
                <div class="sidebar__brand">
                    <h1>"Территории"</h1>
                    <p class="sidebar__subtitle">"Портал собрания"</p>
                </div>

                <ul class="sidebar__tabs">
                    {ActiveTab::all()
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if active_tab.get() == tab {
                                                "sidebar__tab sidebar__tab--active"
                                            } else {
                                                "sidebar__tab"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(tab)
                                    >
                                        {icon(tab.icon_name())}
                                        <span>{tab.label()}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="sidebar__footer">
                    <button class="sidebar__logout" on:click=on_logout>
                        {icon("logout")}
                        <span>"Выйти"</span>
                    </button>
                </div>
            </nav>

            <main class="content">
                {move || {
                    store
                        .storage_error
                        .get()
                        .map(|e| view! { <div class="error-banner">{e}</div> })
                }}

                {move || match active_tab.get() {
                    ActiveTab::Dashboard => view! { <DashboardPage /> }.into_any(),
                    ActiveTab::Active => view! { <ActiveAssignmentsPage /> }.into_any(),
                    ActiveTab::Assign => view! { <AssignPage /> }.into_any(),
                    ActiveTab::Territories => view! { <TerritoriesPage /> }.into_any(),
                    ActiveTab::History => view! { <HistoryPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
