use crate::layout::Shell;
use crate::shared::store::{use_store, AppStore};
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppStore to the whole app via context.
    provide_context(AppStore::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let store = use_store();
    // Коллекции читаются из хранилища только после входа
    store.load();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().authenticated
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
