use leptos::prelude::*;

use super::storage;

/// Транзиентное состояние сессии. Живёт в контексте и в sessionStorage;
/// в долговременную учётную запись не входит.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub authenticated: bool,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from sessionStorage on mount
    let (auth_state, set_auth_state) = signal(AuthState {
        authenticated: storage::has_session_flag(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Отметить успешный вход
pub fn mark_logged_in(set_auth_state: WriteSignal<AuthState>) {
    storage::save_session_flag();
    set_auth_state.set(AuthState {
        authenticated: true,
    });
}

/// Завершить сессию; подтверждение — забота вызывающего UI
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session_flag();
    set_auth_state.set(AuthState::default());
}
