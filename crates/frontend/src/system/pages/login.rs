use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{context, context::use_auth, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let is_first_run = RwSignal::new(!storage::has_admin_configured());

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let confirm_val = confirm_password.get();
        let first_run = is_first_run.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Небольшая задержка перед проверкой, как при обращении к серверу
            TimeoutFuture::new(800).await;

            if first_run {
                if username_val.trim().len() < 3 {
                    set_error_message
                        .set(Some("Логин должен содержать не менее 3 символов.".into()));
                    set_is_loading.set(false);
                    return;
                }
                if password_val.len() < 4 {
                    set_error_message
                        .set(Some("Пароль должен содержать не менее 4 символов.".into()));
                    set_is_loading.set(false);
                    return;
                }
                if password_val != confirm_val {
                    set_error_message.set(Some("Пароли не совпадают.".into()));
                    set_is_loading.set(false);
                    return;
                }
                storage::setup_admin(username_val.trim(), &password_val);
                context::mark_logged_in(set_auth_state);
            } else if storage::validate_credentials(&username_val, &password_val) {
                context::mark_logged_in(set_auth_state);
            } else {
                set_error_message.set(Some("Неверный логин или пароль.".into()));
                set_is_loading.set(false);
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Портал территорий"</h1>
                <h2>
                    {move || {
                        if is_first_run.get() {
                            "Настройте доступ администратора"
                        } else {
                            "Вход в систему"
                        }
                    }}
                </h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Имя пользователя"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <Show when=move || is_first_run.get()>
                        <div class="form-group">
                            <label for="confirm-password">"Подтвердите пароль"</label>
                            <input
                                type="password"
                                id="confirm-password"
                                placeholder="••••••••"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || {
                            if is_loading.get() {
                                "Проверка..."
                            } else if is_first_run.get() {
                                "Создать доступ администратора"
                            } else {
                                "Войти"
                            }
                        }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Данные системы хранятся локально в этом браузере."</p>
                </div>
            </div>
        </div>
    }
}
