use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use contracts::shared::dates::format_datetime;

use crate::shared::confirm;
use crate::shared::icons::icon;
use crate::shared::kml;
use crate::shared::store::use_store;

/// Реестр территорий: форма добавления с загрузкой KML и таблица
#[component]
pub fn TerritoriesPage() -> impl IntoView {
    let store = use_store();

    let (number, set_number) = signal(String::new());
    let (map_link, set_map_link) = signal(String::new());
    let kml_content = RwSignal::new(String::new());
    let file_name = RwSignal::new(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (info_message, set_info_message) = signal(Option::<String>::None);

    let on_file_change = move |ev: web_sys::Event| {
        set_error_message.set(None);
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };

        if !kml::is_kml_file(&file.name()) {
            set_error_message.set(Some("Выберите файл с расширением .kml".to_string()));
            return;
        }

        let name = file.name();
        spawn_local(async move {
            match JsFuture::from(file.text()).await {
                Ok(value) => {
                    kml_content.set(value.as_string().unwrap_or_default());
                    file_name.set(Some(name));
                }
                Err(e) => {
                    log::error!("Не удалось прочитать файл: {:?}", e);
                    set_error_message
                        .set(Some("Не удалось прочитать выбранный файл".to_string()));
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_info_message.set(None);

        let content = kml_content.get_untracked();
        if content.trim().len() < 10 {
            set_error_message.set(Some("Приложите файл KML с размеченной областью".to_string()));
            return;
        }

        match store.add_territory(&number.get_untracked(), &map_link.get_untracked(), content) {
            Ok(()) => {
                set_info_message.set(Some(format!(
                    "Территория № {} добавлена",
                    number.get_untracked().trim()
                )));
                set_number.set(String::new());
                set_map_link.set(String::new());
                kml_content.set(String::new());
                file_name.set(None);
            }
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="page territories">
            <header class="page__header">
                <h2>"Территории"</h2>
                <p>"Добавление новых территорий и реестр существующих."</p>
            </header>

            <form class="form-panel" on:submit=on_submit>
                <h3>"Новая территория"</h3>

                <div class="form-field">
                    <label>"Номер территории"</label>
                    <input
                        type="text"
                        placeholder="Например, 12А"
                        prop:value=move || number.get()
                        on:input=move |ev| set_number.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Ссылка на карту (необязательно)"</label>
                    <input
                        type="url"
                        placeholder="Пусто — подставится ссылка поиска по номеру"
                        prop:value=move || map_link.get()
                        on:input=move |ev| set_map_link.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Файл KML"</label>
                    <input type="file" accept=".kml" on:change=on_file_change />
                    <Show when=move || file_name.get().is_some()>
                        <span class="form-field__note">
                            {move || file_name.get().unwrap_or_default()}
                            {move || format!(" · {}", kml::format_size(kml_content.get().len()))}
                        </span>
                    </Show>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="form-message form-message--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || info_message.get().is_some()>
                    <div class="form-message form-message--success">
                        {move || info_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <button class="button button--primary" type="submit">
                    {icon("save")}
                    "Добавить территорию"
                </button>
            </form>

            <section class="registry">
                <h3>{move || format!("Реестр ({})", store.territories.get().len())}</h3>
                <table class="registry__table">
                    <thead>
                        <tr>
                            <th>"Номер"</th>
                            <th>"Область"</th>
                            <th>"Добавлена"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            store
                                .territories
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let territory_id = t.id;
                                    let placemark = kml::placemark_name(&t.kml_content)
                                        .unwrap_or_else(|| "Область без названия".to_string());
                                    let on_delete = move |_| {
                                        if confirm(
                                            "Удалить территорию? Записи истории останутся и будут скрыты.",
                                        ) {
                                            store.delete_territory(territory_id);
                                        }
                                    };
                                    view! {
                                        <tr>
                                            <td>{"№ "}{t.number.clone()}</td>
                                            <td>
                                                {placemark}
                                                <span class="registry__size">
                                                    {format!(" · {}", kml::format_size(t.kml_content.len()))}
                                                </span>
                                            </td>
                                            <td>{format_datetime(t.created_at)}</td>
                                            <td>
                                                <button
                                                    class="icon-button"
                                                    title="Удалить территорию"
                                                    on:click=on_delete
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
