use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use crate::config::AppConfig;
use crate::domain::brand::api;
use crate::shared::api::use_api;
use crate::shared::notifications::use_notifications;
use crate::shared::upload::ImageUploadField;

#[component]
pub fn CreateBrandForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let max_bytes = use_context::<AppConfig>().unwrap_or_default().upload.max_bytes;
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let logo: RwSignal<Option<File>, LocalStorage> = RwSignal::new_local(None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let client = use_api();
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get_untracked().trim().to_string();
        let description_val = description.get_untracked().trim().to_string();
        let Some(file) = logo.get_untracked() else {
            set_error_message.set(Some("A logo is required".to_string()));
            return;
        };
        if name_val.is_empty() {
            set_error_message.set(Some("Name is required".to_string()));
            return;
        }

        set_is_saving.set(true);
        set_error_message.set(None);

        let client = client.clone();
        spawn_local(async move {
            match api::create_brand(&client, &name_val, &description_val, &file, max_bytes).await {
                Ok(_) => {
                    notifications.success(format!("Brand \"{}\" created", name_val));
                    on_created.run(());
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"New brand"</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Name *"</label>
                        <Input value=name />
                    </div>
                    <div class="form-group">
                        <label>"Description"</label>
                        <Textarea value=description />
                    </div>
                    <ImageUploadField label="Logo * (PNG or JPEG, up to 5 MB)" file=logo />

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Saving..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
