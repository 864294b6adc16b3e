use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use crate::config::AppConfig;
use crate::domain::category::api;
use crate::shared::api::use_api;
use crate::shared::notifications::use_notifications;
use crate::shared::upload::ImageUploadField;

/// URL slug derived from a display name: "Men's T-Shirts" -> "mens-t-shirts"
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[component]
pub fn CreateCategoryForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let max_bytes = use_context::<AppConfig>().unwrap_or_default().upload.max_bytes;
    let name = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let slug_edited = RwSignal::new(false);
    let image: RwSignal<Option<File>, LocalStorage> = RwSignal::new_local(None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let client = use_api();
    let notifications = use_notifications();

    // follow the name until the slug is typed by hand
    Effect::new(move |_| {
        let generated = slugify(&name.get());
        if !slug_edited.get_untracked() {
            slug.set(generated);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get_untracked().trim().to_string();
        let slug_val = slugify(&slug.get_untracked());
        if name_val.is_empty() || slug_val.is_empty() {
            set_error_message.set(Some("Name and slug are required".to_string()));
            return;
        }

        set_is_saving.set(true);
        set_error_message.set(None);

        let client = client.clone();
        let file = image.get_untracked();
        spawn_local(async move {
            match api::create_category(&client, &name_val, &slug_val, file.as_ref(), max_bytes).await {
                Ok(_) => {
                    notifications.success(format!("Category \"{}\" created", name_val));
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
                    <h3>"New category"</h3>
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
                        <label>"Slug *"</label>
                        <input
                            type="text"
                            prop:value=move || slug.get()
                            on:input=move |ev| {
                                slug_edited.set(true);
                                slug.set(event_target_value(&ev));
                            }
                        />
                    </div>
                    <ImageUploadField label="Image (PNG or JPEG, up to 5 MB)" file=image />

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Men's T-Shirts"), "mens-t-shirts");
        assert_eq!(slugify("  Summer   Sale 2024 "), "summer-sale-2024");
        assert_eq!(slugify("--Kurta__Sets--"), "kurta-sets");
        assert_eq!(slugify("!!!"), "");
    }
}
