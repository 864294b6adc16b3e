use contracts::domain::faq::CreateFaqDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::faq::api;
use crate::shared::api::use_api;
use crate::shared::notifications::use_notifications;

/// Trimmed DTO, or the message to show when a required field is blank
pub fn faq_from_input(question: &str, answer: &str, category: &str) -> Result<CreateFaqDto, String> {
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() || answer.is_empty() {
        return Err("Question and answer are required".to_string());
    }
    let category = category.trim();
    Ok(CreateFaqDto {
        question: question.to_string(),
        answer: answer.to_string(),
        category: (!category.is_empty()).then(|| category.to_string()),
    })
}

#[component]
pub fn CreateFaqForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let question = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let client = use_api();
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = match faq_from_input(
            &question.get_untracked(),
            &answer.get_untracked(),
            &category.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                set_error_message.set(Some(e));
                return;
            }
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        let client = client.clone();
        spawn_local(async move {
            match api::create_faq(&client, &dto).await {
                Ok(_) => {
                    notifications.success("FAQ added");
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
                    <h3>"New FAQ"</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Question *"</label>
                        <Input value=question />
                    </div>
                    <div class="form-group">
                        <label>"Answer *"</label>
                        <Textarea value=answer />
                    </div>
                    <div class="form-group">
                        <label>"Category"</label>
                        <Input value=category placeholder="e.g. Shipping" />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Saving..." } else { "Add" }}
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
    fn test_faq_from_input() {
        let dto = faq_from_input(" How long is delivery? ", "3-5 days", "  ").unwrap();
        assert_eq!(dto.question, "How long is delivery?");
        assert_eq!(dto.category, None);

        let dto = faq_from_input("Q", "A", "Shipping").unwrap();
        assert_eq!(dto.category.as_deref(), Some("Shipping"));

        assert!(faq_from_input("Q", "   ", "").is_err());
    }
}
