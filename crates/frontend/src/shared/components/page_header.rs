use leptos::prelude::*;

/// Title bar of a screen with its action buttons on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="header__subtitle">{s}</div>
                })}
            </div>
            <div class="header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
