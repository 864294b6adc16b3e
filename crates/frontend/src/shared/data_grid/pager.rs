use crate::shared::icons::icon;
use leptos::prelude::*;

use super::model::PageState;

/// Previous/next controls for a manually paginated grid.
///
/// Emits the next `PageState`; the owning screen fetches the page.
#[component]
pub fn GridPager(
    /// Effective page state (page count already resolved)
    #[prop(into)]
    state: Signal<PageState>,

    /// Called with the requested page
    on_change: Callback<PageState>,

    /// Available page sizes; the selector is hidden when empty
    #[prop(optional)]
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let has_sizes = !page_size_options.is_empty();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(prev) = state.get_untracked().previous() {
                        on_change.run(prev);
                    }
                }
                disabled=move || !state.get().can_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            <span class="pagination-info">{move || state.get().label()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(next) = state.get_untracked().next() {
                        on_change.run(next);
                    }
                }
                disabled=move || !state.get().can_next()
                title="Next page"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
            {has_sizes.then(|| view! {
                <select
                    class="page-size-select"
                    on:change={
                        let options = page_size_options.clone();
                        move |ev| {
                            let fallback = options.first().copied().unwrap_or(10);
                            let size = event_target_value(&ev).parse().unwrap_or(fallback);
                            on_change.run(state.get_untracked().resize(size));
                        }
                    }
                    prop:value=move || state.get().page_size.to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || state.get().page_size == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}
