use leptos::prelude::*;
use std::sync::Arc;
use thaw::Input;
use wasm_bindgen::JsCast;

use super::column::{filter_text, find_column, has_filterable, ColumnDef};
use super::model::{
    filter_indices, index_key, sort_indices, toggle_sort, BodyMode, HeaderCheckState, PageState,
    RowSelection, ScopedSelection, SelectionSummary, SortState,
};
use super::pager::GridPager;

pub type RowPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type RowKeyFn<T> = Arc<dyn Fn(usize, &T) -> String + Send + Sync>;

/// Who owns the row selection.
///
/// `Controlled` is the normal mode: the screen owns the map and picks the key
/// (usually the entity id, so selection survives page changes).
/// `Uncontrolled` keeps the map inside the grid, keyed by row index of the
/// current page, and resets it whenever `data` changes.
pub enum GridSelection<T> {
    Disabled,
    Uncontrolled,
    Controlled {
        state: RwSignal<RowSelection>,
        key: Arc<dyn Fn(&T) -> String + Send + Sync>,
    },
}

impl<T> Default for GridSelection<T> {
    fn default() -> Self {
        GridSelection::Disabled
    }
}

/// Selection map as the grid sees it, whoever owns it
#[derive(Clone, Copy)]
enum SelectionHandle {
    Controlled(RwSignal<RowSelection>),
    Uncontrolled {
        state: RwSignal<ScopedSelection>,
        generation: Memo<u64>,
    },
}

impl SelectionHandle {
    fn with<R>(&self, f: impl FnOnce(&RowSelection) -> R) -> R {
        match self {
            SelectionHandle::Controlled(state) => state.with(f),
            SelectionHandle::Uncontrolled { state, generation } => {
                let generation = generation.get();
                state.with(|s| f(s.current(generation)))
            }
        }
    }

    fn update(&self, f: impl FnOnce(&mut RowSelection)) {
        match self {
            SelectionHandle::Controlled(state) => state.update(f),
            SelectionHandle::Uncontrolled { state, generation } => {
                let generation = generation.get_untracked();
                state.update(|s| f(s.current_mut(generation)))
            }
        }
    }
}

impl<T> GridSelection<T> {
    pub fn controlled<F>(state: RwSignal<RowSelection>, key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        GridSelection::Controlled {
            state,
            key: Arc::new(key),
        }
    }
}

/// Generic list grid used by every admin screen.
///
/// Pagination is manual: `data` holds the current page only and a page change
/// is reported through `set_pagination`; the grid never fetches or slices.
#[component]
pub fn DataGrid<T>(
    /// Ordered column definitions
    columns: Vec<ColumnDef<T>>,

    /// Rows of the current page
    #[prop(into)]
    data: Signal<Vec<T>>,

    #[prop(into)]
    is_loading: Signal<bool>,

    /// Controlled page state
    #[prop(into)]
    pagination: Signal<PageState>,

    /// Receives the requested page on next/previous or page-size change
    set_pagination: Callback<PageState>,

    /// Overrides `pagination.page_count`
    #[prop(optional, into)]
    page_count: Option<Signal<usize>>,

    #[prop(optional, into)]
    filter_placeholder: Option<String>,

    #[prop(optional)]
    selection: GridSelection<T>,

    /// Rows for which this returns false get no checkbox
    #[prop(optional)]
    enable_row_selection: Option<RowPredicate<T>>,

    #[prop(optional)]
    on_row_click: Option<Callback<T>>,

    #[prop(optional)]
    page_size_options: Vec<usize>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let columns = Arc::new(columns);
    let column_count = columns.len();

    let (selection_state, row_key): (Option<SelectionHandle>, RowKeyFn<T>) = match selection {
        GridSelection::Disabled => (None, Arc::new(|i: usize, _: &T| index_key(i))),
        GridSelection::Uncontrolled => {
            // bumped on every new `data`, which resets the internal selection
            let generation = Memo::new(move |previous: Option<&u64>| {
                data.track();
                previous.map_or(0, |g| g + 1)
            });
            let handle = SelectionHandle::Uncontrolled {
                state: RwSignal::new(ScopedSelection::default()),
                generation,
            };
            (Some(handle), Arc::new(|i: usize, _: &T| index_key(i)))
        }
        GridSelection::Controlled { state, key } => (
            Some(SelectionHandle::Controlled(state)),
            Arc::new(move |_: usize, row: &T| key(row)),
        ),
    };
    let selectable: RowPredicate<T> = enable_row_selection.unwrap_or_else(|| Arc::new(|_: &T| true));

    let show_filter = has_filterable(columns.as_slice());
    let filter_value = RwSignal::new(String::new());
    let sort = RwSignal::new(None::<SortState>);

    // indices into `data` after the client-side filter and sort
    let visible = Memo::new({
        let columns = Arc::clone(&columns);
        move |_| {
            let query = filter_value.get();
            let sort_state = sort.get();
            data.with(|rows| {
                let mut indices = filter_indices(rows, |r| filter_text(columns.as_slice(), r), &query);
                if let Some(s) = sort_state {
                    if let Some(column) = find_column(columns.as_slice(), s.column) {
                        sort_indices(rows, &mut indices, |r| column.value(r), s.direction);
                    }
                }
                indices
            })
        }
    });

    let visible_keys = Memo::new({
        let row_key = Arc::clone(&row_key);
        move |_| {
            let indices = visible.get();
            data.with(|rows| {
                indices
                    .iter()
                    .filter_map(|&i| rows.get(i).map(|r| row_key(i, r)))
                    .collect::<Vec<String>>()
            })
        }
    });

    // the rows the header checkbox toggles
    let selectable_visible_keys = Memo::new({
        let row_key = Arc::clone(&row_key);
        let selectable = Arc::clone(&selectable);
        move |_| {
            let indices = visible.get();
            data.with(|rows| {
                indices
                    .iter()
                    .filter_map(|&i| rows.get(i).map(|r| (i, r)))
                    .filter(|(_, r)| selectable(r))
                    .map(|(i, r)| row_key(i, r))
                    .collect::<Vec<String>>()
            })
        }
    });

    // footer: selected among all filtered rows
    let summary = Memo::new(move |_| {
        let keys = visible_keys.get();
        selection_state
            .map(|s| s.with(|sel| SelectionSummary::compute(sel, &keys)))
            .unwrap_or(SelectionSummary {
                selected: 0,
                total: keys.len(),
            })
    });

    let header_state = Memo::new(move |_| {
        let keys = selectable_visible_keys.get();
        let summary = selection_state
            .map(|s| s.with(|sel| SelectionSummary::compute(sel, &keys)))
            .unwrap_or(SelectionSummary {
                selected: 0,
                total: keys.len(),
            });
        HeaderCheckState::compute(summary)
    });

    let effective_page = Signal::derive(move || {
        let p = pagination.get();
        match page_count {
            Some(count) => PageState {
                page_count: count.get().max(1),
                ..p
            },
            None => p,
        }
    });

    let header_checkbox_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let state = header_state.get();
        if let Some(input) = header_checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, HeaderCheckState::Indeterminate));
            }
        }
    });

    let header_cells = columns
        .iter()
        .map(|column| {
            let key = column.key;
            let header = column.header;
            if column.sortable {
                view! {
                    <th
                        class="table__header-cell table__header-cell--sortable"
                        on:click=move |_| sort.update(|s| *s = Some(toggle_sort(s.as_ref(), key)))
                    >
                        {header}
                        <span class=move || {
                            if sort.with(|s| s.as_ref().map(|s| s.column) == Some(key)) {
                                "table__sort-indicator table__sort-indicator--active"
                            } else {
                                "table__sort-indicator"
                            }
                        }>
                            {move || sort.with(|s| match s {
                                Some(s) if s.column == key => s.direction.indicator(),
                                _ => " ⇅",
                            })}
                        </span>
                    </th>
                }
                .into_any()
            } else {
                view! { <th class="table__header-cell">{header}</th> }.into_any()
            }
        })
        .collect_view();

    let header_checkbox = selection_state.map(|state| {
        view! {
            <th class="table__header-cell table__header-cell--checkbox">
                <input
                    node_ref=header_checkbox_ref
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || header_state.get() == HeaderCheckState::Checked
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        let keys = selectable_visible_keys.get_untracked();
                        state.update(|s| s.set_all(keys.iter().map(String::as_str), checked));
                    }
                />
            </th>
        }
    });

    let total_columns = column_count + usize::from(selection_state.is_some());

    let body = {
        let columns = Arc::clone(&columns);
        let row_key = Arc::clone(&row_key);
        let selectable = Arc::clone(&selectable);
        move || {
            let indices = visible.get();
            let mode = BodyMode::compute(is_loading.get(), pagination.with(|p| p.page_size), indices.len());
            if let BodyMode::Skeleton { rows } = mode {
                return (0..rows)
                    .map(|_| {
                        view! {
                            <tr class="table__row table__row--skeleton">
                                {(0..total_columns)
                                    .map(|_| view! { <td class="table__cell"><div class="skeleton"></div></td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()
                    .into_any();
            }

            if mode == BodyMode::Empty {
                return view! {
                    <tr class="table__row">
                        <td class="table__cell table__cell--empty" colspan=total_columns.to_string()>
                            "No results."
                        </td>
                    </tr>
                }
                .into_any();
            }

            let rows = data.get();
            indices
                .into_iter()
                .filter_map(|i| rows.get(i).cloned().map(|row| (i, row)))
                .map(|(i, row)| {
                    let key = row_key(i, &row);
                    let can_select = selectable(&row);
                    let checkbox = selection_state.map(|state| {
                        let key_for_checked = key.clone();
                        let key_for_change = key.clone();
                        view! {
                            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                                {can_select.then(|| view! {
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || state.with(|s| s.is_selected(&key_for_checked))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            state.update(|s| s.set(key_for_change.clone(), checked));
                                        }
                                    />
                                })}
                            </td>
                        }
                    });
                    let key_for_class = key.clone();
                    let cells = columns
                        .iter()
                        .map(|column| view! { <td class="table__cell">{column.render(&row)}</td> })
                        .collect_view();
                    let row_for_click = row.clone();
                    view! {
                        <tr
                            class="table__row"
                            class:table__row--selected=move || {
                                selection_state
                                    .map(|s| s.with(|sel| sel.is_selected(&key_for_class)))
                                    .unwrap_or(false)
                            }
                            class:table__row--clickable=on_row_click.is_some()
                            on:click=move |_| {
                                if let Some(cb) = on_row_click {
                                    cb.run(row_for_click.clone());
                                }
                            }
                        >
                            {checkbox}
                            {cells}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    let placeholder = filter_placeholder.unwrap_or_else(|| "Filter...".to_string());

    view! {
        <div class="data-grid">
            {show_filter.then(|| view! {
                <div class="data-grid__toolbar">
                    <Input class="data-grid__filter" value=filter_value placeholder=placeholder />
                </div>
            })}
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header_checkbox}
                            {header_cells}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            <div class="data-grid__footer">
                {selection_state.map(|_| view! {
                    <span class="data-grid__selection">{move || summary.get().to_string()}</span>
                })}
                <GridPager
                    state=effective_page
                    on_change=set_pagination
                    page_size_options=page_size_options
                />
            </div>
        </div>
    }
}
