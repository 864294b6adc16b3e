use leptos::prelude::*;
use std::sync::Arc;

type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
type TextFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Static column configuration of a screen.
///
/// `text` feeds sorting and the client-side filter; `cell` renders the value.
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub cell: CellFn<T>,
    pub text: TextFn<T>,
    pub sortable: bool,
    pub filterable: bool,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            cell: Arc::clone(&self.cell),
            text: Arc::clone(&self.text),
            sortable: self.sortable,
            filterable: self.filterable,
        }
    }
}

impl<T: 'static> ColumnDef<T> {
    /// Column rendering the text value as-is
    pub fn text<F>(key: &'static str, header: &'static str, text: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let text: TextFn<T> = Arc::new(text);
        let for_cell = Arc::clone(&text);
        Self {
            key,
            header,
            cell: Arc::new(move |row: &T| {
                let value = for_cell(row);
                view! { <span>{value}</span> }.into_any()
            }),
            text,
            sortable: false,
            filterable: false,
        }
    }

    /// Replace the renderer, keeping the text accessor for sort and filter
    pub fn with_cell<F>(mut self, cell: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        self.cell = Arc::new(cell);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn render(&self, row: &T) -> AnyView {
        (self.cell)(row)
    }

    pub fn value(&self, row: &T) -> String {
        (self.text)(row)
    }
}

/// Find the column a sort refers to
pub fn find_column<'a, T>(columns: &'a [ColumnDef<T>], key: &str) -> Option<&'a ColumnDef<T>> {
    columns.iter().find(|c| c.key == key)
}

/// The grid shows its filter box only when some column is filterable
pub fn has_filterable<T>(columns: &[ColumnDef<T>]) -> bool {
    columns.iter().any(|c| c.filterable)
}

/// Text the filter searches: every filterable column of the row.
///
/// Values are joined with a unit separator so a query never matches across
/// two columns.
pub fn filter_text<T: 'static>(columns: &[ColumnDef<T>], row: &T) -> String {
    columns
        .iter()
        .filter(|c| c.filterable)
        .map(|c| c.value(row))
        .collect::<Vec<_>>()
        .join("\u{1f}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_grid::model::filter_indices;

    struct Row {
        name: String,
        price: f64,
    }

    #[test]
    fn test_text_accessor_and_flags() {
        let columns = vec![
            ColumnDef::text("name", "Name", |r: &Row| r.name.clone()).sortable().filterable(),
            ColumnDef::text("price", "Price", |r: &Row| format!("{:.2}", r.price)),
        ];
        let row = Row {
            name: "Linen shirt".to_string(),
            price: 19.5,
        };
        let name = find_column(&columns, "name").unwrap();
        assert!(name.sortable && name.filterable);
        assert_eq!(name.value(&row), "Linen shirt");
        let price = find_column(&columns, "price").unwrap().clone();
        assert!(!price.sortable);
        assert_eq!(price.value(&row), "19.50");
        assert!(find_column(&columns, "missing").is_none());
    }

    #[test]
    fn test_filter_searches_only_filterable_columns() {
        let columns = vec![
            ColumnDef::text("name", "Name", |r: &Row| r.name.clone()).filterable(),
            ColumnDef::text("sku", "SKU", |_: &Row| "WZ-RED-01".to_string()).filterable(),
            ColumnDef::text("price", "Price", |r: &Row| format!("{:.2}", r.price)),
        ];
        let rows = vec![
            Row { name: "Linen shirt".to_string(), price: 19.5 },
            Row { name: "Denim cap".to_string(), price: 7.0 },
        ];
        assert!(has_filterable(&columns));
        assert_eq!(filter_indices(&rows, |r| filter_text(&columns, r), "denim"), vec![1]);
        assert_eq!(filter_indices(&rows, |r| filter_text(&columns, r), "wz-red"), vec![0, 1]);
        // price is not filterable
        assert!(filter_indices(&rows, |r| filter_text(&columns, r), "19.50").is_empty());
        // no match across the column boundary
        assert!(filter_indices(&rows, |r| filter_text(&columns, r), "shirtwz").is_empty());
    }

    #[test]
    fn test_no_filterable_column_hides_filter() {
        let columns = vec![ColumnDef::text("name", "Name", |r: &Row| r.name.clone()).sortable()];
        assert!(!has_filterable(&columns));
    }
}
