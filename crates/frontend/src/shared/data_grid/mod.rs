//! Paginated, sortable, filterable data-grid shared by all list screens.

pub mod column;
pub mod grid;
pub mod model;
pub mod pager;

pub use column::ColumnDef;
pub use grid::{DataGrid, GridSelection, RowPredicate};
pub use model::{PageState, RowSelection, SelectionSummary, SortDirection};
pub use pager::GridPager;
