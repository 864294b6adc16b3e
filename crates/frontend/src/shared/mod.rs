pub mod api;
pub mod components;
pub mod data_grid;
pub mod date_utils;
pub mod icons;
pub mod notifications;
pub mod paged_list;
pub mod upload;
