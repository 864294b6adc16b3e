pub mod daily;
pub mod list;
