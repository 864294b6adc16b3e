pub mod brand;
pub mod category;
pub mod dashboard;
pub mod faq;
pub mod inventory;
pub mod order;
pub mod product;
pub mod return_exchange;
