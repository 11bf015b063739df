pub mod dashboard;
pub mod financial;
pub mod notification;
pub mod order;
pub mod partner;
pub mod product;
pub mod settings;
pub mod user;
