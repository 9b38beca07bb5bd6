pub mod confirm;
pub mod handlers;
