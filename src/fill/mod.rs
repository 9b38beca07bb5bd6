pub mod fill;
pub mod fill_model;
