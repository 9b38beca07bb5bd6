pub mod backend;
pub mod presets;
pub mod store_model;
