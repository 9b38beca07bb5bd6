pub mod capture;
pub mod field_model;
pub mod identity;
pub mod naming;
