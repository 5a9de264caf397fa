pub mod type_interfaces;
pub mod types;
