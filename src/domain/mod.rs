pub mod catalog;
pub mod error;
pub mod model;
pub mod name;
pub mod pkg_manager;
