pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::scaffold::{Outcome, ScaffoldArgs, ScaffoldUseCase, DEFAULT_TARGET_DIR};
pub use domain::catalog::{find_variant, template_names, FRAMEWORKS};
pub use domain::name::{is_valid_package_name, to_valid_package_name};
