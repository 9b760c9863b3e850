pub mod assistant;
pub mod checker;
pub mod detail;
pub mod gallery;
pub mod help;
pub mod not_found;
