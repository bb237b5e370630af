pub mod macro_def;
pub mod store;
