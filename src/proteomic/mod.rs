pub mod models;
pub mod utility;
pub mod tasks;
