pub mod backend;
pub mod database;
