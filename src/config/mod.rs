pub mod database;
pub mod env;
pub mod server;
