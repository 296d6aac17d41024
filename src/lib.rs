pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod reports;
pub mod schema;
pub mod schema_manager;
pub mod seed;
pub mod shell;
pub mod tables;
pub mod utils;

pub use error::{AppError, AppResult};
pub use gateway::{PgGateway, Store};
pub use shell::Shell;
pub use tables::{map_row, Row, Table, Value};
