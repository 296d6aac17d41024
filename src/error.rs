use thiserror::Error;

/// Every failure the console can report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cannot connect to the database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("cannot create table `{table}`: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: diesel::result::Error,
    },

    #[error("invalid value {value:?} for column `{column}`")]
    InvalidInput { column: &'static str, value: String },

    #[error("table `{table}` expects {expected} values, got {found}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown table `{0}`")]
    UnknownTable(String),

    #[error("unknown report `{0}`")]
    UnknownQuery(String),

    #[error("statement failed: {0}")]
    Execution(#[from] diesel::result::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
