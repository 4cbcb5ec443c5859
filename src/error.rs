use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Missing required input: {0}. Set the environment variable or add it to the config file.")]
    MissingInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Sheet write failed: {0}")]
    SheetError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type SyncResult<T> = Result<T, SyncError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> SyncResult<T>;
    fn with_context<F>(self, f: F) -> SyncResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> SyncResult<T> {
        self.map_err(|e| SyncError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> SyncResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SyncError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> SyncResult<T> {
        self.ok_or_else(|| SyncError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> SyncResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| SyncError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! sync_error {
    ($error_type:ident, $msg:expr) => {
        SyncError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        SyncError::$error_type(format!($fmt, $($arg)*))
    };
}
