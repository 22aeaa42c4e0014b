use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrielError>;

#[derive(Debug, Error)]
pub enum OrielError {
    #[error("Backend setup error: {0}")]
    Setup(String),
    #[error("Render error: {0}")]
    Render(String),
}
