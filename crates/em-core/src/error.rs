use thiserror::Error;

pub type EmResult<T> = Result<T, EmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
