// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("divide by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
