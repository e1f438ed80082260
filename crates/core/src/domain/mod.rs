// Domain Layer - Pure business logic and entities

pub mod arith;
pub mod contact;
pub mod error;

// Re-exports
pub use arith::{Operands, Quotient};
pub use contact::{Contact, ContactId};
pub use error::DomainError;
