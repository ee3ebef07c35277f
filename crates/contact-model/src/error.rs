use thiserror::Error;

/// Errors raised by form operations that take untyped input.
///
/// Validation failures are not errors in this sense; they live in
/// [`crate::FieldErrors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
