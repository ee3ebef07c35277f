//! Contact form model.
//!
//! Holds the four field values of the contact form, derives the validation
//! error mapping from them, and publishes a snapshot of the values when a
//! valid form is submitted.
//!
//! The model is a plain synchronous state machine:
//!
//! - **Editing**: values change through [`FormModel::set_field`], and the
//!   changed field is re-validated immediately.
//! - **Submitted**: [`FormModel::submit`] validates every field and, only if
//!   nothing fails, stores [`SubmittedValues`] for display.
//!
//! # Example
//!
//! ```
//! use contact_model::{Field, FormModel};
//!
//! let mut form = FormModel::new();
//! form.set_field(Field::FirstName, "a");
//! assert_eq!(form.errors().len(), 1);
//!
//! form.set_field(Field::FirstName, "Blade");
//! form.set_field(Field::LastName, "Thomas");
//! form.set_field(Field::Email, "blade@thomas.com");
//! assert!(form.submit().is_accepted());
//! assert_eq!(form.submitted().map(|s| s.first_name.as_str()), Some("Blade"));
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod privacy;
pub mod validation;

pub use error::{FormError, Result};
pub use field::{Field, FormValues};
pub use form::{FormModel, SubmitOutcome, SubmittedValues};
pub use validation::{
    FIRST_NAME_MIN_CHARS, FieldErrors, ValidationError, is_valid_email, validate, validate_field,
};
