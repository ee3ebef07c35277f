//! Reusable UI components for the contact form.
//!
//! - **Form**: `form_field`
//! - **Display**: `SummaryCard`
//!
//! Components return `Element<M>` and take already-owned text, so they can be
//! built from a rendered document that does not outlive the view call.

mod form_field;
mod summary_card;

pub use form_field::{FieldInput, form_field};
pub use summary_card::SummaryCard;
