//! Rendering contract for the contact form.
//!
//! [`render`] projects a [`contact_model::FormModel`] into an accessible
//! element tree. [`Screen`] queries that tree the way a DOM testing library
//! would (by role, label text, text, test id) and [`Harness`] feeds user
//! events back into the model.
//!
//! ```
//! use contact_view::{Harness, Role, TextMatch};
//!
//! let mut harness = Harness::render();
//! let screen = harness.screen();
//! let button = screen.get_by_role_named(Role::Button, "Submit").unwrap();
//! harness.click(button).unwrap();
//!
//! let screen = harness.screen();
//! let errors = screen
//!     .get_all_by_test_id(TextMatch::pattern("(?i)error").unwrap())
//!     .unwrap();
//! assert_eq!(errors.len(), 3);
//! ```

pub mod harness;
pub mod node;
pub mod query;
pub mod render;

pub use harness::{Harness, HarnessError};
pub use node::{Control, Document, Node, Role, Tag};
pub use query::{QueryError, Screen, TextMatch};
pub use render::{
    ERROR_TEST_ID, FORM_HEADING, SUBMIT_LABEL, SUMMARY_HEADING, SUMMARY_LABEL, display_test_id,
    label_text, render,
};
