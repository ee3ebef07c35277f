//! CLI library components for the contact form driver.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
