//! Command implementations for the Themeweld CLI

pub mod aggregate;
pub mod completions;
pub mod version;
