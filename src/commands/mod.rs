//! Command implementations for the depboot CLI

pub mod check;
pub mod completions;
pub mod run;
pub mod version;
