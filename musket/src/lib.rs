//! Command-line front end: argument handling and text reports for the
//! `musket` binary.

pub mod args;
pub mod report;

pub use args::{ArgsError, Command, Options};
