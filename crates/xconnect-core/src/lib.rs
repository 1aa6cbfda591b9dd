//! Core data structures and errors for the XConnect colleague directory.
//!
//! This crate defines the record and profile types shared by the codec,
//! the directory operations and the command-line front end.

pub mod error;
pub mod types;
