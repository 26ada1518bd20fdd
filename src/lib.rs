/// Handles argument parsing and the CLI workflow.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for reading the sample document.
pub mod ioutils;

/// Sample CR substitution pipeline.
pub mod renderer;
