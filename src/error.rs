use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to compile substitution pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Cannot proceed: sample file '{sample_path}' does not exist.")]
    SampleDoesNotExistError { sample_path: String },
}

/// Convenience type alias for Results with the cr-render error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
