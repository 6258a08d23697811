use thiserror::Error;

/// Errors raised while sorting the contents of a dependency file.
#[derive(Error, Debug)]
pub(crate) enum SortError {
    /// The file is not valid UTF-8 text.
    #[error("content is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// A non-blank line could not be parsed as an entry and the
    /// `fail` policy is active.
    #[error("line {number} is not a `name version` entry: {text:?}")]
    Unmatched { number: usize, text: String },

    /// The built-in entry pattern failed to compile.
    #[error("invalid entry pattern: {0}")]
    Pattern(#[from] regex::Error),
}
