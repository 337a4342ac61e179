use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("Malformed colour {input:?}: {message}")]
    #[diagnostic(code(swatch::colour))]
    MalformedColour {
        input: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(swatch::output))]
    Output { message: String },
}

impl SwatchError {
    /// Shorthand for a `MalformedColour` error without help text.
    pub(crate) fn malformed(input: impl Into<String>, message: impl Into<String>) -> Self {
        SwatchError::MalformedColour {
            input: input.into(),
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwatchError>;
