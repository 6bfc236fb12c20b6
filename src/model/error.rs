use std::fmt;

/// Error raised while compiling the resource DSL into an [`Api`](super::Api).
///
/// Every failure is fatal for the current compilation: there is no partial
/// result and nothing is downgraded to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// API or resource name with disallowed characters, or empty after normalization
    InvalidName {
        /// The name as it was given
        name: String,
        /// What is wrong with it
        reason: String,
    },
    /// A resource token that does not match the DSL grammar
    GrammarMismatch {
        /// The offending token, verbatim
        token: String,
        /// Which rule was violated
        reason: String,
    },
    /// Operations modifier outside `[1, 255]`
    OperationsRange {
        /// The modifier as written
        value: String,
    },
    /// Both the create (2) and create-async (4) bits are set
    ConflictingCreateSemantics {
        /// The full modifier
        value: u32,
    },
}

impl ModelError {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn grammar(token: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::GrammarMismatch {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidName { name, reason } => {
                write!(f, "The name ({name}) is invalid: {reason}")
            }
            ModelError::GrammarMismatch { token, reason } => {
                write!(
                    f,
                    "There's something wrong with the format of this ({token}) resource argument: {reason}"
                )
            }
            ModelError::OperationsRange { value } => {
                write!(
                    f,
                    "Incorrect numeric value for operations modifier ({value}). \
                    Use a numeric value between 1 and 255."
                )
            }
            ModelError::ConflictingCreateSemantics { value } => {
                write!(
                    f,
                    "Operations modifier ({value}) selects both create and create(async). \
                    Choose either a synchronous or an asynchronous create operation, not both."
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}
