/// Common types and utilities for the ABI code generator

/// Error type for generation-time failures
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not parseable JSON or is structurally invalid
    #[error("Malformed ABI: {0}")]
    MalformedAbi(String),

    /// Two structurally different tuples produced the same emitted name
    #[error("Tuple type collision on {name}: '{existing}' and '{incoming}' hash to the same identifier")]
    TupleTypeCollision {
        name: String,
        existing: String,
        incoming: String,
    },

    /// ABI type with no entry in the type mapping table
    #[error("Unsupported ABI type '{type_name}' in {context}")]
    UnsupportedType { type_name: String, context: String },

    /// Template registration or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// Generated output differs from the committed fixture
    #[error("Golden output mismatch in {path} at line {line}:\n  expected: {expected_line}\n  actual:   {actual_line}")]
    GoldenMismatch {
        path: String,
        line: usize,
        expected_line: String,
        actual_line: String,
        expected: String,
        actual: String,
    },

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a new malformed ABI error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedAbi(msg.into())
    }

    /// Create a new unsupported type error
    pub fn unsupported_type<S: Into<String>, C: Into<String>>(type_name: S, context: C) -> Self {
        Error::UnsupportedType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Error::Template(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a new IO error
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Error::Io(msg.into())
    }

    /// Whether this error aborts a whole batch rather than a single contract
    pub fn is_fatal_for_batch(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON serialization error: {}", err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
