//! Error types for numeric operations
//!
//! Every failure the engine can report is a variant of [`Error`]. Callers can tell
//! "this type cannot do that" apart from "this input is wrong":
//!
//! | Category | Variants |
//! |----------|----------|
//! | Resolution | `UnsupportedType`, `AlreadyRegistered` |
//! | Capability | `UnsupportedOperation` |
//! | Input | `Format`, `Overflow`, `InvalidArgument`, `DivideByZero` |
//! | Configuration | `Config` |
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for numeric operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by resolution, adapters and the façade
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ==================== Resolution ====================
    /// No adapter could be resolved for the type
    #[error("type {type_name} has no numeric operations")]
    UnsupportedType {
        /// Name of the requested type
        type_name: &'static str,
    },

    /// An explicit registration was attempted for a type that is already bound
    #[error("numeric operations for {type_name} are already registered")]
    AlreadyRegistered {
        /// Name of the registered type
        type_name: &'static str,
    },

    // ==================== Capability ====================
    /// The type resolved, but the requested capability is outside its operation set
    #[error("{operation} is not supported for {type_name}")]
    UnsupportedOperation {
        /// Name of the type the operation was requested on
        type_name: &'static str,
        /// Contract operation name
        operation: &'static str,
    },

    // ==================== Input ====================
    /// Text or format specifier is syntactically invalid
    #[error("format error: {reason}")]
    Format {
        /// What was wrong with the input
        reason: String,
    },

    /// Value lies outside the destination's representable range
    #[error("overflow: {reason}")]
    Overflow {
        /// What overflowed
        reason: String,
    },

    /// Caller-supplied arguments violate an operation's precondition
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Which precondition was violated
        reason: String,
    },

    /// Integral or decimal division by zero
    #[error("attempted to divide {type_name} by zero")]
    DivideByZero {
        /// Name of the type being divided
        type_name: &'static str,
    },

    // ==================== Configuration ====================
    /// Culture configuration could not be read or is inconsistent
    #[error("configuration error: {reason}")]
    Config {
        /// Details
        reason: String,
    },
}

/// Fieldless discriminant of [`Error`], handy for assertions and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::UnsupportedType`]
    UnsupportedType,
    /// See [`Error::AlreadyRegistered`]
    AlreadyRegistered,
    /// See [`Error::UnsupportedOperation`]
    UnsupportedOperation,
    /// See [`Error::Format`]
    Format,
    /// See [`Error::Overflow`]
    Overflow,
    /// See [`Error::InvalidArgument`]
    InvalidArgument,
    /// See [`Error::DivideByZero`]
    DivideByZero,
    /// See [`Error::Config`]
    Config,
}

impl Error {
    /// Create an `UnsupportedType` error for `T`
    pub fn unsupported_type<T: ?Sized>() -> Self {
        Error::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create an `UnsupportedOperation` error for `T`
    pub fn unsupported_operation<T: ?Sized>(operation: &'static str) -> Self {
        Error::UnsupportedOperation {
            type_name: std::any::type_name::<T>(),
            operation,
        }
    }

    /// Create a `DivideByZero` error for `T`
    pub fn divide_by_zero<T: ?Sized>() -> Self {
        Error::DivideByZero {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a `Format` error
    pub fn format(reason: impl Into<String>) -> Self {
        Error::Format {
            reason: reason.into(),
        }
    }

    /// Create an `Overflow` error
    pub fn overflow(reason: impl Into<String>) -> Self {
        Error::Overflow {
            reason: reason.into(),
        }
    }

    /// Create an `Overflow` error stating that a value does not fit `T`
    pub fn out_of_range<T: ?Sized>() -> Self {
        Error::overflow(format!(
            "value was either too large or too small for {}",
            std::any::type_name::<T>()
        ))
    }

    /// Create an `InvalidArgument` error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a `Config` error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// The fieldless kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Error::AlreadyRegistered { .. } => ErrorKind::AlreadyRegistered,
            Error::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Error::Format { .. } => ErrorKind::Format,
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::DivideByZero { .. } => ErrorKind::DivideByZero,
            Error::Config { .. } => ErrorKind::Config,
        }
    }

    /// True for errors caused by the caller's input rather than the type's capabilities
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Format
                | ErrorKind::Overflow
                | ErrorKind::InvalidArgument
                | ErrorKind::DivideByZero
        )
    }
}
