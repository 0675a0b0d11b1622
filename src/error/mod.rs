//! Centralized error handling for Quill
//! Defines the common error type and error categories

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or out-of-range boundary positions
    Boundary,
    /// Structural mutation failures (bad containers, detached nodes)
    Mutation,
    /// Undo/redo context failures
    History,
    /// Chord or action parsing errors
    Parse,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boundary => write!(f, "Boundary"),
            Self::Mutation => write!(f, "Mutation"),
            Self::History => write!(f, "History"),
            Self::Parse => write!(f, "Parse"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in Quill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl EditError {
    /// Create a new error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a boundary error
    pub fn boundary(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Boundary, message)
    }

    /// Shorthand for a mutation error
    pub fn mutation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Mutation, message)
    }

    /// Shorthand for a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Shorthand for an internal invariant violation
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for EditError {}

impl From<String> for EditError {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Internal, msg)
    }
}

impl From<&str> for EditError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorKind::Internal, msg)
    }
}

/// Result alias for Quill operations
pub type Result<T> = std::result::Result<T, EditError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
