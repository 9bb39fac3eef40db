//! Core error types for diagram generation
//!
//! This module defines the error types surfaced while ingesting type records,
//! registering them, and rendering the resulting diagram.

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Duplicate type: {name} is already registered")]
    DuplicateType { name: String },

    #[error("Invalid member {member} in type {type_name}: {message}")]
    InvalidMember {
        type_name: String,
        member: String,
        message: String,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }

    /// Create a new duplicate type error
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    /// Create a new invalid member error
    pub fn invalid_member(
        type_name: impl Into<String>,
        member: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidMember {
            type_name: type_name.into(),
            member: member.into(),
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }
}

impl From<serde_json::Error> for DiagramError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_error(err.to_string(), err.line(), err.column())
    }
}
