//! Error types for the core meta layer.

use std::fmt;

// ── Template errors ─────────────────────────────────────────────────────────

/// Errors from `${variable}` template expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a variable the caller did not bind.
    MissingVariable {
        /// The unbound variable name.
        name: String,
    },
    /// The template text itself is not well formed.
    Malformed {
        /// What was wrong with it.
        detail: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingVariable { name } => {
                write!(f, "template references unknown variable '{name}'")
            }
            TemplateError::Malformed { detail } => {
                write!(f, "malformed template: {detail}")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

// ── Station code errors ─────────────────────────────────────────────────────

/// Errors from parsing dotted station codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodesError {
    /// The string does not have the `NET.STA.LOC` shape.
    Malformed {
        /// The offending input.
        value: String,
    },
    /// The station component is empty.
    MissingStation {
        /// The offending input.
        value: String,
    },
}

impl fmt::Display for CodesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodesError::Malformed { value } => {
                write!(f, "station codes '{value}' do not match NET.STA.LOC")
            }
            CodesError::MissingStation { value } => {
                write!(f, "station codes '{value}' have an empty station component")
            }
        }
    }
}

impl std::error::Error for CodesError {}
