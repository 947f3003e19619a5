//! Shared fixtures for unit tests.

use std::fmt;

use crate::policies::FailureKind;

/// Failure with two kinds, shaped after a value error and a type error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Boom {
    Value(&'static str),
    Type(&'static str),
}

impl FailureKind for Boom {
    fn kind(&self) -> &'static str {
        match self {
            Boom::Value(_) => "value_error",
            Boom::Type(_) => "type_error",
        }
    }
}

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boom::Value(msg) => write!(f, "value error: {msg}"),
            Boom::Type(msg) => write!(f, "type error: {msg}"),
        }
    }
}

impl std::error::Error for Boom {}
