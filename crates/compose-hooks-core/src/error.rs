use thiserror::Error;

use crate::props::PropValue;

/// A prop value did not have the shape a typed reader asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} prop value, found {found}")]
pub struct PropTypeError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl PropTypeError {
    pub fn new(expected: &'static str, found: &PropValue) -> Self {
        Self {
            expected,
            found: found.kind(),
        }
    }
}
