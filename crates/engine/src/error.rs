//! Failures raised while resolving a callable's arguments.

use dynfunc_types::ParameterKind;
use thiserror::Error;

/// Reasons a call could not be assembled from a data mapping.
///
/// `Missing` means the data was inadequate for an otherwise compatible callable;
/// `UnsupportedKind` means the callable's shape cannot be fed from a flat mapping at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A parameter without a default had no entry in the data mapping.
    ///
    /// The message renders `available` with `Debug`, so keys appear double-quoted: `["other"]`.
    #[error("'{name}' is not a valid parameter, valid parameters are: {available:?}")]
    Missing {
        /// The parameter that could not be filled.
        name: String,
        /// Every key present in the data mapping, in its iteration order.
        available: Vec<String>,
    },

    /// The callable declares `*args` or `**kwargs`.
    #[error("Unable to populate {kind} parameter '{name}'")]
    UnsupportedKind { name: String, kind: ParameterKind },
}

impl ParameterError {
    /// Name of the parameter that caused the failure.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name, .. } | Self::UnsupportedKind { name, .. } => name,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, Self::UnsupportedKind { .. })
    }
}
