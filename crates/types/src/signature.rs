//! Ordered parameter lists and the checks that make them well-formed.
//!
//! A [`Signature`] stands in for what a runtime's introspection facility would report for a
//! callable. Because it is declared by hand or loaded from a manifest, construction validates
//! the same shape rules a compiler would enforce on a real parameter list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parameter::{Parameter, ParameterKind};

/// Ordered, validated list of parameter descriptors for one callable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignatureDocument", into = "SignatureDocument")]
pub struct Signature {
    parameters: Vec<Parameter>,
}

/// Serialized form of a signature, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SignatureDocument {
    #[serde(default)]
    parameters: Vec<Parameter>,
}

impl TryFrom<SignatureDocument> for Signature {
    type Error = SignatureError;

    fn try_from(document: SignatureDocument) -> Result<Self, Self::Error> {
        Signature::new(document.parameters)
    }
}

impl From<Signature> for SignatureDocument {
    fn from(signature: Signature) -> Self {
        Self {
            parameters: signature.parameters,
        }
    }
}

impl Signature {
    /// Builds a signature after checking names, kind ordering and defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`SignatureError`] describing the first rule the parameter list breaks.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, SignatureError> {
        validate(&parameters)?;
        Ok(Self { parameters })
    }

    /// Signature of a callable that takes no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parameters in declared order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Names the data mapping must provide, in declared order.
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().filter(|parameter| parameter.is_required()).map(|parameter| parameter.name.as_str())
    }

    /// Returns true when any parameter collects surplus values (`*args` or `**kwargs`).
    pub fn is_variadic(&self) -> bool {
        self.parameters.iter().any(|parameter| parameter.kind.is_variadic())
    }
}

fn validate(parameters: &[Parameter]) -> Result<(), SignatureError> {
    let mut seen_names = HashSet::with_capacity(parameters.len());
    let mut previous_kind: Option<ParameterKind> = None;
    let mut positional_default_seen: Option<&str> = None;

    for parameter in parameters {
        let name = parameter.name.as_str();
        if name.is_empty() {
            return Err(SignatureError::EmptyName);
        }
        if !seen_names.insert(name) {
            return Err(SignatureError::DuplicateName { name: name.to_string() });
        }

        if let Some(previous) = previous_kind {
            if parameter.kind < previous {
                return Err(SignatureError::OutOfOrder {
                    name: name.to_string(),
                    kind: parameter.kind,
                    after: previous,
                });
            }
            if parameter.kind == previous && parameter.kind.is_variadic() {
                return Err(SignatureError::DuplicateVariadic {
                    name: name.to_string(),
                    kind: parameter.kind,
                });
            }
        }
        previous_kind = Some(parameter.kind);

        if parameter.kind.is_variadic() {
            if parameter.default.is_some() {
                return Err(SignatureError::VariadicDefault {
                    name: name.to_string(),
                    kind: parameter.kind,
                });
            }
            continue;
        }

        // Keyword-only parameters may be required after defaulted ones.
        if parameter.kind.is_positional() {
            match (parameter.default.is_some(), positional_default_seen) {
                (true, None) => positional_default_seen = Some(name),
                (false, Some(defaulted)) => {
                    return Err(SignatureError::RequiredAfterDefault {
                        name: name.to_string(),
                        after: defaulted.to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    Ok(())
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

/// Reasons a parameter list cannot form a signature.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("parameter names must not be empty")]
    EmptyName,

    #[error("duplicate parameter name '{name}'")]
    DuplicateName { name: String },

    #[error("{kind} parameter '{name}' cannot follow a {after} parameter")]
    OutOfOrder { name: String, kind: ParameterKind, after: ParameterKind },

    #[error("only one {kind} parameter is allowed, found another named '{name}'")]
    DuplicateVariadic { name: String, kind: ParameterKind },

    #[error("{kind} parameter '{name}' cannot declare a default")]
    VariadicDefault { name: String, kind: ParameterKind },

    #[error("parameter '{name}' without a default follows parameter '{after}' with a default")]
    RequiredAfterDefault { name: String, after: String },
}
