//! Parameter descriptors: the name, passing kind and optional default of one declared parameter.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Calling-convention category of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Only accepted by position (e.g. `a` in `f(a, /)`).
    PositionalOnly,
    /// Accepted either by position or by name.
    #[default]
    PositionalOrKeyword,
    /// Collects surplus positional values (e.g. `*args`).
    VarPositional,
    /// Only accepted by name (e.g. `param` in `f(*, param)`).
    KeywordOnly,
    /// Collects surplus named values (e.g. `**kwargs`).
    VarKeyword,
}

impl ParameterKind {
    /// Canonical upper-case label used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PositionalOnly => "POSITIONAL_ONLY",
            Self::PositionalOrKeyword => "POSITIONAL_OR_KEYWORD",
            Self::VarPositional => "VAR_POSITIONAL",
            Self::KeywordOnly => "KEYWORD_ONLY",
            Self::VarKeyword => "VAR_KEYWORD",
        }
    }

    /// Returns true for `*args`/`**kwargs` style parameters.
    pub const fn is_variadic(self) -> bool {
        matches!(self, Self::VarPositional | Self::VarKeyword)
    }

    /// Returns true when the parameter can be bound by position.
    pub const fn is_positional(self) -> bool {
        matches!(self, Self::PositionalOnly | Self::PositionalOrKeyword)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata about one declared parameter of a callable.
///
/// `default` distinguishes "no default" (`None`) from a default of JSON `null`
/// (`Some(Value::Null)`), including when read from a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, unique within its signature.
    pub name: String,
    /// How the parameter is passed.
    #[serde(default)]
    pub kind: ParameterKind,
    /// Value used when the data mapping has no entry for `name`.
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Parameter {
    /// Creates a parameter of the given kind without a default.
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    pub fn positional_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOnly)
    }

    pub fn positional_or_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOrKeyword)
    }

    pub fn keyword_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::KeywordOnly)
    }

    pub fn var_positional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VarPositional)
    }

    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VarKeyword)
    }

    /// Attaches a default value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Returns true when the parameter declares a default.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns true when the data mapping must supply a value for this parameter.
    pub fn is_required(&self) -> bool {
        !self.kind.is_variadic() && self.default.is_none()
    }
}

// A present `default: null` must stay `Some(Value::Null)`; plain `Option` would collapse it to `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
