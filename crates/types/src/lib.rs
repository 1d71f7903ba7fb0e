//! Declared-schema types for dynfunc.
//!
//! A callable's parameter list is described explicitly as a [`Signature`]: an ordered list of
//! [`Parameter`] descriptors, each carrying a name, a [`ParameterKind`], and an optional default.
//! The engine crate consumes these to decide which values a callable receives and how.

pub mod parameter;
pub mod signature;

pub use parameter::{Parameter, ParameterKind};
pub use signature::{Signature, SignatureError};
