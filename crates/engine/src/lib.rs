//! # dynfunc engine
//!
//! Calls heterogeneous callables from a shared bag of named values. Each callable declares its
//! parameters as a [`Signature`]; the engine picks exactly the values that signature asks for out
//! of a [`DataSource`], arranges them as positional or keyword arguments, and makes the call.
//!
//! ## Usage
//!
//! ```rust
//! use dynfunc_engine::{CallableExt, Function, Parameter, ResolvedCall, Signature};
//! use indexmap::IndexMap;
//! use serde_json::{Value, json};
//!
//! let square = Function::new(Signature::new(vec![Parameter::positional_or_keyword("n")])?, |call: ResolvedCall| {
//!     let n: i64 = call.keyword_as("n")?.unwrap_or_default();
//!     Ok::<_, serde_json::Error>(n * n)
//! });
//!
//! let data: IndexMap<String, Value> = [("n", json!(5)), ("s", json!(4)), ("tm", json!(3))]
//!     .into_iter()
//!     .map(|(key, value)| (key.to_string(), value))
//!     .collect();
//!
//! assert_eq!(square.call_with_args(&data)??, 25);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`source`**: the [`DataSource`] trait over name-to-value maps
//! - **`resolve`**: [`ParameterResolver`] and [`populate_args`], producing a [`ResolvedCall`]
//! - **`callable`**: the [`Callable`] capability and the closure-backed [`Function`]
//! - **`invoke`**: [`call_with_args`], resolve-then-call
//! - **`manifest`**: loading signatures from YAML/JSON files

pub mod call;
pub mod callable;
pub mod error;
pub mod invoke;
pub mod manifest;
pub mod resolve;
pub mod source;

pub use call::ResolvedCall;
pub use callable::{Callable, Function};
pub use dynfunc_types::{Parameter, ParameterKind, Signature, SignatureError};
pub use error::ParameterError;
pub use invoke::{CallableExt, call_with_args};
pub use manifest::{ManifestFormat, parse_signature_file, parse_signature_str};
pub use resolve::{ParameterResolver, populate_args};
pub use source::DataSource;

/// Version of this crate as declared in its manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
