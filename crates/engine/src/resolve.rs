//! Parameter resolution.
//!
//! Walks a callable's declared parameters in order and pulls each value out of a caller-supplied
//! [`DataSource`], falling back to the declared default when the name is absent. The result is a
//! [`ResolvedCall`] whose arrangement mirrors how each parameter is passed:
//!
//! | Kind                    | Placement                      |
//! |-------------------------|--------------------------------|
//! | `PositionalOnly`        | appended to positional values  |
//! | `PositionalOrKeyword`   | inserted as a keyword value    |
//! | `KeywordOnly`           | inserted as a keyword value    |
//! | `VarPositional`         | rejected                       |
//! | `VarKeyword`            | rejected                       |
//!
//! Keys in the data source that no parameter asks for are ignored.

use dynfunc_types::{Parameter, ParameterKind, Signature};
use serde_json::Value;
use tracing::{debug, trace};

use crate::call::ResolvedCall;
use crate::callable::Callable;
use crate::error::ParameterError;
use crate::source::DataSource;

/// Resolves declared signatures against one data source.
///
/// The resolver borrows the data source and can be reused across several signatures; it keeps
/// no state between calls.
pub struct ParameterResolver<'data, D: DataSource + ?Sized> {
    data: &'data D,
}

impl<'data, D: DataSource + ?Sized> ParameterResolver<'data, D> {
    pub fn new(data: &'data D) -> Self {
        Self { data }
    }

    /// Produces the positional and keyword values needed to call something with `signature`.
    ///
    /// Parameters are processed in declared order and resolution stops at the first failure.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::UnsupportedKind`] when the signature declares a variadic parameter,
    ///   whatever the data source holds.
    /// - [`ParameterError::Missing`] when a parameter without a default has no value, carrying
    ///   the keys that were available.
    pub fn resolve(&self, signature: &Signature) -> Result<ResolvedCall, ParameterError> {
        let mut call = ResolvedCall::default();

        for parameter in signature {
            match parameter.kind {
                ParameterKind::KeywordOnly | ParameterKind::PositionalOrKeyword => {
                    let value = self.value_for(parameter)?;
                    call.insert_keyword(parameter.name.as_str(), value);
                }
                ParameterKind::PositionalOnly => {
                    let value = self.value_for(parameter)?;
                    call.push_positional(value);
                }
                ParameterKind::VarPositional | ParameterKind::VarKeyword => {
                    return Err(ParameterError::UnsupportedKind {
                        name: parameter.name.clone(),
                        kind: parameter.kind,
                    });
                }
            }
        }

        trace!(
            positional = call.positional().len(),
            keywords = call.keywords().len(),
            "resolved call arguments"
        );
        Ok(call)
    }

    /// Looks `parameter` up in the data source, then in its default.
    fn value_for(&self, parameter: &Parameter) -> Result<Value, ParameterError> {
        if let Some(value) = self.data.lookup(&parameter.name) {
            return Ok(value.clone());
        }

        match &parameter.default {
            Some(default) => {
                debug!(parameter = %parameter.name, "using declared default");
                Ok(default.clone())
            }
            None => Err(ParameterError::Missing {
                name: parameter.name.clone(),
                available: self.data.keys(),
            }),
        }
    }
}

/// Resolves the arguments `callable` needs from `data` without calling it.
///
/// # Examples
///
/// ```rust
/// use dynfunc_engine::{Function, Parameter, Signature, populate_args};
/// use indexmap::IndexMap;
/// use serde_json::{Value, json};
///
/// let signature = Signature::new(vec![
///     Parameter::positional_or_keyword("a"),
///     Parameter::positional_or_keyword("b").with_default(1),
///     Parameter::positional_or_keyword("c").with_default(2),
/// ])?;
/// let function = Function::new(signature, |_call| ());
///
/// let data: IndexMap<String, Value> = [("a".to_string(), json!(1)), ("b".to_string(), json!(3))].into_iter().collect();
/// let call = populate_args(&function, &data)?;
///
/// assert!(call.positional().is_empty());
/// assert_eq!(call.keyword("a"), Some(&json!(1)));
/// assert_eq!(call.keyword("b"), Some(&json!(3)));
/// assert_eq!(call.keyword("c"), Some(&json!(2)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn populate_args<C, D>(callable: &C, data: &D) -> Result<ResolvedCall, ParameterError>
where
    C: Callable + ?Sized,
    D: DataSource + ?Sized,
{
    ParameterResolver::new(data).resolve(callable.signature())
}
