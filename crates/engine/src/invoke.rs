//! Resolve-then-call composition.

use crate::callable::Callable;
use crate::error::ParameterError;
use crate::resolve::populate_args;
use crate::source::DataSource;

/// Calls `callable` with the values it declares, taken from `data`.
///
/// Resolution failures are returned as [`ParameterError`]; whatever the callable itself returns,
/// including its own errors, comes back unchanged in `Ok`.
///
/// # Examples
///
/// ```rust
/// use dynfunc_engine::{Function, Parameter, ParameterError, ResolvedCall, Signature, call_with_args};
/// use indexmap::IndexMap;
/// use serde_json::{Value, json};
///
/// let echo = Function::new(Signature::new(vec![Parameter::keyword_only("param")])?, |mut call: ResolvedCall| {
///     call.take_keyword("param")
/// });
///
/// let mut data = IndexMap::<String, Value>::new();
/// data.insert("param".into(), json!("foo"));
/// assert_eq!(call_with_args(&echo, &data)?, Some(json!("foo")));
///
/// let mut other = IndexMap::<String, Value>::new();
/// other.insert("other".into(), json!("foo"));
/// assert_eq!(
///     call_with_args(&echo, &other),
///     Err(ParameterError::Missing { name: "param".into(), available: vec!["other".into()] })
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn call_with_args<C, D>(callable: &C, data: &D) -> Result<C::Output, ParameterError>
where
    C: Callable + ?Sized,
    D: DataSource + ?Sized,
{
    let call = populate_args(callable, data)?;
    Ok(callable.call(call))
}

/// Method form of [`call_with_args`], available on every [`Callable`].
pub trait CallableExt: Callable {
    fn call_with_args<D: DataSource + ?Sized>(&self, data: &D) -> Result<Self::Output, ParameterError> {
        call_with_args(self, data)
    }
}

impl<C: Callable + ?Sized> CallableExt for C {}
