//! The capability a target must expose to be invoked from a data mapping.

use std::fmt;
use std::sync::Arc;

use dynfunc_types::Signature;

use crate::call::ResolvedCall;

/// Something that declares its parameters and can be called with a [`ResolvedCall`].
///
/// Fallible targets declare `type Output = Result<T, E>`; their errors pass through invocation
/// untouched.
pub trait Callable {
    type Output;

    /// Declared parameters, in order.
    fn signature(&self) -> &Signature;

    fn call(&self, call: ResolvedCall) -> Self::Output;
}

impl<C: Callable + ?Sized> Callable for &C {
    type Output = C::Output;

    fn signature(&self) -> &Signature {
        (**self).signature()
    }

    fn call(&self, call: ResolvedCall) -> Self::Output {
        (**self).call(call)
    }
}

impl<C: Callable + ?Sized> Callable for Box<C> {
    type Output = C::Output;

    fn signature(&self) -> &Signature {
        (**self).signature()
    }

    fn call(&self, call: ResolvedCall) -> Self::Output {
        (**self).call(call)
    }
}

impl<C: Callable + ?Sized> Callable for Arc<C> {
    type Output = C::Output;

    fn signature(&self) -> &Signature {
        (**self).signature()
    }

    fn call(&self, call: ResolvedCall) -> Self::Output {
        (**self).call(call)
    }
}

/// A closure paired with the signature it was declared with.
///
/// ```rust
/// use dynfunc_engine::{Callable, Function, Parameter, ResolvedCall, Signature};
///
/// let square = Function::new(Signature::new(vec![Parameter::positional_or_keyword("n")])?, |call: ResolvedCall| {
///     let n = call.keyword_as::<i64>("n").ok().flatten().unwrap_or_default();
///     n * n
/// });
/// assert_eq!(square.signature().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Function<F> {
    signature: Signature,
    function: F,
}

impl<F> Function<F> {
    pub fn new<R>(signature: Signature, function: F) -> Self
    where
        F: Fn(ResolvedCall) -> R,
    {
        Self { signature, function }
    }

    pub fn into_inner(self) -> (Signature, F) {
        (self.signature, self.function)
    }
}

impl<F, R> Callable for Function<F>
where
    F: Fn(ResolvedCall) -> R,
{
    type Output = R;

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, call: ResolvedCall) -> R {
        (self.function)(call)
    }
}

impl<F> fmt::Debug for Function<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("signature", &self.signature).finish_non_exhaustive()
    }
}
