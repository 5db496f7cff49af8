//! The callable abstraction shared by plain targets and contract wrappers.
//!
//! Any `FnMut(&mut A) -> R` is a [`Checked`] callable that never fails. The
//! wrappers in [`crate::contracts`] are also [`Checked`], which is what lets
//! them nest.

use std::borrow::Cow;

use kontrakto_core::ContractError;

/// A callable over arguments `A` that may fail with a [`ContractError`].
pub trait Checked<A: ?Sized> {
    /// What the underlying target returns.
    type Output;

    /// Calls with borrowed arguments, leaving any mutation visible to the
    /// caller afterwards.
    fn call_with(&mut self, args: &mut A) -> Result<Self::Output, ContractError>;

    /// Calls with owned arguments.
    fn invoke(&mut self, mut args: A) -> Result<Self::Output, ContractError>
    where
        A: Sized,
    {
        self.call_with(&mut args)
    }

    /// Name of the target, kept across wrapping.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F, A, R> Checked<A> for F
where
    A: ?Sized,
    F: FnMut(&mut A) -> R,
{
    type Output = R;

    #[inline]
    fn call_with(&mut self, args: &mut A) -> Result<R, ContractError> {
        Ok(self(args))
    }
}

/// A target with an explicit name.
#[derive(Debug, Clone)]
pub struct Named<T> {
    name: Cow<'static, str>,
    target: T,
}

/// Attaches `name` to `target`; wrappers applied later report it from
/// [`Checked::name`].
pub fn named<T>(name: impl Into<Cow<'static, str>>, target: T) -> Named<T> {
    Named {
        name: name.into(),
        target,
    }
}

impl<T> Named<T> {
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<A, T> Checked<A> for Named<T>
where
    A: ?Sized,
    T: Checked<A>,
{
    type Output = T::Output;

    #[inline]
    fn call_with(&mut self, args: &mut A) -> Result<Self::Output, ContractError> {
        self.target.call_with(args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
