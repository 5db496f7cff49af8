//! Exit checks over the value the target returned.

use std::fmt;

use kontrakto_core::{ContractError, ContractKind};

use super::Clause;
use crate::callable::Checked;

/// A postcondition on the return value, waiting to be applied to a target.
#[derive(Clone)]
pub struct Postcondition<P> {
    clause: Clause<P>,
}

/// Builds a postcondition from a predicate over `&R` and its failure message.
///
/// The contract switch is read here, once.
pub fn make_postcondition<P>(predicate: P, message: impl Into<String>) -> Postcondition<P> {
    Postcondition {
        clause: Clause::latch(ContractKind::ExitResultCheck, predicate, message.into()),
    }
}

impl<P> Postcondition<P> {
    pub fn is_enabled(&self) -> bool {
        self.clause.enabled
    }

    pub fn message(&self) -> &str {
        &self.clause.message
    }

    pub fn wrap<T>(self, target: T) -> PostChecked<T, P> {
        PostChecked {
            target,
            clause: self.clause,
        }
    }
}

impl<P> fmt::Debug for Postcondition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Postcondition").field(&self.clause).finish()
    }
}

/// A target whose return value is checked after every call.
#[derive(Clone)]
pub struct PostChecked<T, P> {
    target: T,
    clause: Clause<P>,
}

impl<T, P> PostChecked<T, P> {
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<A, T, P> Checked<A> for PostChecked<T, P>
where
    A: ?Sized,
    T: Checked<A>,
    P: Fn(&<T as Checked<A>>::Output) -> bool,
{
    type Output = T::Output;

    /// The target always runs; on a failed check its result is dropped but
    /// its side effects stand.
    fn call_with(&mut self, args: &mut A) -> Result<Self::Output, ContractError> {
        let result = self.target.call_with(args)?;
        if self.clause.enabled && !(self.clause.predicate)(&result) {
            return Err(self.clause.violation(Checked::<A>::name(&self.target)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        Checked::<A>::name(&self.target)
    }
}
