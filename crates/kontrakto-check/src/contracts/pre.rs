//! Entry checks: a predicate over the arguments, evaluated before the target.

use std::fmt;

use kontrakto_core::{ContractError, ContractKind};

use super::Clause;
use crate::callable::Checked;

/// A precondition waiting to be applied to a target with [`wrap`](Self::wrap).
#[derive(Clone)]
pub struct Precondition<P> {
    clause: Clause<P>,
}

/// Builds a precondition from a predicate over `&A` and its failure message.
///
/// The contract switch is read here, once. If it is off, every target this
/// precondition wraps is called straight through.
pub fn make_precondition<P>(predicate: P, message: impl Into<String>) -> Precondition<P> {
    Precondition {
        clause: Clause::latch(ContractKind::EntryCheck, predicate, message.into()),
    }
}

impl<P> Precondition<P> {
    /// Whether the switch was on when this precondition was built.
    pub fn is_enabled(&self) -> bool {
        self.clause.enabled
    }

    pub fn message(&self) -> &str {
        &self.clause.message
    }

    pub fn wrap<T>(self, target: T) -> PreChecked<T, P> {
        PreChecked {
            target,
            clause: self.clause,
        }
    }
}

impl<P> fmt::Debug for Precondition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Precondition").field(&self.clause).finish()
    }
}

/// A target guarded by a precondition.
#[derive(Clone)]
pub struct PreChecked<T, P> {
    target: T,
    clause: Clause<P>,
}

impl<T, P> PreChecked<T, P> {
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<A, T, P> Checked<A> for PreChecked<T, P>
where
    A: ?Sized,
    T: Checked<A>,
    P: Fn(&A) -> bool,
{
    type Output = T::Output;

    fn call_with(&mut self, args: &mut A) -> Result<Self::Output, ContractError> {
        if self.clause.enabled && !(self.clause.predicate)(&*args) {
            return Err(self.clause.violation(Checked::<A>::name(&self.target)));
        }
        self.target.call_with(args)
    }

    fn name(&self) -> &str {
        Checked::<A>::name(&self.target)
    }
}
