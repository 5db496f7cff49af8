//! Exit checks over the arguments, for targets whose effect is mutating them.
//!
//! The predicate sees the very bindings the target was handed, after the
//! target has returned. Nothing is snapshotted before the call and the target
//! is never run twice.

use std::fmt;

use kontrakto_core::{ContractError, ContractKind};

use super::Clause;
use crate::callable::Checked;

/// A postcondition on the arguments, waiting to be applied to a target.
#[derive(Clone)]
pub struct ArgumentPostcondition<P> {
    clause: Clause<P>,
}

/// Builds a postcondition from a predicate over `&A` (observed after the
/// call) and its failure message.
///
/// The contract switch is read here, once.
pub fn make_postcondition_on_arguments<P>(
    predicate: P,
    message: impl Into<String>,
) -> ArgumentPostcondition<P> {
    ArgumentPostcondition {
        clause: Clause::latch(ContractKind::ExitArgumentsCheck, predicate, message.into()),
    }
}

impl<P> ArgumentPostcondition<P> {
    pub fn is_enabled(&self) -> bool {
        self.clause.enabled
    }

    pub fn message(&self) -> &str {
        &self.clause.message
    }

    pub fn wrap<T>(self, target: T) -> PostArgChecked<T, P> {
        PostArgChecked {
            target,
            clause: self.clause,
        }
    }
}

impl<P> fmt::Debug for ArgumentPostcondition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArgumentPostcondition")
            .field(&self.clause)
            .finish()
    }
}

/// A target whose arguments are checked after every call.
#[derive(Clone)]
pub struct PostArgChecked<T, P> {
    target: T,
    clause: Clause<P>,
}

impl<T, P> PostArgChecked<T, P> {
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<A, T, P> Checked<A> for PostArgChecked<T, P>
where
    A: ?Sized,
    T: Checked<A>,
    P: Fn(&A) -> bool,
{
    type Output = T::Output;

    fn call_with(&mut self, args: &mut A) -> Result<Self::Output, ContractError> {
        let result = self.target.call_with(args)?;
        if self.clause.enabled && !(self.clause.predicate)(&*args) {
            return Err(self.clause.violation(Checked::<A>::name(&self.target)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        Checked::<A>::name(&self.target)
    }
}
