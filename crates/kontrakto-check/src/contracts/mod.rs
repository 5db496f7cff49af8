//! Contract wrappers: a predicate and a failure message, latched against the
//! contract switch, applied around a [`Checked`](crate::Checked) target.
//!
//! Entry checks run before the target, exit checks after it. Nesting wrappers
//! composes them: entry checks run outside-in, exit checks inside-out, and a
//! failure raised by an inner wrapper passes through the outer ones untouched.

mod post;
mod post_arg;
mod pre;

use std::fmt;

use kontrakto_core::{switch, ContractError, ContractKind};

pub use post::{make_postcondition, PostChecked, Postcondition};
pub use post_arg::{make_postcondition_on_arguments, ArgumentPostcondition, PostArgChecked};
pub use pre::{make_precondition, PreChecked, Precondition};

/// Predicate, message and latched switch state shared by all contract kinds.
#[derive(Clone)]
struct Clause<P> {
    kind: ContractKind,
    predicate: P,
    message: String,
    /// Switch value at construction; never re-read.
    enabled: bool,
}

impl<P> Clause<P> {
    fn latch(kind: ContractKind, predicate: P, message: String) -> Self {
        let enabled = switch::is_enabled();
        tracing::debug!(kind = %kind, enabled, "contract constructed");
        Clause {
            kind,
            predicate,
            message,
            enabled,
        }
    }

    fn violation(&self, callable: &str) -> ContractError {
        tracing::debug!(
            kind = %self.kind,
            callable,
            message = %self.message,
            "contract violated"
        );
        ContractError::new(self.kind, self.message.clone())
    }
}

impl<P> fmt::Debug for Clause<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
