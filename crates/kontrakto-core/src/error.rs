//! Contract failure types for kontrakto-core.
//!
//! Uses `thiserror` so a broken contract surfaces as an ordinary, matchable
//! error value. Only a predicate that *returns* `false` produces one of these;
//! a predicate or target that panics unwinds straight past the wrapper.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the three contract checks failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// A precondition checked over the arguments before the call.
    EntryCheck,
    /// A postcondition checked over the return value.
    ExitResultCheck,
    /// A postcondition checked over the arguments after the call returned.
    ExitArgumentsCheck,
}

impl ContractKind {
    /// Short tag used as the prefix of a [`ContractError`]'s display form.
    pub fn tag(self) -> &'static str {
        match self {
            ContractKind::EntryCheck => "@pre",
            ContractKind::ExitResultCheck => "@post",
            ContractKind::ExitArgumentsCheck => "@post_arg",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A violated contract: which check failed and the message bound to it.
///
/// Displays as `"<tag>: <message>"`, e.g. `"@pre: a and b must be positive"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct ContractError {
    kind: ContractKind,
    message: String,
}

impl ContractError {
    pub fn new(kind: ContractKind, message: impl Into<String>) -> Self {
        ContractError {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// The failure message exactly as supplied when the contract was built.
    pub fn message(&self) -> &str {
        &self.message
    }
}
