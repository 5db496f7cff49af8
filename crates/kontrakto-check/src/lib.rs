//! Design-by-contract wrappers for plain Rust callables.
//!
//! A contract is a predicate plus a failure message. It is attached to a
//! target by one of three wrappers:
//!
//! - [`make_precondition`] checks the arguments before the call.
//! - [`make_postcondition`] checks the return value after the call.
//! - [`make_postcondition_on_arguments`] checks the arguments after the call,
//!   for targets whose effect is mutating them.
//!
//! Each wrapper latches the process-wide switch ([`kontrakto_core::switch`])
//! when it is constructed. Built while the switch is off, a wrapper is a
//! passthrough for the rest of its life.
//!
//! Arguments travel as one value `A` (a tuple for several arguments) and are
//! passed by `&mut` so exit-on-arguments predicates see what the target did to
//! them. For methods, the receiver is simply the first tuple element.
//!
//! ```
//! use kontrakto_check::{make_precondition, scoped, Checked, ContractKind};
//!
//! let _on = scoped(true);
//! let mut add = make_precondition(
//!     |(a, b): &(i32, i32)| *a > 0 && *b > 0,
//!     "a and b must be positive",
//! )
//! .wrap(|(a, b): &mut (i32, i32)| *a + *b);
//!
//! assert_eq!(add.invoke((1, 2)), Ok(3));
//! assert_eq!(add.invoke((-11, 2)).unwrap_err().kind(), ContractKind::EntryCheck);
//! ```

pub mod callable;
pub mod contracts;

pub use callable::{named, Checked, Named};
pub use contracts::{
    make_postcondition, make_postcondition_on_arguments, make_precondition,
    ArgumentPostcondition, Postcondition, PostArgChecked, PostChecked, PreChecked, Precondition,
};
pub use kontrakto_core::{
    disable, enable, init_from_env, is_enabled, scoped, set_contracts_enabled, ContractConfig,
    ContractError, ContractKind, SwitchGuard,
};
