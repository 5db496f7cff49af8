//! Process-wide contract switch.
//!
//! Wrappers read the switch once, when they are constructed, and keep that
//! answer for their whole lifetime. Flipping the switch only affects wrappers
//! built afterwards. The switch starts out disabled.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

static CONTRACTS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Serializes [`scoped`] overrides across threads.
static SCOPE_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    /// Set while this thread holds a [`SwitchGuard`].
    static HOLDS_GUARD: Cell<bool> = const { Cell::new(false) };
}

/// Whether contract wrappers constructed now will check anything.
pub fn is_enabled() -> bool {
    CONTRACTS_ENABLED.load(Ordering::Relaxed)
}

pub fn enable() {
    set_contracts_enabled(true);
}

pub fn disable() {
    set_contracts_enabled(false);
}

pub fn set_contracts_enabled(enabled: bool) {
    CONTRACTS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Holds the switch at a fixed value until dropped, then restores the value
/// it had before.
///
/// Only one guard exists at a time across the process; a call to [`scoped`]
/// from another thread blocks until the first guard is dropped. Nesting
/// guards on one thread panics.
#[must_use = "the switch is restored as soon as the guard is dropped"]
pub struct SwitchGuard {
    previous: bool,
    _lock: MutexGuard<'static, ()>,
}

impl SwitchGuard {
    /// The switch value that will be restored on drop.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl Drop for SwitchGuard {
    fn drop(&mut self) {
        CONTRACTS_ENABLED.store(self.previous, Ordering::Relaxed);
        HOLDS_GUARD.with(|held| held.set(false));
    }
}

/// Sets the switch to `enabled` for the lifetime of the returned guard.
///
/// A lock poisoned by a panicking holder is taken over rather than reported;
/// the guard's drop has already restored the switch by then.
///
/// # Panics
///
/// Panics if the calling thread already holds a guard.
pub fn scoped(enabled: bool) -> SwitchGuard {
    if HOLDS_GUARD.with(Cell::get) {
        panic!("contract switch is already scoped on this thread; drop the existing guard first");
    }
    let lock = SCOPE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    HOLDS_GUARD.with(|held| held.set(true));
    let previous = CONTRACTS_ENABLED.swap(enabled, Ordering::Relaxed);
    SwitchGuard {
        previous,
        _lock: lock,
    }
}
