//
// registry.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

//! Tracks which globals the host has set, and whether it has declared
//! initialization complete.
//!
//! The host is trusted to set each global once before native code runs. We
//! don't enforce that, but `freeze()` lets it check that nothing was missed
//! and gives it a release point to publish the globals to other threads.

use std::ffi::c_int;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::initvar;
use crate::Error;
use crate::VariableIndex;

static SET: [AtomicBool; VariableIndex::COUNT] =
    [const { AtomicBool::new(false) }; VariableIndex::COUNT];

static READY: AtomicBool = AtomicBool::new(false);

pub(crate) fn mark_set(index: VariableIndex) {
    SET[index as usize].store(true, Ordering::Relaxed);
}

pub(crate) fn mark_unset(index: VariableIndex) {
    SET[index as usize].store(false, Ordering::Relaxed);
}

/// Whether the host has set `index` to a value. String globals cleared to
/// null count as unset.
pub fn is_set(index: VariableIndex) -> bool {
    SET[index as usize].load(Ordering::Relaxed)
}

/// Globals the host has not set yet, in index order.
pub fn missing() -> Vec<VariableIndex> {
    VariableIndex::ALL
        .into_iter()
        .filter(|index| !is_set(*index))
        .collect()
}

pub fn check_complete() -> crate::Result<()> {
    let missing = missing();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Incomplete { missing })
    }
}

/// Declare initialization complete.
///
/// Fails if any global is still unset, in which case the registry stays
/// unfrozen and the host may set the missing globals and try again.
pub fn freeze() -> crate::Result<()> {
    check_complete()?;

    READY.store(true, Ordering::Release);
    log::info!("Initialized {} R globals", VariableIndex::COUNT);

    Ok(())
}

/// Whether `freeze()` has succeeded. Threads that observe `true` also
/// observe every global written before the freeze.
pub fn is_ready() -> bool {
    READY.load(Ordering::Acquire)
}

/// Returns 1 once every global has been set, 0 otherwise. The missing
/// globals are logged, the host decides whether that is fatal.
#[no_mangle]
pub extern "C" fn Call_initvar_done() -> c_int {
    match freeze() {
        Ok(()) => 1,
        Err(err) => {
            log::error!("{err}");
            0
        },
    }
}

/// Like `Call_initvar_done()` but exits the process when a global is
/// missing.
#[no_mangle]
pub extern "C" fn Call_initvar_done_or_exit() {
    if let Err(err) = freeze() {
        initvar::fatal(err);
    }
}
