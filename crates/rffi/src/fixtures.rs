//
// fixtures.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::types::SEXP;

// The globals are process wide and unit tests run on parallel threads, so
// tests touching them are serialised on this lock.
static TEST_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn test_lock() -> MutexGuard<'static, ()> {
    // A failed test poisons the lock, that shouldn't fail the others
    TEST_LOCK.lock().unwrap_or_else(|err| err.into_inner())
}

/// A recognisable handle that is never dereferenced.
pub(crate) fn sentinel(id: usize) -> SEXP {
    (0x1000 * id) as SEXP
}
