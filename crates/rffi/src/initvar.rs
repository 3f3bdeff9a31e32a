//
// initvar.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

//! Entry points used by the host to populate the globals at startup.
//!
//! Each kind of value has a fallible Rust setter and an exported C entry
//! point. The C entry points have nobody to return an error to, so an unknown
//! index is fatal there: we report it and exit the process.
//!
//! The opaque entry point is `Call_initvar_obj`, without the `_common`
//! suffix other R implementations use for it. Hosts must bind that name.

use std::ffi::c_char;
use std::ffi::c_int;
use std::ffi::CStr;
use std::ffi::CString;

use crate::registry;
use crate::types::SEXP;
use crate::variables::Setter;
use crate::variables::Slot;
use crate::Error;
use crate::VariableIndex;

const INT_OPERATION: &str = "Call_initvar_int";
const DOUBLE_OPERATION: &str = "Call_initvar_double";
const STRING_OPERATION: &str = "Call_initvar_string";
const OPAQUE_OPERATION: &str = "Call_initvar_obj";

/// Set an integer global.
///
/// # Safety
///
/// Writes a process global. Must not race with other setters or with native
/// code reading the globals.
pub unsafe fn set_int(index: i32, value: c_int) -> crate::Result<()> {
    let (variable, slot) = lookup(INT_OPERATION, index)?;

    let Setter::Int(set) = slot.setter else {
        return Err(unknown(INT_OPERATION, index));
    };

    set(value);
    registry::mark_set(variable);

    Ok(())
}

/// Set a double global. The bit pattern is stored as is, so NaN payloads
/// such as `NA_real_` survive.
///
/// # Safety
///
/// See [set_int()].
pub unsafe fn set_double(index: i32, value: f64) -> crate::Result<()> {
    let (variable, slot) = lookup(DOUBLE_OPERATION, index)?;

    let Setter::Double(set) = slot.setter else {
        return Err(unknown(DOUBLE_OPERATION, index));
    };

    set(value);
    registry::mark_set(variable);

    Ok(())
}

/// Set a string global to a copy of `value` owned by the registry. `None`
/// clears the global to a null pointer and marks it unset again, so the
/// completeness check reports it.
///
/// The previous copy, if any, is freed. The new copy is allocated before
/// that, so it never reuses the previous address.
///
/// # Safety
///
/// See [set_int()]. In addition, native code must not hold on to the
/// previous string when a global is set a second time.
pub unsafe fn set_string(index: i32, value: Option<&CStr>) -> crate::Result<()> {
    let (variable, slot) = lookup(STRING_OPERATION, index)?;

    let Setter::String(set) = slot.setter else {
        return Err(unknown(STRING_OPERATION, index));
    };

    let copy = match value {
        Some(value) => value.to_owned().into_raw(),
        None => std::ptr::null_mut(),
    };

    let previous = set(copy);
    if !previous.is_null() {
        // Only this function ever writes string globals, so `previous`
        // comes from `CString::into_raw()`
        drop(CString::from_raw(previous));
    }

    if copy.is_null() {
        registry::mark_unset(variable);
    } else {
        registry::mark_set(variable);
    }

    Ok(())
}

/// Set an opaque global. The handle is stored as is, the registry takes no
/// ownership of the object behind it.
///
/// # Safety
///
/// See [set_int()].
pub unsafe fn set_opaque(index: i32, value: SEXP) -> crate::Result<()> {
    let (variable, slot) = lookup(OPAQUE_OPERATION, index)?;

    let Setter::Opaque(set) = slot.setter else {
        return Err(unknown(OPAQUE_OPERATION, index));
    };

    set(value);
    registry::mark_set(variable);

    Ok(())
}

fn lookup(operation: &'static str, index: i32) -> crate::Result<(VariableIndex, &'static Slot)> {
    let Some(variable) = VariableIndex::from_raw(index) else {
        return Err(unknown(operation, index));
    };

    if registry::is_ready() {
        log::warn!("`{variable}` set after the globals were frozen");
    } else {
        log::trace!("Initializing `{variable}` ({})", variable.kind());
    }

    Ok((variable, variable.slot()))
}

fn unknown(operation: &'static str, index: i32) -> Error {
    Error::UnknownIndex { operation, index }
}

/// Report an error the host can't recover from and exit.
///
/// Goes through the logger when one is installed so that embedders capture
/// it, and falls back to stderr otherwise.
pub(crate) fn fatal(err: Error) -> ! {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{err}");
        log::logger().flush();
    } else {
        eprintln!("{err}");
    }

    std::process::exit(1);
}

// ---------------------------------------------------------------------------------------
// C entry points

#[no_mangle]
pub unsafe extern "C" fn Call_initvar_int(index: c_int, value: c_int) {
    if let Err(err) = set_int(index, value) {
        fatal(err);
    }
}

#[no_mangle]
pub unsafe extern "C" fn Call_initvar_double(index: c_int, value: f64) {
    if let Err(err) = set_double(index, value) {
        fatal(err);
    }
}

/// `value` is copied, the host keeps ownership of its buffer.
#[no_mangle]
pub unsafe extern "C" fn Call_initvar_string(index: c_int, value: *const c_char) {
    let value = if value.is_null() {
        None
    } else {
        Some(CStr::from_ptr(value))
    };

    if let Err(err) = set_string(index, value) {
        fatal(err);
    }
}

#[no_mangle]
pub unsafe extern "C" fn Call_initvar_obj(index: c_int, value: SEXP) {
    if let Err(err) = set_opaque(index, value) {
        fatal(err);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::fixtures::sentinel;
    use crate::fixtures::test_lock;
    use crate::*;

    #[test]
    fn test_set_int() {
        let _lock = test_lock();

        unsafe {
            set_int(VariableIndex::R_Interactive as i32, 1).unwrap();
            set_int(VariableIndex::R_NaInt as i32, i32::MIN).unwrap();

            assert_eq!({ R_Interactive }, Rboolean_TRUE);
            assert_eq!({ R_NaInt }, i32::MIN);
        }

        assert!(has::R_Interactive());
        assert!(has::R_NaInt());
    }

    #[test]
    fn test_set_double_keeps_bit_pattern() {
        let _lock = test_lock();

        // `NA_real_` is a NaN with a low word of 1954
        let na_real = f64::from_bits(0x7FF00000000007A2);

        unsafe {
            set_double(VariableIndex::R_NaReal as i32, na_real).unwrap();
            set_double(VariableIndex::R_PosInf as i32, f64::INFINITY).unwrap();

            assert_eq!({ R_NaReal }.to_bits(), na_real.to_bits());
            assert_eq!({ R_PosInf }, f64::INFINITY);
        }
    }

    #[test]
    fn test_set_string_copies() {
        let _lock = test_lock();

        let value = CString::new("/tmp/RtmpXYZ").unwrap();

        unsafe {
            set_string(VariableIndex::R_TempDir as i32, Some(value.as_c_str())).unwrap();

            let stored = { R_TempDir };
            assert_ne!(stored as *const c_char, value.as_ptr());
            assert_eq!(CStr::from_ptr(stored), value.as_c_str());
        }

        // The copy outlives the caller's buffer
        drop(value);
        unsafe {
            assert_eq!(CStr::from_ptr({ R_TempDir }), c"/tmp/RtmpXYZ");
        }
    }

    #[test]
    fn test_set_string_twice_allocates_again() {
        let _lock = test_lock();

        unsafe {
            set_string(VariableIndex::Sys_TempDir as i32, Some(c"/tmp")).unwrap();
            let first = { Sys_TempDir };

            set_string(VariableIndex::Sys_TempDir as i32, Some(c"/var/tmp")).unwrap();
            let second = { Sys_TempDir };

            assert_ne!(first, second);
            assert_eq!(CStr::from_ptr(second), c"/var/tmp");

            set_string(VariableIndex::Sys_TempDir as i32, None).unwrap();
            assert!({ Sys_TempDir }.is_null());
        }

        // A cleared string counts as unset
        assert!(!has::Sys_TempDir());
        assert!(registry::missing().contains(&VariableIndex::Sys_TempDir));

        unsafe {
            set_string(VariableIndex::Sys_TempDir as i32, Some(c"/tmp")).unwrap();
        }
        assert!(has::Sys_TempDir());
    }

    #[test]
    fn test_set_opaque_keeps_identity() {
        let _lock = test_lock();

        let nil = sentinel(1);

        unsafe {
            set_opaque(VariableIndex::R_NilValue as i32, nil).unwrap();
            assert_eq!({ R_NilValue }, nil);
            assert_eq!({ R_NilValue }, { R_NilValue });
        }
    }

    #[test]
    fn test_unknown_index() {
        let _lock = test_lock();

        let before = unsafe { R_NaInt };

        assert_matches!(
            unsafe { set_int(9999, 1) },
            Err(Error::UnknownIndex { operation: "Call_initvar_int", index: 9999 })
        );
        assert_matches!(
            unsafe { set_double(-1, 0.0) },
            Err(Error::UnknownIndex { operation: "Call_initvar_double", index: -1 })
        );
        assert_matches!(
            unsafe { set_opaque(VariableIndex::COUNT as i32, sentinel(2)) },
            Err(Error::UnknownIndex { .. })
        );

        assert_eq!(unsafe { R_NaInt }, before);
    }

    #[test]
    fn test_kind_mismatch_is_unknown() {
        let _lock = test_lock();

        let before = unsafe { R_GlobalEnv };

        // `R_Home` is a string slot, `R_GlobalEnv` an opaque one
        let index = VariableIndex::R_Home as i32;
        assert_matches!(
            unsafe { set_int(index, 1) },
            Err(Error::UnknownIndex { operation: "Call_initvar_int", index: i }) if i == index
        );

        let index = VariableIndex::R_GlobalEnv as i32;
        assert_matches!(
            unsafe { set_string(index, Some(c"oops")) },
            Err(Error::UnknownIndex { operation: "Call_initvar_string", .. })
        );

        assert_eq!(unsafe { R_GlobalEnv }, before);
    }
}
