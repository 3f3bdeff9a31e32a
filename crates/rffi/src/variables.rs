//
// variables.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::ffi::c_char;
use std::ffi::c_int;

use strum_macros::Display;
use strum_macros::IntoStaticStr;

use crate::types::SEXP;

/// The kind of value a slot holds. Each kind has its own setter entry point
/// because the host passes raw values of different widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum VariableKind {
    Int,
    Double,
    String,
    Opaque,
}

/// Typed writer for a single global. String writers return the previous
/// pointer so the caller can release it.
#[derive(Clone, Copy)]
pub(crate) enum Setter {
    Int(unsafe fn(c_int)),
    Double(unsafe fn(f64)),
    String(unsafe fn(*mut c_char) -> *mut c_char),
    Opaque(unsafe fn(SEXP)),
}

pub(crate) struct Slot {
    pub(crate) name: &'static str,
    pub(crate) kind: VariableKind,
    pub(crate) symbol: Option<&'static str>,
    pub(crate) setter: Setter,
}

macro_rules! generate {
    (@kind int) => ($crate::variables::VariableKind::Int);
    (@kind double) => ($crate::variables::VariableKind::Double);
    (@kind string) => ($crate::variables::VariableKind::String);
    (@kind opaque) => ($crate::variables::VariableKind::Opaque);

    (@default int) => (0);
    (@default double) => (0.0);
    (@default string) => (std::ptr::null_mut());
    (@default opaque) => (std::ptr::null_mut());

    (@symbol) => (None);
    (@symbol $symbol:literal) => (Some($symbol));

    (@setter int $name:ident: $ty:ty) => ({
        #[allow(clippy::unnecessary_cast)]
        unsafe fn set(value: std::ffi::c_int) {
            $name = value as $ty;
        }
        $crate::variables::Setter::Int(set)
    });
    (@setter double $name:ident: $ty:ty) => ({
        unsafe fn set(value: f64) {
            $name = value;
        }
        $crate::variables::Setter::Double(set)
    });
    (@setter string $name:ident: $ty:ty) => ({
        unsafe fn set(value: *mut std::ffi::c_char) -> *mut std::ffi::c_char {
            let previous = $name;
            $name = value;
            previous
        }
        $crate::variables::Setter::String(set)
    });
    (@setter opaque $name:ident: $ty:ty) => ({
        unsafe fn set(value: $crate::types::SEXP) {
            $name = value;
        }
        $crate::variables::Setter::Opaque(set)
    });

    (
        $(
            $(#[doc=$doc:expr])*
            $(#[symbol=$symbol:literal])?
            $kind:ident $name:ident: $ty:ty;
        )+
    ) => (
        // Define the exported globals, zero-initialised until the host
        // sets them. Native code reads these directly by symbol name.
        $(
            $(#[doc=$doc])*
            #[no_mangle]
            pub static mut $name: $ty = $crate::variables::generate!(@default $kind);
        )+

        /// Dense index of every global, shared with the host. Discriminants
        /// follow declaration order, starting at 0.
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum VariableIndex {
            $($name,)+
        }

        impl VariableIndex {
            pub const COUNT: usize = [$(stringify!($name)),+].len();

            pub const ALL: [VariableIndex; VariableIndex::COUNT] = [
                $(VariableIndex::$name,)+
            ];

            /// Maps a raw host index back to a slot, `None` when out of range.
            pub fn from_raw(index: i32) -> Option<Self> {
                let index = usize::try_from(index).ok()?;
                Self::ALL.get(index).copied()
            }

            pub fn name(self) -> &'static str {
                self.slot().name
            }

            pub fn kind(self) -> $crate::variables::VariableKind {
                self.slot().kind
            }

            /// Name of the R symbol this slot is expected to hold, if it is
            /// a symbol slot.
            pub fn symbol(self) -> Option<&'static str> {
                self.slot().symbol
            }

            pub(crate) fn slot(self) -> &'static $crate::variables::Slot {
                &SLOTS[self as usize]
            }
        }

        impl std::fmt::Display for VariableIndex {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        // The dispatch table, in index order
        static SLOTS: [$crate::variables::Slot; VariableIndex::COUNT] = [
            $(
                $crate::variables::Slot {
                    name: stringify!($name),
                    kind: $crate::variables::generate!(@kind $kind),
                    symbol: $crate::variables::generate!(@symbol $($symbol)?),
                    setter: $crate::variables::generate!(@setter $kind $name: $ty),
                },
            )+
        ];

        // Make `has::` helpers for each global.
        // i.e. `rffi::has::R_NilValue()`.
        pub(super) mod variables_has {
            $(
                $(#[doc=$doc])*
                pub fn $name() -> bool {
                    $crate::registry::is_set(super::VariableIndex::$name)
                }
            )+
        }
    );
}

pub(crate) use generate;
