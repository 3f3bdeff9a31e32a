//
// r.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::ffi::c_char;
use std::ffi::c_int;

pub use crate::types::*;
use crate::variables;

// ---------------------------------------------------------------------------------------
// Globals set by the host
//
// The order of declarations is the index schema shared with the host. Only
// ever append, reordering breaks every host built against the current order.

variables::generate! {
    /// Owned copy of `R.home()`
    string R_Home: *mut c_char;
    string R_TempDir: *mut c_char;
    string Sys_TempDir: *mut c_char;

    opaque R_GlobalEnv: SEXP;
    opaque R_BaseEnv: SEXP;
    opaque R_BaseNamespace: SEXP;
    opaque R_NamespaceRegistry: SEXP;

    /// Set to `TRUE` when the host runs an interactive session
    int R_Interactive: Rboolean;

    opaque R_NilValue: SEXP;
    opaque R_UnboundValue: SEXP;
    #[symbol = ""]
    opaque R_MissingArg: SEXP;
    opaque R_EmptyEnv: SEXP;
    opaque R_Srcref: SEXP;

    // -----------------------------------------------------------------------------------
    // Symbols

    #[symbol = "[["]
    opaque R_Bracket2Symbol: SEXP;
    #[symbol = "["]
    opaque R_BracketSymbol: SEXP;
    #[symbol = "{"]
    opaque R_BraceSymbol: SEXP;
    #[symbol = "::"]
    opaque R_DoubleColonSymbol: SEXP;
    #[symbol = "class"]
    opaque R_ClassSymbol: SEXP;
    #[symbol = ".Device"]
    opaque R_DeviceSymbol: SEXP;
    #[symbol = ".Devices"]
    opaque R_DevicesSymbol: SEXP;
    #[symbol = "dimnames"]
    opaque R_DimNamesSymbol: SEXP;
    #[symbol = "dim"]
    opaque R_DimSymbol: SEXP;
    #[symbol = "$"]
    opaque R_DollarSymbol: SEXP;
    #[symbol = "..."]
    opaque R_DotsSymbol: SEXP;
    #[symbol = "drop"]
    opaque R_DropSymbol: SEXP;
    #[symbol = ".Last.value"]
    opaque R_LastvalueSymbol: SEXP;
    #[symbol = "levels"]
    opaque R_LevelsSymbol: SEXP;
    #[symbol = "mode"]
    opaque R_ModeSymbol: SEXP;
    #[symbol = "name"]
    opaque R_NameSymbol: SEXP;
    #[symbol = "names"]
    opaque R_NamesSymbol: SEXP;
    #[symbol = "na.rm"]
    opaque R_NaRmSymbol: SEXP;
    #[symbol = "package"]
    opaque R_PackageSymbol: SEXP;
    #[symbol = "quote"]
    opaque R_QuoteSymbol: SEXP;
    #[symbol = "row.names"]
    opaque R_RowNamesSymbol: SEXP;
    #[symbol = ".Random.seed"]
    opaque R_SeedsSymbol: SEXP;
    #[symbol = "source"]
    opaque R_SourceSymbol: SEXP;
    #[symbol = "tsp"]
    opaque R_TspSymbol: SEXP;
    #[symbol = ".defined"]
    opaque R_dot_defined: SEXP;
    #[symbol = ".Method"]
    opaque R_dot_Method: SEXP;
    #[symbol = ".target"]
    opaque R_dot_target: SEXP;
    #[symbol = ".packageName"]
    opaque R_dot_packageName: SEXP;
    #[symbol = ".Generic"]
    opaque R_dot_Generic: SEXP;
    #[symbol = "srcref"]
    opaque R_SrcrefSymbol: SEXP;
    #[symbol = "srcfile"]
    opaque R_SrcfileSymbol: SEXP;

    // -----------------------------------------------------------------------------------
    // Missing values and constants

    opaque R_NaString: SEXP;

    /// The host passes R's own NaN bit pattern, which we store untouched
    double R_NaN: f64;
    double R_PosInf: f64;
    double R_NegInf: f64;
    /// `NA_real_`, a NaN with a payload of 1954
    double R_NaReal: f64;
    /// `NA_integer_`, i.e. `INT_MIN`
    int R_NaInt: c_int;

    opaque R_TrueValue: SEXP;
    opaque R_FalseValue: SEXP;
    opaque R_LogicalNAValue: SEXP;
    opaque R_BlankString: SEXP;
    opaque R_BlankScalarString: SEXP;

    #[symbol = "base"]
    opaque R_BaseSymbol: SEXP;
    #[symbol = ".__NAMESPACE__."]
    opaque R_NamespaceEnvSymbol: SEXP;
    #[symbol = ""]
    opaque R_RestartToken: SEXP;
    #[symbol = "sort.list"]
    opaque R_SortListSymbol: SEXP;
    #[symbol = "spec"]
    opaque R_SpecSymbol: SEXP;
    #[symbol = ":::"]
    opaque R_TripleColonSymbol: SEXP;
    #[symbol = "previous"]
    opaque R_PreviousSymbol: SEXP;
}

// ---------------------------------------------------------------------------------------
// Fixed globals
//
// Native packages link against these, but the host never sets them.

#[no_mangle]
pub static mut R_interrupts_suspended: Rboolean = Rboolean_FALSE;

#[no_mangle]
pub static mut R_interrupts_pending: c_int = 0;

#[no_mangle]
pub static mut R_Visible: Rboolean = Rboolean_FALSE;

#[no_mangle]
pub static mut mbcslocale: Rboolean = Rboolean_FALSE;

#[no_mangle]
pub static mut utf8locale: Rboolean = Rboolean_FALSE;

#[no_mangle]
pub static mut latin1locale: Rboolean = Rboolean_FALSE;

#[no_mangle]
pub static mut useaqua: Rboolean = Rboolean_FALSE;

/// Decimal separator used by `formatReal()` and friends. Points to static
/// memory, must not be written through.
#[no_mangle]
pub static mut OutDec: *mut c_char = c".".as_ptr() as *mut c_char;

#[no_mangle]
pub static mut R_dec_min_exponent: c_int = -308;

#[no_mangle]
pub static mut max_contour_segments: c_int = 25000;
