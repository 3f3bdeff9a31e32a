//
// types.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

/// Opaque R object. We never look inside, we only hand out the pointers the
/// host gave us.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SEXPREC {
    _unused: [u8; 0],
}
pub type SEXP = *mut SEXPREC;

pub type Rboolean = u32;
pub const Rboolean_FALSE: Rboolean = 0;
pub const Rboolean_TRUE: Rboolean = 1;
