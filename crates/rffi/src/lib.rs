//
// lib.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

pub mod error;
pub mod initvar;
mod r;
pub mod registry;
pub mod types;
mod variables;

#[cfg(test)]
mod fixtures;

pub use error::Error;
pub type Result<T> = std::result::Result<T, error::Error>;

/// `has::` helpers reporting whether the host has set a given slot,
/// i.e. `rffi::has::R_NilValue()`.
pub mod has {
    pub use crate::r::variables_has::*;
}

// Expose all of the globals and the index schema at the top level
pub use crate::r::*;
pub use crate::variables::VariableKind;
