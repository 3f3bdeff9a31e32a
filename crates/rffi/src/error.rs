//
// error.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::fmt;

use crate::VariableIndex;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The host passed an index we don't know for this kind of value. This
    /// means the host and the registry disagree on the schema.
    UnknownIndex {
        operation: &'static str,
        index: i32,
    },
    /// Some globals were never set by the host.
    Incomplete {
        missing: Vec<VariableIndex>,
    },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownIndex { operation, index } => {
                write!(f, "{operation}: unimplemented index {index}")
            },

            Error::Incomplete { missing } => {
                let names: Vec<&str> = missing.iter().map(|x| x.name()).collect();
                write!(
                    f,
                    "{} global(s) were not initialized: {}",
                    missing.len(),
                    names.join(", ")
                )
            },
        }
    }
}
