// src/exit.rs
//! Process exit codes for `wordgraph`. Query outcomes get their own codes so
//! scripts can tell "unknown word" from "nothing connects them".

use std::process::Termination;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WordGraphExit {
    /// Command completed.
    Success = 0,
    /// I/O, config or usage failure.
    Error = 1,
    /// Query words not in the graph, or a walk on an empty graph.
    InvalidInput = 2,
    /// Words are known but no bridge word or path connects them.
    NotFound = 3,
}

impl WordGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code for a query that ended in `err`.
    #[must_use]
    pub fn for_error(err: &GraphError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else if err.is_query_outcome() {
            Self::InvalidInput
        } else {
            Self::Error
        }
    }
}

impl Termination for WordGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
