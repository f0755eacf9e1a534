//! Crashes: the ways a Nock reduction can fail.
//!
//! Nock has no recovery. Any crash ends the evaluation that raised it and
//! is handed back to the caller unchanged.

use thiserror::Error;

use crate::eval::Revision;
use crate::noun::{Noun, NounKind};

/// A failed reduction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Crash {
    /// An atom was required and a cell was found, or the reverse.
    #[error("type mismatch: expected {expected}, found {} `{found}`", .found.kind())]
    TypeMismatch { expected: NounKind, found: Noun },

    /// The axis walks off the tree (or is 0).
    #[error("axis {axis} is out of range")]
    AddressOutOfRange { axis: u64 },

    /// The formula names an opcode the revision does not define.
    #[error("invalid opcode {opcode} for Nock {revision}")]
    InvalidOpcode { opcode: u64, revision: Revision },

    /// Increment past the largest representable atom.
    #[error("atom overflow: cannot increment {value}")]
    AtomOverflow { value: u64 },
}

impl Crash {
    pub(crate) fn expected(expected: NounKind, found: &Noun) -> Self {
        Crash::TypeMismatch {
            expected,
            found: found.clone(),
        }
    }
}
