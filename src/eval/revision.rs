use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A published revision of Nock.
///
/// Nock versions count down towards a final, frozen 0K. The lowest version
/// number is the newest revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Revision {
    /// Nock 4K: opcodes 0–11. Opcode 10 edits a tree, 11 is the hint.
    Nock4,
    /// Nock 5K: opcodes 0–10. Opcode 10 is the hint.
    Nock5,
}

impl Revision {
    /// Every supported revision, newest first.
    pub const ALL: [Revision; 2] = [Revision::Nock4, Revision::Nock5];

    /// The revision `nock()` runs: the lowest version number available.
    pub const CURRENT: Revision = Revision::Nock4;

    pub fn version(self) -> u32 {
        match self {
            Revision::Nock4 => 4,
            Revision::Nock5 => 5,
        }
    }

    /// Highest opcode the revision defines.
    pub fn max_opcode(self) -> u64 {
        match self {
            Revision::Nock4 => 11,
            Revision::Nock5 => 10,
        }
    }

    /// Decode an opcode atom. `None` for opcodes the revision lacks.
    pub fn opcode(self, atom: u64) -> Option<Opcode> {
        let op = match atom {
            0 => Opcode::Slot,
            1 => Opcode::Constant,
            2 => Opcode::Evaluate,
            3 => Opcode::CellTest,
            4 => Opcode::Increment,
            5 => Opcode::Equals,
            6 => Opcode::Branch,
            7 => Opcode::Compose,
            8 => Opcode::Push,
            9 => Opcode::Invoke,
            10 => match self {
                Revision::Nock4 => Opcode::Edit,
                Revision::Nock5 => Opcode::Hint,
            },
            11 if self == Revision::Nock4 => Opcode::Hint,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.version())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown Nock revision '{0}' (expected 4, 5 or current)")]
pub struct UnknownRevision(pub String);

impl FromStr for Revision {
    type Err = UnknownRevision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_prefix("nock").unwrap_or(&key);
        let key = key.trim_start_matches(|c: char| c == ' ' || c == '-' || c == '_');
        let key = key.strip_suffix('k').unwrap_or(key);
        match key {
            "4" => Ok(Revision::Nock4),
            "5" => Ok(Revision::Nock5),
            "current" | "latest" => Ok(Revision::CURRENT),
            _ => Err(UnknownRevision(s.to_string())),
        }
    }
}

/// The instructions of a formula `[op arg]`, by meaning rather than number.
///
/// Opcodes 10 and 11 decode differently per revision; see
/// [`Revision::opcode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// `*[a 0 b]` → `/[b a]`
    Slot,
    /// `*[a 1 b]` → `b`
    Constant,
    /// `*[a 2 b c]` → `*[*[a b] *[a c]]`
    Evaluate,
    /// `*[a 3 b]` → `?*[a b]`
    CellTest,
    /// `*[a 4 b]` → `+*[a b]`
    Increment,
    /// `*[a 5 b c]` → `=[*[a b] *[a c]]`
    Equals,
    /// `*[a 6 b c d]` → `*[a c]` if `*[a b]` is 0, else `*[a d]`
    Branch,
    /// `*[a 7 b c]` → `*[*[a b] c]`
    Compose,
    /// `*[a 8 b c]` → `*[[*[a b] a] c]`
    Push,
    /// `*[a 9 b c]` → `*[*[a c] 2 [0 1] 0 b]`
    Invoke,
    /// `*[a 10 [b c] d]` → `#[b *[a c] *[a d]]`
    Edit,
    /// `*[a 11 b c]` → `*[a c]`, computing a dynamic hint first
    Hint,
}
