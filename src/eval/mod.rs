//! The Nock reduction engine.
//!
//! `*[subject formula]` is reduced by one recursive function. The two
//! supported revisions share opcodes 0–9 except for the equality test, and
//! differ in what 10 and 11 mean:
//!
//! ```text
//!             5K                       4K
//! *[a 5 b]    =*[a b]                  -
//! *[a 5 b c]  -                        =[*[a b] *[a c]]
//! *[a 10 b c] *[a c]      (hint)       #[p *[a q] *[a c]]   where b = [p q]
//! *[a 11 b c] crash                    *[a c]      (hint)
//! ```
//!
//! Opcodes 6, 8 and 9 are defined as sugar over the others. They are
//! reduced directly here; the products are the same.

mod revision;

#[cfg(test)]
mod tests;

use log::{debug, trace};

use crate::error::Crash;
use crate::noun::{loobean, Noun};
use crate::tree;

pub use revision::{Opcode, Revision, UnknownRevision};

/// `nock(a)` for the current revision.
///
/// A program pair `[subject formula]` is reduced to its product. An atom,
/// or a cell whose tail is an atom, has no formula to run and is returned
/// unchanged.
pub fn nock(noun: &Noun) -> Result<Noun, Crash> {
    nock_with(Revision::CURRENT, noun)
}

/// `nock(a)` under an explicit revision.
pub fn nock_with(revision: Revision, noun: &Noun) -> Result<Noun, Crash> {
    Interpreter::new(revision).nock(noun)
}

/// A reducer bound to one Nock revision.
#[derive(Clone, Copy, Debug)]
pub struct Interpreter {
    revision: Revision,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Revision::CURRENT)
    }
}

impl Interpreter {
    pub fn new(revision: Revision) -> Self {
        Self { revision }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// The entry point: reduce a program pair, pass anything else through.
    pub fn nock(&self, noun: &Noun) -> Result<Noun, Crash> {
        match noun {
            Noun::Cell(subject, formula) if formula.is_cell() => {
                debug!("nock {}: reducing *{}", self.revision, noun);
                self.tar(subject, formula)
            }
            _ => {
                debug!("nock {}: {} has no formula, returned as is", self.revision, noun);
                Ok(noun.clone())
            }
        }
    }

    /// `*[subject formula]`.
    pub fn tar(&self, subject: &Noun, formula: &Noun) -> Result<Noun, Crash> {
        let (op, arg) = formula.as_cell()?;
        let code = match op {
            // *[a [b c] d]  →  [*[a b c] *[a d]]
            Noun::Cell(..) => {
                trace!("{} distribute {}", self.revision, formula);
                let head = self.tar(subject, op)?;
                let tail = self.tar(subject, arg)?;
                return Ok(Noun::cell(head, tail));
            }
            Noun::Atom(code) => *code,
        };
        let opcode = self.revision.opcode(code).ok_or(Crash::InvalidOpcode {
            opcode: code,
            revision: self.revision,
        })?;
        trace!("{} {:?} {}", self.revision, opcode, arg);

        match opcode {
            Opcode::Slot => Ok(tree::slot(arg.as_atom()?, subject)?.clone()),
            Opcode::Constant => Ok(arg.clone()),
            Opcode::Evaluate => {
                let (b, c) = arg.as_cell()?;
                let next_subject = self.tar(subject, b)?;
                let next_formula = self.tar(subject, c)?;
                self.tar(&next_subject, &next_formula)
            }
            Opcode::CellTest => Ok(loobean(self.tar(subject, arg)?.is_cell())),
            Opcode::Increment => {
                let value = self.tar(subject, arg)?.as_atom()?;
                value
                    .checked_add(1)
                    .map(Noun::atom)
                    .ok_or(Crash::AtomOverflow { value })
            }
            Opcode::Equals => self.equals(subject, arg),
            Opcode::Branch => {
                let (test, _) = arg.as_cell()?;
                // Anything but 0 takes the else branch.
                let axis = match self.tar(subject, test)?.as_atom()? {
                    0 => 6,
                    _ => 7,
                };
                self.tar(subject, tree::slot(axis, arg)?)
            }
            Opcode::Compose => {
                let (b, c) = arg.as_cell()?;
                let next_subject = self.tar(subject, b)?;
                self.tar(&next_subject, c)
            }
            Opcode::Push => {
                let (b, c) = arg.as_cell()?;
                let pushed = Noun::cell(self.tar(subject, b)?, subject.clone());
                self.tar(&pushed, c)
            }
            Opcode::Invoke => {
                let (b, c) = arg.as_cell()?;
                let axis = b.as_atom()?;
                let core = self.tar(subject, c)?;
                let arm = tree::slot(axis, &core)?.clone();
                trace!("{} invoke arm /{} of core", self.revision, axis);
                self.tar(&core, &arm)
            }
            Opcode::Edit => {
                let (b, d) = arg.as_cell()?;
                let (p, q) = b.as_cell()?;
                let axis = p.as_atom()?;
                let replacement = self.tar(subject, q)?;
                let target = self.tar(subject, d)?;
                tree::edit(axis, replacement, &target)
            }
            Opcode::Hint => {
                let (b, c) = arg.as_cell()?;
                if let Noun::Cell(tag, clue) = b {
                    let clue = self.tar(subject, clue)?;
                    debug!("{} hint {} discarded {}", self.revision, tag, clue);
                } else {
                    trace!("{} static hint {}", self.revision, b);
                }
                self.tar(subject, c)
            }
        }
    }

    fn equals(&self, subject: &Noun, arg: &Noun) -> Result<Noun, Crash> {
        match self.revision {
            // =*[a b]: one product, its halves compared as text.
            Revision::Nock5 => {
                let product = self.tar(subject, arg)?;
                let (left, right) = product.as_cell()?;
                Ok(loobean(left.to_string() == right.to_string()))
            }
            Revision::Nock4 => {
                let (b, c) = arg.as_cell()?;
                let left = self.tar(subject, b)?;
                let right = self.tar(subject, c)?;
                Ok(loobean(left == right))
            }
        }
    }
}
