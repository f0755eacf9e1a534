//! Nouns, the single data type of Nock.
//!
//! A noun is either an atom (an unsigned integer) or a cell (an ordered
//! pair of nouns). Nouns are immutable. Children sit behind `Arc`, so a
//! clone is two reference-count bumps and an edited noun shares every
//! subtree it did not touch with the original.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::diagnostic::Diagnostic;
use crate::error::Crash;

/// A Nock noun.
#[derive(Debug, Clone)]
pub enum Noun {
    /// An atom. Limited to one machine word.
    Atom(u64),
    /// A cell: an ordered pair `[head tail]`.
    Cell(Arc<Noun>, Arc<Noun>),
}

/// Which of the two shapes a noun has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NounKind {
    Atom,
    Cell,
}

impl fmt::Display for NounKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NounKind::Atom => f.write_str("atom"),
            NounKind::Cell => f.write_str("cell"),
        }
    }
}

/// The loobean for `b`: `0` is yes, `1` is no.
pub fn loobean(b: bool) -> Noun {
    Noun::Atom(if b { 0 } else { 1 })
}

impl Noun {
    /// Create an atom noun.
    pub fn atom(value: u64) -> Self {
        Noun::Atom(value)
    }

    /// Create a cell noun `[a b]`.
    pub fn cell(head: Noun, tail: Noun) -> Self {
        Noun::Cell(Arc::new(head), Arc::new(tail))
    }

    /// Right-nest a sequence: `[a b c d]` is `[a [b [c d]]]`.
    ///
    /// Returns `None` for an empty slice; a single noun is returned as is.
    pub fn list(nouns: &[Noun]) -> Option<Noun> {
        let (last, init) = nouns.split_last()?;
        Some(
            init.iter()
                .rev()
                .fold(last.clone(), |acc, noun| Noun::cell(noun.clone(), acc)),
        )
    }

    pub fn kind(&self) -> NounKind {
        match self {
            Noun::Atom(_) => NounKind::Atom,
            Noun::Cell(..) => NounKind::Cell,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Noun::Atom(_))
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Noun::Cell(..))
    }

    /// The value of an atom, or a `TypeMismatch` crash for a cell.
    pub fn as_atom(&self) -> Result<u64, Crash> {
        match self {
            Noun::Atom(value) => Ok(*value),
            Noun::Cell(..) => Err(Crash::expected(NounKind::Atom, self)),
        }
    }

    /// Head and tail of a cell, or a `TypeMismatch` crash for an atom.
    pub fn as_cell(&self) -> Result<(&Noun, &Noun), Crash> {
        match self {
            Noun::Cell(head, tail) => Ok((head.as_ref(), tail.as_ref())),
            Noun::Atom(_) => Err(Crash::expected(NounKind::Cell, self)),
        }
    }

    pub fn head(&self) -> Result<&Noun, Crash> {
        self.as_cell().map(|(head, _)| head)
    }

    pub fn tail(&self) -> Result<&Noun, Crash> {
        self.as_cell().map(|(_, tail)| tail)
    }

    /// The shared children of a cell.
    pub(crate) fn children(&self) -> Option<(&Arc<Noun>, &Arc<Noun>)> {
        match self {
            Noun::Cell(head, tail) => Some((head, tail)),
            Noun::Atom(_) => None,
        }
    }

    /// `[0 axis]`, read the subject at `axis`.
    pub fn slot(axis: u64) -> Self {
        Noun::cell(Noun::atom(0), Noun::atom(axis))
    }

    /// `[1 value]`
    pub fn constant(value: Noun) -> Self {
        Noun::cell(Noun::atom(1), value)
    }

    /// `[2 subject formula]`, both halves computed from the current subject.
    pub fn evaluate(subject: Noun, formula: Noun) -> Self {
        Noun::cell(Noun::atom(2), Noun::cell(subject, formula))
    }

    /// `[3 formula]`: yes (0) if the product is a cell.
    pub fn cell_test(noun: Noun) -> Self {
        Noun::cell(Noun::atom(3), noun)
    }

    /// `[4 formula]`
    pub fn increment(noun: Noun) -> Self {
        Noun::cell(Noun::atom(4), noun)
    }

    /// `[5 a b]`. Under 5K the whole `[a b]` is evaluated as one formula.
    pub fn equals(a: Noun, b: Noun) -> Self {
        Noun::cell(Noun::atom(5), Noun::cell(a, b))
    }

    /// `[6 test yes no]`
    pub fn branch(test: Noun, yes: Noun, no: Noun) -> Self {
        Noun::cell(Noun::atom(6), Noun::cell(test, Noun::cell(yes, no)))
    }

    /// `[7 a b]`: run `b` against the product of `a`.
    pub fn compose(a: Noun, b: Noun) -> Self {
        Noun::cell(Noun::atom(7), Noun::cell(a, b))
    }

    /// `[8 a b]`: run `b` against `[product-of-a subject]`.
    pub fn push(a: Noun, b: Noun) -> Self {
        Noun::cell(Noun::atom(8), Noun::cell(a, b))
    }

    /// `[9 axis core]`: build the core, then run the arm at `axis` against it.
    pub fn invoke(axis: u64, core: Noun) -> Self {
        Noun::cell(Noun::atom(9), Noun::cell(Noun::atom(axis), core))
    }

    /// `[10 [axis value] target]`, the 4K tree edit.
    pub fn edit(axis: u64, value: Noun, target: Noun) -> Self {
        Noun::cell(
            Noun::atom(10),
            Noun::cell(Noun::cell(Noun::atom(axis), value), target),
        )
    }

    /// `[11 hint formula]`, the 4K hint. 5K spells it with opcode 10.
    pub fn hint(hint: Noun, formula: Noun) -> Self {
        Noun::cell(Noun::atom(11), Noun::cell(hint, formula))
    }
}

// Nouns can nest far deeper than the call stack, so comparison, hashing,
// printing and dropping walk the tree with an explicit stack.

impl PartialEq for Noun {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Noun::Atom(x), Noun::Atom(y)) if x == y => {}
                (Noun::Cell(ah, at), Noun::Cell(bh, bt)) => {
                    if !Arc::ptr_eq(at, bt) {
                        pending.push((&**at, &**bt));
                    }
                    if !Arc::ptr_eq(ah, bh) {
                        pending.push((&**ah, &**bh));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Noun {}

impl Hash for Noun {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(noun) = pending.pop() {
            match noun {
                Noun::Atom(a) => {
                    state.write_u8(0);
                    a.hash(state);
                }
                Noun::Cell(h, t) => {
                    state.write_u8(1);
                    pending.push(&**t);
                    pending.push(&**h);
                }
            }
        }
    }
}

impl Drop for Noun {
    fn drop(&mut self) {
        let Noun::Cell(head, tail) = self else {
            return;
        };
        let mut orphans = Vec::new();
        adopt(head, &mut orphans);
        adopt(tail, &mut orphans);
        while let Some(mut noun) = orphans.pop() {
            if let Noun::Cell(head, tail) = &mut noun {
                adopt(head, &mut orphans);
                adopt(tail, &mut orphans);
            }
            // `noun` now has leaf children only and drops without recursing.
        }
    }
}

/// Move a cell out from behind its last `Arc`, leaving an atom in its place.
fn adopt(child: &mut Arc<Noun>, orphans: &mut Vec<Noun>) {
    if let Some(inner) = Arc::get_mut(child) {
        if inner.is_cell() {
            orphans.push(std::mem::replace(inner, Noun::Atom(0)));
        }
    }
}

impl From<u64> for Noun {
    fn from(value: u64) -> Self {
        Noun::Atom(value)
    }
}

impl From<bool> for Noun {
    fn from(b: bool) -> Self {
        loobean(b)
    }
}

impl FromStr for Noun {
    type Err = Vec<Diagnostic>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::syntax::parse(s)
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Noun(&'a Noun),
            Text(&'static str),
        }

        let mut steps = vec![Step::Noun(self)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Noun(Noun::Atom(v)) => write!(f, "{}", v)?,
                Step::Noun(Noun::Cell(h, t)) => {
                    f.write_str("[")?;
                    steps.push(Step::Text("]"));
                    steps.push(Step::Noun(&**t));
                    steps.push(Step::Text(" "));
                    steps.push(Step::Noun(&**h));
                }
            }
        }
        Ok(())
    }
}
