//! Tree addressing: reading and replacing subtrees by axis.
//!
//! An axis is a path from the root of a noun: `1` is the root, `2n` is the
//! head of `n` and `2n + 1` its tail. Written out in binary, the bits after
//! the leading `1` are the path, `0` for head and `1` for tail:
//!
//! ```text
//!            1
//!        2       3
//!      4   5   6   7
//! ```
//!
//! `slot` is the `/` operator of Nock, `edit` is `#`.

use std::sync::Arc;

use crate::error::Crash;
use crate::noun::Noun;

/// `/[axis noun]`: the subtree of `noun` at `axis`.
///
/// Crashes with `AddressOutOfRange` if the path runs through an atom or the
/// axis is 0.
pub fn slot(axis: u64, noun: &Noun) -> Result<&Noun, Crash> {
    walk(axis, noun).ok_or(Crash::AddressOutOfRange { axis })
}

fn walk(axis: u64, noun: &Noun) -> Option<&Noun> {
    match axis {
        0 => None,
        1 => Some(noun),
        _ => {
            let (head, tail) = walk(axis / 2, noun)?.children()?;
            Some(if axis % 2 == 0 { &**head } else { &**tail })
        }
    }
}

/// `#[axis replacement target]`: `target` with the subtree at `axis`
/// replaced by `replacement`.
///
/// ```text
/// #[1 b c]       b
/// #[2a b c]      #[a [b /[2a+1 c]] c]
/// #[2a+1 b c]    #[a [/[2a c] b] c]
/// ```
///
/// Siblings along the path are shared with `target`, not copied.
pub fn edit(axis: u64, replacement: Noun, target: &Noun) -> Result<Noun, Crash> {
    rebuild(axis, replacement, target).ok_or(Crash::AddressOutOfRange { axis })
}

fn rebuild(axis: u64, replacement: Noun, target: &Noun) -> Option<Noun> {
    match axis {
        0 => None,
        1 => Some(replacement),
        _ => {
            let parent = axis / 2;
            let (head, tail) = walk(parent, target)?.children()?;
            let node = if axis % 2 == 0 {
                Noun::Cell(Arc::new(replacement), Arc::clone(tail))
            } else {
                Noun::Cell(Arc::clone(head), Arc::new(replacement))
            };
            rebuild(parent, node, target)
        }
    }
}
