pub mod config;
pub mod diagnostic;
pub mod error;
pub mod eval;
pub mod noun;
pub mod syntax;
pub mod tree;

// Re-exports: the names most callers need, at the crate root.
pub use error::Crash;
pub use eval::{nock, nock_with, Interpreter, Revision};
pub use noun::Noun;
pub use syntax::parse;
