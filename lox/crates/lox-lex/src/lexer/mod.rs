//! Scanner implementation.
//!
//! The scanner is split across several files by token class:
//!
//! - `core`: the [`Scanner`] struct, dispatch loop and iterator
//! - `operator`: one-or-two character operators and the slash
//! - `comment`: line and block comments
//! - `string`: string literals
//! - `number`: number literals
//! - `identifier`: identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
