//! Logos-based scanner for the operation stream of a schedule line.
//!
//! The stream is a loosely space-separated (operations may also run together)
//! sequence of tokens:
//!
//! - `r<digits>(<name>)` -- read by transaction `<digits>` of object `<name>`
//! - `w<digits>(<name>)` -- write by transaction `<digits>` of object `<name>`
//! - `c` -- commit marker, no payload
//!
//! Spans matching none of these forms are skipped rather than rejected. This
//! permissive token scanning is part of the contract: a stray token inside an
//! otherwise well-formed schedule is not an error.
//!
//! # Example input
//!
//! ```text
//! r1(A) w2(A) c r3(B)
//! ```

use alloc::vec::Vec;
use core::ops::Range;

/// All token kinds produced by the schedule scanner.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(::logos::Logos, Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A read token `r<digits>(<name>)`.
    #[regex(r"r[0-9]+\([a-zA-Z0-9_]+\)")]
    Read,

    /// A write token `w<digits>(<name>)`.
    #[regex(r"w[0-9]+\([a-zA-Z0-9_]+\)")]
    Write,

    /// The commit marker `c`.
    #[token("c")]
    Commit,

    /// Spaces or tabs between tokens.
    #[regex(r"[ \t]+")]
    Whitespace,
}

/// A single token with its kind and the byte-offset span in the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    /// Construct a new [`Token`].
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Return the source text for this token given the original input.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input` and return all valid tokens.
///
/// Spans that the scanner cannot recognise are silently skipped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token { kind, span }))
        .collect()
}
