//! Permissive parsing of schedule lines into typed operation sequences.
//!
//! A schedule line has the form `<id>-<operations>`. The label is everything
//! before the first `-`; the operation stream is scanned by the
//! [`lexer`](super::lexer), skipping unmatched spans. The grammar is simple
//! enough that the scanner does all the work; this module only splits the
//! label and decodes token payloads.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::error::Error;
use super::lexer::{tokenize, TokenKind};
use super::types::{Operation, Schedule, TransactionId};

/// Parse one schedule line of the form `<id>-<operations>`.
///
/// Tokens matching none of the three operation forms are skipped rather than
/// rejecting the whole schedule.
///
/// # Errors
///
/// Returns [`Error::MalformedScheduleLine`] when the `-` separator between
/// the label and the operation stream is absent.
pub fn parse_schedule(line: &str) -> Result<Schedule<String>, Error> {
    let (id, operations) = line.split_once('-').ok_or(Error::MalformedScheduleLine)?;
    Ok(Schedule::new(
        id.trim().to_string(),
        scan_operations(operations.trim()),
    ))
}

/// Scan an operation stream into typed operations, in source order.
///
/// Unmatched spans are skipped.
#[must_use]
pub fn scan_operations(input: &str) -> Vec<Operation<String>> {
    tokenize(input)
        .into_iter()
        .filter_map(|token| match token.kind {
            TokenKind::Read => {
                access_payload(token.text(input)).map(|(t, obj)| Operation::read(t, obj))
            }
            TokenKind::Write => {
                access_payload(token.text(input)).map(|(t, obj)| Operation::write(t, obj))
            }
            TokenKind::Commit => Some(Operation::Commit),
            TokenKind::Whitespace => None,
        })
        .collect()
}

/// Decode the transaction id and object name of an `r1(A)`-shaped token.
///
/// The scanner guarantees the shape, so this only fails on a token it did not
/// produce.
fn access_payload(text: &str) -> Option<(TransactionId, String)> {
    let body = text.strip_suffix(')')?;
    let (digits, object) = body[1..].split_once('(')?;
    let id = digits.parse::<u64>().ok()?;
    Some((TransactionId(id), object.to_string()))
}
