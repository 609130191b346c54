/// Winnow-based parser for the line-oriented workload input format.
///
/// Grammar:
/// ```text
/// input          = objects_line NL transactions_line NL timestamps_line NL schedule_line*
/// objects_line   = list(name)
/// transactions_line = list("t" INTEGER)
/// timestamps_line   = list(INTEGER)
/// list(item)     = item ((","|";") item)* (","|";")?
/// schedule_line  = <id> "-" <operations>      -- see tsord_core::schedule
/// ```
use tsord_core::ordering::TimestampTable;
use tsord_core::schedule::{parse_schedule, Schedule, Timestamp, TransactionId};
use tsord_core::Workload;
use winnow::ascii::dec_uint;
use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Error loading a workload input file. All variants are fatal for the whole
/// run: the header is structurally required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer than the three required declaration lines are present.
    MissingDeclarationLine { found: usize },
    /// A transaction name on line 2 is not of the form `t<digits>`.
    MalformedTransactionName { name: String },
    /// A token on line 3 is not an integer.
    UnparseableTimestamp { token: String },
    /// Lines 2 and 3 declare different numbers of tokens.
    TransactionCountMismatch {
        transactions: usize,
        timestamps: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDeclarationLine { found } => write!(
                f,
                "expected 3 declaration lines (objects, transactions, timestamps), found {found}"
            ),
            Self::MalformedTransactionName { name } => {
                write!(f, "transaction name {name:?} is not of the form t<digits>")
            }
            Self::UnparseableTimestamp { token } => {
                write!(f, "timestamp {token:?} is not an integer")
            }
            Self::TransactionCountMismatch {
                transactions,
                timestamps,
            } => write!(
                f,
                "{transactions} transaction names but {timestamps} timestamps"
            ),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse a complete input file into a [`Workload`].
///
/// Blank schedule lines are skipped. A schedule line without its `-`
/// separator is fatal for that schedule only: it is logged and skipped, and
/// the remaining schedules are still loaded.
///
/// # Errors
///
/// Returns an [`Error`] when the three-line declaration header is missing or
/// malformed.
pub fn parse_input(input: &str) -> Result<Workload<String>, Error> {
    let mut lines = input.lines();
    let objects_line = next_declaration_line(&mut lines, 0)?;
    let transactions_line = next_declaration_line(&mut lines, 1)?;
    let timestamps_line = next_declaration_line(&mut lines, 2)?;

    let objects = header_fields(objects_line);

    let transactions: Vec<TransactionId> = header_fields(transactions_line)
        .iter()
        .map(|name| transaction_id(name))
        .collect::<Result<_, _>>()?;

    let timestamps: Vec<Timestamp> = header_fields(timestamps_line)
        .iter()
        .map(|token| timestamp(token))
        .collect::<Result<_, _>>()?;

    if transactions.len() != timestamps.len() {
        return Err(Error::TransactionCountMismatch {
            transactions: transactions.len(),
            timestamps: timestamps.len(),
        });
    }

    let table: TimestampTable = transactions.into_iter().zip(timestamps).collect();

    let mut schedules: Vec<Schedule<String>> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_schedule(line) {
            Ok(schedule) => schedules.push(schedule),
            Err(error) => {
                tracing::warn!(?error, line, "skipping malformed schedule line");
            }
        }
    }

    tracing::debug!(
        objects = objects.len(),
        transactions = table.len(),
        schedules = schedules.len(),
        "loaded workload"
    );

    Ok(Workload::new(objects, table, schedules))
}

fn next_declaration_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    found: usize,
) -> Result<&'a str, Error> {
    lines
        .next()
        .ok_or(Error::MissingDeclarationLine { found })
}

// ---------------------------------------------------------------------------
// Header parsers
// ---------------------------------------------------------------------------

/// One field of a `,`/`;`-separated header line, trimmed.
fn field(input: &mut &str) -> ModalResult<String> {
    take_while(0.., |c: char| c != ',' && c != ';')
        .map(|s: &str| s.trim().to_string())
        .parse_next(input)
}

/// A full header line: separated fields with empty ones (e.g. from a
/// trailing `;`) dropped.
fn field_list(input: &mut &str) -> ModalResult<Vec<String>> {
    separated(0.., field, one_of([',', ';']))
        .map(|fields: Vec<String>| fields.into_iter().filter(|f| !f.is_empty()).collect())
        .parse_next(input)
}

/// Split a header line into its non-empty trimmed fields.
fn header_fields(line: &str) -> Vec<String> {
    let mut stream = line;
    field_list(&mut stream).unwrap_or_default()
}

/// `"t" <digits>` -- a declared transaction name.
fn transaction_name(input: &mut &str) -> ModalResult<TransactionId> {
    literal("t").parse_next(input)?;
    let id: u64 = dec_uint.parse_next(input)?;
    Ok(TransactionId(id))
}

fn transaction_id(token: &str) -> Result<TransactionId, Error> {
    let mut stream = token;
    match transaction_name.parse_next(&mut stream) {
        Ok(id) if stream.is_empty() => Ok(id),
        _ => Err(Error::MalformedTransactionName {
            name: token.to_string(),
        }),
    }
}

/// A bare integer rank.
fn rank(input: &mut &str) -> ModalResult<Timestamp> {
    dec_uint.parse_next(input)
}

fn timestamp(token: &str) -> Result<Timestamp, Error> {
    let mut stream = token;
    match rank.parse_next(&mut stream) {
        Ok(ts) if stream.is_empty() => Ok(ts),
        _ => Err(Error::UnparseableTimestamp {
            token: token.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
