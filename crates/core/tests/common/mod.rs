/// DSL macros and helpers for building test schedules.
///
/// `ops![r(1, A), w(2, A), c]` produces a `Vec<Operation<&'static str>>`:
///
/// - `r(tid, var)` → `Operation::read(TransactionId(tid), "var")`
/// - `w(tid, var)` → `Operation::write(TransactionId(tid), "var")`
/// - `c`           → `Operation::Commit`
///
/// Build a single Operation.
#[macro_export]
macro_rules! op {
    (r($tid:literal, $var:ident)) => {
        tsord_core::schedule::Operation::read(
            tsord_core::schedule::TransactionId($tid),
            stringify!($var),
        )
    };
    (w($tid:literal, $var:ident)) => {
        tsord_core::schedule::Operation::write(
            tsord_core::schedule::TransactionId($tid),
            stringify!($var),
        )
    };
    (c) => {
        tsord_core::schedule::Operation::<&'static str>::Commit
    };
}

/// Build an operation sequence from a comma-separated list of `op!` items.
#[macro_export]
macro_rules! ops {
    ($($kind:ident $(($tid:literal, $var:ident))?),* $(,)?) => {
        vec![$($crate::op!($kind $(($tid, $var))?)),*]
    };
}

use tsord_core::ordering::TimestampTable;
use tsord_core::schedule::{Operation, Schedule, TransactionId};

/// Build a timestamp table from `(transaction, rank)` pairs.
pub fn table(ranks: &[(u64, u64)]) -> TimestampTable {
    ranks.iter().map(|&(t, ts)| (TransactionId(t), ts)).collect()
}

/// Build a labelled schedule over `&'static str` objects.
pub fn schedule(id: &str, operations: Vec<Operation<&'static str>>) -> Schedule<&'static str> {
    Schedule::new(id.to_string(), operations)
}
