//! Verdicts and per-object logs produced by a validation run.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

pub mod display;

pub use display::{format_object_log, format_outcomes};

/// Terminal verdict of one schedule evaluation.
///
/// A rollback is an expected protocol outcome, not an error: it means the
/// schedule cannot proceed under timestamp ordering from that operation on.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every operation was admitted.
    Ok,
    /// Admission was denied at the zero-based step `moment` (commits count).
    RolledBack { moment: u64 },
}

/// Whether an admitted operation was a read or a write.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// One verdict line per schedule, in input order.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    pub schedule_id: String,
    pub verdict: Verdict,
}

impl ScheduleOutcome {
    #[must_use]
    pub const fn new(schedule_id: String, verdict: Verdict) -> Self {
        Self {
            schedule_id,
            verdict,
        }
    }
}

/// One admitted operation, as recorded in a per-object log.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub schedule_id: String,
    pub access: Access,
    pub moment: u64,
}

impl LogEntry {
    #[must_use]
    pub const fn new(schedule_id: String, access: Access, moment: u64) -> Self {
        Self {
            schedule_id,
            access,
            moment,
        }
    }
}

/// Append-only per-object logs of admitted operations.
///
/// Entries accumulate across all schedules of a run in schedule-then-operation
/// order. Only admitted operations appear; a denied operation leaves no trace.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLogs<Variable>
where
    Variable: Eq + Hash,
{
    entries: HashMap<Variable, Vec<LogEntry>>,
}

impl<Variable> ObjectLogs<Variable>
where
    Variable: Eq + Hash,
{
    /// Create empty logs for every declared object, so each is addressable
    /// even when nothing ever touches it.
    pub fn new(objects: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            entries: objects
                .into_iter()
                .map(|name| (name, Vec::new()))
                .collect(),
        }
    }

    pub(crate) fn record(&mut self, object: Variable, entry: LogEntry) {
        self.entries.entry(object).or_default().push(entry);
    }

    /// The log of one object, in admission order.
    #[must_use]
    pub fn get(&self, object: &Variable) -> Option<&[LogEntry]> {
        self.entries.get(object).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &[LogEntry])> {
        self.entries
            .iter()
            .map(|(object, entries)| (object, entries.as_slice()))
    }

    /// Total number of admitted operations across all objects.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Everything a validation run produces: verdicts in input order plus the
/// accumulated per-object logs.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<Variable>
where
    Variable: Eq + Hash,
{
    pub outcomes: Vec<ScheduleOutcome>,
    pub logs: ObjectLogs<Variable>,
}

impl<Variable> Report<Variable>
where
    Variable: Eq + Hash,
{
    #[must_use]
    pub const fn new(outcomes: Vec<ScheduleOutcome>, logs: ObjectLogs<Variable>) -> Self {
        Self { outcomes, logs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_objects_are_addressable() {
        let logs = ObjectLogs::new(["A", "B"]);
        assert_eq!(logs.get(&"A"), Some(&[][..]));
        assert_eq!(logs.get(&"Z"), None);
        assert_eq!(logs.total_entries(), 0);
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut logs = ObjectLogs::new(["A"]);
        logs.record("A", LogEntry::new("E1".into(), Access::Read, 0));
        logs.record("A", LogEntry::new("E1".into(), Access::Write, 1));
        let entries = logs.get(&"A").expect("A is declared");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].access, Access::Read);
        assert_eq!(entries[1].moment, 1);
    }
}
