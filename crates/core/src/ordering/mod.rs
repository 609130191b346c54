//! The timestamp-ordering evaluator.
//!
//! Walks each schedule's operations in source order against the per-object
//! registry and the immutable timestamp table, applying the Basic-TO
//! admission rules and stopping at the first denial. Nothing here executes
//! concurrently: the protocol is *simulated*, one schedule at a time, one
//! operation at a time.

use alloc::vec::Vec;
use core::hash::Hash;

pub mod error;
pub mod registry;
pub mod table;

pub use error::Error;
pub use registry::{ObjectRegistry, ObjectState};
pub use table::TimestampTable;

use crate::report::{Access, LogEntry, ObjectLogs, Report, ScheduleOutcome, Verdict};
use crate::schedule::types::{Operation, Schedule};

/// A declared workload: the data objects, the transaction timestamp table,
/// and the schedules to evaluate against them.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload<Variable> {
    /// Declared object names, in declaration order.
    pub objects: Vec<Variable>,
    /// Fixed logical timestamps, shared read-only across all evaluations.
    pub table: TimestampTable,
    /// Schedules in input order, each evaluated independently.
    pub schedules: Vec<Schedule<Variable>>,
}

impl<Variable> Workload<Variable> {
    #[must_use]
    pub const fn new(
        objects: Vec<Variable>,
        table: TimestampTable,
        schedules: Vec<Schedule<Variable>>,
    ) -> Self {
        Self {
            objects,
            table,
            schedules,
        }
    }
}

/// Validate every schedule in `workload` under basic timestamp ordering.
///
/// Schedules are evaluated strictly one at a time, in input order, each
/// against a freshly reset registry; the timestamp table is shared read-only.
/// The returned [`Report`] carries exactly one verdict per schedule and the
/// accumulated per-object logs of admitted operations.
///
/// # Errors
///
/// Returns [`Error::UnknownObject`] or [`Error::UnknownTransaction`] when a
/// schedule references a name that was never declared. This aborts the whole
/// run, not just the offending schedule.
pub fn validate<Variable>(workload: &Workload<Variable>) -> Result<Report<Variable>, Error<Variable>>
where
    Variable: Eq + Hash + Clone,
{
    tracing::debug!(
        objects = workload.objects.len(),
        transactions = workload.table.len(),
        schedules = workload.schedules.len(),
        "validating workload"
    );

    let mut registry = ObjectRegistry::new(workload.objects.iter().cloned());
    let mut logs = ObjectLogs::new(workload.objects.iter().cloned());
    let mut outcomes = Vec::with_capacity(workload.schedules.len());

    for schedule in &workload.schedules {
        let verdict = evaluate(schedule, &workload.table, &mut registry, &mut logs)?;
        outcomes.push(ScheduleOutcome::new(schedule.id.clone(), verdict));
    }

    Ok(Report::new(outcomes, logs))
}

/// Evaluate one schedule against a registry and the shared timestamp table.
///
/// The registry is reset before the first operation, so the evaluation is
/// self-contained: re-running the same schedule yields the same verdict.
/// `moment` starts at 0 and advances by exactly 1 per processed operation,
/// commits included. The first denied operation terminates the evaluation
/// with `RolledBack { moment }`; it mutates no state and emits no log entry.
///
/// # Errors
///
/// Returns [`Error::UnknownObject`] / [`Error::UnknownTransaction`] for
/// references to undeclared names.
pub fn evaluate<Variable>(
    schedule: &Schedule<Variable>,
    table: &TimestampTable,
    registry: &mut ObjectRegistry<Variable>,
    logs: &mut ObjectLogs<Variable>,
) -> Result<Verdict, Error<Variable>>
where
    Variable: Eq + Hash + Clone,
{
    registry.reset();
    let mut moment: u64 = 0;

    for operation in &schedule.operations {
        match operation {
            Operation::Commit => {}
            Operation::Read {
                transaction,
                object,
            } => {
                let ts = table
                    .get(*transaction)
                    .ok_or(Error::UnknownTransaction(*transaction))?;
                let state = registry
                    .get_mut(object)
                    .ok_or_else(|| Error::UnknownObject(object.clone()))?;

                // Read rule: deny when the reader would observe a value
                // written by a later-ranked transaction.
                if ts < state.write_timestamp() {
                    tracing::debug!(schedule = %schedule.id, moment, ts, "read denied");
                    return Ok(Verdict::RolledBack { moment });
                }

                state.observe_read(ts);
                logs.record(
                    object.clone(),
                    LogEntry::new(schedule.id.clone(), Access::Read, moment),
                );
            }
            Operation::Write {
                transaction,
                object,
            } => {
                let ts = table
                    .get(*transaction)
                    .ok_or(Error::UnknownTransaction(*transaction))?;
                let state = registry
                    .get_mut(object)
                    .ok_or_else(|| Error::UnknownObject(object.clone()))?;

                // Write rule: deny when a later-ranked transaction has
                // already read or written the object. Equal ranks are
                // admitted; the comparison is strict.
                if ts < state.read_timestamp() || ts < state.write_timestamp() {
                    tracing::debug!(schedule = %schedule.id, moment, ts, "write denied");
                    return Ok(Verdict::RolledBack { moment });
                }

                state.observe_write(ts);
                logs.record(
                    object.clone(),
                    LogEntry::new(schedule.id.clone(), Access::Write, moment),
                );
            }
        }
        moment += 1;
    }

    Ok(Verdict::Ok)
}
