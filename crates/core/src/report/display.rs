use alloc::string::String;
use core::fmt::{Display, Formatter, Result, Write};

use super::{Access, LogEntry, ScheduleOutcome, Verdict};

impl Display for Access {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.as_str())
    }
}

/// `<schedule_id>-OK` or `<schedule_id>-ROLLBACK-<moment>`.
impl Display for ScheduleOutcome {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.verdict {
            Verdict::Ok => write!(f, "{}-OK", self.schedule_id),
            Verdict::RolledBack { moment } => {
                write!(f, "{}-ROLLBACK-{moment}", self.schedule_id)
            }
        }
    }
}

/// `<schedule_id>,<read|write>,<moment>`.
impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{},{},{}", self.schedule_id, self.access, self.moment)
    }
}

/// Format the verdict lines of a run, one per schedule, in input order.
///
/// Ends with a trailing newline unless there are no outcomes at all.
#[must_use]
pub fn format_outcomes(outcomes: &[ScheduleOutcome]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        let _ = writeln!(output, "{outcome}");
    }
    output
}

/// Format one object's log, one admitted operation per line.
#[must_use]
pub fn format_object_log(entries: &[LogEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        let _ = writeln!(output, "{entry}");
    }
    output
}
