//! Input-file loader for `tsord` workloads.
//!
//! The input is line-oriented:
//!
//! ```text
//! A, B, C, D;            <- line 1: object names
//! t1, t2, t3, t4;        <- line 2: transaction names, `t<digits>`
//! 8, 9, 1, 4;            <- line 3: timestamps, aligned with line 2
//! E_1-r1(A) w2(A) c      <- lines 4+: schedules, blank lines skipped
//! ```
//!
//! Header fields are separated by `,` or `;` and trimmed; empty fields
//! (e.g. from a trailing `;`) are dropped. Schedule lines are handed to
//! `tsord_core::schedule::parse_schedule`; a line missing its `-` separator
//! is reported and skipped rather than failing the run.
//!
//! This crate does no file or console I/O itself; it turns one string into a
//! [`Workload`](tsord_core::Workload).

pub mod parser;

pub use parser::{parse_input, Error};
