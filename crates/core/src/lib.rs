//! Basic timestamp-ordering validation for transaction schedules.
//!
//! `tsord_core` decides, operation by operation, whether an interleaved
//! transaction schedule can complete under the Basic Timestamp-Ordering (TO)
//! concurrency-control protocol or must be rolled back at a specific point.
//!
//! Every transaction carries a fixed logical timestamp assigned at
//! declaration time. Each data object tracks the highest timestamp that has
//! successfully read it (`RTS`) and written it (`WTS`) so far in the current
//! schedule. The admission rules are the canonical Basic-TO rules:
//!
//! - A **read** by a transaction ranked `ts` is denied when `ts < WTS(X)` --
//!   the reader would observe a value written "in the future". Otherwise
//!   `RTS(X)` advances to `max(RTS(X), ts)`.
//! - A **write** is denied when `ts < RTS(X)` or `ts < WTS(X)` -- it would
//!   overwrite a value already seen or produced by a later transaction.
//!   Otherwise `WTS(X)` becomes `ts`.
//! - A **commit** marker advances the step counter and nothing else.
//!
//! The first denial is terminal for the schedule: evaluation stops and the
//! verdict is a rollback at that step ("moment"). A denial is an expected
//! protocol outcome, not an error.
//!
//! # Entry point
//!
//! The main entry point is [`validate()`], which takes a [`Workload`] --
//! declared objects, the transaction timestamp table, and the schedules --
//! and returns a [`Report`] with one verdict per schedule plus the per-object
//! logs of admitted operations, or an [`Error`](ordering::Error) when a
//! schedule references an undeclared object or transaction.
//!
//! ```rust,ignore
//! use tsord_core::validate;
//!
//! let report = validate(&workload)?;
//! for outcome in &report.outcomes {
//!     println!("{outcome}");
//! }
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on core types
//!   (`Operation`, `Schedule`, `Verdict`, `Report`, ...).
//! - **`parser`** -- enables the logos-based schedule-line scanner in
//!   [`schedule`]. The input-file loader lives in the separate
//!   `tsord_parser` crate.
//!
//! This crate is `no_std` compatible (requires `alloc`).

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod ordering;
pub mod report;
pub mod schedule;

pub use ordering::{evaluate, validate, Workload};
pub use report::Report;
