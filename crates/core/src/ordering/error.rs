use crate::schedule::types::TransactionId;

/// Error aborting a whole validation run.
///
/// A schedule referenced something never declared, so the data model is
/// inconsistent; no verdict can be trusted past that point. A rollback is not
/// an error -- it is a valid terminal verdict reported in the
/// [`Report`](crate::report::Report).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<Variable> {
    /// A schedule referenced an object missing from the declared object list.
    UnknownObject(Variable),
    /// A schedule referenced a transaction with no assigned timestamp.
    UnknownTransaction(TransactionId),
}
