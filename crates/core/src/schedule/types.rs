use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter, Result};

/// Identifies a transaction declared in the workload header.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ::derive_more::From)]
pub struct TransactionId(pub u64);

/// A fixed logical rank assigned to a transaction at declaration time.
///
/// Not a clock reading: conflicts are resolved purely by comparing ranks.
pub type Timestamp = u64;

/// A single parsed unit of a schedule, in the order it appears in the text.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Operation<Variable> {
    Read {
        transaction: TransactionId,
        object: Variable,
    },
    Write {
        transaction: TransactionId,
        object: Variable,
    },
    Commit,
}

impl<Variable> Operation<Variable> {
    pub const fn read(transaction: TransactionId, object: Variable) -> Self {
        Self::Read {
            transaction,
            object,
        }
    }

    pub const fn write(transaction: TransactionId, object: Variable) -> Self {
        Self::Write {
            transaction,
            object,
        }
    }
}

impl<Variable> Debug for Operation<Variable>
where
    Variable: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Read {
                transaction,
                object,
            } => write!(f, "r{}({object:?})", transaction.0),
            Self::Write {
                transaction,
                object,
            } => write!(f, "w{}({object:?})", transaction.0),
            Self::Commit => write!(f, "c"),
        }
    }
}

/// One candidate interleaving of operations from multiple transactions,
/// identified by a label and evaluated independently of all other schedules.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<Variable> {
    /// Label taken verbatim from before the `-` separator.
    pub id: String,
    /// Operations in source order. Order is the only sequencing signal.
    pub operations: Vec<Operation<Variable>>,
}

impl<Variable> Schedule<Variable> {
    #[must_use]
    pub const fn new(id: String, operations: Vec<Operation<Variable>>) -> Self {
        Self { id, operations }
    }
}
