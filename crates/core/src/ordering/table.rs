//! The immutable transaction timestamp table.

use hashbrown::HashMap;

use crate::schedule::types::{Timestamp, TransactionId};

/// Maps each declared transaction to its fixed logical timestamp.
///
/// Built once from the declaration header and immutable for the entire run:
/// every schedule evaluation shares it read-only.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampTable {
    ranks: HashMap<TransactionId, Timestamp>,
}

impl TimestampTable {
    /// Look up the timestamp assigned to a transaction.
    ///
    /// Returns `None` for a transaction that was never declared.
    #[must_use]
    pub fn get(&self, transaction: TransactionId) -> Option<Timestamp> {
        self.ranks.get(&transaction).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(TransactionId, Timestamp)> for TimestampTable {
    fn from_iter<I: IntoIterator<Item = (TransactionId, Timestamp)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table: TimestampTable = [(TransactionId(1), 5), (TransactionId(2), 10)]
            .into_iter()
            .collect();
        assert_eq!(table.get(TransactionId(1)), Some(5));
        assert_eq!(table.get(TransactionId(2)), Some(10));
        assert_eq!(table.get(TransactionId(3)), None);
        assert_eq!(table.len(), 2);
    }
}
