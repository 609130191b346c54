//! Per-object read/write timestamp state.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::schedule::types::Timestamp;

/// Read/write timestamp state of one declared data object.
///
/// `read_timestamp` is the highest rank that has successfully read the
/// object in the current schedule evaluation, `write_timestamp` the highest
/// rank that has successfully written it. Both are non-decreasing within one
/// evaluation and zeroed between evaluations.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ObjectState {
    read_timestamp: Timestamp,
    write_timestamp: Timestamp,
}

impl ObjectState {
    #[must_use]
    pub const fn read_timestamp(&self) -> Timestamp {
        self.read_timestamp
    }

    #[must_use]
    pub const fn write_timestamp(&self) -> Timestamp {
        self.write_timestamp
    }

    /// Record an admitted read. Never decreases the read timestamp.
    pub fn observe_read(&mut self, ts: Timestamp) {
        if ts > self.read_timestamp {
            self.read_timestamp = ts;
        }
    }

    /// Record an admitted write.
    ///
    /// Admission already guarantees `ts >= write_timestamp`; a smaller value
    /// here is an evaluator bug, not a modeled failure.
    pub fn observe_write(&mut self, ts: Timestamp) {
        debug_assert!(ts >= self.write_timestamp);
        self.write_timestamp = ts;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Timestamp state for every declared data object.
///
/// Created once from the declared object list at the start of a run, owned
/// exclusively by the current schedule evaluation, and reset (not recreated)
/// between schedules. Objects are never added or removed after creation.
#[derive(Debug, Clone)]
pub struct ObjectRegistry<Variable> {
    states: HashMap<Variable, ObjectState>,
}

impl<Variable> ObjectRegistry<Variable>
where
    Variable: Eq + Hash,
{
    /// Build the registry from the declared object names, all states zeroed.
    pub fn new(objects: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            states: objects
                .into_iter()
                .map(|name| (name, ObjectState::default()))
                .collect(),
        }
    }

    /// Zero every object's timestamps for a new schedule evaluation.
    pub fn reset(&mut self) {
        for state in self.states.values_mut() {
            state.reset();
        }
    }

    /// Look up the state of a declared object.
    ///
    /// Returns `None` for a name that was never declared.
    #[must_use]
    pub fn get(&self, object: &Variable) -> Option<&ObjectState> {
        self.states.get(object)
    }

    /// Mutable lookup, for the evaluator only.
    pub(crate) fn get_mut(&mut self, object: &Variable) -> Option<&mut ObjectState> {
        self.states.get_mut(object)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_read_is_monotonic() {
        let mut state = ObjectState::default();
        state.observe_read(5);
        assert_eq!(state.read_timestamp(), 5);
        state.observe_read(3);
        assert_eq!(state.read_timestamp(), 5);
        state.observe_read(9);
        assert_eq!(state.read_timestamp(), 9);
    }

    #[test]
    fn test_reset_zeroes_all_objects() {
        let mut registry = ObjectRegistry::new(["A", "B"]);
        registry
            .get_mut(&"A")
            .expect("A is declared")
            .observe_read(7);
        registry
            .get_mut(&"B")
            .expect("B is declared")
            .observe_write(4);

        registry.reset();

        assert_eq!(registry.get(&"A"), Some(&ObjectState::default()));
        assert_eq!(registry.get(&"B"), Some(&ObjectState::default()));
    }

    #[test]
    fn test_undeclared_object_is_absent() {
        let registry = ObjectRegistry::new(["A"]);
        assert!(registry.get(&"Z").is_none());
        assert_eq!(registry.len(), 1);
    }
}
