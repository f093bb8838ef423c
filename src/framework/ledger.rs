//! # Ledger
//!
//! Append-only storage for the entities owned by a [`ResourceActor`](crate::framework::ResourceActor).
//! Entries are never removed. Because the actor hands out ids from a counter, the entries are
//! sorted by id and a lookup is a binary search.

use crate::framework::ActorEntity;

/// Entities in creation order.
#[derive(Debug, Clone)]
pub struct Ledger<T: ActorEntity> {
    entries: Vec<T>,
}

impl<T: ActorEntity> Default for Ledger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Ledger<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entity. Its id must be greater than every id already stored.
    pub fn append(&mut self, item: T) {
        debug_assert!(
            self.entries.last().map_or(true, |last| last.id() < item.id()),
            "ledger ids must be strictly increasing"
        );
        self.entries.push(item);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.position(id).map(|index| &self.entries[index])
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        let index = self.position(id)?;
        Some(&mut self.entries[index])
    }

    /// First entity matching `predicate`, in creation order.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.entries.iter().find(|item| predicate(item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Owned copy of every entity, in creation order.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.entries.binary_search_by(|item| item.id().cmp(id)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u64,
        value: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally error")]
    struct TallyError;

    impl ActorEntity for Tally {
        type Id = u64;
        type Create = u32;
        type Admitted = u32;
        type Action = ();
        type ActionResult = ();
        type State = ();
        type Summary = usize;
        type Context = ();
        type Error = TallyError;

        fn id(&self) -> u64 {
            self.id
        }

        fn admit(params: u32, _: &Ledger<Self>, _: &()) -> Result<u32, TallyError> {
            Ok(params)
        }

        fn commit(id: u64, value: u32, _: &mut ()) -> Self {
            Self { id, value }
        }

        fn handle_action(&mut self, _: (), _: &mut ()) -> Result<(), TallyError> {
            Ok(())
        }

        fn summarize(ledger: &Ledger<Self>, _: &()) -> usize {
            ledger.len()
        }
    }

    fn ledger_with(ids: &[u64]) -> Ledger<Tally> {
        let mut ledger = Ledger::new();
        for &id in ids {
            ledger.append(Tally { id, value: id as u32 * 10 });
        }
        ledger
    }

    #[test]
    fn test_lookup_by_id() {
        let ledger = ledger_with(&[1, 2, 5, 9]);
        assert_eq!(ledger.get(&5).map(|t| t.value), Some(50));
        assert!(ledger.get(&3).is_none());
        assert!(ledger.get(&10).is_none());
    }

    #[test]
    fn test_get_mut_changes_entry_in_place() {
        let mut ledger = ledger_with(&[1, 2]);
        if let Some(tally) = ledger.get_mut(&2) {
            tally.value = 7;
        }
        assert_eq!(ledger.get(&2).map(|t| t.value), Some(7));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_snapshot_keeps_creation_order() {
        let ledger = ledger_with(&[1, 2, 3]);
        let ids: Vec<u64> = ledger.snapshot().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ledger.find(|t| t.value > 10).map(|t| t.id), Some(2));
    }
}
