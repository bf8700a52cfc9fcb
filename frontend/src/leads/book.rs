use log::{info, warn};

use crate::leads::export;
use crate::leads::models::Lead;
use crate::leads::store::LeadStore;

/// The admin viewer's working copy of the lead collection.
///
/// It never watches storage. Changes made elsewhere show up only after
/// [`LeadBook::reload`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadBook {
    leads: Vec<Lead>,
    selected: Option<usize>,
}

impl LeadBook {
    pub fn load(store: &dyn LeadStore) -> Self {
        Self {
            leads: store.load(),
            selected: None,
        }
    }

    pub fn reload(&mut self, store: &dyn LeadStore) {
        *self = Self::load(store);
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.selected.and_then(|i| self.leads.get(i))
    }

    pub fn select(&mut self, index: usize) {
        if index < self.leads.len() {
            self.selected = Some(index);
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Removes the lead at `index` and persists the rest immediately.
    pub fn delete(&mut self, index: usize, store: &dyn LeadStore) {
        if index >= self.leads.len() {
            return;
        }
        let removed = self.leads.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        match store.save(&self.leads) {
            Ok(()) => info!("Deleted lead {}", removed.reference_code()),
            Err(e) => warn!("Deleting lead {} was not persisted: {}", removed.reference_code(), e),
        }
    }

    pub fn to_csv(&self) -> String {
        export::to_csv(&self.leads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::store::MemoryStore;

    fn leads(n: usize) -> Vec<Lead> {
        (0..n)
            .map(|i| Lead {
                name: format!("Lead {}", i),
                email: format!("lead{}@example.com", i),
                phone: format!("{}", 9000 + i),
                project_type: String::new(),
                budget: String::new(),
                message: String::new(),
                timestamp: format!("2026-10-{:02}T09:00:00.000Z", 18 - i),
            })
            .collect()
    }

    #[test]
    fn empty_storage_gives_empty_book() {
        let book = LeadBook::load(&MemoryStore::default());
        assert!(book.is_empty());
        assert!(book.selected_lead().is_none());
    }

    #[test]
    fn delete_removes_position_and_persists() {
        let original = leads(4);
        let store = MemoryStore::with_leads(&original);
        let mut book = LeadBook::load(&store);

        book.delete(1, &store);

        let mut expected = original.clone();
        expected.remove(1);
        assert_eq!(book.leads(), expected.as_slice());
        assert_eq!(store.load(), expected);
    }

    #[test]
    fn deleting_every_position_preserves_relative_order() {
        let original = leads(5);
        for k in 0..original.len() {
            let store = MemoryStore::with_leads(&original);
            let mut book = LeadBook::load(&store);
            book.delete(k, &store);

            let stored = store.load();
            assert_eq!(stored.len(), original.len() - 1);
            let expected: Vec<_> = original
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != k)
                .map(|(_, l)| l.clone())
                .collect();
            assert_eq!(stored, expected);
        }
    }

    #[test]
    fn out_of_range_delete_does_not_write() {
        let store = MemoryStore::with_raw("[]");
        let mut book = LeadBook::load(&store);
        book.delete(0, &store);
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn deleting_selected_clears_selection() {
        let store = MemoryStore::with_leads(&leads(3));
        let mut book = LeadBook::load(&store);
        book.select(1);
        book.delete(1, &store);
        assert_eq!(book.selected_index(), None);
    }

    #[test]
    fn selection_follows_its_record_when_earlier_entry_is_deleted() {
        let original = leads(3);
        let store = MemoryStore::with_leads(&original);
        let mut book = LeadBook::load(&store);
        book.select(2);
        book.delete(0, &store);
        assert_eq!(book.selected_lead(), Some(&original[2]));

        book.delete(1, &store);
        assert_eq!(book.selected_index(), None);
    }

    #[test]
    fn selection_before_deleted_entry_is_untouched() {
        let original = leads(3);
        let store = MemoryStore::with_leads(&original);
        let mut book = LeadBook::load(&store);
        book.select(0);
        book.delete(2, &store);
        assert_eq!(book.selected_lead(), Some(&original[0]));
    }

    #[test]
    fn select_ignores_out_of_range() {
        let store = MemoryStore::with_leads(&leads(2));
        let mut book = LeadBook::load(&store);
        book.select(5);
        assert_eq!(book.selected_index(), None);
        book.select(1);
        book.deselect();
        assert_eq!(book.selected_index(), None);
    }

    #[test]
    fn reload_picks_up_external_writes_and_clears_selection() {
        let store = MemoryStore::with_leads(&leads(1));
        let mut book = LeadBook::load(&store);
        book.select(0);

        store.save(&leads(3)).unwrap();
        assert_eq!(book.len(), 1);

        book.reload(&store);
        assert_eq!(book.len(), 3);
        assert_eq!(book.selected_index(), None);
    }

    #[test]
    fn csv_has_header_plus_one_row_per_lead() {
        let store = MemoryStore::with_leads(&leads(3));
        let book = LeadBook::load(&store);
        assert_eq!(book.to_csv().lines().count(), 4);
    }
}
