use log::warn;
use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;
use crate::leads::models::Lead;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to serialize leads: {0}")]
    Serialize(String),
    #[error("failed to write leads: {0}")]
    Write(String),
}

/// Access to the persisted lead collection.
///
/// Every write replaces the whole collection. There is no locking, so two
/// tabs writing around the same moment resolve as last writer wins.
pub trait LeadStore {
    /// Reads the collection. Absent or unreadable data reads as empty.
    fn load(&self) -> Vec<Lead>;

    fn save(&self, leads: &[Lead]) -> Result<(), StoreError>;

    /// Read-modify-write that puts `lead` at the front.
    fn prepend(&self, lead: Lead) -> Result<(), StoreError> {
        let mut leads = self.load();
        leads.insert(0, lead);
        self.save(&leads)
    }
}

pub fn decode_leads(raw: Option<&str>) -> Vec<Lead> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Lead>>(raw) {
        Ok(leads) => leads,
        Err(e) => {
            warn!("Stored leads are unreadable, treating as empty: {}", e);
            Vec::new()
        }
    }
}

pub fn encode_leads(leads: &[Lead]) -> Result<String, StoreError> {
    serde_json::to_string(leads).map_err(|e| StoreError::Serialize(e.to_string()))
}

/// Lead collection in `window.localStorage`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStore {
    key: &'static str,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self {
            key: config::LEADS_STORAGE_KEY,
        }
    }
}

impl BrowserStore {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl LeadStore for BrowserStore {
    fn load(&self) -> Vec<Lead> {
        let raw = Self::storage().and_then(|storage| storage.get_item(self.key).ok().flatten());
        decode_leads(raw.as_deref())
    }

    fn save(&self, leads: &[Lead]) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        let raw = encode_leads(leads)?;
        storage
            .set_item(self.key, &raw)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// In-memory stand-in for `localStorage`, holding the raw serialized value.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    raw: std::cell::RefCell<Option<String>>,
    fail_writes: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::default();
        store.raw.replace(Some(raw.to_string()));
        store
    }

    pub fn with_leads(leads: &[Lead]) -> Self {
        Self::with_raw(&encode_leads(leads).unwrap())
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    /// Makes every later save fail the way a full quota does.
    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }
}

#[cfg(test)]
impl LeadStore for MemoryStore {
    fn load(&self) -> Vec<Lead> {
        decode_leads(self.raw.borrow().as_deref())
    }

    fn save(&self, leads: &[Lead]) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Write("QuotaExceededError".to_string()));
        }
        let raw = encode_leads(leads)?;
        self.raw.replace(Some(raw));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str) -> Lead {
        Lead {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "123".to_string(),
            project_type: String::new(),
            budget: String::new(),
            message: String::new(),
            timestamp: "2026-10-18T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn absent_key_reads_as_empty() {
        assert!(MemoryStore::default().load().is_empty());
        assert!(decode_leads(None).is_empty());
    }

    #[test]
    fn corrupt_value_reads_as_empty() {
        assert!(MemoryStore::with_raw("{not json").load().is_empty());
        assert!(MemoryStore::with_raw("{\"name\":\"A\"}").load().is_empty());
    }

    #[test]
    fn prepend_keeps_newest_first() {
        let store = MemoryStore::default();
        store.prepend(lead("First")).unwrap();
        store.prepend(lead("Second")).unwrap();

        let names: Vec<_> = store.load().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn prepend_onto_corrupt_value_starts_fresh() {
        let store = MemoryStore::with_raw("[oops");
        store.prepend(lead("Only")).unwrap();
        assert_eq!(store.load(), vec![lead("Only")]);
    }

    #[test]
    fn failed_write_leaves_previous_value() {
        let store = MemoryStore::with_leads(&[lead("Kept")]);
        store.fail_writes();
        assert!(matches!(store.prepend(lead("Lost")), Err(StoreError::Write(_))));
        assert_eq!(store.load(), vec![lead("Kept")]);
    }

    #[test]
    fn stored_value_is_a_json_array() {
        let store = MemoryStore::default();
        store.save(&[lead("A")]).unwrap();
        let raw = store.raw().unwrap();
        assert!(raw.starts_with('[') && raw.ends_with(']'));
    }
}
