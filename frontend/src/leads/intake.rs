use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;

use crate::leads::models::{lead_timestamp, Lead};
use crate::leads::notify::LeadNotifier;
use crate::leads::store::LeadStore;

#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Visitor input from the contact form, before it becomes a [`Lead`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

impl LeadForm {
    /// Only presence is checked. Email and phone formats are left to the
    /// input types.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(IntakeError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn into_lead(self, now: DateTime<Utc>) -> Lead {
        Lead {
            name: self.name,
            email: self.email,
            phone: self.phone,
            project_type: self.project_type,
            budget: self.budget,
            message: self.message,
            timestamp: lead_timestamp(now),
        }
    }
}

/// Stamps the form, prepends it to the stored collection and returns the lead.
///
/// A failed save is logged and otherwise ignored, so the visitor is still
/// thanked even when the browser refused to keep the record.
pub fn record_lead(
    store: &dyn LeadStore,
    form: LeadForm,
    now: DateTime<Utc>,
) -> Result<Lead, IntakeError> {
    form.validate()?;
    let lead = form.into_lead(now);
    match store.prepend(lead.clone()) {
        Ok(()) => info!("Captured lead {}", lead.reference_code()),
        Err(e) => warn!("Lead {} was not persisted: {}", lead.reference_code(), e),
    }
    Ok(lead)
}

/// Runs once the submit delay has elapsed: announces the lead and returns the
/// reference shown on the thank-you panel.
pub fn complete_submission(lead: &Lead, notifier: &dyn LeadNotifier) -> String {
    notifier.notify(lead);
    lead.reference_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::notify::RecordingNotifier;
    use crate::leads::store::MemoryStore;
    use chrono::Duration;

    fn form(name: &str, email: &str, phone: &str) -> LeadForm {
        LeadForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..LeadForm::default()
        }
    }

    #[test]
    fn valid_submission_is_stored_first() {
        let store = MemoryStore::default();
        let before = Utc::now();
        let lead = record_lead(&store, form("A", "a@x.com", "123"), Utc::now()).unwrap();
        let after = Utc::now();

        let stored = store.load();
        assert_eq!(stored[0], lead);
        assert_eq!(stored[0].name, "A");
        assert_eq!(stored[0].email, "a@x.com");
        assert_eq!(stored[0].phone, "123");
        assert_eq!(stored[0].project_type, "");
        assert_eq!(stored[0].budget, "");

        let at = stored[0].submitted_at().unwrap();
        assert!(at >= before - Duration::milliseconds(1) && at <= after);
    }

    #[test]
    fn sequential_submissions_are_newest_first() {
        let store = MemoryStore::default();
        let start = Utc::now();
        for i in 0..5 {
            let now = start + Duration::seconds(i);
            record_lead(&store, form(&format!("Lead {}", i), "x@y.z", "1"), now).unwrap();
        }

        let stored = store.load();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0].name, "Lead 4");
        assert_eq!(stored[4].name, "Lead 0");
    }

    #[test]
    fn blank_required_fields_are_rejected_without_writing() {
        let store = MemoryStore::default();
        assert_eq!(
            record_lead(&store, form("", "a@x.com", "1"), Utc::now()),
            Err(IntakeError::MissingField("name"))
        );
        assert_eq!(
            record_lead(&store, form("A", "   ", "1"), Utc::now()),
            Err(IntakeError::MissingField("email"))
        );
        assert_eq!(
            record_lead(&store, form("A", "a@x.com", ""), Utc::now()),
            Err(IntakeError::MissingField("phone"))
        );
        assert!(store.raw().is_none());
    }

    #[test]
    fn storage_failure_still_returns_the_lead() {
        let store = MemoryStore::default();
        store.fail_writes();
        let lead = record_lead(&store, form("A", "a@x.com", "123"), Utc::now()).unwrap();
        assert_eq!(lead.name, "A");
        assert!(store.load().is_empty());
    }

    #[test]
    fn optional_fields_are_kept_verbatim() {
        let store = MemoryStore::default();
        let input = LeadForm {
            project_type: "kitchen".to_string(),
            budget: "5-10".to_string(),
            message: "Open plan, please".to_string(),
            ..form("A", "a@x.com", "123")
        };
        let lead = record_lead(&store, input, Utc::now()).unwrap();
        assert_eq!(lead.project_type, "kitchen");
        assert_eq!(lead.budget, "5-10");
        assert_eq!(lead.message, "Open plan, please");
    }

    #[test]
    fn completing_a_submission_announces_the_stored_lead() {
        let store = MemoryStore::default();
        let notifier = RecordingNotifier::default();
        let lead = record_lead(&store, form("A", "a@x.com", "123"), Utc::now()).unwrap();

        let reference = complete_submission(&lead, &notifier);

        assert_eq!(reference, lead.reference_code());
        assert!(reference.starts_with("ED-"));
        assert_eq!(*notifier.sent.borrow(), store.load());
    }

    #[test]
    fn notifier_still_runs_when_storage_failed() {
        let store = MemoryStore::default();
        store.fail_writes();
        let notifier = RecordingNotifier::default();
        let lead = record_lead(&store, form("A", "a@x.com", "123"), Utc::now()).unwrap();

        complete_submission(&lead, &notifier);

        assert_eq!(*notifier.sent.borrow(), vec![lead]);
    }
}
