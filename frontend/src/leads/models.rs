use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not specified";
const INVALID_DATE: &str = "Invalid Date";

/// (code, label) pairs offered by the contact form's project type select.
pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("complete-home", "Complete Home Design"),
    ("living-room", "Living Room"),
    ("bedroom", "Bedroom"),
    ("kitchen", "Kitchen"),
    ("bathroom", "Bathroom"),
    ("office", "Office"),
    ("renovation", "Renovation"),
];

pub const BUDGETS: &[(&str, &str)] = &[
    ("under-5", "Under ₹5 Lakhs"),
    ("5-10", "₹5 - 10 Lakhs"),
    ("10-20", "₹10 - 20 Lakhs"),
    ("20-50", "₹20 - 50 Lakhs"),
    ("above-50", "Above ₹50 Lakhs"),
];

/// A consultation request. Immutable once stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub message: String,
    pub timestamp: String,
}

impl Lead {
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Short reference shown to the visitor, e.g. `ED-042123`.
    pub fn reference_code(&self) -> String {
        let millis = self.submitted_at().map_or(0, |dt| dt.timestamp_millis());
        format!("ED-{:06}", millis.rem_euclid(1_000_000))
    }

    /// Local calendar date, `D/M/YYYY`.
    pub fn display_date(&self) -> String {
        self.display_date_in(&Local)
    }

    pub fn display_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.submitted_at()
            .map(|dt| dt.with_timezone(tz).format("%-d/%-m/%Y").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string())
    }

    pub fn display_date_time(&self) -> String {
        self.submitted_at()
            .map(|dt| {
                dt.with_timezone(&Local)
                    .format("%-d/%-m/%Y, %-I:%M:%S %P")
                    .to_string()
            })
            .unwrap_or_else(|| INVALID_DATE.to_string())
    }
}

/// ISO-8601 instant with millisecond precision and a `Z` suffix.
pub fn lead_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn lookup<'a>(table: &[(&str, &'a str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |&(_, label)| label)
}

/// Label for a project type code. Unknown codes pass through unchanged.
pub fn format_project_type(code: &str) -> &str {
    lookup(PROJECT_TYPES, code)
}

/// Label for a budget bracket code. Unknown codes pass through unchanged.
pub fn format_budget(code: &str) -> &str {
    lookup(BUDGETS, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn lead_at(timestamp: &str) -> Lead {
        Lead {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            phone: "98765".to_string(),
            project_type: String::new(),
            budget: String::new(),
            message: String::new(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn budget_labels_use_lookup_table() {
        assert_eq!(format_budget("5-10"), "₹5 - 10 Lakhs");
        assert_eq!(format_budget("above-50"), "Above ₹50 Lakhs");
        assert_eq!(format_budget("custom-range"), "custom-range");
    }

    #[test]
    fn project_type_labels_pass_unknown_codes_through() {
        assert_eq!(format_project_type("living-room"), "Living Room");
        assert_eq!(format_project_type("garden"), "garden");
        assert_eq!(format_project_type(""), "");
    }

    #[test]
    fn timestamp_matches_browser_iso_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 10, 15, 42).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(lead_timestamp(now), "2026-10-18T10:15:42.123Z");
    }

    #[test]
    fn reference_code_uses_last_six_millisecond_digits() {
        let lead = lead_at("2026-10-18T10:15:42.123Z");
        let millis = Utc.with_ymd_and_hms(2026, 10, 18, 10, 15, 42).unwrap().timestamp_millis() + 123;
        assert_eq!(lead.reference_code(), format!("ED-{:06}", millis % 1_000_000));
        assert_eq!(lead.reference_code().len(), 9);
    }

    #[test]
    fn display_date_follows_the_given_zone() {
        let lead = lead_at("2026-10-18T12:00:00.000Z");
        let kiritimati = FixedOffset::east_opt(14 * 3600).unwrap();
        let pago_pago = FixedOffset::west_opt(11 * 3600).unwrap();
        assert_eq!(lead.display_date_in(&Utc), "18/10/2026");
        assert_eq!(lead.display_date_in(&kiritimati), "19/10/2026");
        assert_eq!(lead.display_date_in(&pago_pago), "18/10/2026");
        assert_eq!(lead.display_date(), lead.display_date_in(&Local));
    }

    #[test]
    fn malformed_timestamp_only_affects_display() {
        let lead = lead_at("yesterday");
        assert_eq!(lead.display_date(), "Invalid Date");
        assert_eq!(lead.display_date_time(), "Invalid Date");
        assert_eq!(lead.reference_code(), "ED-000000");
    }

    #[test]
    fn decodes_records_written_by_the_browser() {
        let raw = r#"{"name":"A","email":"a@x.com","phone":"123","projectType":"kitchen","budget":"","message":"hi","timestamp":"2026-01-02T03:04:05.006Z"}"#;
        let lead: Lead = serde_json::from_str(raw).unwrap();
        assert_eq!(lead.project_type, "kitchen");
        assert_eq!(lead.message, "hi");

        let sparse = r#"{"name":"B","email":"b@x.com","phone":"9","timestamp":"2026-01-02T03:04:05.006Z"}"#;
        let lead: Lead = serde_json::from_str(sparse).unwrap();
        assert_eq!(lead.budget, "");
        assert_eq!(lead.message, "");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&lead_at("2026-01-02T03:04:05.006Z")).unwrap();
        assert!(json.contains("\"projectType\":\"\""));
        assert!(!json.contains("project_type"));
    }
}
