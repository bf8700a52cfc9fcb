use chrono::{Local, NaiveDate, TimeZone};
use js_sys::Array;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::leads::models::{Lead, NOT_SPECIFIED};

pub const CSV_HEADER: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Project Type",
    "Budget",
    "Message",
    "Date",
];

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn or_not_specified(code: &str) -> &str {
    if code.is_empty() {
        NOT_SPECIFIED
    } else {
        code
    }
}

pub fn csv_row(lead: &Lead) -> String {
    csv_row_in(lead, &Local)
}

fn csv_row_in<Tz: TimeZone>(lead: &Lead, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let message = lead.message.replace(',', ";");
    let date = lead.display_date_in(tz);
    let cells = [
        lead.name.as_str(),
        lead.email.as_str(),
        lead.phone.as_str(),
        or_not_specified(&lead.project_type),
        or_not_specified(&lead.budget),
        message.as_str(),
        date.as_str(),
    ];
    cells.iter().map(|cell| quote(cell)).collect::<Vec<_>>().join(",")
}

/// Whole collection as CSV, header first, rows in collection order.
pub fn to_csv(leads: &[Lead]) -> String {
    let header = CSV_HEADER.iter().map(|cell| quote(cell)).collect::<Vec<_>>().join(",");
    std::iter::once(header)
        .chain(leads.iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("easydecor_leads_{}.csv", today.format("%Y-%m-%d"))
}

/// Hands `csv` to the browser as a file download. Failures are logged only.
pub fn download_csv(filename: &str, csv: &str) {
    if let Err(e) = try_download(filename, csv) {
        warn!("CSV download failed: {:?}", e);
    }
}

fn try_download(filename: &str, csv: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let parts = Array::of1(&JsValue::from_str(csv));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn lead(message: &str) -> Lead {
        Lead {
            name: "Rajesh".to_string(),
            email: "rajesh@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            project_type: String::new(),
            budget: "10-20".to_string(),
            message: message.to_string(),
            timestamp: "2026-10-18T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn header_row_comes_first() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv,
            "\"Name\",\"Email\",\"Phone\",\"Project Type\",\"Budget\",\"Message\",\"Date\""
        );
    }

    #[test]
    fn commas_in_message_become_semicolons() {
        let row = csv_row(&lead("Two rooms, one kitchen, fast"));
        assert!(row.contains("\"Two rooms; one kitchen; fast\""));

        let inner = row.trim_start_matches('"').trim_end_matches('"');
        assert_eq!(inner.split("\",\"").count(), 7);
    }

    #[test]
    fn empty_codes_export_as_not_specified_and_codes_stay_raw() {
        let row = csv_row(&lead(""));
        assert!(row.contains("\"Not specified\",\"10-20\""));
    }

    #[test]
    fn date_column_is_the_calendar_date_in_the_zone() {
        let east = FixedOffset::east_opt(14 * 3600).unwrap();
        let west = FixedOffset::west_opt(11 * 3600).unwrap();
        assert!(csv_row_in(&lead("hi"), &east).ends_with("\"19/10/2026\""));
        assert!(csv_row_in(&lead("hi"), &west).ends_with("\"18/10/2026\""));

        let row = csv_row(&lead("hi"));
        let expected = format!("\"{}\"", lead("hi").display_date());
        assert!(row.ends_with(&expected), "{}", row);
    }

    #[test]
    fn quotes_inside_cells_are_doubled() {
        let row = csv_row(&lead("the \"big\" room"));
        assert!(row.contains("\"the \"\"big\"\" room\""));
    }

    #[test]
    fn one_row_per_lead_in_collection_order() {
        let mut second = lead("b");
        second.name = "Ananya".to_string();
        let csv = to_csv(&[lead("a"), second]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"Rajesh\""));
        assert!(lines[2].starts_with("\"Ananya\""));
    }

    #[test]
    fn filename_embeds_the_date() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(export_filename(day), "easydecor_leads_2026-10-18.csv");
    }
}
