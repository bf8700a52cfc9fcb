use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::config;
use crate::leads::models::Lead;

/// Message posted to an embedding page when a lead is captured.
#[derive(Serialize, Debug, PartialEq)]
pub struct LeadMessage<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: &'a Lead,
}

impl<'a> LeadMessage<'a> {
    pub fn new(lead: &'a Lead) -> Self {
        Self {
            kind: config::LEAD_MESSAGE_TYPE,
            data: lead,
        }
    }
}

/// Best-effort announcement of a newly captured lead.
///
/// Delivery is never confirmed and failures are not reported to the caller.
pub trait LeadNotifier {
    fn notify(&self, lead: &Lead);
}

/// Posts to `window.parent` when the site runs inside a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParentWindowNotifier;

impl LeadNotifier for ParentWindowNotifier {
    fn notify(&self, lead: &Lead) {
        let Some(window) = window() else {
            return;
        };
        let Ok(Some(parent)) = window.parent() else {
            return;
        };
        let parent_js: &JsValue = parent.as_ref();
        let window_js: &JsValue = window.as_ref();
        if parent_js == window_js {
            return;
        }

        let payload = match serde_wasm_bindgen::to_value(&LeadMessage::new(lead)) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not encode lead message: {}", e);
                return;
            }
        };
        if let Err(e) = parent.post_message(&payload, "*") {
            warn!("postMessage to parent failed: {:?}", e);
        } else {
            debug!("Lead forwarded to parent window");
        }
    }
}

/// Keeps every lead it is told about.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: std::cell::RefCell<Vec<Lead>>,
}

#[cfg(test)]
impl LeadNotifier for RecordingNotifier {
    fn notify(&self, lead: &Lead) {
        self.sent.borrow_mut().push(lead.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_type_tag_and_record() {
        let lead = Lead {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "123".to_string(),
            project_type: "office".to_string(),
            budget: "10-20".to_string(),
            message: String::new(),
            timestamp: "2026-10-18T10:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(LeadMessage::new(&lead)).unwrap();
        assert_eq!(json["type"], "EASYDECOR_LEAD");
        assert_eq!(json["data"]["projectType"], "office");
        assert_eq!(json["data"]["email"], "a@x.com");
    }
}
