use chrono::Utc;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::leads::book::LeadBook;
use crate::leads::context::LeadServices;
use crate::leads::export::{download_csv, export_filename};
use crate::leads::models::{format_budget, format_project_type, Lead, NOT_SPECIFIED};

#[derive(Properties, PartialEq)]
pub struct LeadViewerProps {
    pub on_close: Callback<()>,
}

fn mailto_link(lead: &Lead) -> String {
    let subject = "Re: Your Interior Design Consultation Request";
    let body = format!(
        "Dear {},\n\nThank you for your interest in EasyDecor Studio. I would like to schedule a consultation to discuss your project.\n\nBest regards,\nEasyDecor Studio Team",
        lead.name
    );
    format!(
        "mailto:{}?subject={}&body={}",
        lead.email,
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}

fn label_or_not_specified(label: &str) -> String {
    if label.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        label.to_string()
    }
}

fn render_details(lead: &Lead, on_deselect: Callback<MouseEvent>) -> Html {
    html! {
        <div class="lead-details">
            <div class="lead-details-header">
                <h3>{"Lead Details"}</h3>
                <button class="icon-button" title="Hide details" onclick={on_deselect}>{"✕"}</button>
            </div>

            <h4>{"Personal Information"}</h4>
            <div class="detail-card">
                <label>{"Name"}</label>
                <p>{lead.name.clone()}</p>
                <label>{"Email"}</label>
                <p><a href={format!("mailto:{}", lead.email)}>{lead.email.clone()}</a></p>
                <label>{"Phone"}</label>
                <p><a href={format!("tel:{}", lead.phone)}>{lead.phone.clone()}</a></p>
            </div>

            <h4>{"Project Information"}</h4>
            <div class="detail-card">
                <label>{"Project Type"}</label>
                <p>{label_or_not_specified(format_project_type(&lead.project_type))}</p>
                <label>{"Budget Range"}</label>
                <p>{label_or_not_specified(format_budget(&lead.budget))}</p>
            </div>

            if !lead.message.is_empty() {
                <h4>{"Message"}</h4>
                <div class="detail-card">
                    <p class="lead-message">{lead.message.clone()}</p>
                </div>
            }

            <h4>{"Submission Details"}</h4>
            <div class="detail-card">
                <p>{lead.display_date_time()}</p>
                <p class="lead-reference">{lead.reference_code()}</p>
            </div>

            <div class="lead-actions">
                <a class="action-email" href={mailto_link(lead)}>{"Send Email"}</a>
                <a class="action-call" href={format!("tel:{}", lead.phone)}>{"Call Now"}</a>
            </div>
        </div>
    }
}

#[function_component]
pub fn LeadViewer(props: &LeadViewerProps) -> Html {
    let services = use_context::<LeadServices>().unwrap_or_else(LeadServices::browser);
    let book = use_state(LeadBook::default);

    {
        let book = book.clone();
        let store = services.store.clone();
        use_effect_with_deps(
            move |_| {
                let loaded = LeadBook::load(&*store);
                info!("Lead viewer opened with {} leads", loaded.len());
                book.set(loaded);
                || ()
            },
            (),
        );
    }

    let reload = {
        let book = book.clone();
        let store = services.store.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*book).clone();
            next.reload(&*store);
            book.set(next);
        })
    };

    let export = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| {
            let filename = export_filename(Utc::now().date_naive());
            download_csv(&filename, &book.to_csv());
            info!("Exported {} leads to {}", book.len(), filename);
        })
    };

    let deselect = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*book).clone();
            next.deselect();
            book.set(next);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let rows = book.leads().iter().enumerate().map(|(index, lead)| {
        let is_selected = book.selected_index() == Some(index);
        let onclick = {
            let book = book.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*book).clone();
                next.select(index);
                book.set(next);
            })
        };
        let ondelete = {
            let book = book.clone();
            let store = services.store.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                let mut next = (*book).clone();
                next.delete(index, &*store);
                book.set(next);
            })
        };
        html! {
            <div key={index} class={classes!("lead-row", is_selected.then(|| "selected"))} onclick={onclick}>
                <div class="lead-row-main">
                    <h4>{lead.name.clone()}</h4>
                    <p>{lead.email.clone()}</p>
                    <p>{lead.phone.clone()}</p>
                    if !lead.project_type.is_empty() {
                        <p class="lead-row-type">{format_project_type(&lead.project_type)}</p>
                    }
                </div>
                <div class="lead-row-side">
                    <p class="lead-row-date">{lead.display_date()}</p>
                    <button class="delete-button" title="Delete lead" onclick={ondelete}>{"🗑"}</button>
                </div>
            </div>
        }
    });

    html! {
        <div class="admin-overlay">
            <style>
                {r#"
                    .admin-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .lead-viewer {
                        background: #fff;
                        border-radius: 16px;
                        width: 100%;
                        max-width: 72rem;
                        max-height: 90vh;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                    }
                    .lead-viewer-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .lead-viewer-body {
                        display: flex;
                        height: calc(90vh - 100px);
                    }
                    .lead-list, .lead-detail-pane {
                        width: 50%;
                        overflow-y: auto;
                        padding: 1.5rem;
                    }
                    .lead-list {
                        border-right: 1px solid #e5e7eb;
                    }
                    .lead-row {
                        display: flex;
                        justify-content: space-between;
                        padding: 1rem;
                        margin-bottom: 0.75rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        cursor: pointer;
                    }
                    .lead-row.selected {
                        border-color: #c9a96e;
                        background: #f5efe6;
                    }
                    .detail-card {
                        background: #f9fafb;
                        border-radius: 8px;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .lead-actions {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .action-email, .action-call, .export-button {
                        flex: 1;
                        text-align: center;
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        color: #fff;
                        text-decoration: none;
                        border: none;
                    }
                    .action-email { background: #3d5a5a; }
                    .action-call, .export-button { background: #c9a96e; }
                    .delete-button { color: #f87171; background: none; border: none; }
                "#}
            </style>
            <div class="lead-viewer">
                <div class="lead-viewer-header">
                    <div>
                        <h2>{"Lead Management"}</h2>
                        <p>{"Manage your consultation requests"}</p>
                    </div>
                    <div>
                        if !book.is_empty() {
                            <button class="export-button" onclick={export}>{"Export CSV"}</button>
                        }
                        <button class="icon-button" title="Close" onclick={close}>{"✕"}</button>
                    </div>
                </div>
                <div class="lead-viewer-body">
                    <div class="lead-list">
                        <div class="lead-list-header">
                            <h3>{format!("All Leads ({})", book.len())}</h3>
                            <button class="refresh-button" onclick={reload}>{"Refresh"}</button>
                        </div>
                        if book.is_empty() {
                            <div class="empty-state">
                                <p>{"No leads yet"}</p>
                                <p>{"Consultation requests will appear here"}</p>
                            </div>
                        } else {
                            { for rows }
                        }
                    </div>
                    <div class="lead-detail-pane">
                        {
                            match book.selected_lead() {
                                Some(lead) => render_details(lead, deselect),
                                None => html! {
                                    <div class="empty-state">
                                        <p>{"Select a lead to view details"}</p>
                                    </div>
                                },
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        let lead = Lead {
            name: "Shreya Das".to_string(),
            email: "shreya@example.com".to_string(),
            phone: "1".to_string(),
            project_type: String::new(),
            budget: String::new(),
            message: String::new(),
            timestamp: "2026-10-18T10:00:00.000Z".to_string(),
        };
        let link = mailto_link(&lead);
        assert!(link.starts_with("mailto:shreya@example.com?subject=Re%3A%20Your%20Interior"));
        assert!(link.contains("Dear%20Shreya%20Das%2C%0A%0A"));
    }

    #[test]
    fn empty_labels_read_not_specified() {
        assert_eq!(label_or_not_specified(format_budget("")), "Not specified");
        assert_eq!(label_or_not_specified(format_budget("20-50")), "₹20 - 50 Lakhs");
    }
}
