use log::info;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::admin::shortcuts::{shortcut_summary, AdminShortcut, ALL_SHORTCUTS};
use crate::leads::context::LeadServices;

#[derive(Properties, PartialEq)]
pub struct AdminGuideProps {
    pub on_close: Callback<()>,
    pub on_open_viewer: Callback<()>,
}

pub fn lead_count_label(count: usize) -> String {
    format!("{} Lead{}", count, if count == 1 { "" } else { "s" })
}

fn shortcut_hint(shortcut: AdminShortcut) -> &'static str {
    match shortcut {
        AdminShortcut::OpenViewer => "Instantly open the lead viewer to see all consultation requests.",
        AdminShortcut::TogglePanel => "Shows admin buttons on screen for easier access.",
        AdminShortcut::OpenGuide => "Opens this help guide anytime you need it.",
        AdminShortcut::OwnerSetup => "Shows this guide for first-time setup.",
    }
}

#[function_component]
pub fn AdminGuide(props: &AdminGuideProps) -> Html {
    let services = use_context::<LeadServices>().unwrap_or_else(LeadServices::browser);
    let lead_count = services.store.load().len();
    let clipboard = use_clipboard();
    let copied = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let open_viewer = {
        let on_open_viewer = props.on_open_viewer.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_open_viewer.emit(());
            on_close.emit(());
        })
    };

    let copy_shortcuts = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let page_url = window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            clipboard.write_text(shortcut_summary(&page_url));
            info!("Admin shortcuts copied to clipboard");
            copied.set(true);
        })
    };

    let open_label = if lead_count > 0 {
        format!("View {}", lead_count_label(lead_count))
    } else {
        "Open Lead Viewer".to_string()
    };

    html! {
        <div class="admin-overlay">
            <div class="admin-guide">
                <div class="admin-guide-header">
                    <div>
                        <h2>{"EasyDecor Website Admin Guide"}</h2>
                        <p>{"Private access for website owners"}</p>
                    </div>
                    <button class="icon-button" title="Close" onclick={close}>{"✕"}</button>
                </div>

                <div class="guide-notice warning">
                    <h4>{"These controls are hidden, not protected"}</h4>
                    <p>{"Nothing here asks for a password. Anyone who learns the shortcuts below can read, delete and export every lead stored in this browser."}</p>
                </div>

                <div class="guide-status">
                    <h3>{"Lead Management Status"}</h3>
                    <div class="guide-stat">
                        <span>{"Total Leads"}</span>
                        <strong>{lead_count.to_string()}</strong>
                    </div>
                    if lead_count > 0 {
                        <button class="primary-button" onclick={open_viewer.clone()}>
                            {format!("View All {} →", lead_count_label(lead_count))}
                        </button>
                    }
                </div>

                <h3>{"Keyboard Shortcuts"}</h3>
                <div class="guide-shortcuts">
                    {
                        for ALL_SHORTCUTS.iter().map(|shortcut| html! {
                            <div class="guide-shortcut">
                                <span class="guide-shortcut-title">{shortcut.description()}</span>
                                <code>{shortcut.combo()}</code>
                                <p>{shortcut_hint(*shortcut)}</p>
                            </div>
                        })
                    }
                </div>

                <h3>{"Lead Management Features"}</h3>
                <ul class="guide-features">
                    <li><strong>{"View lead details: "}</strong>{"name, contact details, project type, budget range and message."}</li>
                    <li><strong>{"Export to CSV: "}</strong>{"download every lead as a spreadsheet for backup or other tools."}</li>
                    <li><strong>{"One-click contact: "}</strong>{"email or call a lead straight from the viewer."}</li>
                </ul>

                <div class="guide-notice">
                    <h4>{"Current limitations"}</h4>
                    <ul>
                        <li>{"Leads live only in this browser's storage."}</li>
                        <li>{"They are only visible from this device."}</li>
                        <li>{"There are no email notifications for new leads."}</li>
                        <li>{"Export regularly: clearing browser data deletes every lead."}</li>
                    </ul>
                </div>

                <div class="guide-actions">
                    <button class="primary-button" onclick={open_viewer}>{open_label}</button>
                    <button class="secondary-button" onclick={copy_shortcuts}>
                        { if *copied { "Copied!" } else { "Copy Shortcuts to Save" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
