use web_sys::MouseEvent;
use yew::prelude::*;

use crate::admin::guide::lead_count_label;
use crate::admin::shortcuts::AdminShortcut;
use crate::leads::context::LeadServices;

#[derive(Properties, PartialEq)]
pub struct AdminControlsProps {
    pub on_open_viewer: Callback<()>,
    pub on_open_guide: Callback<()>,
    pub on_hide: Callback<()>,
}

/// Floating buttons plus a cheat sheet, shown after Ctrl+Shift+A.
#[function_component]
pub fn AdminControls(props: &AdminControlsProps) -> Html {
    let services = use_context::<LeadServices>().unwrap_or_else(LeadServices::browser);
    let lead_count = services.store.load().len();

    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <>
            <style>
                {r#"
                    .admin-fab-stack {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 40;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .admin-fab {
                        position: relative;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: none;
                        color: #fff;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                        cursor: pointer;
                    }
                    .admin-fab.help { background: #2563eb; }
                    .admin-fab.viewer { background: #c9a96e; }
                    .admin-fab.leads { background: #3d5a5a; }
                    .admin-fab-badge {
                        position: absolute;
                        top: -0.4rem;
                        right: -0.4rem;
                        background: #c9a96e;
                        border-radius: 50%;
                        min-width: 1.25rem;
                        font-size: 0.75rem;
                    }
                    .admin-cheatsheet {
                        position: fixed;
                        bottom: 1rem;
                        left: 1rem;
                        z-index: 30;
                        background: #fff;
                        padding: 1rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        max-width: 20rem;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="admin-fab-stack">
                <button class="admin-fab help" title="Admin Help Guide" onclick={emit(&props.on_open_guide)}>{"?"}</button>
                <button class="admin-fab viewer" title="Open Lead Viewer" onclick={emit(&props.on_open_viewer)}>{"CRM"}</button>
                if lead_count > 0 {
                    <button
                        class="admin-fab leads"
                        title={format!("{} - Click to View", lead_count_label(lead_count))}
                        onclick={emit(&props.on_open_viewer)}
                    >
                        {"👥"}
                        <span class="admin-fab-badge">{lead_count.to_string()}</span>
                    </button>
                }
            </div>
            <div class="admin-cheatsheet">
                <h4>{"Admin Panel Active"}</h4>
                <p>{"• Blue: Help & Instructions"}</p>
                <p>{"• Gold: Lead Viewer"}</p>
                <p>{"• Green: Lead notifications"}</p>
                <hr />
                <p>{"Shortcuts:"}</p>
                <p>{format!("• {}: Quick lead viewer", AdminShortcut::OpenViewer.combo())}</p>
                <p>{format!("• {}: Help guide", AdminShortcut::OpenGuide.combo())}</p>
                <p>{format!("• {}: Toggle panel", AdminShortcut::TogglePanel.combo())}</p>
                <button class="link-button" onclick={emit(&props.on_hide)}>{"Hide Admin Panel"}</button>
            </div>
        </>
    }
}
