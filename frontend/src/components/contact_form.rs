use chrono::Utc;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::leads::context::LeadServices;
use crate::leads::intake::{complete_submission, record_lead, LeadForm};
use crate::leads::models::{BUDGETS, PROJECT_TYPES};
use crate::Route;

const BENEFITS: &[&str] = &[
    "Free initial consultation",
    "3D visualization included",
    "Local Kolkata expertise",
    "Transparent pricing",
    "On-time project delivery",
];

type FieldSetter = fn(&mut LeadForm, String);

fn input_setter(form: &UseStateHandle<LeadForm>, set: FieldSetter) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        set(&mut next, input.value());
        form.set(next);
    })
}

fn textarea_setter(form: &UseStateHandle<LeadForm>, set: FieldSetter) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        set(&mut next, input.value());
        form.set(next);
    })
}

fn select_setter(form: &UseStateHandle<LeadForm>, set: FieldSetter) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        set(&mut next, select.value());
        form.set(next);
    })
}

fn render_options(placeholder: &str, options: &[(&str, &str)], current: &str) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()}>{placeholder}</option>
            {
                for options.iter().map(|(code, label)| html! {
                    <option value={code.to_string()} selected={current == *code}>{*label}</option>
                })
            }
        </>
    }
}

/// "Book Your Free Consultation" section. Submissions become stored leads.
#[function_component]
pub fn ContactForm() -> Html {
    let services = use_context::<LeadServices>().unwrap_or_else(LeadServices::browser);
    let form = use_state(LeadForm::default);
    let submitting = use_state(|| false);
    let reference = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let reference = reference.clone();
        let error = error.clone();
        let services = services.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let lead = match record_lead(&*services.store, (*form).clone(), Utc::now()) {
                Ok(lead) => lead,
                Err(e) => {
                    error.set(Some(format!("Please check the form: {}.", e)));
                    return;
                }
            };
            error.set(None);
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let reference = reference.clone();
            let notifier = services.notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                form.set(LeadForm::default());
                submitting.set(false);
                reference.set(Some(complete_submission(&lead, &*notifier)));

                let reference = reference.clone();
                Timeout::new(config::SUCCESS_DISPLAY_MS, move || reference.set(None)).forget();
            });
        })
    };

    let contact_details = html! {
        <div class="contact-details">
            <div class="contact-detail">
                <div class="contact-detail-title">{"Call Us"}</div>
                <a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE_DISPLAY}</a>
            </div>
            <div class="contact-detail">
                <div class="contact-detail-title">{"Email Us"}</div>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
            </div>
            <div class="contact-detail">
                <div class="contact-detail-title">{"Visit Our Studio"}</div>
                { for config::STUDIO_ADDRESS.iter().map(|line| html! { <div>{*line}</div> }) }
            </div>
            <div class="contact-detail">
                <div class="contact-detail-title">{"Business Hours"}</div>
                <div>{"Mon - Sat: 10AM - 7PM"}</div>
            </div>
            <div class="contact-detail">
                <div class="contact-detail-title">{"Website"}</div>
                <a href={config::WEBSITE_URL} target="_blank" rel="noopener noreferrer">{"easydecorstudio.com"}</a>
            </div>
        </div>
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-grid">
                <div>
                    <h2>{"Let's Create Something "}<span class="accent-gold">{"Beautiful"}</span></h2>
                    <p class="section-lead">
                        {"Ready to transform your space? Book a free consultation with our design experts and let's discuss how we can bring your vision to life."}
                    </p>
                    {contact_details}
                    <div class="why-us">
                        <h3>{"Why Choose EasyDecor Studio?"}</h3>
                        <ul>
                            { for BENEFITS.iter().map(|benefit| html! { <li>{"✓ "}{*benefit}</li> }) }
                        </ul>
                    </div>
                </div>

                <div class="contact-card">
                    <h3>{"Book Your Free Consultation"}</h3>
                    if let Some(code) = (*reference).as_ref() {
                        <div class="contact-success">
                            <div class="contact-success-icon">{"✓"}</div>
                            <h4>{"Thank You!"}</h4>
                            <p>{"Your consultation request has been received. We'll get back to you within 24 hours."}</p>
                            <p class="contact-reference">{format!("Reference: {}", code)}</p>
                        </div>
                    } else {
                        <form class="contact-form" onsubmit={onsubmit}>
                            <div class="form-row">
                                <div>
                                    <label for="name">{"Full Name *"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required={true}
                                        placeholder="Your Name"
                                        value={form.name.clone()}
                                        oninput={input_setter(&form, |f, v| f.name = v)}
                                    />
                                </div>
                                <div>
                                    <label for="email">{"Email Address *"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required={true}
                                        placeholder="your@email.com"
                                        value={form.email.clone()}
                                        oninput={input_setter(&form, |f, v| f.email = v)}
                                    />
                                </div>
                            </div>
                            <div class="form-row">
                                <div>
                                    <label for="phone">{"Phone Number *"}</label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        name="phone"
                                        required={true}
                                        placeholder="+91 98765 43210"
                                        value={form.phone.clone()}
                                        oninput={input_setter(&form, |f, v| f.phone = v)}
                                    />
                                </div>
                                <div>
                                    <label for="projectType">{"Project Type"}</label>
                                    <select
                                        id="projectType"
                                        name="projectType"
                                        onchange={select_setter(&form, |f, v| f.project_type = v)}
                                    >
                                        {render_options("Select Project Type", PROJECT_TYPES, &form.project_type)}
                                    </select>
                                </div>
                            </div>
                            <div>
                                <label for="budget">{"Budget Range"}</label>
                                <select
                                    id="budget"
                                    name="budget"
                                    onchange={select_setter(&form, |f, v| f.budget = v)}
                                >
                                    {render_options("Select Budget Range", BUDGETS, &form.budget)}
                                </select>
                            </div>
                            <div>
                                <label for="message">{"Tell Us About Your Project"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="4"
                                    placeholder="Describe your vision, requirements, or any specific ideas you have in mind..."
                                    value={form.message.clone()}
                                    oninput={textarea_setter(&form, |f, v| f.message = v)}
                                />
                            </div>

                            if let Some(msg) = (*error).as_ref() {
                                <div class="error-message">{msg.clone()}</div>
                            }

                            <button type="submit" class="submit-button" disabled={*submitting}>
                                { if *submitting { "Submitting..." } else { "Book Free Consultation →" } }
                            </button>

                            <p class="form-consent">
                                {"By submitting this form, you agree to our "}
                                <Link<Route> to={Route::Privacy}>{"privacy policy"}</Link<Route>>
                                {". We'll only use your information to contact you about your project."}
                            </p>
                        </form>
                    }
                </div>
            </div>
        </section>
    }
}
