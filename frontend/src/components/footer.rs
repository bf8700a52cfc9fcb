use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::pages::content::{NAV_ITEMS, SERVICES};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="logo-text">
                        <span class="logo-word">{"easydecor"}</span>
                        <span class="logo-sub">{"STUDIO"}</span>
                    </div>
                    <p>{"Transforming homes across Kolkata with thoughtful, affordable interior design."}</p>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for NAV_ITEMS.iter().map(|(label, href)| html! { <li><a href={*href}>{*label}</a></li> }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Our Services"}</h3>
                    <ul>
                        { for SERVICES.iter().map(|service| html! { <li><a href="#services">{service.title}</a></li> }) }
                        <li><a href="#services">{"3D Visualization"}</a></li>
                        <li><a href="#contact">{"Consultation"}</a></li>
                    </ul>
                </div>

                <div>
                    <h3>{"Get In Touch"}</h3>
                    { for config::STUDIO_ADDRESS.iter().map(|line| html! { <div>{*line}</div> }) }
                    <p><a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE_DISPLAY}</a></p>
                    <p><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></p>
                    <h4>{"Business Hours"}</h4>
                    <div>{"Monday - Saturday"}</div>
                    <div>{"10:00 AM - 7:00 PM"}</div>
                    <div class="accent-gold">{"Sunday: By Appointment"}</div>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} EasyDecor Studio. Made with ♥ in Kolkata", year)}</span>
                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
            </div>
        </footer>
    }
}
