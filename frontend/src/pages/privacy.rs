use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"When you book a consultation we collect:"}</p>
                <ul>
                    <li>{"Your name, email address and phone number (to contact you)"}</li>
                    <li>{"Project type and budget range, if you choose to share them"}</li>
                    <li>{"Any message you write about your project"}</li>
                    <li>{"The time you submitted the form"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Where It Is Kept"}</h2>
                <p>{"Consultation requests are saved in the browser the site was opened in. We do not send them to a server. If the site is embedded in a partner page, the request is also passed to that page."}</p>
            </section>

            <section>
                <h2>{"3. How We Use It"}</h2>
                <ul>
                    <li>{"To reply to your consultation request"}</li>
                    <li>{"To prepare a quote that fits your project and budget"}</li>
                </ul>
                <p>{"We never sell your details or use them for unrelated marketing."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You can ask us to see, correct or delete the details you sent us at any time."}</p>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>{format!("Email: {}", config::CONTACT_EMAIL)}</p>
                <p>{format!("Phone: {}", config::CONTACT_PHONE_DISPLAY)}</p>
                { for config::STUDIO_ADDRESS.iter().map(|line| html! { <p>{*line}</p> }) }
            </section>
            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
            </div>
        </div>
    }
}
