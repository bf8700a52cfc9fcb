use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::pages::content::{PROCESS_STEPS, SERVICES};
use crate::pages::portfolio::Portfolio;
use crate::pages::testimonials::Testimonials;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="home" class="hero-section">
            <div class="hero-background">
                <img
                    src="https://images.unsplash.com/photo-1705321963943-de94bb3f0dd3?fit=max&fm=jpg&q=80&w=1080"
                    alt="Modern living room interior"
                />
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <h1>{"Redefining "}<span class="accent-gold">{"Spaces"}</span></h1>
                <p>
                    {"Where contemporary elegance meets traditional charm. Transform your home into a luxurious sanctuary that reflects your unique style."}
                </p>
                <div class="hero-buttons">
                    <a href="#contact" class="hero-cta">{"Start Your Journey →"}</a>
                    <a href="#portfolio" class="hero-secondary">{"View Our Work"}</a>
                </div>
                <div class="hero-stats">
                    <div><strong>{"200+"}</strong><span>{"Projects Completed"}</span></div>
                    <div><strong>{"5+"}</strong><span>{"Years Experience"}</span></div>
                    <div><strong>{"150+"}</strong><span>{"Happy Clients"}</span></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let features = [
        ("Passionate Design", "Every project is crafted with love and attention to detail, ensuring your space reflects your personality."),
        ("Award-Winning", "Recognized for excellence in interior design across Kolkata and West Bengal."),
        ("Client-Centric", "We believe in collaborative design, working closely with you throughout the journey."),
        ("Unique Aesthetics", "Blending modern trends with traditional Bengali elements for truly distinctive spaces."),
    ];

    html! {
        <section id="about" class="about-section">
            <div class="about-grid">
                <div>
                    <h2>{"Crafting Dreams into "}<span class="accent-green">{"Reality"}</span></h2>
                    <p>
                        {"Based in the cultural heart of India, EasyDecor brings together the rich heritage of Kolkata with contemporary design sensibilities. We understand that your home is more than just a space: it's where memories are made, stories unfold, and life happens."}
                    </p>
                    <p>
                        {"Our team of passionate designers specializes in creating spaces that are not only beautiful but also functional and affordable. From traditional Bengali homes to modern apartments, we transform every space into a personalized sanctuary."}
                    </p>
                    <div class="about-stats">
                        <div><strong>{"5+"}</strong><span>{"Years in Kolkata"}</span></div>
                        <div><strong>{"200+"}</strong><span>{"Homes Transformed"}</span></div>
                        <div><strong>{"98%"}</strong><span>{"Client Satisfaction"}</span></div>
                    </div>
                </div>
                <div class="about-features">
                    {
                        for features.iter().map(|(title, description)| html! {
                            <div class="about-feature">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-header">
                <h2>{"Our "}<span class="accent-gold">{"Services"}</span></h2>
                <p>{"From initial concept to final styling, we offer comprehensive interior design services tailored to your needs."}</p>
            </div>
            <div class="services-grid">
                {
                    for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                            <a href="#contact" class="service-link">{"Learn More →"}</a>
                        </div>
                    })
                }
            </div>
            <div class="process">
                <h3>{"Our Design Process"}</h3>
                <div class="process-steps">
                    {
                        for PROCESS_STEPS.iter().map(|(step, title, desc)| html! {
                            <div class="process-step">
                                <div class="process-number">{*step}</div>
                                <h4>{*title}</h4>
                                <p>{*desc}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    html! {
        <>
            <main class="home-page">
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <Testimonials />
                <ContactForm />
            </main>
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    #[function_component]
    fn RoutedHome() -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <Home />
            </Router>
        }
    }

    #[tokio::test]
    async fn home_renders_sections_without_the_splash() {
        let rendered = ServerRenderer::<RoutedHome>::new().render().await;
        assert!(rendered.contains("home-page"));
        assert!(rendered.contains("id=\"contact\""));
        assert!(!rendered.contains("page-loader"));
    }
}
