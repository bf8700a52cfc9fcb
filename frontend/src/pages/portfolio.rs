use web_sys::MouseEvent;
use yew::prelude::*;

use crate::pages::content::{filter_projects, portfolio_categories, ALL_CATEGORIES};

#[function_component]
pub fn Portfolio() -> Html {
    let selected = use_state(|| ALL_CATEGORIES);

    let chips = portfolio_categories().into_iter().map(|category| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                selected.set(category);
            })
        };
        html! {
            <button
                key={category}
                class={classes!("category-chip", (*selected == category).then(|| "active"))}
                onclick={onclick}
            >
                {category}
            </button>
        }
    });

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="section-header">
                <h2>{"Our "}<span class="accent-green">{"Portfolio"}</span></h2>
                <p>{"Explore our recent projects and see how we've transformed spaces across Kolkata."}</p>
            </div>
            <div class="category-chips">
                { for chips }
            </div>
            <div class="portfolio-grid">
                {
                    for filter_projects(*selected).into_iter().map(|project| html! {
                        <div key={project.title} class="portfolio-card">
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="portfolio-overlay">
                                <span class="portfolio-category">{project.category}</span>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                            </div>
                        </div>
                    })
                }
            </div>
            <div class="portfolio-cta">
                <a href="#contact" class="hero-cta">{"Start Your Project"}</a>
            </div>
        </section>
    }
}
