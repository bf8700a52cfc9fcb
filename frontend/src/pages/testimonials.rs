use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::pages::content::{next_index, prev_index, stars, TESTIMONIALS};

#[function_component]
pub fn Testimonials() -> Html {
    let current = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    {
        let current = current.clone();
        use_interval(
            move || current.set(next_index(*current, len)),
            config::TESTIMONIAL_ROTATE_MS,
        );
    }

    let prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, len)))
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, len)))
    };

    let Some(testimonial) = TESTIMONIALS.get(*current) else {
        return html! {};
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-header">
                <h2>{"What Our "}<span class="accent-gold">{"Clients Say"}</span></h2>
            </div>
            <div class="testimonial-card">
                <div class="testimonial-stars">{stars(testimonial.rating)}</div>
                <blockquote>{format!("\"{}\"", testimonial.text)}</blockquote>
                <div class="testimonial-author">
                    <strong>{testimonial.name}</strong>
                    <span>{testimonial.location}</span>
                </div>
            </div>
            <div class="testimonial-nav">
                <button onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                {
                    for (0..len).map(|i| {
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| current.set(i))
                        };
                        html! {
                            <button
                                class={classes!("testimonial-dot", (i == *current).then(|| "active"))}
                                onclick={onclick}
                            />
                        }
                    })
                }
                <button onclick={next} aria-label="Next testimonial">{"›"}</button>
            </div>
            <div class="testimonial-stats">
                <div><strong>{"98%"}</strong><span>{"Client Satisfaction Rate"}</span></div>
                <div><strong>{"150+"}</strong><span>{"Happy Families"}</span></div>
                <div><strong>{"4.9"}</strong><span>{"Average Rating"}</span></div>
            </div>
        </section>
    }
}
