use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod leads {
    pub mod book;
    pub mod context;
    pub mod export;
    pub mod intake;
    pub mod models;
    pub mod notify;
    pub mod store;
}
mod pages {
    pub mod content;
    pub mod home;
    pub mod portfolio;
    pub mod privacy;
    pub mod testimonials;
}
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod page_loader;
}
mod admin {
    pub mod controls;
    pub mod guide;
    pub mod shortcuts;
    pub mod viewer;
}

use admin::{
    controls::AdminControls,
    guide::AdminGuide,
    shortcuts::AdminShortcut,
    viewer::LeadViewer,
};
use components::page_loader::PageLoader;
use leads::context::LeadServices;
use pages::{content::NAV_ITEMS, home::Home, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="legal-content">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-word">{"easydecor"}</span>
                    <span class="logo-sub">{"STUDIO"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|(label, href)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                        })
                    }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"Book Consultation"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

/// Keyboard-activated admin overlays. Only mounted when the
/// `admin-shortcuts` feature is compiled in.
#[function_component(AdminLayer)]
fn admin_layer() -> Html {
    let panel_open = use_state(|| false);
    let viewer_open = use_state(|| false);
    let guide_open = use_state(|| false);

    {
        let panel_open = panel_open.clone();
        let viewer_open = viewer_open.clone();
        let guide_open = guide_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let Some(shortcut) = AdminShortcut::from_keys(e.ctrl_key(), e.shift_key(), &e.key()) else {
                return;
            };
            e.prevent_default();
            info!("Admin shortcut {:?}", shortcut);
            match shortcut {
                AdminShortcut::TogglePanel => panel_open.set(!*panel_open),
                AdminShortcut::OpenViewer => viewer_open.set(true),
                AdminShortcut::OpenGuide | AdminShortcut::OwnerSetup => guide_open.set(true),
            }
        });
    }

    let setter = |handle: &UseStateHandle<bool>, value: bool| {
        let handle = handle.clone();
        Callback::from(move |_: ()| handle.set(value))
    };

    html! {
        <>
            if *viewer_open {
                <LeadViewer on_close={setter(&viewer_open, false)} />
            }
            if *guide_open {
                <AdminGuide
                    on_close={setter(&guide_open, false)}
                    on_open_viewer={setter(&viewer_open, true)}
                />
            }
            if *panel_open {
                <AdminControls
                    on_open_viewer={setter(&viewer_open, true)}
                    on_open_guide={setter(&guide_open, true)}
                    on_hide={setter(&panel_open, false)}
                />
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    let services = use_memo(|_| LeadServices::browser(), ());
    let loading = use_state(|| true);

    // Splash plays once per app load, not on every return to Home
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::PAGE_LOAD_MS, move || {
                    info!("Page content ready");
                    loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    use_effect_with_deps(
        move |loading: &bool| {
            if !*loading {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        *loading,
    );

    html! {
        <ContextProvider<LeadServices> context={(*services).clone()}>
            <div class="sr-only">
                <h1>{"EasyDecor - Premium Interior Design Services in Kolkata, India"}</h1>
                <p>{"Leading interior designers in Kolkata offering affordable luxury home decor, furniture design, and space renovation services across Newtown, Salt Lake, Park Street, and all areas of Kolkata."}</p>
            </div>
            if *loading {
                <PageLoader />
            } else {
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            }
            if config::ADMIN_SHORTCUTS_ENABLED {
                <AdminLayer />
            }
        </ContextProvider<LeadServices>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    if config::ADMIN_SHORTCUTS_ENABLED {
        warn!("Admin shortcuts are compiled in; the lead viewer has no authentication");
    }
    yew::Renderer::<App>::new().render();
}
