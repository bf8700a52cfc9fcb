use yew::prelude::*;

/// Full-screen brand splash shown while the landing page warms up.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div class="page-loader">
            <style>
                {r#"
                    .page-loader {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #fefef9;
                    }
                    .page-loader .logo-word {
                        font-family: Georgia, serif;
                        font-size: 2.5rem;
                        color: #2d2d2d;
                    }
                    .page-loader .logo-sub {
                        letter-spacing: 0.3em;
                        color: #c9a96e;
                    }
                    .page-loader-bar {
                        margin-top: 2rem;
                        width: 12rem;
                        height: 2px;
                        background: #e5e0d5;
                        overflow: hidden;
                    }
                    .page-loader-bar::after {
                        content: '';
                        display: block;
                        height: 100%;
                        width: 40%;
                        background: #c9a96e;
                        animation: loaderSlide 1.2s ease-in-out infinite;
                    }
                    @keyframes loaderSlide {
                        from { transform: translateX(-100%); }
                        to { transform: translateX(250%); }
                    }
                "#}
            </style>
            <div class="logo-text">
                <div class="logo-word">{"easydecor"}</div>
                <div class="logo-sub">{"STUDIO"}</div>
            </div>
            <p>{"Redefining Spaces"}</p>
            <div class="page-loader-bar"></div>
        </div>
    }
}
