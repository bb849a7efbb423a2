use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::parallax::Parallax;
use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, services::Services,
    team::Team, technologies::Technologies,
};
use crate::Route;

/// Hero, about, services, technologies, team, contact and footer.
const PAGES: f64 = 7.0;

#[function_component(Sections)]
fn sections() -> Html {
    html! {
        <>
            <Hero />
            <About />
            <Services />
            <Technologies />
            <Team />
            <Contact />
            <Footer />
        </>
    }
}

#[function_component(ParallaxHome)]
pub fn parallax_home() -> Html {
    html! {
        <main class="site site-parallax">
            <Parallax pages={PAGES}>
                <Sections />
            </Parallax>
        </main>
    }
}

/// Same sections, one after another in normal document flow.
#[function_component(StackedHome)]
pub fn stacked_home() -> Html {
    html! {
        <main class="site site-stacked">
            <Sections />
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                { "Back to the home page" }
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                    }
                    .not-found h1 { font-size: 5rem; font-weight: 700; }
                    .not-found p { color: var(--grey); }
                    .not-found-link {
                        background: var(--black);
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        text-decoration: none;
                    }
                "#}
            </style>
        </main>
    }
}
