use log::warn;
use yew::prelude::*;

use crate::components::parallax::{scroll_to_page, ParallaxContext, ParallaxLayer};
use crate::i18n::provider::use_translation;

const PAGE: f64 = 0.0;
const SERVICES_PAGE: f64 = 2.0;

#[function_component(Hero)]
pub fn hero() -> Html {
    let tr = use_translation("hero");
    let parallax = use_context::<ParallaxContext>();
    let logo_failed = use_state(|| false);

    let on_cta = Callback::from(move |_: MouseEvent| {
        if let Err(e) = scroll_to_page(parallax.as_ref(), SERVICES_PAGE) {
            warn!("Could not scroll to services: {}", e);
        }
    });

    let on_logo_error = {
        let logo_failed = logo_failed.clone();
        Callback::from(move |_: Event| logo_failed.set(true))
    };

    html! {
        <>
            <ParallaxLayer offset={PAGE} speed={0.1} decorative={true}>
                <div class="hero-backdrop">
                    <div class="hero-orb hero-orb-large float"></div>
                    <div class="hero-orb hero-orb-small float-slow"></div>
                </div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={0.5} class="hero">
                <div class="hero-content">
                    if !*logo_failed {
                        <div class="hero-logo">
                            <img src="/logo.png" alt={tr.t("logo_alt")} onerror={on_logo_error} />
                        </div>
                    }
                    <h1 class="hero-headline">
                        { tr.t("headline") }
                        <br />
                        <span class="highlight">{ tr.t("headline_highlight") }</span>
                    </h1>
                    <p class="hero-description">{ tr.t("description") }</p>
                    <button class="hero-cta" aria-label={tr.t("cta_label")} onclick={on_cta}>
                        { tr.t("cta") }
                    </button>
                </div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={0.8} decorative={true}>
                <div class="hero-sparks">
                    <span class="spark float" style="top: 5rem; left: 2.5rem;"></span>
                    <span class="spark spark-dark float-slow" style="top: 33%; right: 5rem;"></span>
                    <span class="spark float" style="bottom: 5rem; left: 33%;"></span>
                </div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={1.0} decorative={true}>
                <div class="hero-scroll-hint" aria-label={tr.t("scroll_hint")}>
                    <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                    </svg>
                </div>
            </ParallaxLayer>

            <style>
                {r#"
                    .hero {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        min-height: 100vh;
                    }
                    .hero-content {
                        text-align: center;
                        max-width: 80rem;
                        padding: 0 1.5rem;
                        animation: heroEnter 1s ease-out 0.2s both;
                    }
                    @keyframes heroEnter {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-logo {
                        width: min(60vw, 24rem);
                        height: min(60vw, 24rem);
                        margin: 0 auto 3rem;
                    }
                    .hero-logo img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                        filter: drop-shadow(0 10px 8px rgba(0, 0, 0, 0.08));
                    }
                    .hero-headline {
                        font-size: clamp(2rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-description {
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        color: var(--grey);
                        font-size: 1.15rem;
                        line-height: 1.7;
                    }
                    .hero-cta {
                        background: var(--black);
                        color: #fff;
                        border: none;
                        padding: 1rem 2rem;
                        font-size: 1.05rem;
                        cursor: pointer;
                        min-height: 48px;
                        transition: background 0.3s ease, transform 0.2s ease;
                    }
                    .hero-cta:hover { background: var(--grey); transform: scale(1.02); }
                    .hero-cta:active { transform: scale(0.98); }
                    .hero-backdrop, .hero-sparks {
                        position: absolute;
                        inset: 0;
                        height: 100vh;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                    }
                    .hero-orb-large { top: 25%; left: 25%; width: 16rem; height: 16rem; background: var(--grey); opacity: 0.1; }
                    .hero-orb-small { bottom: 25%; right: 25%; width: 12rem; height: 12rem; background: var(--black); opacity: 0.05; }
                    .spark {
                        position: absolute;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: var(--grey);
                        opacity: 0.6;
                    }
                    .spark-dark { background: var(--black); opacity: 0.4; width: 1.5rem; height: 1.5rem; }
                    .hero-scroll-hint {
                        position: absolute;
                        left: 50%;
                        top: calc(100vh - 4rem);
                        color: var(--grey);
                        opacity: 0.6;
                        animation: bounce 2s infinite;
                        pointer-events: none;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (max-width: 768px) {
                        .hero-backdrop, .hero-sparks { display: none; }
                    }
                "#}
            </style>
        </>
    }
}
