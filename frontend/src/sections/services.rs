use serde::Deserialize;
use yew::prelude::*;

use crate::animation::hooks::use_visibility;
use crate::animation::visibility::VisibilityOptions;
use crate::components::parallax::ParallaxLayer;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::config;
use crate::i18n::provider::use_translation;

const PAGE: f64 = 2.0;

/// SVG paths for the service cards, matched to the catalog entries by index.
const ICONS: [&str; 5] = [
    "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
    "M17 18H7V6h10v1h2V3c0-1.1-.9-2-2-2H7c-1.1 0-2 .9-2 2v18c0 1.1.9 2 2 2h10c1.1 0 2-.9 2-2v-4h-2v1z",
    "M12 3a9 9 0 0 0 0 18c.83 0 1.5-.67 1.5-1.5 0-.39-.15-.74-.39-1.01-.23-.26-.38-.61-.38-.99 0-.83.67-1.5 1.5-1.5H16c2.76 0 5-2.24 5-5 0-4.42-4.03-8-9-8zm-5.5 9a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3zm3-4a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3zm5 0a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3zm3 4a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3z",
    "M19.35 10.04C18.67 6.59 15.64 4 12 4 9.11 4 6.6 5.64 5.35 8.04 2.34 8.36 0 10.91 0 14c0 3.31 2.69 6 6 6h13c2.76 0 5-2.24 5-5 0-2.64-2.05-4.78-4.65-4.96z",
    "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm-1 16H9V7h10v14z",
];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Service {
    title: String,
    description: String,
}

#[function_component(Services)]
pub fn services() -> Html {
    let tr = use_translation("services");
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), VisibilityOptions::section());
    let items: Vec<Service> = tr.list("items");

    html! {
        <>
            <ParallaxLayer offset={PAGE} speed={0.1} decorative={true}>
                <div class="services-backdrop"></div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={0.5} class="section">
                <section id="services" ref={section} class="section-inner">
                    <Reveal {visible} entrance={Entrance::Rise(50)} class="section-header">
                        <h2 class="section-title">
                            { tr.t("title") }{" "}
                            <span class="highlight">{ tr.t("title_highlight") }</span>
                        </h2>
                        <p class="section-subtitle">{ tr.t("subtitle") }</p>
                    </Reveal>

                    <div class="services-grid">
                        { for items.iter().enumerate().map(|(i, service)| html! {
                            <Reveal
                                {visible}
                                entrance={Entrance::Rise(30)}
                                duration_ms={600}
                                delay_ms={stagger(200, config::CARD_STAGGER_MS, i)}
                                class="service-card"
                            >
                                <div class="service-icon">
                                    <svg width="32" height="32" fill="currentColor" viewBox="0 0 24 24">
                                        <path d={ICONS.get(i).copied().unwrap_or(ICONS[0])} />
                                    </svg>
                                </div>
                                <h3>{ &service.title }</h3>
                                <p>{ &service.description }</p>
                            </Reveal>
                        })}
                    </div>
                </section>
            </ParallaxLayer>

            <style>
                {r#"
                    .services-backdrop {
                        position: absolute;
                        inset: 0;
                        height: 100vh;
                        background: radial-gradient(circle at 80% 20%, rgba(0, 0, 0, 0.04), transparent 60%);
                        pointer-events: none;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        background: #fff;
                        padding: 2rem;
                        border: 2px solid rgba(0, 0, 0, 0.08);
                        height: 100%;
                    }
                    .service-card:hover { border-color: rgba(0, 0, 0, 0.2); }
                    .service-card:hover .service-icon,
                    .service-card:hover h3 { color: var(--grey); }
                    .service-icon { margin-bottom: 1.5rem; transition: color 0.3s ease; }
                    .service-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; transition: color 0.3s ease; }
                    .service-card p { color: var(--grey); line-height: 1.7; }
                "#}
            </style>
        </>
    }
}
