use serde::Deserialize;
use yew::prelude::*;

use crate::animation::hooks::use_visibility;
use crate::animation::visibility::VisibilityOptions;
use crate::components::animated_counter::AnimatedCounter;
use crate::components::parallax::ParallaxLayer;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::i18n::provider::use_translation;

const PAGE: f64 = 3.0;

/// (target, suffix, duration) for the summary counters.
const STATS: [(u32, &str, u32); 3] = [(15, "+", 2000), (200, "+", 2200), (98, "%", 2400)];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Technology {
    name: String,
    category: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Stat {
    label: String,
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[function_component(Technologies)]
pub fn technologies() -> Html {
    let tr = use_translation("technologies");
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), VisibilityOptions::section());

    let items: Vec<Technology> = tr.list("items");
    let clients: Vec<String> = tr.list("clients");
    let stats: Vec<Stat> = tr.list("stats");

    html! {
        <>
            <ParallaxLayer offset={PAGE} speed={0.3} decorative={true}>
                <div class="tech-backdrop">
                    <div class="tech-ring float-slow"></div>
                </div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={0.5} class="section">
                <section id="technologies" ref={section} class="section-inner">
                    <Reveal {visible} entrance={Entrance::Rise(50)} class="section-header">
                        <h2 class="section-title">
                            { tr.t("title") }{" "}
                            <span class="highlight">{ tr.t("title_highlight") }</span>
                        </h2>
                        <p class="section-subtitle">{ tr.t("subtitle") }</p>
                    </Reveal>

                    <Reveal {visible} entrance={Entrance::Slide(-30)} duration_ms={600} delay_ms={200}>
                        <h3 class="subheading">{ tr.t("tech_title") }</h3>
                        <div class="tech-grid">
                            { for items.iter().enumerate().map(|(i, tech)| html! {
                                <Reveal
                                    {visible}
                                    entrance={Entrance::Grow}
                                    duration_ms={500}
                                    delay_ms={stagger(300, 50, i)}
                                    class="card tech-card"
                                >
                                    <div class="tech-name">{ &tech.name }</div>
                                    <div class="tech-category">{ &tech.category }</div>
                                </Reveal>
                            })}
                        </div>
                    </Reveal>

                    <Reveal {visible} entrance={Entrance::Slide(-30)} duration_ms={600} delay_ms={800}>
                        <h3 class="subheading">{ tr.t("clients_title") }</h3>
                        <div class="clients-grid">
                            { for clients.iter().enumerate().map(|(i, client)| html! {
                                <Reveal
                                    {visible}
                                    entrance={Entrance::Rise(20)}
                                    duration_ms={500}
                                    delay_ms={stagger(1000, 100, i)}
                                    class="card client-card"
                                >
                                    <div class="client-mark">{ initials(client) }</div>
                                    <div class="client-name">{ client }</div>
                                </Reveal>
                            })}
                        </div>
                    </Reveal>

                    <Reveal {visible} entrance={Entrance::Rise(30)} delay_ms={1500} class="tech-stats">
                        { for STATS.iter().zip(stats.iter()).map(|((target, suffix, duration), stat)| html! {
                            <div class="tech-stat">
                                <div class="stat-number">
                                    <AnimatedCounter target={*target} suffix={*suffix} duration_ms={*duration} />
                                </div>
                                <div class="stat-label">{ &stat.label }</div>
                            </div>
                        })}
                    </Reveal>
                </section>
            </ParallaxLayer>

            <style>
                {r#"
                    .tech-backdrop { position: absolute; inset: 0; height: 100vh; overflow: hidden; pointer-events: none; }
                    .tech-ring {
                        position: absolute;
                        top: 10%;
                        inset-inline-end: -8rem;
                        width: 24rem;
                        height: 24rem;
                        border: 1px solid var(--grey);
                        border-radius: 50%;
                        opacity: 0.1;
                    }
                    .tech-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .tech-card { text-align: center; padding: 1.25rem 1rem; }
                    .tech-name { font-weight: 600; margin-bottom: 0.25rem; }
                    .tech-category { font-size: 0.8rem; color: var(--grey); }
                    .clients-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .client-card { display: flex; align-items: center; gap: 0.75rem; padding: 1rem; }
                    .client-mark {
                        flex-shrink: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: var(--black);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.85rem;
                        font-weight: 700;
                    }
                    .client-name { font-weight: 500; }
                    .tech-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        text-align: center;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(0, 0, 0, 0.08);
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_marks_use_up_to_two_initials() {
        assert_eq!(initials("TechCorp"), "T");
        assert_eq!(initials("Enterprise Solutions"), "ES");
        assert_eq!(initials("digital dynamics extra"), "DD");
        assert_eq!(initials(""), "");
    }
}
