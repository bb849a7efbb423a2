use serde::Deserialize;
use yew::prelude::*;

use crate::animation::hooks::use_visibility;
use crate::animation::visibility::VisibilityOptions;
use crate::components::animated_counter::AnimatedCounter;
use crate::components::parallax::ParallaxLayer;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::config;
use crate::i18n::provider::use_translation;

const PAGE: f64 = 1.0;

/// Targets and suffixes of the headline numbers, in display order.
const STATS: [(u32, &str); 4] = [(150, "+"), (100, "%"), (35, "+"), (5, "")];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Stat {
    label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct TimelineEntry {
    year: String,
    title: String,
    description: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct CoreValue {
    icon: String,
    title: String,
    description: String,
}

#[function_component(About)]
pub fn about() -> Html {
    let tr = use_translation("about");
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), VisibilityOptions::section());

    let stats: Vec<Stat> = tr.list("stats");
    let timeline: Vec<TimelineEntry> = tr.list("timeline");
    let values: Vec<CoreValue> = tr.list("values");
    let last = timeline.len().saturating_sub(1);

    html! {
        <>
            <ParallaxLayer offset={PAGE} speed={0.2} decorative={true}>
                <div class="about-backdrop">
                    <div class="about-line float" style="top: 33%; right: 2.5rem; transform: rotate(45deg);"></div>
                    <div class="about-line about-line-dark float-slow" style="bottom: 33%; left: 2.5rem; transform: rotate(-45deg);"></div>
                    <div class="about-square float"></div>
                </div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={0.5} class="section" >
                <section id="about" ref={section} class="section-inner">
                    <div class="about-columns">
                        <Reveal {visible} entrance={Entrance::Slide(-50)} delay_ms={200}>
                            <h2 class="section-title">
                                { tr.t("title") }{" "}
                                <span class="highlight">{ tr.t("title_highlight") }</span>
                            </h2>
                            <p class="lead">{ tr.t("intro") }</p>
                            <h3 class="subheading">{ tr.t("mission_title") }</h3>
                            <p class="lead">{ tr.t("mission") }</p>

                            <div class="stats-grid">
                                { for STATS.iter().zip(stats.iter()).enumerate().map(|(i, ((target, suffix), stat))| html! {
                                    <Reveal
                                        {visible}
                                        entrance={Entrance::Rise(20)}
                                        duration_ms={600}
                                        delay_ms={stagger(400, 100, i)}
                                        class="card stat-card"
                                    >
                                        <div class="stat-number">
                                            <AnimatedCounter
                                                target={*target}
                                                suffix={*suffix}
                                                duration_ms={stagger(config::DEFAULT_COUNT_UP_MS, config::COUNTER_STAGGER_MS, i)}
                                            />
                                        </div>
                                        <div class="stat-label">{ &stat.label }</div>
                                    </Reveal>
                                })}
                            </div>
                        </Reveal>

                        <Reveal {visible} entrance={Entrance::Slide(50)} delay_ms={400} class="timeline">
                            <div class="timeline-rail"></div>
                            { for timeline.iter().enumerate().map(|(i, entry)| html! {
                                <Reveal
                                    {visible}
                                    entrance={Entrance::Slide(30)}
                                    duration_ms={500}
                                    delay_ms={stagger(600, 100, i)}
                                    class="timeline-entry"
                                >
                                    <div class="timeline-dot"></div>
                                    <div class="timeline-card">
                                        <div class="timeline-head">
                                            <span class="timeline-year">{ &entry.year }</span>
                                            if i == last {
                                                <span class="timeline-badge">{ tr.t("current_badge") }</span>
                                            }
                                        </div>
                                        <div class="timeline-title">{ &entry.title }</div>
                                        <p class="timeline-text">{ &entry.description }</p>
                                    </div>
                                </Reveal>
                            })}
                        </Reveal>
                    </div>

                    <Reveal {visible} delay_ms={1200} class="values">
                        <h3 class="subheading">{ tr.t("values_title") }</h3>
                        <div class="values-grid">
                            { for values.iter().enumerate().map(|(i, value)| html! {
                                <Reveal
                                    {visible}
                                    entrance={Entrance::Rise(20)}
                                    duration_ms={600}
                                    delay_ms={stagger(1400, 100, i)}
                                    class="card value-card"
                                >
                                    <div class="value-icon">{ &value.icon }</div>
                                    <h4>{ &value.title }</h4>
                                    <p>{ &value.description }</p>
                                </Reveal>
                            })}
                        </div>
                    </Reveal>
                </section>
            </ParallaxLayer>

            <style>
                {r#"
                    .about-backdrop {
                        position: absolute;
                        inset: 0;
                        height: 100vh;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .about-line { position: absolute; width: 18rem; height: 1px; background: var(--grey); opacity: 0.2; }
                    .about-line-dark { width: 12rem; background: var(--black); opacity: 0.1; }
                    .about-square {
                        position: absolute;
                        top: 25%;
                        left: 33%;
                        width: 4rem;
                        height: 4rem;
                        border: 1px solid var(--grey);
                        opacity: 0.15;
                    }
                    .about-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: start;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .stat-number { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .stat-label { color: var(--grey); font-weight: 500; }
                    .timeline { position: relative; }
                    .timeline-rail {
                        position: absolute;
                        inset-inline-start: 0.9rem;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: linear-gradient(to bottom, var(--black), var(--grey), transparent);
                    }
                    .timeline-entry {
                        position: relative;
                        padding-inline-start: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .timeline-dot {
                        position: absolute;
                        inset-inline-start: 0.5rem;
                        top: 0;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: var(--black);
                        border: 4px solid #fff;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);
                    }
                    .timeline-card {
                        background: #fff;
                        padding: 1.25rem;
                        border-inline-start: 4px solid var(--grey);
                        border-radius: 0 8px 8px 0;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .timeline-card:hover { border-color: var(--black); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                    .timeline-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
                    .timeline-year {
                        font-size: 0.85rem;
                        font-weight: 700;
                        color: #fff;
                        background: var(--black);
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                    }
                    .timeline-badge {
                        font-size: 0.75rem;
                        color: var(--grey);
                        background: rgba(0, 0, 0, 0.05);
                        padding: 0.25rem 0.5rem;
                        border-radius: 4px;
                    }
                    .timeline-title { font-size: 1.1rem; font-weight: 600; margin-bottom: 0.5rem; }
                    .timeline-text { color: var(--grey); font-size: 0.9rem; line-height: 1.6; }
                    .values { margin-top: 5rem; text-align: center; }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .value-icon { font-size: 2.25rem; margin-bottom: 1rem; }
                    .value-card h4 { font-size: 1.2rem; font-weight: 600; margin-bottom: 0.5rem; }
                    .value-card p { color: var(--grey); }
                "#}
            </style>
        </>
    }
}
