use serde::Deserialize;
use yew::prelude::*;

use crate::animation::hooks::use_visibility;
use crate::animation::visibility::VisibilityOptions;
use crate::components::animated_counter::AnimatedCounter;
use crate::components::parallax::ParallaxLayer;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::config;
use crate::i18n::provider::use_translation;

const PAGE: f64 = 4.0;

/// Portraits, matched to `team.teamMembers` by position.
const PICTURES: [&str; 4] = [
    "/teamPictures/alice-johnson.jpg",
    "/teamPictures/bob-lee.png",
    "/teamPictures/charlie-smith.jpeg",
    "/teamPictures/dana-khan.jpg",
];
const DEFAULT_PICTURE: &str = "/teamPictures/default.png";

/// Stat card numbers; the last one reads "24/7".
const STATS: [(u32, &str); 3] = [(35, "+"), (5, "+"), (24, "/7")];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct SectionHeader {
    title: String,
    subtitle: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct MemberText {
    name: String,
    role: String,
    bio: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Stat {
    label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Quote {
    text: String,
    author: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub picture: AttrValue,
}

fn merge_members(texts: Vec<MemberText>, pictures: &[&'static str]) -> Vec<TeamMember> {
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| TeamMember {
            name: text.name,
            role: text.role,
            bio: text.bio,
            picture: AttrValue::Static(pictures.get(i).copied().unwrap_or(DEFAULT_PICTURE)),
        })
        .collect()
}

/// Words of a title, flagging the second one for highlighting.
fn title_words(title: &str) -> Vec<(&str, bool)> {
    title
        .split(' ')
        .enumerate()
        .map(|(i, word)| (word, i == 1))
        .collect()
}

/// Cards trigger at the plain viewport edge, one after another.
fn card_options(index: usize) -> VisibilityOptions {
    VisibilityOptions::default()
        .threshold(config::DEFAULT_THRESHOLD)
        .margin("0px")
        .delay(stagger(0, config::CARD_STAGGER_MS, index))
}

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: TeamMember,
    index: usize,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let node = use_node_ref();
    let options = card_options(props.index);
    let visible = use_visibility(node.clone(), options);
    let member = &props.member;

    html! {
        <Reveal node_ref={node} {visible} entrance={Entrance::Rise(32)} duration_ms={600} class="team-card-wrap">
            <div class="card team-card">
                <img class="team-photo" src={member.picture.clone()} alt={member.name.clone()} />
                <h3>{ &member.name }</h3>
                <p class="team-role">{ &member.role }</p>
                <p class="team-bio">{ &member.bio }</p>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    target: u32,
    suffix: &'static str,
    label: String,
    index: usize,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let node = use_node_ref();
    let options = card_options(props.index);
    let visible = use_visibility(node.clone(), options);
    let duration = stagger(config::DEFAULT_COUNT_UP_MS, config::COUNTER_STAGGER_MS, props.index);

    html! {
        <Reveal node_ref={node} {visible} entrance={Entrance::Rise(16)} duration_ms={500} class="card">
            <div class="stat-number">
                <AnimatedCounter
                    target={props.target}
                    suffix={props.suffix}
                    duration_ms={duration}
                    options={VisibilityOptions::default()}
                />
            </div>
            <div class="stat-label">{ &props.label }</div>
        </Reveal>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let tr = use_translation("team");
    let header_ref = use_node_ref();
    let quote_ref = use_node_ref();
    let header_visible = use_visibility(header_ref.clone(), VisibilityOptions::default());
    let quote_visible = use_visibility(quote_ref.clone(), VisibilityOptions::default());

    let header: SectionHeader = tr.object("sectionHeader");
    let members = merge_members(tr.list("teamMembers"), &PICTURES);
    let stats: Vec<Stat> = tr.list("stats");
    let quote: Quote = tr.object("quote");

    html! {
        <ParallaxLayer offset={PAGE} speed={0.5} class="section team">
            <section id="team" class="section-inner">
                <Reveal node_ref={header_ref} visible={header_visible} entrance={Entrance::Rise(32)} class="section-header">
                    <h2 class="section-title">
                        { for title_words(&header.title).into_iter().enumerate().map(|(i, (word, highlighted))| html! {
                            <>
                                if i > 0 { {" "} }
                                <span class={classes!(highlighted.then_some("highlight"))}>{ word }</span>
                            </>
                        })}
                    </h2>
                    <p class="section-subtitle">{ &header.subtitle }</p>
                </Reveal>

                <div class="team-grid">
                    { for members.into_iter().enumerate().map(|(index, member)| html! {
                        <TeamCard {member} {index} />
                    })}
                </div>

                <div class="team-stats">
                    { for STATS.iter().zip(stats.into_iter()).enumerate().map(|(index, ((target, suffix), stat))| html! {
                        <StatCard target={*target} suffix={*suffix} label={stat.label} {index} />
                    })}
                </div>

                <Reveal node_ref={quote_ref} visible={quote_visible} entrance={Entrance::Rise(32)} class="card team-quote">
                    <div class="quote-mark">{ "\u{201C}" }</div>
                    <p class="quote-text">{ &quote.text }</p>
                    <div class="quote-author">{ &quote.author }</div>
                </Reveal>
            </section>

            <style>
                {r#"
                    .team { background: #f9fafb; }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .team-card { text-align: center; transition: transform 0.3s ease, box-shadow 0.3s ease; }
                    .team-card:hover { transform: scale(1.05); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
                    .team-photo {
                        width: 9rem;
                        height: 9rem;
                        border-radius: 50%;
                        object-fit: cover;
                        margin: 0 auto 1rem;
                        display: block;
                        background: #e5e7eb;
                    }
                    .team-card h3 { font-size: 1.2rem; font-weight: 600; margin-bottom: 0.5rem; }
                    .team-role { color: #4b5563; font-weight: 500; margin-bottom: 0.75rem; }
                    .team-bio { color: #4b5563; font-size: 0.9rem; line-height: 1.6; }
                    .team-stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                        text-align: center;
                    }
                    .team-quote { text-align: center; }
                    .quote-mark { font-size: 2.5rem; color: #d1d5db; margin-bottom: 1rem; }
                    .quote-text {
                        font-style: italic;
                        font-size: 1.1rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto 1rem;
                    }
                    .quote-author { font-weight: 500; }
                "#}
            </style>
        </ParallaxLayer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str) -> MemberText {
        MemberText {
            name: name.to_string(),
            role: "Role".to_string(),
            bio: "Bio".to_string(),
        }
    }

    #[test]
    fn members_get_pictures_by_position() {
        let members = merge_members(vec![text("A"), text("B")], &PICTURES);
        assert_eq!(members[0].picture.as_str(), "/teamPictures/alice-johnson.jpg");
        assert_eq!(members[1].picture.as_str(), "/teamPictures/bob-lee.png");
        assert_eq!(members[1].name, "B");
    }

    #[test]
    fn extra_members_use_the_default_picture() {
        let texts = (0..6).map(|i| text(&format!("M{}", i))).collect();
        let members = merge_members(texts, &PICTURES);
        assert_eq!(members.len(), 6);
        assert_eq!(members[4].picture.as_str(), DEFAULT_PICTURE);
        assert_eq!(members[5].picture.as_str(), DEFAULT_PICTURE);
    }

    #[test]
    fn second_title_word_is_highlighted() {
        assert_eq!(
            title_words("Meet Our Team"),
            vec![("Meet", false), ("Our", true), ("Team", false)]
        );
        assert_eq!(title_words("Team"), vec![("Team", false)]);
    }

    #[test]
    fn cards_use_the_plain_edge_and_stagger() {
        use crate::animation::geometry::RootMargin;

        let third = card_options(2);
        assert_eq!(third.threshold, 0.1);
        assert_eq!(third.margin, "0px".parse::<RootMargin>().unwrap());
        assert_eq!(third.delay_ms, 200);
        assert_eq!(card_options(0).delay_ms, 0);
    }
}
