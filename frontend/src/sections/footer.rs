use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::hooks::use_visibility;
use crate::animation::visibility::VisibilityOptions;
use crate::components::parallax::{scroll_to_page, ParallaxContext, ParallaxLayer};
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::config;
use crate::i18n::provider::use_translation;

const PAGE: f64 = 6.0;

struct Social {
    name: &'static str,
    href: &'static str,
    icon: &'static str,
}

const SOCIAL: [Social; 5] = [
    Social {
        name: "LinkedIn",
        href: "https://linkedin.com/company/innovation-co",
        icon: "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    },
    Social {
        name: "Twitter",
        href: "https://twitter.com/innovation_co",
        icon: "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
    },
    Social {
        name: "GitHub",
        href: "https://github.com/innovation-co",
        icon: "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
    },
    Social {
        name: "Dribbble",
        href: "https://dribbble.com/innovation-co",
        icon: "M12 24C5.385 24 0 18.615 0 12S5.385 0 12 0s12 5.385 12 12-5.385 12-12 12zm10.12-10.358c-.35-.11-3.17-.953-6.384-.438 1.34 3.684 1.887 6.684 1.992 7.308 2.3-1.555 3.936-4.02 4.395-6.87zm-6.115 7.808c-.153-.9-.75-4.032-2.19-7.77l-.066.02c-5.79 2.015-7.86 6.025-8.04 6.4 1.73 1.358 3.92 2.166 6.29 2.166 1.42 0 2.77-.29 4-.816zm-11.62-2.58c.232-.4 3.045-5.055 8.332-6.765.135-.045.27-.084.405-.12-.26-.585-.54-1.167-.832-1.74C7.17 11.775 2.206 11.71 1.756 11.7l-.004.312c0 2.633.998 5.037 2.634 6.855zm-2.42-8.955c.46.008 4.683.026 9.477-1.248-1.698-3.018-3.53-5.558-3.8-5.928-2.868 1.35-5.01 3.99-5.676 7.17zM9.6 2.052c.282.38 2.145 2.914 3.822 6 3.645-1.365 5.19-3.44 5.373-3.702-1.81-1.61-4.19-2.586-6.795-2.586-.825 0-1.63.1-2.4.285zm10.335 3.483c-.218.29-1.935 2.493-5.724 4.04.24.49.47.985.68 1.486.08.18.15.36.22.53 3.41-.43 6.8.26 7.14.33-.02-2.42-.88-4.64-2.31-6.38z",
    },
    Social {
        name: "Instagram",
        href: "https://instagram.com/innovation.co",
        icon: "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zM12 5.838a6.162 6.162 0 1 0 0 12.324 6.162 6.162 0 0 0 0-12.324zM12 16a4 4 0 1 1 0-8 4 4 0 0 1 0 8zm6.406-11.845a1.44 1.44 0 1 0 0 2.881 1.44 1.44 0 0 0 0-2.881z",
    },
];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct FooterLink {
    name: String,
    href: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct FooterColumn {
    title: String,
    links: Vec<FooterLink>,
}

/// `YYYY-MM-DD HH:MM:SS`, always in UTC.
pub fn format_utc(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let tr = use_translation("footer");
    let parallax = use_context::<ParallaxContext>();
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityOptions::default());
    let clock = use_state(|| format_utc(Utc::now()));

    {
        let clock = clock.clone();
        use_interval(move || clock.set(format_utc(Utc::now())), config::CLOCK_REFRESH_MS);
    }

    let back_to_top = Callback::from(move |_: MouseEvent| {
        if let Err(e) = scroll_to_page(parallax.as_ref(), 0.0) {
            warn!("Back to top failed: {}", e);
        }
    });

    let columns: Vec<FooterColumn> = tr.list("sections");

    html! {
        <>
            <ParallaxLayer offset={PAGE} speed={0.5} class="footer-layer">
                <footer ref={node} class="site-footer">
                    <div class="footer-inner">
                        <div class="footer-grid">
                            <Reveal {visible} entrance={Entrance::Rise(20)} duration_ms={600} class="footer-company">
                                <div class="footer-brand">
                                    <img src="/logo.png" alt={tr.t("logo_alt")} />
                                    <span>{ tr.t("company_name") }</span>
                                </div>
                                <p class="footer-blurb">{ tr.t("blurb") }</p>
                                <div class="footer-contact">
                                    <span>{ tr.t("address") }</span>
                                    <span>{ tr.t("phone") }</span>
                                    <span>{ tr.t("email") }</span>
                                </div>
                                <p class="footer-credit">{ tr.t("credit") }</p>
                            </Reveal>

                            { for columns.iter().enumerate().map(|(i, column)| html! {
                                <Reveal
                                    {visible}
                                    entrance={Entrance::Rise(20)}
                                    duration_ms={600}
                                    delay_ms={stagger(100, 100, i)}
                                    class="footer-column"
                                >
                                    <h4>{ &column.title }</h4>
                                    <ul>
                                        { for column.links.iter().map(|link| html! {
                                            <li><a href={link.href.clone()}>{ &link.name }</a></li>
                                        })}
                                    </ul>
                                </Reveal>
                            })}
                        </div>

                        <Reveal {visible} entrance={Entrance::Fade} duration_ms={600} delay_ms={600} class="footer-social">
                            { for SOCIAL.iter().map(|social| html! {
                                <a
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.name}
                                >
                                    <svg width="28" height="28" fill="currentColor" viewBox="0 0 24 24">
                                        <path d={social.icon} />
                                    </svg>
                                </a>
                            })}
                        </Reveal>

                        <div class="footer-bottom">
                            <div>
                                <p>{ tr.t("copyright") }</p>
                                <p class="footer-small">{ tr.t("built_with") }</p>
                            </div>
                            <div class="footer-status">
                                <span>{ format!("{}: {}", tr.t("utc_label"), *clock) }</span>
                                <span><span class="status-dot"></span>{ tr.t("status") }</span>
                            </div>
                        </div>
                    </div>
                </footer>
            </ParallaxLayer>

            <button class="back-to-top" aria-label={tr.t("back_to_top")} onclick={back_to_top}>
                <svg width="20" height="20" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18" />
                </svg>
            </button>

            <style>
                {r#"
                    .footer-layer { display: flex; align-items: flex-end; z-index: 10; }
                    .site-footer { width: 100%; background: var(--black); color: #fff; }
                    .footer-inner { max-width: 80rem; margin: 0 auto; padding: 4rem 1rem; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr repeat(4, 1fr);
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                    .footer-brand img { width: 3rem; height: 3rem; object-fit: contain; filter: invert(1); }
                    .footer-blurb { color: var(--grey-light); line-height: 1.7; margin-bottom: 1.5rem; }
                    .footer-contact { display: flex; flex-direction: column; gap: 0.5rem; color: var(--grey-light); font-size: 0.9rem; }
                    .footer-credit { color: var(--grey-light); font-size: 0.8rem; margin-top: 1rem; }
                    .footer-column h4 { font-weight: 600; margin-bottom: 1rem; }
                    .footer-column ul { list-style: none; padding: 0; margin: 0; }
                    .footer-column li { margin-bottom: 0.75rem; }
                    .footer-column a, .footer-social a { color: var(--grey-light); text-decoration: none; transition: color 0.3s ease; }
                    .footer-column a:hover, .footer-social a:hover { color: #fff; }
                    .footer-social { display: flex; justify-content: center; gap: 1.5rem; margin-bottom: 3rem; }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.15);
                        color: var(--grey-light);
                        font-size: 0.85rem;
                    }
                    .footer-small { font-size: 0.75rem; opacity: 0.75; }
                    .footer-status { display: flex; flex-direction: column; gap: 0.25rem; text-align: end; font-size: 0.75rem; }
                    .status-dot {
                        display: inline-block;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-inline-end: 0.5rem;
                        border-radius: 50%;
                        background: #4ade80;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse { 50% { opacity: 0.4; } }
                    .back-to-top {
                        position: fixed;
                        bottom: 2rem;
                        inset-inline-end: 2rem;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: #fff;
                        color: var(--black);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                        z-index: 50;
                        transition: transform 0.2s ease;
                    }
                    .back-to-top:hover { transform: scale(1.1); }
                    @media (max-width: 1024px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                        .footer-company { grid-column: 1 / -1; }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_reads_as_iso_without_the_t() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(format_utc(at), "2025-03-07 09:05:02");
    }

    #[test]
    fn social_links_are_absolute() {
        for social in &SOCIAL {
            assert!(social.href.starts_with("https://"), "{}", social.name);
            assert!(!social.icon.is_empty());
        }
    }
}
