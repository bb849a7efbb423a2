//! Scroll-driven parallax.
//!
//! A [`Parallax`] is a scroll container `pages` viewports tall. Each
//! [`ParallaxLayer`] sits at its page `offset` and moves at `speed` relative
//! to the scroll. Outside a container, layers render as ordinary stacked
//! blocks so the same sections work in both layouts.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::error::HostError;

/// Vertical position of a layer inside the container, in pixels.
///
/// A layer at an integer offset lines up with the viewport exactly when the
/// container is scrolled to that page, whatever its speed.
pub fn layer_translate(offset: f64, speed: f64, space: f64, scroll: f64) -> f64 {
    space * offset + offset.floor() * space * speed - scroll * speed
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxContext {
    pub scroll: f64,
    /// Height of one page.
    pub space: f64,
    pub container: NodeRef,
}

/// Smoothly scrolls to page `page`: the parallax container when there is
/// one, the window otherwise.
pub fn scroll_to_page(context: Option<&ParallaxContext>, page: f64) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);

    match context.and_then(|ctx| Some((ctx, ctx.container.cast::<Element>()?))) {
        Some((ctx, container)) => {
            options.set_top(page * ctx.space);
            container.scroll_to_with_scroll_to_options(&options);
        }
        None => {
            // Stacked layout: pages are the top-level sections.
            options.set_top(page_anchor(&window, page)?.unwrap_or(0.0));
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    Ok(())
}

fn page_anchor(window: &web_sys::Window, page: f64) -> Result<Option<f64>, HostError> {
    if page <= 0.0 {
        return Ok(None);
    }
    let document = window.document().ok_or(HostError::NoWindow)?;
    let selector = format!("[data-page=\"{}\"]", page.floor());
    let Some(section) = document.query_selector(&selector)? else {
        return Ok(None);
    };
    let scrolled = window.scroll_y()?;
    Ok(Some(section.get_bounding_client_rect().top() + scrolled))
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub pages: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let container = use_node_ref();
    let scroll = use_state(|| 0.0_f64);
    let (_, space) = use_window_size();

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let element = container.cast::<Element>();
                let listener = element.map(|element| {
                    let measured = element.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        scroll.set(f64::from(measured.scroll_top()));
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = element
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Parallax scroll listener failed: {:?}", e);
                    }
                    (element, callback)
                });

                move || {
                    if let Some((element, callback)) = listener {
                        let _ = element.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            container.clone(),
        );
    }

    let context = ParallaxContext {
        scroll: *scroll,
        space,
        container: container.clone(),
    };
    let content_height = format!("height: {}px;", props.pages * space);

    html! {
        <ContextProvider<ParallaxContext> context={context}>
            <div ref={container} class={classes!("parallax", props.class.clone())}>
                <div class="parallax-content" style={content_height}>
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                    .parallax {
                        position: absolute;
                        inset: 0;
                        overflow-x: hidden;
                        overflow-y: scroll;
                        -webkit-overflow-scrolling: touch;
                    }
                    .parallax-content {
                        position: relative;
                        overflow: hidden;
                    }
                    .parallax-layer {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        will-change: transform;
                        box-sizing: border-box;
                    }
                "#}
            </style>
        </ContextProvider<ParallaxContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxLayerProps {
    #[prop_or_default]
    pub offset: f64,
    #[prop_or(0.0)]
    pub speed: f64,
    /// Pure decoration, dropped from the stacked layout.
    #[prop_or_default]
    pub decorative: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ParallaxLayer)]
pub fn parallax_layer(props: &ParallaxLayerProps) -> Html {
    let context = use_context::<ParallaxContext>();

    match context {
        Some(ctx) => {
            let y = layer_translate(props.offset, props.speed, ctx.space, ctx.scroll);
            let style = format!(
                "min-height: {}px; transform: translate3d(0, {}px, 0);",
                ctx.space, y
            );
            html! {
                <div class={classes!("parallax-layer", props.class.clone())} {style}>
                    { for props.children.iter() }
                </div>
            }
        }
        None if props.decorative => html! {},
        None => html! {
            <div class={props.class.clone()} data-page={props.offset.floor().to_string()}>
                { for props.children.iter() }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: f64 = 800.0;

    #[test]
    fn layers_align_with_their_page() {
        for offset in 0..7 {
            let offset = f64::from(offset);
            for speed in [0.0, 0.2, 0.5, -0.3, 1.0] {
                let y = layer_translate(offset, speed, SPACE, offset * SPACE);
                assert!((y - offset * SPACE).abs() < 1e-9, "offset {} speed {}", offset, speed);
            }
        }
    }

    #[test]
    fn static_layers_do_not_move() {
        assert_eq!(layer_translate(2.0, 0.0, SPACE, 0.0), 1600.0);
        assert_eq!(layer_translate(2.0, 0.0, SPACE, 1234.0), 1600.0);
    }

    #[test]
    fn faster_layers_move_further() {
        let slow = layer_translate(1.0, 0.2, SPACE, 100.0) - layer_translate(1.0, 0.2, SPACE, 0.0);
        let fast = layer_translate(1.0, 0.8, SPACE, 100.0) - layer_translate(1.0, 0.8, SPACE, 0.0);
        assert!(fast < slow);
        assert!((slow + 20.0).abs() < 1e-9);
    }

    #[test]
    fn fractional_offsets_use_the_page_floor() {
        // 1.5 pages down, half a page below page one.
        let y = layer_translate(1.5, 0.5, SPACE, SPACE);
        assert!((y - (1.5 * SPACE)).abs() < 1e-9);
    }
}
