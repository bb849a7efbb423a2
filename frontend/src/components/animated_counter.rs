use yew::prelude::*;

use crate::animation::hooks::{use_count_up, use_visibility};
use crate::animation::visibility::VisibilityOptions;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u32,
    #[prop_or(config::DEFAULT_COUNT_UP_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_else(VisibilityOptions::counter)]
    pub options: VisibilityOptions,
    #[prop_or_default]
    pub class: Classes,
}

/// A number that counts up from zero the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), props.options.clone());
    let shown = use_count_up(props.target, props.duration_ms, &props.suffix, visible);

    html! {
        <span ref={node} class={classes!("animated-counter", props.class.clone())}>
            { shown }
        </span>
    }
}
