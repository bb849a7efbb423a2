use yew::prelude::*;

/// How a revealed block moves into place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// Up from this many pixels below.
    Rise(i32),
    /// In from the side. Negative values come from the left.
    Slide(i32),
    Grow,
    Fade,
}

impl Entrance {
    fn hidden_transform(&self) -> String {
        match self {
            Entrance::Rise(px) => format!("translateY({}px)", px),
            Entrance::Slide(px) => format!("translateX({}px)", px),
            Entrance::Grow => "scale(0.8)".to_string(),
            Entrance::Fade => "none".to_string(),
        }
    }
}

/// Inline style for a block that transitions in once `visible` is set.
pub fn reveal_style(visible: bool, entrance: Entrance, duration_ms: u32, delay_ms: u32) -> String {
    let (opacity, transform) = if visible {
        ("1".to_string(), "none".to_string())
    } else {
        ("0".to_string(), entrance.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}ms ease-out {}ms, transform {}ms ease-out {}ms;",
        opacity, transform, duration_ms, delay_ms, duration_ms, delay_ms
    )
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger(base: u32, step: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub visible: bool,
    #[prop_or(Entrance::Rise(30))]
    pub entrance: Entrance,
    #[prop_or(800)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let style = reveal_style(props.visible, props.entrance, props.duration_ms, props.delay_ms);
    html! {
        <div ref={props.node_ref.clone()} class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_blocks_start_offset_and_transparent() {
        let style = reveal_style(false, Entrance::Rise(50), 800, 0);
        assert!(style.starts_with("opacity: 0; transform: translateY(50px);"));

        let style = reveal_style(false, Entrance::Slide(-50), 800, 0);
        assert!(style.contains("translateX(-50px)"));

        assert!(reveal_style(false, Entrance::Grow, 800, 0).contains("scale(0.8)"));
    }

    #[test]
    fn visible_blocks_settle_in_place() {
        for entrance in [Entrance::Rise(30), Entrance::Slide(40), Entrance::Grow, Entrance::Fade] {
            let style = reveal_style(true, entrance, 600, 0);
            assert!(style.starts_with("opacity: 1; transform: none;"), "{}", style);
        }
    }

    #[test]
    fn timing_is_carried_into_the_transition() {
        let style = reveal_style(true, Entrance::Fade, 600, 300);
        assert!(style.contains("opacity 600ms ease-out 300ms"));
        assert!(style.contains("transform 600ms ease-out 300ms"));
    }

    #[test]
    fn stagger_steps_per_item() {
        let delays: Vec<u32> = (0..5).map(|i| stagger(200, 100, i)).collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600]);
        assert_eq!(stagger(0, 100, 3), 300);
        assert_eq!(stagger(1, u32::MAX, 2), u32::MAX);
    }
}
