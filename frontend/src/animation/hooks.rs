use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::count_up::CountUp;
use crate::animation::frame_loop::{DomFrames, Frame, FrameHost, FrameLoop};
use crate::animation::viewport::DomViewport;
use crate::animation::visibility::{VisibilityOptions, VisibilityTracker};
use crate::error::HostError;

/// True once the referenced element has scrolled into view. Never flips back.
///
/// The observer and any pending stagger timeout are released on unmount.
#[hook]
pub fn use_visibility(node: NodeRef, options: VisibilityOptions) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let pending = Rc::new(RefCell::new(None::<Timeout>));

                let tracker = match node.cast::<Element>() {
                    Some(element) => {
                        let delay_ms = options.delay_ms;
                        let slot = pending.clone();
                        let reveal_setter = setter.clone();
                        let reveal = move || {
                            if delay_ms == 0 {
                                reveal_setter.set(true);
                            } else {
                                // Replacing the slot drops any earlier timeout.
                                *slot.borrow_mut() =
                                    Some(Timeout::new(delay_ms, move || reveal_setter.set(true)));
                            }
                        };
                        match VisibilityTracker::observe(&DomViewport, &element, options, reveal) {
                            Ok(tracker) => Some(tracker),
                            Err(e) => {
                                warn!("Visibility tracking unavailable, revealing now: {}", e);
                                setter.set(true);
                                None
                            }
                        }
                    }
                    None => {
                        debug!("Tracked region is not mounted");
                        None
                    }
                };

                move || {
                    if let Some(tracker) = tracker {
                        if !tracker.is_visible() {
                            debug!("Region unmounted before it became visible");
                        }
                        tracker.detach(&DomViewport);
                    }
                    // Dropping a gloo Timeout cancels it.
                    pending.borrow_mut().take();
                }
            },
            (node, options),
        );
    }

    *visible
}

/// Advances `counter` once per frame from `host` until it settles, calling
/// `redraw` after every step.
pub fn drive_counter<H: FrameHost + 'static>(
    host: H,
    counter: Rc<RefCell<CountUp>>,
    redraw: impl Fn() + 'static,
) -> Result<FrameLoop<H>, HostError> {
    FrameLoop::start(host, move |now| {
        // The borrow must end before the redraw.
        let phase = counter.borrow_mut().advance(now);
        redraw();
        if phase.is_running() {
            Frame::Continue
        } else {
            Frame::Stop
        }
    })
}

/// Counts from 0 to `target` over `duration_ms` once `visible` turns true,
/// returning the current value with `suffix` appended.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, suffix: &str, visible: bool) -> String {
    let redraw = use_force_update();
    let counter = use_mut_ref(|| CountUp::new(target, duration_ms));
    let frames = use_mut_ref(|| None::<FrameLoop<DomFrames>>);

    {
        let counter = counter.clone();
        let frames = frames.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible && counter.borrow_mut().start() {
                    let frame_redraw = redraw.clone();
                    let started = DomFrames::new().and_then(|host| {
                        drive_counter(host, counter.clone(), move || frame_redraw.force_update())
                    });
                    match started {
                        Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                        Err(e) => {
                            warn!("No animation frames, showing final count: {}", e);
                            counter.borrow_mut().finish();
                            redraw.force_update();
                        }
                    }
                }
                || ()
            },
            visible,
        );
    }

    // Cancel any in-flight frame when the owner goes away.
    use_effect_with_deps(
        move |_| {
            move || {
                if let Some(frame_loop) = frames.borrow_mut().take() {
                    if frame_loop.is_running() {
                        debug!("Counter unmounted mid-animation");
                    }
                    frame_loop.stop();
                }
            }
        },
        (),
    );

    let shown = counter.borrow().display(suffix);
    shown
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::animation::count_up::Phase;
    use crate::animation::frame_loop::scripted::ScriptedFrames;

    fn started_counter(target: u32, duration_ms: u32) -> Rc<RefCell<CountUp>> {
        let counter = Rc::new(RefCell::new(CountUp::new(target, duration_ms)));
        assert!(counter.borrow_mut().start());
        counter
    }

    #[test]
    fn counter_settles_through_frames() {
        let host = Rc::new(ScriptedFrames::default());
        let counter = started_counter(150, 2000);
        let redraws = Rc::new(Cell::new(0));
        let seen = redraws.clone();
        let frames = drive_counter(host.clone(), counter.clone(), move || seen.set(seen.get() + 1))
            .unwrap();

        for now in [0.0, 1000.0, 2000.0, 2016.0] {
            host.tick(now);
        }

        assert_eq!(counter.borrow().display("+"), "150+");
        assert_eq!(counter.borrow().phase(), Phase::Settled);
        assert_eq!(redraws.get(), 3);
        assert!(!frames.is_running());
    }

    #[test]
    fn stopped_counter_ignores_late_frames() {
        let host = Rc::new(ScriptedFrames::default());
        let counter = started_counter(150, 2000);
        let redraws = Rc::new(Cell::new(0));
        let seen = redraws.clone();
        let frames = drive_counter(host.clone(), counter.clone(), move || seen.set(seen.get() + 1))
            .unwrap();

        host.tick(0.0);
        host.tick(500.0);
        let value = counter.borrow().value();
        let phase = counter.borrow().phase();
        assert!(value > 0 && value < 150);
        assert!(phase.is_running());

        frames.stop();
        assert_eq!(host.queued(), 0);
        host.deliver_cancelled(1500.0);
        host.tick(2500.0);

        assert_eq!(counter.borrow().value(), value);
        assert_eq!(counter.borrow().phase(), phase);
        assert_eq!(redraws.get(), 2);
    }
}
