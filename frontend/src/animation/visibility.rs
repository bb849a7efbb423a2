//! Fire-once visibility tracking.
//!
//! A [`VisibilityTracker`] subscribes a region with an [`IntersectionHost`]
//! and latches the first time the region is far enough into the viewport.
//! The latch is a [`OneShot`]: once spent, later samples cannot re-fire it.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;

use crate::animation::geometry::RootMargin;
use crate::config;
use crate::error::HostError;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub margin: RootMargin,
    /// Raise the flag this long after the trigger. Used for staggered grids.
    pub delay_ms: u32,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: config::DEFAULT_THRESHOLD,
            margin: parse_margin(config::DEFAULT_MARGIN),
            delay_ms: 0,
        }
    }
}

impl VisibilityOptions {
    /// Options used by animated counters: any overlap counts, but only once
    /// the number is well inside the viewport.
    pub fn counter() -> Self {
        Self {
            threshold: 0.0,
            margin: parse_margin(config::COUNTER_MARGIN),
            delay_ms: 0,
        }
    }

    /// Options for whole sections: any overlap counts once the section is
    /// past the section inset.
    pub fn section() -> Self {
        Self::default()
            .threshold(0.0)
            .margin(config::SECTION_MARGIN)
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn margin(mut self, margin: &str) -> Self {
        self.margin = parse_margin(margin);
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

fn parse_margin(margin: &str) -> RootMargin {
    margin.parse().unwrap_or_else(|e| {
        warn!("Ignoring margin {:?}: {}", margin, e);
        RootMargin::default()
    })
}

/// One observation of a region reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Returned to the host after each sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observe {
    Continue,
    Disconnect,
}

pub type SampleCallback = Box<dyn FnMut(IntersectionSample) -> Observe>;

/// Something that can report how much of a region is on screen.
pub trait IntersectionHost {
    type Region: ?Sized;
    type Subscription;

    fn subscribe(
        &self,
        region: &Self::Region,
        options: &VisibilityOptions,
        on_sample: SampleCallback,
    ) -> Result<Self::Subscription, HostError>;

    /// Stops delivery. No callback registered by `subscribe` runs afterwards.
    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// A token that can be consumed exactly once.
#[derive(Debug, Default)]
pub struct OneShot {
    spent: Cell<bool>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// True on the first call only.
    pub fn fire(&self) -> bool {
        !self.spent.replace(true)
    }

    pub fn is_spent(&self) -> bool {
        self.spent.get()
    }
}

pub struct VisibilityTracker<H: IntersectionHost> {
    subscription: Option<H::Subscription>,
    latch: Rc<OneShot>,
}

impl<H: IntersectionHost> VisibilityTracker<H> {
    pub fn observe(
        host: &H,
        region: &H::Region,
        options: &VisibilityOptions,
        on_visible: impl FnOnce() + 'static,
    ) -> Result<Self, HostError> {
        let latch = Rc::new(OneShot::new());
        let mut on_visible = Some(on_visible);
        let threshold = options.threshold;

        let fired = latch.clone();
        let subscription = host.subscribe(
            region,
            options,
            Box::new(move |sample: IntersectionSample| {
                if fired.is_spent() {
                    return Observe::Disconnect;
                }
                if !sample.meets(threshold) {
                    return Observe::Continue;
                }
                if fired.fire() {
                    if let Some(callback) = on_visible.take() {
                        callback();
                    }
                }
                Observe::Disconnect
            }),
        )?;

        Ok(Self {
            subscription: Some(subscription),
            latch,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.latch.is_spent()
    }

    pub fn detach(mut self, host: &H) {
        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe(subscription);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Host whose samples are pushed by the test.
    #[derive(Default)]
    struct ScriptedHost {
        next_id: Cell<usize>,
        live: RefCell<HashMap<usize, SampleCallback>>,
        disconnected: RefCell<Vec<usize>>,
    }

    impl ScriptedHost {
        fn emit(&self, id: usize, is_intersecting: bool, ratio: f64) {
            let mut live = self.live.borrow_mut();
            let Some(callback) = live.get_mut(&id) else {
                return;
            };
            if callback(IntersectionSample { is_intersecting, ratio }) == Observe::Disconnect {
                live.remove(&id);
                self.disconnected.borrow_mut().push(id);
            }
        }

        fn is_live(&self, id: usize) -> bool {
            self.live.borrow().contains_key(&id)
        }
    }

    impl IntersectionHost for ScriptedHost {
        type Region = str;
        type Subscription = usize;

        fn subscribe(
            &self,
            _region: &str,
            _options: &VisibilityOptions,
            on_sample: SampleCallback,
        ) -> Result<usize, HostError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.live.borrow_mut().insert(id, on_sample);
            Ok(id)
        }

        fn unsubscribe(&self, subscription: usize) {
            self.live.borrow_mut().remove(&subscription);
        }
    }

    fn counting_tracker(
        host: &ScriptedHost,
        options: &VisibilityOptions,
    ) -> (VisibilityTracker<ScriptedHost>, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let tracker = VisibilityTracker::observe(host, "region", options, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();
        (tracker, hits)
    }

    #[test]
    fn one_shot_fires_once() {
        let token = OneShot::new();
        assert!(!token.is_spent());
        assert!(token.fire());
        assert!(!token.fire());
        assert!(token.is_spent());
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let host = ScriptedHost::default();
        let options = VisibilityOptions::default().threshold(0.5);
        let (tracker, hits) = counting_tracker(&host, &options);

        host.emit(0, true, 0.1);
        host.emit(0, true, 0.49);
        host.emit(0, false, 0.0);

        assert!(!tracker.is_visible());
        assert_eq!(hits.get(), 0);
        assert!(host.is_live(0));
    }

    #[test]
    fn latches_on_first_qualifying_sample() {
        let host = ScriptedHost::default();
        let (tracker, hits) = counting_tracker(&host, &VisibilityOptions::default());

        host.emit(0, true, 0.05);
        assert!(!tracker.is_visible());
        host.emit(0, true, 0.1);
        assert!(tracker.is_visible());
        assert_eq!(hits.get(), 1);
        assert_eq!(*host.disconnected.borrow(), vec![0]);

        // Host already dropped the callback, and leaving the viewport does
        // nothing either way.
        host.emit(0, false, 0.0);
        host.emit(0, true, 1.0);
        assert!(tracker.is_visible());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn ignores_ratio_without_intersection() {
        let host = ScriptedHost::default();
        let options = VisibilityOptions::default().threshold(0.0);
        let (tracker, _) = counting_tracker(&host, &options);
        host.emit(0, false, 0.0);
        assert!(!tracker.is_visible());
        host.emit(0, true, 0.0);
        assert!(tracker.is_visible());
    }

    #[test]
    fn detach_before_trigger_stops_delivery() {
        let host = ScriptedHost::default();
        let (tracker, hits) = counting_tracker(&host, &VisibilityOptions::default());
        tracker.detach(&host);
        assert!(!host.is_live(0));
        host.emit(0, true, 1.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn trackers_are_independent() {
        let host = ScriptedHost::default();
        let (first, first_hits) = counting_tracker(&host, &VisibilityOptions::default());
        let (second, second_hits) = counting_tracker(&host, &VisibilityOptions::default());
        host.emit(1, true, 0.8);
        assert!(!first.is_visible());
        assert!(second.is_visible());
        assert_eq!((first_hits.get(), second_hits.get()), (0, 1));
    }

    #[test]
    fn builder_clamps_threshold_and_falls_back_on_bad_margin() {
        let options = VisibilityOptions::default().threshold(3.0).margin("nope");
        assert_eq!(options.threshold, 1.0);
        assert_eq!(options.margin, RootMargin::default());
    }

    #[test]
    fn section_preset_counts_any_overlap_inside_the_inset() {
        let section = VisibilityOptions::section();
        assert_eq!(section.threshold, 0.0);
        assert_eq!(section.margin, "-100px".parse::<RootMargin>().unwrap());
        assert_eq!(section.delay_ms, 0);
        assert_ne!(section, VisibilityOptions::default());
    }
}
