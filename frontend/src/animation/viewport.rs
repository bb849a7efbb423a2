use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::animation::geometry::{intersection_ratio, Rect};
use crate::animation::visibility::{
    IntersectionHost, IntersectionSample, Observe, SampleCallback, VisibilityOptions,
};
use crate::error::HostError;

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;
type ListenerClosure = Closure<dyn FnMut()>;

/// The browser viewport as an [`IntersectionHost`].
///
/// Prefers `IntersectionObserver`; older engines get a scroll listener that
/// measures the element itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DomViewport;

pub enum DomSubscription {
    Observer {
        observer: IntersectionObserver,
        _callback: ObserverClosure,
    },
    Scroll {
        window: Window,
        callback: ListenerClosure,
    },
}

const FALLBACK_EVENTS: [&str; 2] = ["scroll", "resize"];

/// A listener handle shared with the listener itself, so it can remove
/// itself from inside its own callback.
struct SelfRemoving<L> {
    listener: RefCell<Option<L>>,
}

impl<L> SelfRemoving<L> {
    fn new() -> Self {
        Self {
            listener: RefCell::new(None),
        }
    }

    fn attach(&self, listener: L) {
        *self.listener.borrow_mut() = Some(listener);
    }

    fn is_attached(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// Passes `sample` on while attached. On disconnect the listener is
    /// handed to `remove` exactly once.
    fn deliver(
        &self,
        on_sample: &mut SampleCallback,
        sample: IntersectionSample,
        remove: impl FnOnce(L),
    ) {
        if !self.is_attached() {
            return;
        }
        if on_sample(sample) == Observe::Disconnect {
            let listener = self.listener.borrow_mut().take();
            if let Some(listener) = listener {
                remove(listener);
            }
        }
    }
}

fn remove_listeners(window: &Window, listener: &Function) {
    for event in FALLBACK_EVENTS {
        let _ = window.remove_event_listener_with_callback_and_bool(event, listener, true);
    }
}

impl DomViewport {
    fn observe(
        &self,
        region: &Element,
        options: &VisibilityOptions,
        mut on_sample: SampleCallback,
    ) -> Result<DomSubscription, HostError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if on_sample(sample) == Observe::Disconnect {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.margin.to_string());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(region);

        Ok(DomSubscription::Observer {
            observer,
            _callback: callback,
        })
    }

    fn listen(
        &self,
        window: Window,
        region: &Element,
        options: &VisibilityOptions,
        mut on_sample: SampleCallback,
    ) -> Result<DomSubscription, HostError> {
        debug!("IntersectionObserver unavailable, measuring on scroll");
        let region = region.clone();
        let margin = options.margin;
        let measured_window = window.clone();
        let registered = Rc::new(SelfRemoving::<Function>::new());
        let attached = registered.clone();

        let callback = Closure::wrap(Box::new(move || {
            if !attached.is_attached() {
                return;
            }
            let width = measured_window.inner_width().ok().and_then(|w| w.as_f64());
            let height = measured_window.inner_height().ok().and_then(|h| h.as_f64());
            let (Some(width), Some(height)) = (width, height) else {
                return;
            };
            let bounds = region.get_bounding_client_rect();
            let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            let viewport = Rect::new(0.0, 0.0, width, height);
            let ratio = intersection_ratio(&rect, &viewport, &margin);
            let sample = IntersectionSample {
                is_intersecting: rect.intersect(&viewport.expand(&margin)).is_some(),
                ratio,
            };
            attached.deliver(&mut on_sample, sample, |listener| {
                remove_listeners(&measured_window, &listener)
            });
        }) as Box<dyn FnMut()>);

        let listener: Function = callback.as_ref().unchecked_ref::<Function>().clone();
        for event in FALLBACK_EVENTS {
            // Capture so scrolls inside nested containers reach us too.
            window.add_event_listener_with_callback_and_bool(event, &listener, true)?;
        }
        registered.attach(listener.clone());

        // Initial check, like the observer's first delivery.
        listener.call0(&JsValue::NULL)?;

        Ok(DomSubscription::Scroll { window, callback })
    }
}

impl IntersectionHost for DomViewport {
    type Region = Element;
    type Subscription = DomSubscription;

    fn subscribe(
        &self,
        region: &Element,
        options: &VisibilityOptions,
        on_sample: SampleCallback,
    ) -> Result<DomSubscription, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        if !region.is_connected() {
            return Err(HostError::Detached);
        }
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if supported {
            self.observe(region, options, on_sample)
        } else {
            self.listen(window, region, options, on_sample)
        }
    }

    fn unsubscribe(&self, subscription: DomSubscription) {
        match subscription {
            DomSubscription::Observer { observer, _callback } => {
                observer.disconnect();
                drop(_callback);
            }
            DomSubscription::Scroll { window, callback } => {
                // Already gone if the region disconnected itself.
                remove_listeners(&window, callback.as_ref().unchecked_ref());
            }
        }
    }
}
