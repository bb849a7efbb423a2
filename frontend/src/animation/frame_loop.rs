//! Animation-frame loop.
//!
//! The registered callback re-schedules itself after each frame until it
//! returns [`Frame::Stop`], [`FrameLoop::stop`] is called, or the loop is
//! dropped. Frames come from a [`FrameHost`]; in the browser that is
//! [`DomFrames`], a thin wrapper over `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Continue,
    Stop,
}

pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Something that can call back once per display frame.
pub trait FrameHost {
    /// Keeps a registered callback alive until dropped.
    type Registration;

    fn register(&self, on_frame: FrameCallback) -> Self::Registration;

    /// Asks for one call of `registration` on the next frame.
    fn request(&self, registration: &Self::Registration) -> Result<i32, HostError>;

    fn cancel(&self, id: i32);
}

/// `requestAnimationFrame` on the current window.
#[derive(Clone, Debug)]
pub struct DomFrames {
    window: Window,
}

impl DomFrames {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self { window })
    }
}

impl FrameHost for DomFrames {
    type Registration = Closure<dyn FnMut(f64)>;

    fn register(&self, on_frame: FrameCallback) -> Self::Registration {
        Closure::wrap(on_frame)
    }

    fn request(&self, registration: &Self::Registration) -> Result<i32, HostError> {
        Ok(self
            .window
            .request_animation_frame(registration.as_ref().unchecked_ref())?)
    }

    fn cancel(&self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
    }
}

pub struct FrameLoop<H: FrameHost> {
    inner: Rc<FrameInner<H>>,
}

struct FrameInner<H: FrameHost> {
    host: H,
    registration: RefCell<Option<H::Registration>>,
    running: Cell<bool>,
    /// Id of the pending frame, if any.
    pending: Cell<Option<i32>>,
}

impl<H: FrameHost> FrameInner<H> {
    fn schedule(&self) -> Result<(), HostError> {
        if let Some(ref registration) = *self.registration.borrow() {
            let id = self.host.request(registration)?;
            self.pending.set(Some(id));
        }
        Ok(())
    }
}

impl<H: FrameHost + 'static> FrameLoop<H> {
    /// Registers the first frame. `on_frame` receives the high-resolution
    /// timestamp in milliseconds.
    pub fn start(
        host: H,
        mut on_frame: impl FnMut(f64) -> Frame + 'static,
    ) -> Result<Self, HostError> {
        let inner = Rc::new(FrameInner {
            host,
            registration: RefCell::new(None),
            running: Cell::new(true),
            pending: Cell::new(None),
        });

        let looped = inner.clone();
        let registration = inner.host.register(Box::new(move |timestamp: f64| {
            looped.pending.set(None);
            if !looped.running.get() {
                return;
            }
            if on_frame(timestamp) == Frame::Stop {
                looped.running.set(false);
                return;
            }
            if looped.running.get() {
                if let Err(e) = looped.schedule() {
                    log::warn!("Animation frame request failed: {}", e);
                    looped.running.set(false);
                }
            }
        }));

        *inner.registration.borrow_mut() = Some(registration);
        inner.schedule()?;

        Ok(Self { inner })
    }
}

impl<H: FrameHost> FrameLoop<H> {
    /// Cancels the pending frame, if any. Callbacks the host still delivers
    /// afterwards return without calling `on_frame`.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.pending.take() {
            self.inner.host.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl<H: FrameHost> Drop for FrameLoop<H> {
    fn drop(&mut self) {
        self.stop();
        // Breaks the registration -> inner cycle.
        self.inner.registration.borrow_mut().take();
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;

    type Shared = Rc<RefCell<FrameCallback>>;

    /// Frame host driven by the test. Cancelled frames are remembered so a
    /// test can still deliver them, the way a browser may run a frame that
    /// was already dispatched.
    #[derive(Default)]
    pub struct ScriptedFrames {
        next_id: Cell<i32>,
        queued: RefCell<Vec<(i32, Shared)>>,
        cancelled: RefCell<Vec<(i32, Shared)>>,
    }

    impl ScriptedFrames {
        /// Runs every frame requested so far at `now`.
        pub fn tick(&self, now: f64) {
            let due = std::mem::take(&mut *self.queued.borrow_mut());
            for (_, callback) in due {
                (callback.borrow_mut())(now);
            }
        }

        /// Runs frames that were cancelled before they could be delivered.
        pub fn deliver_cancelled(&self, now: f64) {
            let late = std::mem::take(&mut *self.cancelled.borrow_mut());
            for (_, callback) in late {
                (callback.borrow_mut())(now);
            }
        }

        pub fn queued(&self) -> usize {
            self.queued.borrow().len()
        }
    }

    impl FrameHost for Rc<ScriptedFrames> {
        type Registration = Shared;

        fn register(&self, on_frame: FrameCallback) -> Shared {
            Rc::new(RefCell::new(on_frame))
        }

        fn request(&self, registration: &Shared) -> Result<i32, HostError> {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.queued.borrow_mut().push((id, registration.clone()));
            Ok(id)
        }

        fn cancel(&self, id: i32) {
            let mut queued = self.queued.borrow_mut();
            if let Some(index) = queued.iter().position(|(queued_id, _)| *queued_id == id) {
                let entry = queued.remove(index);
                self.cancelled.borrow_mut().push(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedFrames;
    use super::*;

    fn counting_loop(
        host: &Rc<ScriptedFrames>,
        stop_after: usize,
    ) -> (FrameLoop<Rc<ScriptedFrames>>, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let frames = FrameLoop::start(host.clone(), move |now| {
            log.borrow_mut().push(now);
            if log.borrow().len() >= stop_after {
                Frame::Stop
            } else {
                Frame::Continue
            }
        })
        .unwrap();
        (frames, seen)
    }

    #[test]
    fn reschedules_until_stop_is_returned() {
        let host = Rc::new(ScriptedFrames::default());
        let (frames, seen) = counting_loop(&host, 3);
        for now in [16.0, 32.0, 48.0, 64.0] {
            host.tick(now);
        }
        assert_eq!(*seen.borrow(), vec![16.0, 32.0, 48.0]);
        assert!(!frames.is_running());
        assert_eq!(host.queued(), 0);
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let host = Rc::new(ScriptedFrames::default());
        let (frames, seen) = counting_loop(&host, usize::MAX);
        host.tick(16.0);
        assert_eq!(host.queued(), 1);

        frames.stop();
        assert_eq!(host.queued(), 0);
        host.deliver_cancelled(32.0);
        host.tick(48.0);
        assert_eq!(*seen.borrow(), vec![16.0]);
    }

    #[test]
    fn dropping_the_loop_stops_it() {
        let host = Rc::new(ScriptedFrames::default());
        let (frames, seen) = counting_loop(&host, usize::MAX);
        drop(frames);
        host.deliver_cancelled(16.0);
        host.tick(32.0);
        assert!(seen.borrow().is_empty());
    }
}
