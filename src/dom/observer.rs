//! Debounced observation of the file tree.
//!
//! The host page virtualizes and re-renders rows, producing bursts of
//! structural mutations. [`TreeObserver`] subscribes a `MutationObserver` to
//! the tree root and coalesces each burst into one resync callback through a
//! [`DebounceSlot`]. `stop` disconnects the observer and cancels any pending
//! resync; a session must stop the previous observer before starting a new
//! one so subscriptions never accumulate across navigations.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MutationObserver, MutationObserverInit};

use crate::config::delays;
use crate::core::sched::{BrowserTimers, DebounceSlot};

pub struct TreeObserver {
    root: Element,
    observer: MutationObserver,
    debounce: Rc<DebounceSlot<BrowserTimers>>,
    // Kept alive for as long as the observer may fire.
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl TreeObserver {
    /// Subscribe to structural mutations under `root`. `on_resync` runs once
    /// per mutation burst, after the debounce window.
    pub fn start(root: &Element, on_resync: impl Fn() + 'static) -> Option<Self> {
        let debounce = Rc::new(DebounceSlot::new(BrowserTimers));
        let on_resync = Rc::new(on_resync);

        let slot = Rc::clone(&debounce);
        let callback = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _observer: MutationObserver| {
                let resync = Rc::clone(&on_resync);
                slot.schedule(delays::RESYNC_DEBOUNCE_MS, move || resync());
            },
        )
            as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(root, &options).ok()?;

        Some(Self {
            root: root.clone(),
            observer,
            debounce,
            _callback: callback,
        })
    }

    /// The root this observer is bound to.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Tear down: no callbacks fire after this returns.
    pub fn stop(self) {
        self.debounce.cancel();
        self.observer.disconnect();
    }
}
