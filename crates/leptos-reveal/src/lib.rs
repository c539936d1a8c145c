//! Leptos Reveal
//!
//! One-shot "scrolled into view" latch for Leptos, built on IntersectionObserver.
//! The latch flips to `true` the first time the observed element crosses the
//! threshold and never flips back. Without IntersectionObserver support the
//! latch opens immediately so content is never left hidden.

use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observation settings for a reveal trigger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    root_margin: Option<&'static str>,
}

impl RevealOptions {
    /// Fire once `threshold` (fraction of the element, 0.0 - 1.0) is visible
    pub const fn new(threshold: f64) -> Self {
        Self { threshold, root_margin: None }
    }

    /// Grow the viewport by a CSS margin (e.g. `"100px 0px"`) so the trigger
    /// fires before the element is geometrically visible
    pub const fn with_root_margin(self, margin: &'static str) -> Self {
        Self { root_margin: Some(margin), ..self }
    }

    /// Threshold clamped into `0.0..=1.0` (NaN counts as 0)
    pub fn threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }

    pub fn root_margin(&self) -> Option<&'static str> {
        self.root_margin
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Monotonic false -> true flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    set: bool,
}

impl Latch {
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Set the latch. Returns `true` only for the call that performed the
    /// transition, so it can drive `maybe_update` without spurious notifications.
    pub fn fire(&mut self) -> bool {
        if self.set {
            false
        } else {
            self.set = true;
            true
        }
    }
}

/// Whether an intersection report counts as "entered"
pub fn crossed(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Whether the running browser exposes IntersectionObserver
pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Live observer plus the JS callback it calls into.
/// Dropping the guard disconnects the observer.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `target` and call `on_enter` the first time it crosses the threshold.
/// The observer disconnects itself after firing.
pub fn observe_once<F>(target: &Element, options: RevealOptions, on_enter: F) -> Result<ObserverGuard, JsValue>
where
    F: Fn() + 'static,
{
    if !observer_supported() {
        return Err(JsValue::from_str("IntersectionObserver is not available"));
    }

    let threshold = options.threshold();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                crossed(entry.is_intersecting(), entry.intersection_ratio(), threshold)
            });
            if entered {
                observer.disconnect();
                on_enter();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = options.root_margin() {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    Ok(ObserverGuard { observer, _callback: callback })
}

/// Next observer guard for one run of the reveal effect.
///
/// Once latched the guard is dropped. A live guard is kept. Nothing starts
/// until the target is mounted. If starting fails the latch opens instead.
fn next_guard<T, G, E>(
    latched: bool,
    target: Option<T>,
    guard: Option<G>,
    start: impl FnOnce(T) -> Result<G, E>,
    open: impl FnOnce(),
) -> Option<G> {
    if latched {
        return None;
    }
    if guard.is_some() {
        return guard;
    }
    let target = target?;
    match start(target) {
        Ok(guard) => Some(guard),
        Err(_) => {
            // Fail open: an animation feature must not hide content
            open();
            None
        }
    }
}

/// Latch that opens the first time the element behind `target` scrolls into view.
///
/// Observation starts once the node is mounted and is released when the
/// owning reactive scope is disposed, fired or not.
pub fn use_reveal<E>(target: NodeRef<E>, options: RevealOptions) -> Signal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (latch, set_latch) = signal(Latch::default());
    let open = move || {
        set_latch.maybe_update(Latch::fire);
    };

    Effect::new(move |prev: Option<Option<ObserverGuard>>| {
        next_guard(
            latch.with_untracked(Latch::is_set),
            target.get(),
            prev.flatten(),
            |el| observe_once(el.unchecked_ref::<Element>(), options, open),
            open,
        )
    });

    Signal::derive(move || latch.with(Latch::is_set))
}
