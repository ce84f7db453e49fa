use std::rc::Rc;
use std::time::Duration;

use leptos_use::use_debounce_fn;

/// Wraps a routine into a trailing-edge debounced one.
pub trait Debounce {
    fn debounce(&self, routine: Rc<dyn Fn()>, delay: Duration) -> Rc<dyn Fn()>;
}

/// Debounce backed by `leptos_use`, its pending timer is cleared when the reactive owner is cleaned up.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDebounce;

impl Debounce for BrowserDebounce {
    fn debounce(&self, routine: Rc<dyn Fn()>, delay: Duration) -> Rc<dyn Fn()> {
        let debounced_routine = use_debounce_fn(move || routine(), delay.as_millis() as f64);
        Rc::new(move || {
            debounced_routine();
        })
    }
}

/// Debounces `routine` by `delay`. Without delay, the routine runs synchronously on every call.
pub fn debounce_routine<D: Debounce>(debounce: &D, delay: Option<Duration>, routine: Rc<dyn Fn()>) -> Rc<dyn Fn()> {
    match delay {
        Some(delay) => debounce.debounce(routine, delay),
        None => routine,
    }
}
