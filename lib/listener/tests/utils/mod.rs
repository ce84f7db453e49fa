use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use bottom_scroll_listener::config::ScrollListenerConfig;
use bottom_scroll_listener::debounce::Debounce;
use bottom_scroll_listener::engine::{BottomScrollEngine, ScrollHost};
use bottom_scroll_listener::errors::ScrollListenerError;
use bottom_scroll_listener::surface::{ChildrenMode, ScrollSurface};
use bottom_scroll_listener::threshold::ScrollMetrics;

pub type TestEngine = BottomScrollEngine<FakeScrollHost>;

struct ScheduledTask {
    id: usize,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: usize,
    tasks: Vec<ScheduledTask>,
}

/// Trailing-edge debounce driven by a manual clock, debounced routines only run when the clock is advanced past
/// their due time.
#[derive(Clone, Default)]
pub struct ManualDebounce {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualDebounce {
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    pub fn advance_ms(&self, ms: u64) {
        let target = self.now() + Duration::from_millis(ms);
        loop {
            let next_task = {
                let mut clock = self.clock.borrow_mut();
                let next_index = clock.tasks.iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                next_index.map(|index| {
                    let task = clock.tasks.remove(index);
                    clock.now = task.due;
                    task
                })
            };
            match next_task {
                Some(scheduled_task) => (scheduled_task.task)(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> usize {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push(ScheduledTask { id, due, task });
        id
    }

    fn cancel(&self, task_id: usize) {
        self.clock.borrow_mut().tasks.retain(|task| task.id != task_id);
    }
}

impl Debounce for ManualDebounce {
    fn debounce(&self, routine: Rc<dyn Fn()>, delay: Duration) -> Rc<dyn Fn()> {
        let debounce = self.clone();
        let pending_task = Rc::new(Cell::new(None::<usize>));
        Rc::new(move || {
            if let Some(task_id) = pending_task.take() {
                debounce.cancel(task_id);
            }
            let task = {
                let routine = Rc::clone(&routine);
                let pending_task = Rc::clone(&pending_task);
                move || {
                    pending_task.set(None);
                    routine();
                }
            };
            pending_task.set(Some(debounce.schedule(delay, Box::new(task))));
        })
    }
}

#[derive(Default)]
struct FakeDom {
    root_scroll_top: f64,
    root_scroll_height: f64,
    inner_height: f64,
    elements: HashMap<u32, ScrollMetrics>,
    unavailable_surfaces: Vec<ScrollSurface<u32>>,
    listeners: Vec<(ScrollSurface<u32>, Rc<dyn Fn()>)>,
}

/// Scroll host with elements identified by a number. Like the DOM, adding the same listener twice has no effect.
#[derive(Clone, Default)]
pub struct FakeScrollHost {
    dom: Rc<RefCell<FakeDom>>,
}

impl FakeScrollHost {
    pub fn set_document_metrics(&self, scroll_top: f64, scroll_height: f64, inner_height: f64) {
        let mut dom = self.dom.borrow_mut();
        dom.root_scroll_top = scroll_top;
        dom.root_scroll_height = scroll_height;
        dom.inner_height = inner_height;
    }

    pub fn set_element_metrics(&self, element: u32, scroll_top: f64, scroll_height: f64, client_height: f64) {
        self.dom.borrow_mut().elements.insert(element, ScrollMetrics::new(scroll_top, scroll_height, client_height));
    }

    pub fn remove_element(&self, element: u32) {
        self.dom.borrow_mut().elements.remove(&element);
    }

    /// Makes `surface` refuse scroll listeners.
    pub fn set_unavailable(&self, surface: ScrollSurface<u32>) {
        self.dom.borrow_mut().unavailable_surfaces.push(surface);
    }

    /// Dispatches a scroll event to the listeners of `surface`.
    pub fn scroll(&self, surface: &ScrollSurface<u32>) {
        let listeners: Vec<Rc<dyn Fn()>> = self.dom.borrow().listeners.iter()
            .filter(|(listener_surface, _)| listener_surface == surface)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self, surface: &ScrollSurface<u32>) -> usize {
        self.dom.borrow().listeners.iter().filter(|(listener_surface, _)| listener_surface == surface).count()
    }

    pub fn total_listener_count(&self) -> usize {
        self.dom.borrow().listeners.len()
    }
}

impl ScrollHost for FakeScrollHost {
    type Node = u32;
    type Handler = Rc<dyn Fn()>;

    fn create_handler(&self, on_scroll: Box<dyn Fn()>) -> Rc<dyn Fn()> {
        Rc::from(on_scroll)
    }

    fn sample(&self, surface: &ScrollSurface<u32>) -> Option<ScrollMetrics> {
        let dom = self.dom.borrow();
        match surface {
            ScrollSurface::Document => Some(ScrollMetrics::new(dom.root_scroll_top, dom.root_scroll_height, dom.inner_height)),
            ScrollSurface::Element(element) => dom.elements.get(element).copied(),
        }
    }

    fn add_scroll_listener(&self, surface: &ScrollSurface<u32>, handler: &Rc<dyn Fn()>) -> Result<(), ScrollListenerError> {
        let mut dom = self.dom.borrow_mut();
        if dom.unavailable_surfaces.contains(surface) {
            return Err(ScrollListenerError::ScrollSurfaceUnavailable(format!("{surface}: it is not available.")));
        }
        let is_registered = dom.listeners.iter()
            .any(|(listener_surface, listener)| listener_surface == surface && Rc::ptr_eq(listener, handler));
        if !is_registered {
            dom.listeners.push((surface.clone(), Rc::clone(handler)));
        }
        Ok(())
    }

    fn remove_scroll_listener(&self, surface: &ScrollSurface<u32>, handler: &Rc<dyn Fn()>) {
        self.dom.borrow_mut().listeners
            .retain(|(listener_surface, listener)| !(listener_surface == surface && Rc::ptr_eq(listener, handler)));
    }
}

/// Creates an engine counting the calls of its `on_bottom` callback.
pub fn create_counting_engine(
    host: &FakeScrollHost,
    debounce: &ManualDebounce,
    config: ScrollListenerConfig,
    mode: ChildrenMode,
) -> (TestEngine, Rc<Cell<usize>>) {
    let bottom_count = Rc::new(Cell::new(0));
    let engine = BottomScrollEngine::new(
        host.clone(),
        debounce,
        config,
        mode,
        {
            let bottom_count = Rc::clone(&bottom_count);
            move || bottom_count.set(bottom_count.get() + 1)
        },
    );
    (engine, bottom_count)
}
