use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ScrollListenerConfig;
use crate::debounce::{debounce_routine, Debounce};
use crate::errors::ScrollListenerError;
use crate::surface::{resolve_scroll_surface, ChildrenMode, ScrollSurface};
use crate::threshold::ScrollMetrics;

/// Environment providing scroll surfaces: scroll event subscription and scroll geometry.
pub trait ScrollHost {
    type Node: Clone;
    /// Registered scroll listener. The same handler is used to add and to remove the listener.
    type Handler;

    fn create_handler(&self, on_scroll: Box<dyn Fn()>) -> Self::Handler;

    /// Samples the geometry of `surface`, None if it is not available.
    fn sample(&self, surface: &ScrollSurface<Self::Node>) -> Option<ScrollMetrics>;

    fn add_scroll_listener(&self, surface: &ScrollSurface<Self::Node>, handler: &Self::Handler) -> Result<(), ScrollListenerError>;

    fn remove_scroll_listener(&self, surface: &ScrollSurface<Self::Node>, handler: &Self::Handler);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ListenerState<N> {
    Unattached,
    Attached(ScrollSurface<N>),
    MountFailed,
    Detached,
}

/// Detects when a scroll surface is scrolled to its bottom and calls `on_bottom`, at most once per debounce window.
///
/// The debounced scroll handler is created once, so mounting and unmounting register and remove the same handler.
pub struct BottomScrollEngine<H: ScrollHost> {
    host: Rc<H>,
    mode: ChildrenMode,
    handler: H::Handler,
    state: Rc<RefCell<ListenerState<H::Node>>>,
}

impl<H> BottomScrollEngine<H>
where
    H: ScrollHost + 'static,
{
    pub fn new<D: Debounce>(
        host: H,
        debounce: &D,
        config: ScrollListenerConfig,
        mode: ChildrenMode,
        on_bottom: impl Fn() + 'static,
    ) -> Self {
        let host = Rc::new(host);
        let state = Rc::new(RefCell::new(ListenerState::Unattached));
        let on_scroll = debounce_routine(
            debounce,
            config.debounce_delay(),
            Rc::new(evaluate_bottom_threshold(Rc::clone(&host), Rc::clone(&state), config.offset_px, on_bottom)),
        );
        let handler = host.create_handler(Box::new(move || on_scroll()));

        Self {
            host,
            mode,
            handler,
            state,
        }
    }

    /// Resolves the scroll surface and registers the scroll handler on it.
    pub fn mount(
        &self,
        external_container: Option<H::Node>,
        container_slot: Option<H::Node>,
    ) -> Result<(), ScrollListenerError> {
        if !matches!(*self.state.borrow(), ListenerState::Unattached) {
            return Err(ScrollListenerError::AlreadyMounted);
        }
        let attach_result = resolve_scroll_surface(self.mode, external_container, container_slot).and_then(|surface| {
            log::debug!("Attach bottom scroll listener to {surface}.");
            self.host.add_scroll_listener(&surface, &self.handler)?;
            Ok(surface)
        });
        match attach_result {
            Ok(surface) => {
                *self.state.borrow_mut() = ListenerState::Attached(surface);
                Ok(())
            },
            Err(e) => {
                *self.state.borrow_mut() = ListenerState::MountFailed;
                Err(e)
            },
        }
    }

    /// Removes the scroll handler. Evaluations still pending afterwards are no-ops.
    ///
    /// Unmounting a listener that was never mounted or is already detached does nothing.
    pub fn unmount(&self) -> Result<(), ScrollListenerError> {
        match self.state.replace(ListenerState::Detached) {
            ListenerState::Attached(surface) => {
                log::debug!("Detach bottom scroll listener from {surface}.");
                self.host.remove_scroll_listener(&surface, &self.handler);
                Ok(())
            },
            ListenerState::MountFailed if self.mode.expects_container() => Err(ScrollListenerError::ContainerUnmountedPrematurely),
            ListenerState::Unattached => {
                log::debug!("Bottom scroll listener unmounted before being mounted.");
                Ok(())
            },
            ListenerState::MountFailed | ListenerState::Detached => Ok(()),
        }
    }

    /// Returns the resolved scroll surface while the listener is attached.
    pub fn surface(&self) -> Option<ScrollSurface<H::Node>> {
        match &*self.state.borrow() {
            ListenerState::Attached(surface) => Some(surface.clone()),
            _ => None,
        }
    }
}

fn evaluate_bottom_threshold<H: ScrollHost + 'static, F: Fn() + 'static>(
    host: Rc<H>,
    state: Rc<RefCell<ListenerState<H::Node>>>,
    offset_px: i32,
    on_bottom: F,
) -> impl Fn() + 'static {
    move || {
        // the surface is gone once teardown started, a late evaluation is then a no-op
        let metrics = match &*state.borrow() {
            ListenerState::Attached(surface) => host.sample(surface),
            _ => None,
        };
        if let Some(metrics) = metrics {
            log::trace!("Scroll surface is {} px from its bottom.", metrics.remaining_distance());
            if metrics.has_reached_bottom(offset_px) {
                on_bottom();
            }
        }
    }
}
