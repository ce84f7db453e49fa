use leptos::children::ToChildren;
use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::children::{children_mode, render_children, ChildrenStrategy};
use crate::config::ScrollListenerConfig;
use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_OFFSET_PX};
use crate::container::{ContainerSlot, ScrollContainerRef};

pub type ListenerChildren = ChildrenStrategy<AnyView, ContainerSlot>;

impl ListenerChildren {
    /// Children rendered with a node reference bound to the container slot of the listener. The node reference must
    /// be given to the scroll container, which can be any element.
    pub fn with_container<E, F, C>(children: F) -> Self
    where
        E: ElementType + 'static,
        E::Output: JsCast + Clone + 'static,
        F: FnOnce(NodeRef<E>) -> C + Send + 'static,
        C: IntoView + 'static,
    {
        ChildrenStrategy::WithContainer(Box::new(move |container_slot: ContainerSlot| {
            children(container_slot.bind::<E>()).into_any()
        }))
    }
}

impl<F, C> ToChildren<F> for ListenerChildren
where
    F: FnOnce() -> C + Send + 'static,
    C: IntoView + 'static,
{
    fn to_children(children: F) -> Self {
        ChildrenStrategy::Static(Box::new(move || children().into_any()))
    }
}

/// Component calling `on_bottom` when its scroll surface is scrolled to within `offset` pixels of its bottom.
///
/// The scroll surface is the element of `scroll_container_ref` if it is set when the component is mounted, the
/// element bound to the container slot if `children` are built with [`ListenerChildren::with_container`], and the
/// document otherwise. Scroll events are debounced by `debounce` milliseconds.
///
/// Panics when the container is expected but not bound when mounting, or gone when unmounting.
#[component]
pub fn BottomScrollListener(
    #[prop(into)]
    on_bottom: Callback<()>,
    #[prop(default = DEFAULT_DEBOUNCE_MS)]
    debounce: u64,
    #[prop(default = DEFAULT_OFFSET_PX)]
    offset: i32,
    #[prop(optional, into)]
    scroll_container_ref: Option<ScrollContainerRef>,
    #[prop(optional)]
    children: Option<ListenerChildren>,
) -> impl IntoView {
    let config = ScrollListenerConfig::new(debounce, offset);
    let mode = children_mode(children.as_ref());
    let container_slot = ContainerSlot::new();

    #[cfg(any(feature = "hydrate", feature = "csr"))]
    {
        // only enable on the client to avoid server side "Dropped SendWrapper" error
        use std::rc::Rc;
        use send_wrapper::SendWrapper;
        use crate::debounce::BrowserDebounce;
        use crate::dom::DomScrollHost;
        use crate::engine::BottomScrollEngine;

        let engine = SendWrapper::new(Rc::new(BottomScrollEngine::new(
            DomScrollHost,
            &BrowserDebounce,
            config,
            mode,
            move || on_bottom.run(()),
        )));

        let mount_engine = engine.clone();
        Effect::new(move |_| {
            let external_container = scroll_container_ref.and_then(|container_ref| container_ref.get_untracked());
            if let Err(e) = mount_engine.mount(external_container, container_slot.get_untracked()) {
                panic!("{e}");
            }
        });

        on_cleanup(move || if let Err(e) = engine.unmount() {
            panic!("{e}");
        });
    }
    #[cfg(not(any(feature = "hydrate", feature = "csr")))]
    let _ = (config, mode, on_bottom, scroll_container_ref);

    render_children(children, container_slot)
}
