use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Reference to a scroll container of any element type.
#[derive(Clone, Copy)]
pub struct ScrollContainerRef(Callback<(), Option<Element>>);

impl ScrollContainerRef {
    /// Returns the referenced element, None if it is not mounted.
    pub fn get_untracked(&self) -> Option<Element> {
        self.0.run(())
    }
}

impl<E> From<NodeRef<E>> for ScrollContainerRef
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    fn from(node_ref: NodeRef<E>) -> Self {
        Self(Callback::new(move |_| node_ref.get_untracked().map(|element| element.unchecked_into::<Element>())))
    }
}

/// Container slot owned by a bottom scroll listener. Function children bind it to their scroll container during
/// render, the listener reads it once when it is mounted.
#[derive(Clone, Copy)]
pub struct ContainerSlot(StoredValue<Option<ScrollContainerRef>>);

impl ContainerSlot {
    pub fn new() -> Self {
        Self(StoredValue::new(None))
    }

    /// Returns a node reference bound to the slot, to be given to the scroll container element.
    pub fn bind<E>(&self) -> NodeRef<E>
    where
        E: ElementType + 'static,
        E::Output: JsCast + Clone + 'static,
    {
        let node_ref = NodeRef::<E>::new();
        self.0.set_value(Some(ScrollContainerRef::from(node_ref)));
        node_ref
    }

    pub fn is_bound(&self) -> bool {
        self.0.with_value(Option::is_some)
    }

    pub fn get_untracked(&self) -> Option<Element> {
        self.0.get_value().and_then(|container_ref| container_ref.get_untracked())
    }
}

impl Default for ContainerSlot {
    fn default() -> Self {
        Self::new()
    }
}
