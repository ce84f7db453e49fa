use crate::surface::ChildrenMode;

/// Children of a bottom scroll listener: static content, or a function receiving the container slot the scroll
/// container should be bound to.
pub enum ChildrenStrategy<V, R> {
    Static(Box<dyn FnOnce() -> V + Send>),
    WithContainer(Box<dyn FnOnce(R) -> V + Send>),
}

impl<V, R> ChildrenStrategy<V, R> {
    pub fn mode(&self) -> ChildrenMode {
        match self {
            ChildrenStrategy::Static(_) => ChildrenMode::Static,
            ChildrenStrategy::WithContainer(_) => ChildrenMode::WithContainer,
        }
    }

    pub fn render(self, container_slot: R) -> V {
        match self {
            ChildrenStrategy::Static(children) => children(),
            ChildrenStrategy::WithContainer(children) => children(container_slot),
        }
    }
}

pub fn children_mode<V, R>(children: Option<&ChildrenStrategy<V, R>>) -> ChildrenMode {
    children.map(ChildrenStrategy::mode).unwrap_or(ChildrenMode::Empty)
}

/// Renders nothing without children, static children unchanged and function children with the container slot.
pub fn render_children<V, R>(children: Option<ChildrenStrategy<V, R>>, container_slot: R) -> Option<V> {
    children.map(|children| children.render(container_slot))
}
