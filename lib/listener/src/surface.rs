use std::fmt;
use std::fmt::Display;

use crate::errors::ScrollListenerError;

/// Scroll surface monitored by a bottom scroll listener, resolved once when the listener is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollSurface<N> {
    Document,
    Element(N),
}

impl<N> Display for ScrollSurface<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollSurface::Document => write!(f, "document"),
            ScrollSurface::Element(_) => write!(f, "scroll container"),
        }
    }
}

/// Shape of the children given to the listener, decided once from the caller's configuration.
/// Shared by the render strategy and the target resolver so both agree on whether a container is expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildrenMode {
    Empty,
    Static,
    WithContainer,
}

impl ChildrenMode {
    pub fn expects_container(&self) -> bool {
        *self == ChildrenMode::WithContainer
    }
}

/// Resolves the scroll surface of a listener.
///
/// The container path is taken when the children receive the container slot or when an external container is
/// available. On that path the external container is preferred over the slot, and a missing node is an error.
/// Otherwise the surface is the document.
pub fn resolve_scroll_surface<N>(
    mode: ChildrenMode,
    external_container: Option<N>,
    container_slot: Option<N>,
) -> Result<ScrollSurface<N>, ScrollListenerError> {
    if mode.expects_container() || external_container.is_some() {
        external_container
            .or(container_slot)
            .map(ScrollSurface::Element)
            .ok_or(ScrollListenerError::MissingContainerOnMount)
    } else {
        Ok(ScrollSurface::Document)
    }
}
