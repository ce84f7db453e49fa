use leptos_use::{use_document, use_window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget};

use crate::constants::SCROLL_EVENT;
use crate::engine::ScrollHost;
use crate::errors::ScrollListenerError;
use crate::surface::ScrollSurface;
use crate::threshold::ScrollMetrics;

/// Scroll host of the browser. Element surfaces are measured with their `clientHeight`, the document with the
/// scrolling root's position and the window's `innerHeight`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScrollHost;

impl ScrollHost for DomScrollHost {
    type Node = Element;
    type Handler = Closure<dyn Fn()>;

    fn create_handler(&self, on_scroll: Box<dyn Fn()>) -> Closure<dyn Fn()> {
        Closure::wrap(on_scroll)
    }

    fn sample(&self, surface: &ScrollSurface<Element>) -> Option<ScrollMetrics> {
        match surface {
            ScrollSurface::Element(element) => Some(ScrollMetrics::new(
                f64::from(element.scroll_top()),
                f64::from(element.scroll_height()),
                f64::from(element.client_height()),
            )),
            ScrollSurface::Document => {
                let scroll_node = get_document()
                    .and_then(|document| document.scrolling_element().or_else(|| document.document_element()))?;
                let inner_height = (*use_window()).as_ref()
                    .and_then(|window| window.inner_height().ok())
                    .and_then(|inner_height| inner_height.as_f64())?;
                Some(ScrollMetrics::new(
                    f64::from(scroll_node.scroll_top()),
                    f64::from(scroll_node.scroll_height()),
                    inner_height,
                ))
            },
        }
    }

    fn add_scroll_listener(&self, surface: &ScrollSurface<Element>, handler: &Closure<dyn Fn()>) -> Result<(), ScrollListenerError> {
        let event_target = get_event_target(surface).ok_or_else(
            || ScrollListenerError::ScrollSurfaceUnavailable(format!("{surface}: it is not available."))
        )?;
        event_target.add_event_listener_with_callback(SCROLL_EVENT, handler.as_ref().unchecked_ref()).map_err(
            |e| ScrollListenerError::ScrollSurfaceUnavailable(format!("{surface}: {e:?}"))
        )
    }

    fn remove_scroll_listener(&self, surface: &ScrollSurface<Element>, handler: &Closure<dyn Fn()>) {
        let Some(event_target) = get_event_target(surface) else {
            return
        };
        if let Err(e) = event_target.remove_event_listener_with_callback(SCROLL_EVENT, handler.as_ref().unchecked_ref()) {
            log::error!("Failed to remove scroll listener from the {surface}: {e:?}");
        }
    }
}

fn get_document() -> Option<Document> {
    (*use_document()).as_ref().map(|document| Document::clone(document))
}

fn get_event_target(surface: &ScrollSurface<Element>) -> Option<EventTarget> {
    match surface {
        ScrollSurface::Element(element) => Some(EventTarget::from(element.clone())),
        ScrollSurface::Document => get_document().map(EventTarget::from),
    }
}
