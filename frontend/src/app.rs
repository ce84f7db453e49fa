use leptos::html;
use leptos::prelude::*;

use bottom_scroll_listener::listener::{BottomScrollListener, BottomScrollListenerProps, ListenerChildren};

const ITEM_BATCH_SIZE: usize = 30;
const CONTAINER_STYLE: &str = "height: 240px; overflow-y: auto; border: 1px solid gray; margin-bottom: 16px";

/// Demo page of the bottom scroll listener: one feed per scroll surface
#[component]
pub fn App() -> impl IntoView {
    view! {
        <h1>"Bottom scroll listener"</h1>
        <ContainerSlotFeed/>
        <ExternalContainerFeed/>
        <DocumentFeed/>
    }
}

/// Feed loading more items when the document is scrolled to the bottom
#[component]
pub fn DocumentFeed() -> impl IntoView {
    let item_count = RwSignal::new(ITEM_BATCH_SIZE);
    let on_bottom = move |_: ()| {
        log::info!("Document scrolled to bottom, load more items.");
        item_count.update(|count| *count += ITEM_BATCH_SIZE);
    };

    view! {
        <h2>"Document"</h2>
        <BottomScrollListener on_bottom offset=200>
            <ItemList item_count/>
        </BottomScrollListener>
    }
}

/// Feed in a scroll container bound to the container slot of the listener
#[component]
pub fn ContainerSlotFeed() -> impl IntoView {
    let item_count = RwSignal::new(ITEM_BATCH_SIZE);
    let on_bottom = move |_: ()| {
        log::info!("Container scrolled to bottom, load more items.");
        item_count.update(|count| *count += ITEM_BATCH_SIZE);
    };

    let children = ListenerChildren::with_container(move |container_ref: NodeRef<html::Section>| view! {
        <section style=CONTAINER_STYLE node_ref=container_ref>
            <ItemList item_count/>
        </section>
    });

    view! {
        <h2>"Container slot"</h2>
        {
            BottomScrollListener(
                BottomScrollListenerProps::builder()
                    .on_bottom(on_bottom)
                    .debounce(100)
                    .children(children)
                    .build()
            )
        }
    }
}

/// Feed in a scroll container owned by the caller
#[component]
pub fn ExternalContainerFeed() -> impl IntoView {
    let item_count = RwSignal::new(ITEM_BATCH_SIZE);
    let container_ref = NodeRef::<html::Div>::new();
    let on_bottom = move |_: ()| {
        log::info!("External container scrolled to bottom, load more items.");
        item_count.update(|count| *count += ITEM_BATCH_SIZE);
    };

    view! {
        <h2>"External container"</h2>
        <div style=CONTAINER_STYLE node_ref=container_ref>
            <BottomScrollListener on_bottom scroll_container_ref=container_ref>
                <ItemList item_count/>
            </BottomScrollListener>
        </div>
    }
}

/// List of numbered items
#[component]
pub fn ItemList(
    #[prop(into)]
    item_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <ul>
            <For
                each=move || 0..item_count.get()
                key=|index| *index
                let:index
            >
                <li>{format!("Item {}", index + 1)}</li>
            </For>
        </ul>
    }
}
