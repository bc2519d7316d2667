//! The rendering environment: live layout, scroll notifications, smooth scrolling.
//!
//! In the browser this talks to the DOM through web-sys. Inside a native
//! webview (desktop/mobile builds) the same information comes back through a
//! `document::eval` bridge as serialized `LayoutSnapshot`s, measured from
//! every element marked `data-section`.

use crate::error::DomError;
use crate::subscription::Subscription;
use crate::tracker::LayoutProbe;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
pub use bridge::*;

/// Callback invoked on every scroll notification with the current scroll
/// offset and a probe over the live layout.
pub type ScrollHandler = Box<dyn FnMut(f64, &dyn LayoutProbe)>;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::tracker::SectionExtent;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

    fn window() -> Result<Window, DomError> {
        web_sys::window().ok_or(DomError::NoWindow)
    }

    fn document() -> Result<Document, DomError> {
        window()?.document().ok_or(DomError::NoDocument)
    }

    /// Reads `offsetTop` / `offsetHeight` straight from the mounted elements.
    pub struct DomLayout {
        document: Document,
    }

    impl DomLayout {
        pub fn current() -> Result<Self, DomError> {
            Ok(Self {
                document: document()?,
            })
        }
    }

    impl LayoutProbe for DomLayout {
        fn extent(&self, id: &str) -> Option<SectionExtent> {
            let element = self
                .document
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionExtent::new(
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ))
        }
    }

    pub fn scroll_y() -> f64 {
        window()
            .and_then(|w| w.scroll_y().map_err(|e| DomError::Js(format!("{:?}", e))))
            .unwrap_or(0.0)
    }

    /// Register a window scroll listener. The listener is removed when the
    /// returned subscription is dropped.
    pub fn listen_scroll(mut handler: ScrollHandler) -> Result<Subscription, DomError> {
        let window = window()?;
        let layout = DomLayout::current()?;

        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler(scroll_y(), &layout);
        }) as Box<dyn FnMut(web_sys::Event)>);

        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|e| DomError::Js(format!("{:?}", e)))?;

        Ok(Subscription::new(move || {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            {
                tracing::warn!("failed to remove scroll listener: {:?}", e);
            }
            drop(closure);
        }))
    }

    /// Smooth-scroll the section root into view. Missing sections are ignored.
    pub fn scroll_to_section(id: &str) {
        let Ok(document) = document() else { return; };
        let Some(element) = document.get_element_by_id(id) else {
            tracing::debug!("scroll target '{}' is not mounted", id);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod bridge {
    use super::*;
    use crate::tracker::LayoutSnapshot;
    use dioxus::document::eval;

    const SCROLL_BRIDGE_SCRIPT: &str = r#"
        const snapshot = () => {
            const extents = {};
            for (const el of document.querySelectorAll('[data-section]')) {
                if (el.id) extents[el.id] = { top: el.offsetTop, height: el.offsetHeight };
            }
            return { scroll_y: window.scrollY, extents };
        };
        if (window.__folioScroll) {
            window.removeEventListener('scroll', window.__folioScroll);
        }
        window.__folioScroll = () => dioxus.send(snapshot());
        window.addEventListener('scroll', window.__folioScroll, { passive: true });
        await new Promise(() => {});
    "#;

    const SCROLL_TEARDOWN_SCRIPT: &str = r#"
        if (window.__folioScroll) {
            window.removeEventListener('scroll', window.__folioScroll);
            window.__folioScroll = null;
        }
    "#;

    pub fn listen_scroll(mut handler: ScrollHandler) -> Result<Subscription, DomError> {
        let task = dioxus::prelude::spawn(async move {
            let mut bridge = eval(SCROLL_BRIDGE_SCRIPT);
            loop {
                match bridge.recv::<LayoutSnapshot>().await {
                    Ok(snapshot) => handler(snapshot.scroll_y, &snapshot),
                    Err(e) => {
                        tracing::debug!("scroll bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });

        Ok(Subscription::new(move || {
            task.cancel();
            run_script("scroll teardown", SCROLL_TEARDOWN_SCRIPT);
        }))
    }

    pub fn scroll_to_section(id: &str) {
        let target = match serde_json::to_string(id) {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!("cannot encode scroll target '{}': {}", id, e);
                return;
            }
        };
        run_script(
            "scroll into view",
            &format!(
                "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
                target
            ),
        );
    }

    /// Fire a one-off script and log its outcome from a root-scoped task, so
    /// the result is still observed when the caller's scope is going away.
    fn run_script(label: &'static str, script: &str) {
        let pending = eval(script);
        let watched = dioxus::prelude::spawn_forever(async move {
            if let Err(e) = pending.await {
                tracing::debug!("{} script failed: {}", label, e);
            }
        });
        if watched.is_none() {
            tracing::debug!("{} script sent with no runtime to observe it", label);
        }
    }
}
