//! Host bindings for the navbar: the document pointer-down source and the
//! blocking alert.
//!
//! On wasm32 these talk to the DOM through `web-sys`. Native webviews (desktop)
//! have no direct DOM handle, so the same behavior is bridged through
//! `document::eval`.

use crate::core::logout::Notify;

pub use imp::DocumentPointerSource;

/// `window.alert` on the host page.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notify for AlertNotifier {
    fn notify(&self, message: &str) {
        imp::alert(message);
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::core::dismiss::{
        ListenerId, PointerError, PointerSource, PressHandler, PressTarget, REGION_ATTRIBUTE,
    };

    type Callback = Closure<dyn FnMut(web_sys::Event)>;

    #[derive(Clone)]
    pub struct DocumentPointerSource {
        document: web_sys::Document,
        listeners: Rc<RefCell<HashMap<ListenerId, Callback>>>,
        next: Rc<Cell<u64>>,
    }

    impl DocumentPointerSource {
        pub fn new() -> Result<Self, PointerError> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or(PointerError::DocumentUnavailable)?;
            Ok(Self {
                document,
                listeners: Rc::new(RefCell::new(HashMap::new())),
                next: Rc::new(Cell::new(0)),
            })
        }
    }

    impl PointerSource for DocumentPointerSource {
        fn listen(&self, mut handler: PressHandler) -> Result<ListenerId, PointerError> {
            let callback = Callback::new(move |event: web_sys::Event| {
                handler(&press_target(&event));
            });
            self.document
                .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
                .map_err(|err| PointerError::Register(format!("{err:?}")))?;

            let id = ListenerId(self.next.get());
            self.next.set(id.0 + 1);
            self.listeners.borrow_mut().insert(id, callback);
            Ok(id)
        }

        fn unlisten(&self, id: ListenerId) -> Result<(), PointerError> {
            let Some(callback) = self.listeners.borrow_mut().remove(&id) else {
                return Ok(());
            };
            self.document
                .remove_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
                .map_err(|err| PointerError::Unregister(format!("{err:?}")))
        }
    }

    fn press_target(event: &web_sys::Event) -> PressTarget {
        let mut regions = Vec::new();
        let mut node = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
        while let Some(element) = node {
            if let Some(key) = element.get_attribute(REGION_ATTRIBUTE) {
                regions.push(key);
            }
            node = element.parent_element();
        }
        PressTarget::new(regions)
    }

    pub(super) fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                tracing::warn!(alert = message, "alert was blocked");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use uuid::Uuid;

    use crate::core::dismiss::{
        ListenerId, PointerError, PointerSource, PressHandler, PressTarget, REGION_ATTRIBUTE,
    };

    const REGISTRY: &str = "__publikasiPointer";

    struct Registration {
        key: String,
        task: Task,
    }

    /// Pointer source for webviews driven over the eval bridge. Must be used
    /// inside a Dioxus runtime.
    #[derive(Clone, Default)]
    pub struct DocumentPointerSource {
        registrations: Rc<RefCell<HashMap<ListenerId, Registration>>>,
        next: Rc<Cell<u64>>,
    }

    impl DocumentPointerSource {
        pub fn new() -> Result<Self, PointerError> {
            Ok(Self::default())
        }
    }

    fn install_script(key: &str) -> String {
        format!(
            r#"
            window.{REGISTRY} = window.{REGISTRY} || {{}};
            const handler = (event) => {{
                const regions = [];
                let node = event.target instanceof Element ? event.target : event.target.parentElement;
                while (node) {{
                    const region = node.getAttribute("{REGION_ATTRIBUTE}");
                    if (region) regions.push(region);
                    node = node.parentElement;
                }}
                dioxus.send(regions);
            }};
            window.{REGISTRY}["{key}"] = handler;
            document.addEventListener("mousedown", handler);
            "#
        )
    }

    fn remove_script(key: &str) -> String {
        format!(
            r#"
            const registry = window.{REGISTRY} || {{}};
            const handler = registry["{key}"];
            if (handler) {{
                document.removeEventListener("mousedown", handler);
                delete registry["{key}"];
            }}
            "#
        )
    }

    impl PointerSource for DocumentPointerSource {
        fn listen(&self, mut handler: PressHandler) -> Result<ListenerId, PointerError> {
            let key = Uuid::new_v4().simple().to_string();
            let mut bridge = document::eval(&install_script(&key));
            let task = spawn(async move {
                loop {
                    match bridge.recv::<Vec<String>>().await {
                        Ok(regions) => handler(&PressTarget::new(regions)),
                        Err(err) => {
                            tracing::debug!(?err, "pointer bridge closed");
                            break;
                        }
                    }
                }
            });

            let id = ListenerId(self.next.get());
            self.next.set(id.0 + 1);
            self.registrations
                .borrow_mut()
                .insert(id, Registration { key, task });
            Ok(id)
        }

        fn unlisten(&self, id: ListenerId) -> Result<(), PointerError> {
            if let Some(Registration { key, task }) = self.registrations.borrow_mut().remove(&id) {
                task.cancel();
                // Fire and forget: the webview reports nothing back for removal.
                drop(document::eval(&remove_script(&key)));
            }
            Ok(())
        }
    }

    pub(super) fn alert(message: &str) {
        match serde_json::to_string(message) {
            Ok(literal) => {
                let _ = document::eval(&format!("alert({literal});"));
            }
            Err(err) => tracing::warn!(%err, "could not encode alert message"),
        }
    }
}
