use anyhow::Result;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// browser glue
//
// the handles below own both the registration and the rust closure it calls
// into; dropping a handle unregisters it, so storing one in a component's
// signal ties the listener's lifetime to the component

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().map_err(js_err)).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().map_err(js_err))
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

// distance from the top of the document to the top of the element
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn set_document_lang(code: &str) -> Result<()> {
    let root = window()?
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| anyhow::Error::msg("no document element"))?;

    root.set_attribute("lang", code).map_err(js_err)
}

pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut()>::new(callback);

        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;

        Ok(WindowListener { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

// reports the visible fraction of one element every time it crosses the
// threshold
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new(element: &Element, threshold: f64, mut on_ratio: impl FnMut(f64) + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_ratio(entry.intersection_ratio());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_err)?;
        observer.observe(element);

        Ok(ViewportObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
