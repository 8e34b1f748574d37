use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use sketchboard_shared::LogSink;

/// Log sink backed by the on-page log panel: one timestamped line per
/// action, newest first, mirrored to the browser console.
pub struct PanelLog {
    document: Document,
    container: Element,
}

impl PanelLog {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }
}

impl LogSink for PanelLog {
    fn log(&mut self, message: &str) {
        let time: String = js_sys::Date::new_0().to_locale_time_string("en-US").into();
        let line = format!("{time} - {message}");
        if let Ok(entry) = self.document.create_element("div") {
            entry.set_class_name("log-entry");
            entry.set_text_content(Some(&line));
            let first = self.container.first_child();
            let _ = self.container.insert_before(&entry, first.as_ref());
        }
        web_sys::console::log_1(&JsValue::from_str(message));
    }
}
