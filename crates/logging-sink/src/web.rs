//! crates/logging-sink/src/web.rs
//! Browser console destination, available on `wasm32` targets.

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::console::Console;
use crate::record::{ConsoleRecord, Emphasis, Stream};

/// Forwards records to the browser's `console` object.
///
/// The record's `format` becomes the first console argument so a `%c` token
/// picks up the CSS passed as the second argument; message parts follow as
/// separate values.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebConsole;

impl Console for WebConsole {
    fn emit(&self, record: &ConsoleRecord) {
        let values = Array::new();
        let format = match record.emphasis {
            Emphasis::Normal => record.format.clone(),
            Emphasis::Severe => format!("\n{}", record.format),
        };
        values.push(&JsValue::from_str(&format));
        if let Some(css) = &record.css {
            values.push(&JsValue::from_str(css));
        }
        for arg in &record.args {
            values.push(&JsValue::from_str(arg));
        }
        if record.emphasis == Emphasis::Severe {
            values.push(&JsValue::from_str("\n"));
        }

        match record.stream {
            Stream::Log => console::log(&values),
            Stream::Warn => console::warn(&values),
            Stream::Error => console::error(&values),
        }
    }
}
