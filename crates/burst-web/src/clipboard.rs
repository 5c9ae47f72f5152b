//! Browser clipboard paths for the contact action.

use burst_engine::{copy_with_fallback, Clipboard, ClipboardError, CopyPath};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn navigator_clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

fn rejected(err: JsValue) -> ClipboardError {
    ClipboardError::Rejected(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// `navigator.clipboard.writeText`, settled. Fails when the async clipboard
/// API is missing (insecure context, old browser) or when the promise
/// rejects later, e.g. `NotAllowedError` on an unfocused document.
pub async fn write_navigator(text: &str) -> Result<(), ClipboardError> {
    let promise = navigator_clipboard_write_text(text).map_err(rejected)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
}

/// Copy `text` with the async clipboard, falling back to [`TextAreaClipboard`].
pub async fn copy_text(text: &str) -> Result<CopyPath, ClipboardError> {
    let primary = write_navigator(text).await;
    copy_with_fallback(text, primary, &mut TextAreaClipboard)
}

/// Legacy path: select a temporary `<textarea>` and run `execCommand("copy")`.
pub struct TextAreaClipboard;

impl Clipboard for TextAreaClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ClipboardError::Unavailable)?;
        let body = document.body().ok_or(ClipboardError::Unavailable)?;

        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(rejected)?
            .dyn_into()
            .map_err(|_| ClipboardError::Unavailable)?;
        area.set_value(text);
        body.append_child(&area).map_err(rejected)?;
        area.select();

        let copied = match document.dyn_ref::<HtmlDocument>() {
            Some(html) => html.exec_command("copy").map_err(rejected),
            None => Err(ClipboardError::Unavailable),
        };
        body.remove_child(&area).map_err(rejected)?;

        match copied? {
            true => Ok(()),
            false => Err(ClipboardError::Rejected("execCommand(\"copy\") returned false".into())),
        }
    }
}
