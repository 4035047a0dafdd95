use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Window;

use crate::{
    config::COPY_GLOBAL,
    coordinator::{PageContext, PageToaster},
    i18n::current::toast as t,
};

fn clipboard_available(window: &Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
        .unwrap_or(false)
}

/// Copy `text` and confirm with a toast. A rejected write shows nothing.
pub fn copy_to_clipboard(window: &Window, toaster: Rc<PageToaster>, text: String) {
    if !clipboard_available(window) {
        return;
    }
    let promise = window.navigator().clipboard().write_text(&text);
    spawn_local(async move {
        if JsFuture::from(promise).await.is_ok() {
            toaster.show(t::LINK_COPIED);
        }
    });
}

/// Expose `window.copyToClipboard(text)` for inline handlers.
pub fn install(ctx: &PageContext) {
    let window = ctx.window.clone();
    let toaster = ctx.toaster.clone();
    let copy = Closure::wrap(Box::new(move |text: String| {
        copy_to_clipboard(&window, toaster.clone(), text);
    }) as Box<dyn FnMut(String)>);

    let _ = js_sys::Reflect::set(&ctx.window, &JsValue::from_str(COPY_GLOBAL), copy.as_ref());
    copy.forget();
}
