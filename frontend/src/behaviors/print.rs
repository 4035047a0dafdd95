use wasm_bindgen::{closure::Closure, JsValue};

use crate::{config::PRINT_GLOBAL, coordinator::PageContext};

/// Expose `window.printArticle()` for the article toolbar.
pub fn install(ctx: &PageContext) {
    let window = ctx.window.clone();
    let print = Closure::wrap(Box::new(move || {
        let _ = window.print();
    }) as Box<dyn FnMut()>);

    let _ = js_sys::Reflect::set(&ctx.window, &JsValue::from_str(PRINT_GLOBAL), print.as_ref());
    print.forget();
}
