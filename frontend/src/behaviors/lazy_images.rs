use gundem_shared::lazy_image::LazyImageLoader;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::{
    config::LAZY_IMAGES,
    coordinator::PageContext,
    dom::ImageView,
    utils::{self, observe_once},
};

/// `'loading' in HTMLImageElement.prototype`
fn native_lazy_loading(window: &web_sys::Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")))
        .and_then(|proto| js_sys::Reflect::has(&proto, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

pub fn install(ctx: &PageContext) {
    if native_lazy_loading(&ctx.window) {
        return;
    }
    let images = utils::query_all(&ctx.document, LAZY_IMAGES);
    let mut loader = LazyImageLoader::new(images.len());
    log::debug!("lazy-load fallback watching {} images", images.len());

    observe_once(images, None, move |index, intersecting, target| {
        match target.dyn_ref::<HtmlImageElement>() {
            Some(img) => loader.on_intersection(index, intersecting, &ImageView(img.clone())),
            None => false,
        }
    });
}
