use gundem_shared::{
    config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD},
    reveal::REVEAL_INITIAL_STYLES,
    RevealAnimator,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserverInit};

use crate::{
    config::REVEAL_TARGETS,
    coordinator::PageContext,
    dom::ElementClasses,
    utils::{self, observe_once},
};

pub fn install(ctx: &PageContext) {
    let elements = utils::query_all(&ctx.document, REVEAL_TARGETS);
    for element in &elements {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for (property, value) in REVEAL_INITIAL_STYLES {
                let _ = style.set_property(property, value);
            }
        }
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let mut animator = RevealAnimator::new(elements.len());
    observe_once(elements, Some(&options), move |index, intersecting, target| {
        animator.on_intersection(index, intersecting, &ElementClasses(target.clone()))
    });
}
