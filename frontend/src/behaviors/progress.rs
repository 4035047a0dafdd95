use gundem_shared::{
    progress::{fill_width, reading_progress, ContentBounds},
    styles::{PROGRESS_BAR_MARKUP, PROGRESS_CSS},
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::{
    config::{ARTICLE_CONTENT, PROGRESS_BAR_CLASS, PROGRESS_FILL},
    coordinator::PageContext,
    utils,
};

fn update(window: &Window, article: &Element, fill: &HtmlElement) {
    let rect = article.get_bounding_client_rect();
    let scroll_y = utils::scroll_y(window);
    let bounds = ContentBounds::from_viewport_rect(rect.top(), rect.height(), scroll_y);
    let percent = reading_progress(scroll_y, utils::viewport_height(window), bounds);
    let _ = fill.style().set_property("width", &fill_width(percent));
}

pub fn install(ctx: &PageContext) {
    let Some(article) = utils::query(&ctx.document, ARTICLE_CONTENT) else {
        return;
    };
    let (Some(body), Ok(bar)) = (ctx.document.body(), ctx.document.create_element("div")) else {
        return;
    };
    bar.set_class_name(PROGRESS_BAR_CLASS);
    bar.set_inner_html(PROGRESS_BAR_MARKUP);
    if body.append_child(&bar).is_err() {
        return;
    }
    utils::inject_style(&ctx.document, PROGRESS_CSS);

    let Some(fill) = bar
        .query_selector(PROGRESS_FILL)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    update(&ctx.window, &article, &fill);
    let window = ctx.window.clone();
    utils::listen_passive(&ctx.window, "scroll", move |_| {
        update(&window, &article, &fill);
    });
}
