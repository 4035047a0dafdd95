use std::rc::Rc;

use anyhow::{anyhow, Result};
use gundem_shared::{styles::{INTERACTION_CSS, TOAST_KEYFRAMES_CSS}, toast::Toaster};
use web_sys::{Document, Window};

use crate::{
    behaviors,
    dom::{BodyToasts, BrowserScheduler},
    i18n::current::common as t,
    utils,
};

pub type PageToaster = Toaster<BodyToasts, BrowserScheduler>;

/// Handles every behavior needs while installing itself.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub toaster: Rc<PageToaster>,
}

/// `document.readyState` before `DOMContentLoaded` has fired.
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Wire the behaviors once the document has been parsed.
pub fn start() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("window has no document"))?;

    if still_parsing(&document.ready_state()) {
        let ready_window = window.clone();
        let ready_document = document.clone();
        let mut pending = Some((ready_window, ready_document));
        utils::listen(&document, "DOMContentLoaded", move |_| {
            if let Some((window, document)) = pending.take() {
                install(window, document);
            }
        });
    } else {
        install(window, document);
    }
    Ok(())
}

fn install(window: Window, document: Document) {
    let toaster = Rc::new(Toaster::new(BodyToasts(document.clone()), BrowserScheduler));
    let ctx = PageContext {
        window,
        document,
        toaster,
    };

    behaviors::theme::install(&ctx);
    behaviors::date::install(&ctx);
    behaviors::menu::install(&ctx);
    behaviors::anchors::install(&ctx);
    behaviors::header::install(&ctx);
    behaviors::ticker::install(&ctx);
    behaviors::newsletter::install(&ctx);
    behaviors::share::install(&ctx);
    behaviors::reveal::install(&ctx);
    utils::inject_style(&ctx.document, INTERACTION_CSS);
    behaviors::progress::install(&ctx);
    behaviors::lazy_images::install(&ctx);
    utils::inject_style(&ctx.document, TOAST_KEYFRAMES_CSS);
    behaviors::clipboard::install(&ctx);
    behaviors::search::install(&ctx);
    behaviors::print::install(&ctx);

    log::info!("{}", t::INITIALIZED);
}
