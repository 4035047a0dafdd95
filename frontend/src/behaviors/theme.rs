use std::rc::Rc;

use gundem_shared::{config::PREFERS_DARK_QUERY, ThemeController};

use crate::{
    config::THEME_TOGGLE_ID,
    coordinator::PageContext,
    dom::{DocumentRoot, LocalStore},
    utils,
};

fn system_prefers_dark(window: &web_sys::Window) -> bool {
    window
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn install(ctx: &PageContext) {
    let Some(root) = ctx.document.document_element() else {
        return;
    };
    let root = Rc::new(DocumentRoot(root));
    let controller = Rc::new(ThemeController::new(LocalStore::open(&ctx.window)));

    if let Some(button) = ctx.document.get_element_by_id(THEME_TOGGLE_ID) {
        let root = root.clone();
        let controller = controller.clone();
        utils::listen(&button, "click", move |_| {
            let theme = controller.toggle(&*root);
            log::debug!("theme switched to {theme}");
        });
    }

    controller.load(&*root, system_prefers_dark(&ctx.window));
}
