use crate::{
    config::SEARCH_BUTTON,
    coordinator::PageContext,
    i18n::current::toast as t,
    utils,
};

// Search has no backend; the button only announces it.
pub fn install(ctx: &PageContext) {
    if let Some(button) = utils::query(&ctx.document, SEARCH_BUTTON) {
        let toaster = ctx.toaster.clone();
        utils::listen(&button, "click", move |_| toaster.show(t::SEARCH_COMING_SOON));
    }
}
