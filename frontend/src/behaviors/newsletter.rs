use gundem_shared::newsletter::NewsletterHandler;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::{
    config::{NEWSLETTER_BUTTON, NEWSLETTER_FORM},
    coordinator::PageContext,
    dom::{BrowserScheduler, FormView},
    i18n::current::newsletter as t,
    utils,
};

pub fn install(ctx: &PageContext) {
    let Some(form) = utils::query(&ctx.document, NEWSLETTER_FORM)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let button = form
        .query_selector(NEWSLETTER_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    // Without a button there is nothing to confirm, but the form still must
    // not navigate away.
    let handler = button
        .map(|button| NewsletterHandler::new(FormView::new(form.clone(), button), BrowserScheduler, t::SUBSCRIBED));

    utils::listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Some(handler) = &handler {
            handler.submit();
        }
    });
}
