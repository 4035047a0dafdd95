use gundem_shared::{
    navigation::{anchor_action, AnchorAction},
    InteractionError,
};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{config::IN_PAGE_ANCHORS, coordinator::PageContext, utils};

fn scroll_to(document: &Document, selector: &str) -> Result<(), InteractionError> {
    let target = document
        .query_selector(selector)
        .map_err(|_| InteractionError::InvalidSelector(selector.to_string()))?;
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

pub fn install(ctx: &PageContext) {
    for anchor in utils::query_all(&ctx.document, IN_PAGE_ANCHORS) {
        let document = ctx.document.clone();
        let link = anchor.clone();
        utils::listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            if let AnchorAction::ScrollTo(selector) = anchor_action(&href) {
                event.prevent_default();
                if let Err(err) = scroll_to(&document, &selector) {
                    log::debug!("{err}");
                }
            }
        });
    }
}
