use gundem_shared::{
    config::{SHARE_POPUP_FEATURES, SHARE_POPUP_TARGET},
    ShareTarget,
};

use crate::{config::SHARE_BUTTONS, coordinator::PageContext, utils};

pub fn install(ctx: &PageContext) {
    for button in utils::query_all(&ctx.document, SHARE_BUTTONS) {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let classes = button.class_list();
        utils::listen(&button, "click", move |event| {
            event.prevent_default();
            let Some(target) = ShareTarget::from_classes(|class| classes.contains(class)) else {
                return;
            };
            let page_url = window.location().href().unwrap_or_default();
            let share_url = target.share_url(&page_url, &document.title());
            let _ = window.open_with_url_and_target_and_features(
                &share_url,
                SHARE_POPUP_TARGET,
                SHARE_POPUP_FEATURES,
            );
        });
    }
}
