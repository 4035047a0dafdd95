use gundem_shared::navigation::toggle_menu;

use crate::{
    config::{MENU_TOGGLE_ID, NAV_MENU},
    coordinator::PageContext,
    dom::ElementClasses,
    utils,
};

pub fn install(ctx: &PageContext) {
    let (Some(button), Some(menu)) = (
        ctx.document.get_element_by_id(MENU_TOGGLE_ID),
        utils::query(&ctx.document, NAV_MENU),
    ) else {
        return;
    };

    let menu = ElementClasses(menu);
    let toggle = ElementClasses(button.clone());
    utils::listen(&button, "click", move |_| {
        toggle_menu(&menu, &toggle);
    });
}
