use gundem_shared::ScrollHeader;

use crate::{config::HEADER, coordinator::PageContext, dom::ElementClasses, utils};

pub fn install(ctx: &PageContext) {
    let Some(header) = utils::query(&ctx.document, HEADER) else {
        return;
    };
    let header = ElementClasses(header);
    let mut state = ScrollHeader::new(utils::scroll_y(&ctx.window));

    let window = ctx.window.clone();
    utils::listen_passive(&ctx.window, "scroll", move |_| {
        state.observe(utils::scroll_y(&window)).apply(&header);
    });
}
