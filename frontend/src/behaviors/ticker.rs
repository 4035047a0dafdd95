use gundem_shared::ticker::looped_markup;

use crate::{config::TICKER, coordinator::PageContext, utils};

pub fn install(ctx: &PageContext) {
    if let Some(ticker) = utils::query(&ctx.document, TICKER) {
        ticker.set_inner_html(&looped_markup(&ticker.inner_html()));
    }
}
