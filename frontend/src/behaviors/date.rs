use gundem_shared::date::format_ymd;

use crate::{config::CURRENT_DATE_ID, coordinator::PageContext};

pub fn install(ctx: &PageContext) {
    let Some(target) = ctx.document.get_element_by_id(CURRENT_DATE_ID) else {
        return;
    };
    // Local calendar date, as the reader's clock sees it.
    let now = js_sys::Date::new_0();
    if let Some(text) = format_ymd(now.get_full_year() as i32, now.get_month() + 1, now.get_date()) {
        target.set_text_content(Some(&text));
    }
}
