//! `web-sys` implementations of the shared seam traits.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use gundem_shared::{
    config::THEME_ATTRIBUTE,
    lazy_image::LazyImage,
    newsletter::NewsletterForm,
    schedule::Task,
    styles::{TOAST_INLINE_CSS, TOAST_OUT_ANIMATION},
    toast::ToastSurface,
    ClassTarget, InteractionError, PreferenceStore, Scheduler, Theme, ThemeRoot, TimerHandle,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, Storage};

use crate::config::TOAST_CLASS;

/// Class list of a live element.
#[derive(Clone)]
pub struct ElementClasses(pub Element);

impl ClassTarget for ElementClasses {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or(false)
    }
}

/// `<html>` element carrying `data-theme`.
pub struct DocumentRoot(pub Element);

impl ThemeRoot for DocumentRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.0.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_theme_attribute(&self, theme: Theme) {
        let _ = self.0.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// `localStorage`, when the page is allowed to use it.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn open(window: &web_sys::Window) -> Self {
        Self(window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> gundem_shared::Result<Option<String>> {
        let storage = self.0.as_ref().ok_or(InteractionError::StoreUnavailable)?;
        storage
            .get_item(key)
            .map_err(|_| InteractionError::StoreUnavailable)
    }

    fn write(&self, key: &str, value: &str) -> gundem_shared::Result<()> {
        let storage = self.0.as_ref().ok_or(InteractionError::StoreUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| InteractionError::StoreWrite {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Scheduler backed by `setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Pending `setTimeout`. Dropping it lets the timeout fire.
pub struct BrowserTimer(Option<Timeout>);

impl TimerHandle for BrowserTimer {
    fn cancel(mut self) {
        if let Some(timeout) = self.0.take() {
            let _ = timeout.cancel();
        }
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        // gloo cancels on drop; detach instead so fire-and-forget works.
        if let Some(timeout) = self.0.take() {
            let _ = timeout.forget();
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&self, delay: Duration, task: Task) -> BrowserTimer {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        BrowserTimer(Some(Timeout::new(millis, task)))
    }
}

/// Newsletter form and its submit button.
pub struct FormView {
    form: HtmlFormElement,
    button: HtmlElement,
}

impl FormView {
    pub fn new(form: HtmlFormElement, button: HtmlElement) -> Self {
        Self {
            form,
            button,
        }
    }
}

impl NewsletterForm for FormView {
    fn button_label(&self) -> String {
        self.button.text_content().unwrap_or_default()
    }

    fn set_button_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }

    fn set_button_background(&self, background: Option<&str>) {
        let _ = self
            .button
            .style()
            .set_property("background", background.unwrap_or(""));
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// `<img>` for the lazy-load fallback.
pub struct ImageView(pub HtmlImageElement);

impl LazyImage for ImageView {
    fn deferred_src(&self) -> Option<String> {
        self.0.get_attribute("data-src")
    }

    fn src(&self) -> String {
        self.0.src()
    }

    fn set_src(&self, src: &str) {
        self.0.set_src(src);
    }
}

/// Toasts appended to `<body>`.
pub struct BodyToasts(pub Document);

impl ToastSurface for BodyToasts {
    type Toast = Option<HtmlElement>;

    fn show(&self, message: &str) -> Option<HtmlElement> {
        let body = self.0.body()?;
        let toast = self
            .0
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        toast.set_class_name(TOAST_CLASS);
        toast.set_text_content(Some(message));
        toast.style().set_css_text(TOAST_INLINE_CSS);
        body.append_child(&toast).ok()?;
        Some(toast)
    }

    fn fade_out(&self, toast: &Option<HtmlElement>) {
        if let Some(toast) = toast {
            let _ = toast.style().set_property("animation", TOAST_OUT_ANIMATION);
        }
    }

    fn remove(&self, toast: Option<HtmlElement>) {
        if let Some(toast) = toast {
            toast.remove();
        }
    }
}
