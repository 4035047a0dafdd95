//! Scenario tests driving the behaviors through in-memory page fakes.

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::BTreeSet,
        rc::Rc,
        time::Duration,
    };

    use gundem_shared::{
        config::THEME_STORAGE_KEY,
        newsletter::{NewsletterForm, NewsletterHandler, SubmitOutcome},
        progress::{reading_progress, ContentBounds},
        toast::{ToastSurface, Toaster},
        ClassTarget, ManualScheduler, MemoryStore, RevealAnimator, ScrollHeader, ShareTarget, Theme,
        ThemeController, ThemeRoot,
    };

    /// Element stand-in recording classes and attributes.
    #[derive(Default)]
    struct FakeElement {
        classes: RefCell<BTreeSet<String>>,
        theme: RefCell<Option<String>>,
    }

    impl ClassTarget for FakeElement {
        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl ThemeRoot for FakeElement {
        fn theme_attribute(&self) -> Option<String> {
            self.theme.borrow().clone()
        }

        fn set_theme_attribute(&self, theme: Theme) {
            *self.theme.borrow_mut() = Some(theme.to_string());
        }
    }

    #[derive(Default)]
    struct Page {
        button_label: RefCell<String>,
        button_background: RefCell<Option<String>>,
        form_resets: RefCell<u32>,
        toasts: RefCell<Vec<String>>,
    }

    #[derive(Clone)]
    struct PageHandle(Rc<Page>);

    impl NewsletterForm for PageHandle {
        fn button_label(&self) -> String {
            self.0.button_label.borrow().clone()
        }

        fn set_button_label(&self, label: &str) {
            *self.0.button_label.borrow_mut() = label.to_string();
        }

        fn set_button_background(&self, background: Option<&str>) {
            *self.0.button_background.borrow_mut() = background.map(str::to_string);
        }

        fn reset(&self) {
            *self.0.form_resets.borrow_mut() += 1;
        }
    }

    impl ToastSurface for PageHandle {
        type Toast = String;

        fn show(&self, message: &str) -> String {
            self.0.toasts.borrow_mut().push(message.to_string());
            message.to_string()
        }

        fn fade_out(&self, _toast: &String) {}

        fn remove(&self, toast: String) {
            self.0.toasts.borrow_mut().retain(|shown| *shown != toast);
        }
    }

    #[test]
    fn returning_visitor_keeps_toggled_theme() {
        let store = MemoryStore::new();

        let first_visit = FakeElement::default();
        let controller = ThemeController::new(&store);
        assert_eq!(controller.load(&first_visit, true), None);
        assert_eq!(controller.toggle(&first_visit), Theme::Light);

        let second_visit = FakeElement::default();
        assert_eq!(controller.load(&second_visit, true), Some(Theme::Light));
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn scrolling_an_article_updates_header_and_progress() {
        let header_el = FakeElement::default();
        let mut header = ScrollHeader::new(0.0);
        let article = ContentBounds {
            top: 300.0,
            height: 1500.0,
        };
        let viewport = 600.0;

        let mut progress = Vec::new();
        for offset in [50.0, 150.0, 120.0, 200.0, 1200.0] {
            header.observe(offset).apply(&header_el);
            progress.push(reading_progress(offset, viewport, article));
        }

        assert!(header_el.has_class("scrolled"));
        assert!(header_el.has_class("hidden"));
        // (50 - 300 + 600) / 1500
        let first = progress.first().copied().unwrap_or_default();
        assert!((first - 70.0 / 3.0).abs() < 1e-9);
        assert_eq!(progress.last().copied(), Some(100.0));
        assert!(progress.iter().all(|p| (0.0..=100.0).contains(p)));

        header.observe(40.0).apply(&header_el);
        assert!(header_el.classes.borrow().is_empty());
    }

    #[test]
    fn reveal_marks_each_card_once_across_reentries() {
        let cards: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        let mut animator = RevealAnimator::new(cards.len());

        let notifications = [(0, true), (1, false), (0, false), (0, true), (2, true), (1, true)];
        let fired: Vec<usize> = notifications
            .into_iter()
            .filter(|&(index, visible)| animator.on_intersection(index, visible, &cards[index]))
            .map(|(index, _)| index)
            .collect();

        assert_eq!(fired, vec![0, 2, 1]);
        assert!(cards.iter().all(|card| card.has_class("visible")));
        assert_eq!(animator.remaining(), 0);
    }

    #[test]
    fn share_button_classes_pick_the_destination() {
        let button = FakeElement::default();
        button.add_class("share-btn");
        button.add_class("linkedin");

        let target = ShareTarget::from_classes(|class| button.has_class(class));
        assert_eq!(target, Some(ShareTarget::LinkedIn));
        let url = target
            .map(|target| target.share_url("https://haber.example/a?id=1", "Test"))
            .unwrap_or_default();
        assert_eq!(
            url,
            "https://www.linkedin.com/shareArticle?mini=true&url=https%3A%2F%2Fhaber.example%2Fa%3Fid%3D1&title=Test"
        );
    }

    #[test]
    fn newsletter_and_toast_share_one_clock() {
        let scheduler = ManualScheduler::new();
        let page = PageHandle(Rc::new(Page::default()));
        *page.0.button_label.borrow_mut() = "Abone Ol".to_string();

        let newsletter = NewsletterHandler::new(page.clone(), scheduler.clone(), "✓ Abone Olundu!");
        let toaster = Toaster::new(page.clone(), scheduler.clone());

        assert_eq!(newsletter.submit(), SubmitOutcome::Confirmed);
        toaster.show("Arama özelliği yakında!");

        scheduler.advance(Duration::from_millis(2300));
        assert!(page.0.toasts.borrow().is_empty());
        assert_eq!(*page.0.button_label.borrow(), "✓ Abone Olundu!");

        scheduler.advance(Duration::from_millis(700));
        assert_eq!(*page.0.button_label.borrow(), "Abone Ol");
        assert_eq!(*page.0.button_background.borrow(), None);
        assert_eq!(*page.0.form_resets.borrow(), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}
