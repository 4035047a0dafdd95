//! Newsletter sign-up stub.
//!
//! Submitting only flips the button into a confirmation look for a few
//! seconds and then clears the form. Nothing is sent anywhere.

use std::{cell::RefCell, rc::Rc};

use crate::{
    config::{NEWSLETTER_CONFIRM_DURATION, NEWSLETTER_SUCCESS_BACKGROUND},
    schedule::Scheduler,
};

/// The sign-up form and its submit button.
pub trait NewsletterForm {
    /// Current button label.
    fn button_label(&self) -> String;

    /// Replace the button label.
    fn set_button_label(&self, label: &str);

    /// Set the button background, `None` to clear the inline value.
    fn set_button_background(&self, background: Option<&str>);

    /// Clear every field.
    fn reset(&self);
}

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirmation shown, revert scheduled.
    Confirmed,
    /// A confirmation was already showing; nothing changed.
    AlreadyConfirming,
}

struct Confirmation {
    original_label: String,
}

/// Drives the confirmation cycle for one form.
pub struct NewsletterHandler<F, S> {
    form: Rc<F>,
    scheduler: S,
    success_label: String,
    confirming: Rc<RefCell<Option<Confirmation>>>,
}

impl<F, S> NewsletterHandler<F, S>
where
    F: NewsletterForm + 'static,
    S: Scheduler,
{
    /// Handler for `form`, showing `success_label` after each submit.
    pub fn new(form: F, scheduler: S, success_label: impl Into<String>) -> Self {
        Self {
            form: Rc::new(form),
            scheduler,
            success_label: success_label.into(),
            confirming: Rc::new(RefCell::new(None)),
        }
    }

    /// Whether the confirmation is currently on screen.
    pub fn is_confirming(&self) -> bool {
        self.confirming.borrow().is_some()
    }

    /// React to a submit. The caller has already suppressed navigation.
    pub fn submit(&self) -> SubmitOutcome {
        if self.is_confirming() {
            return SubmitOutcome::AlreadyConfirming;
        }

        let original_label = self.form.button_label();
        self.form.set_button_label(&self.success_label);
        self.form
            .set_button_background(Some(NEWSLETTER_SUCCESS_BACKGROUND));
        *self.confirming.borrow_mut() = Some(Confirmation {
            original_label,
        });

        let form = Rc::clone(&self.form);
        let confirming = Rc::clone(&self.confirming);
        let _revert = self.scheduler.schedule(
            NEWSLETTER_CONFIRM_DURATION,
            Box::new(move || {
                let confirmation = confirming.borrow_mut().take();
                if let Some(confirmation) = confirmation {
                    form.set_button_label(&confirmation.original_label);
                    form.set_button_background(None);
                    form.reset();
                }
            }),
        );
        tracing::debug!("newsletter confirmation shown");
        SubmitOutcome::Confirmed
    }
}
