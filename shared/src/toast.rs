//! Self-dismissing toast notifications.

use std::rc::Rc;

use crate::{
    config::{TOAST_FADE, TOAST_HOLD},
    schedule::Scheduler,
};

/// Where toasts are drawn.
pub trait ToastSurface {
    /// Handle to one shown toast.
    type Toast: 'static;

    /// Create and show a toast with `message`.
    fn show(&self, message: &str) -> Self::Toast;

    /// Start the fade-out of `toast`.
    fn fade_out(&self, toast: &Self::Toast);

    /// Remove `toast` for good.
    fn remove(&self, toast: Self::Toast);
}

/// Shows toasts and schedules their dismissal.
pub struct Toaster<T, S> {
    surface: Rc<T>,
    scheduler: S,
}

impl<T, S> Toaster<T, S>
where
    T: ToastSurface + 'static,
    S: Scheduler + Clone + 'static,
{
    /// Toaster drawing on `surface`.
    pub fn new(surface: T, scheduler: S) -> Self {
        Self {
            surface: Rc::new(surface),
            scheduler,
        }
    }

    /// Show `message`; it fades after [`TOAST_HOLD`] and is removed
    /// [`TOAST_FADE`] later. Toasts are independent of each other.
    pub fn show(&self, message: &str) {
        let toast = self.surface.show(message);
        let surface = Rc::clone(&self.surface);
        let scheduler = self.scheduler.clone();
        let _hold = self.scheduler.schedule(
            TOAST_HOLD,
            Box::new(move || {
                surface.fade_out(&toast);
                let _fade = scheduler.schedule(TOAST_FADE, Box::new(move || surface.remove(toast)));
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, time::Duration};

    use super::*;
    use crate::schedule::ManualScheduler;

    #[derive(Debug, Clone, PartialEq)]
    enum Phase {
        Shown,
        Fading,
        Removed,
    }

    #[derive(Default)]
    struct Board {
        toasts: RefCell<Vec<(String, Phase)>>,
    }

    impl ToastSurface for Rc<Board> {
        type Toast = usize;

        fn show(&self, message: &str) -> usize {
            let mut toasts = self.toasts.borrow_mut();
            toasts.push((message.to_string(), Phase::Shown));
            toasts.len() - 1
        }

        fn fade_out(&self, toast: &usize) {
            self.toasts.borrow_mut()[*toast].1 = Phase::Fading;
        }

        fn remove(&self, toast: usize) {
            self.toasts.borrow_mut()[toast].1 = Phase::Removed;
        }
    }

    fn phase(board: &Board, index: usize) -> Phase {
        board.toasts.borrow()[index].1.clone()
    }

    #[test]
    fn toast_fades_then_disappears() {
        let scheduler = ManualScheduler::new();
        let board = Rc::new(Board::default());
        let toaster = Toaster::new(board.clone(), scheduler.clone());

        toaster.show("Link kopyalandı!");
        assert_eq!(phase(&board, 0), Phase::Shown);

        scheduler.advance(Duration::from_millis(2000));
        assert_eq!(phase(&board, 0), Phase::Fading);

        scheduler.advance(Duration::from_millis(299));
        assert_eq!(phase(&board, 0), Phase::Fading);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(phase(&board, 0), Phase::Removed);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn overlapping_toasts_run_their_own_timers() {
        let scheduler = ManualScheduler::new();
        let board = Rc::new(Board::default());
        let toaster = Toaster::new(board.clone(), scheduler.clone());

        toaster.show("first");
        scheduler.advance(Duration::from_millis(1000));
        toaster.show("second");

        scheduler.advance(Duration::from_millis(1300));
        assert_eq!(phase(&board, 0), Phase::Removed);
        assert_eq!(phase(&board, 1), Phase::Shown);

        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(phase(&board, 1), Phase::Removed);
    }
}
