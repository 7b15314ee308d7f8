//! Debounced value holder for search input.
//!
//! Each [`Debouncer::update`] restarts the quiet window; the pending value
//! is released only once input has stayed unchanged for the whole window.
//! The view wires [`Debouncer::deadline`] into its event loop and calls
//! [`Debouncer::fire`] when the deadline elapses.

use tokio::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None, deadline: None }
    }

    /// Replaces the pending value and restarts the quiet window.
    pub fn update(&mut self, value: T) {
        self.pending = Some(value);
        self.deadline = Some(Instant::now() + self.window);
    }

    /// When the pending value will settle, if one is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the settled value. Returns `None` while the window is still
    /// running, so a premature wakeup cannot release a half-typed value.
    pub fn fire(&mut self) -> Option<T> {
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take()
    }

    /// Waits out the quiet window and returns the settled value.
    pub async fn settled(&mut self) -> Option<T> {
        let deadline = self.deadline?;
        tokio::time::sleep_until(deadline).await;
        self.fire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rapid_updates_settle_to_the_last_value_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.update("r".to_owned());
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.update("ru".to_owned());
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.update("rust".to_owned());

        let before = Instant::now();
        let settled = debouncer.settled().await;
        assert_eq!(settled.as_deref(), Some("rust"));
        assert_eq!(Instant::now() - before, Duration::from_millis(500));

        // Nothing further is pending.
        assert!(!debouncer.is_pending());
        assert!(debouncer.settled().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn fire_before_the_deadline_releases_nothing() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.update("partial".to_owned());

        tokio::time::advance(Duration::from_millis(499)).await;
        assert!(debouncer.fire().is_none());
        assert!(debouncer.is_pending());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(debouncer.fire().as_deref(), Some("partial"));
    }

    #[tokio::test(start_paused = true)]
    async fn update_restarts_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.update("a".to_owned());
        tokio::time::advance(Duration::from_millis(499)).await;
        debouncer.update("ab".to_owned());
        tokio::time::advance(Duration::from_millis(499)).await;
        assert!(debouncer.fire().is_none());
        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(debouncer.fire().as_deref(), Some("ab"));
    }

    #[test]
    fn empty_debouncer_has_no_deadline() {
        let debouncer: Debouncer<String> = Debouncer::new(Duration::from_millis(500));
        assert!(debouncer.deadline().is_none());
        assert!(!debouncer.is_pending());
    }
}
