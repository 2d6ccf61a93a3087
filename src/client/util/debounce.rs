//! Trailing-edge debouncing for boolean flags such as loading indicators.
//!
//! Turning a flag on is applied right away; turning it off waits for a quiet period so
//! that very fast operations never make the indicator flash. Each [`Debouncer`] is an
//! explicit handle owned by one component; clones share the same timer state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Quiet period before a flag is switched off.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Arc<AtomicBool>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Requests a new flag value.
    ///
    /// `true` reaches `setter` before this returns and discards any pending `false`.
    /// `false` is delivered by the returned future once `sleep(delay)` completes, unless
    /// another `set` or [`Debouncer::cancel`] happened in the meantime. The future must
    /// be spawned (or awaited) for a `false` to take effect; for `true` it does nothing.
    pub fn set<F, S, Fut>(&self, value: bool, setter: F, sleep: S) -> impl Future<Output = ()>
    where
        F: FnOnce(bool),
        S: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.pending.store(!value, Ordering::SeqCst);

        let deferred = if value {
            setter(true);
            None
        } else {
            Some((setter, sleep))
        };

        let delay = self.delay;
        let generation = self.generation.clone();
        let pending = self.pending.clone();

        async move {
            if let Some((setter, sleep)) = deferred {
                sleep(delay).await;
                if generation.load(Ordering::SeqCst) == ticket {
                    pending.store(false, Ordering::SeqCst);
                    setter(false);
                }
            }
        }
    }

    /// Drops a pending `false` without applying it.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.pending.store(false, Ordering::SeqCst);
    }

    /// Whether a `false` is waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn() -> Box<dyn FnOnce(bool) + Send>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let make = move || {
            let sink = sink.clone();
            Box::new(move |value: bool| sink.lock().unwrap().push(value)) as Box<dyn FnOnce(bool) + Send>
        };
        (seen, make)
    }

    /// Tests that `true` is applied synchronously.
    ///
    /// Verifies the setter runs before the returned future is polled.
    ///
    /// Expected: `[true]` immediately
    #[tokio::test(start_paused = true)]
    async fn applies_true_immediately() {
        let debouncer = Debouncer::default();
        let (seen, setter) = recorder();

        let settle = debouncer.set(true, setter(), sleep);
        assert_eq!(*seen.lock().unwrap(), vec![true]);
        assert!(!debouncer.is_pending());

        settle.await;
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    /// Tests that `false` waits for the quiet period.
    ///
    /// Expected: nothing before 150ms, `[false]` after
    #[tokio::test(start_paused = true)]
    async fn delays_false_until_quiet() {
        let debouncer = Debouncer::default();
        let (seen, setter) = recorder();

        let task = tokio::spawn(debouncer.set(false, setter(), sleep));
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(100)).await;
        assert!(seen.lock().unwrap().is_empty());

        task.await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![false]);
        assert!(!debouncer.is_pending());
    }

    /// Tests true, false, true within the interval.
    ///
    /// Verifies the intermediate `false` is discarded when `true` arrives before
    /// the quiet period ends.
    ///
    /// Expected: only `true` values observed
    #[tokio::test(start_paused = true)]
    async fn true_discards_pending_false() {
        let debouncer = Debouncer::default();
        let (seen, setter) = recorder();

        debouncer.set(true, setter(), sleep).await;
        let pending = tokio::spawn(debouncer.set(false, setter(), sleep));
        sleep(Duration::from_millis(50)).await;
        debouncer.set(true, setter(), sleep).await;

        pending.await.unwrap();
        sleep(Duration::from_millis(500)).await;

        assert_eq!(*seen.lock().unwrap(), vec![true, true]);
    }

    /// Tests repeated `false` requests.
    ///
    /// Expected: a single `false`, from the last request
    #[tokio::test(start_paused = true)]
    async fn last_false_wins() {
        let debouncer = Debouncer::default();
        let (seen, setter) = recorder();

        let first = tokio::spawn(debouncer.set(false, setter(), sleep));
        sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn(debouncer.set(false, setter(), sleep));

        first.await.unwrap();
        assert!(seen.lock().unwrap().is_empty());

        second.await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![false]);
    }

    /// Tests explicit cancellation.
    ///
    /// Expected: pending `false` never applied
    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_false() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let (seen, setter) = recorder();

        let task = tokio::spawn(debouncer.set(false, setter(), sleep));
        debouncer.cancel();
        task.await.unwrap();

        assert!(seen.lock().unwrap().is_empty());
        assert!(!debouncer.is_pending());
    }

    /// Tests that separate handles do not interfere.
    ///
    /// Expected: each handle delivers its own `false`
    #[tokio::test(start_paused = true)]
    async fn handles_are_independent() {
        let a = Debouncer::default();
        let b = Debouncer::default();
        let (seen, setter) = recorder();

        let task = tokio::spawn(a.set(false, setter(), sleep));
        b.set(true, setter(), sleep).await;
        task.await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }
}
