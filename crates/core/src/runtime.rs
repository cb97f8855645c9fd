//! Clock, timer and task spawning seams
//!
//! Everything in Holocron runs on one thread: the browser event loop in
//! production, a tokio `LocalSet` in native tests. Time is read through
//! [`Clock`] and waited on through [`Timer`] so tests can drive both with a
//! [`ManualClock`].

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// Source of wall-clock time in milliseconds since the Unix epoch
pub trait Clock {
    fn now_ms(&self) -> i64;

    /// Whole seconds since the Unix epoch, rounded down
    fn now_secs(&self) -> i64 {
        self.now_ms().div_euclid(1000)
    }
}

/// Non-blocking sleep on the current event loop
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `chrono`
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Timer for the platform the crate is compiled for
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformTimer;

#[async_trait(?Send)]
impl Timer for PlatformTimer {
    async fn sleep(&self, duration: Duration) {
        platform_sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn platform_sleep(duration: Duration) {
    gloo::timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn platform_sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Spawn a future on the current thread's event loop
///
/// Natively this must be called from inside a `tokio::task::LocalSet`.
#[cfg(target_arch = "wasm32")]
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Spawn a future on the current thread's event loop
///
/// Natively this must be called from inside a `tokio::task::LocalSet`.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    // Detached; cancellation goes through the future itself.
    drop(tokio::task::spawn_local(future));
}

#[cfg(any(test, feature = "tests"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "tests"))]
mod manual {
    use super::{Clock, Timer};
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};
    use std::time::Duration;

    /// Simulated clock; sleeping advances time instead of waiting
    #[derive(Clone, Debug, Default)]
    pub struct ManualClock {
        now_ms: Rc<Cell<i64>>,
    }

    impl ManualClock {
        pub fn new(start_ms: i64) -> Self {
            Self {
                now_ms: Rc::new(Cell::new(start_ms)),
            }
        }

        pub fn set(&self, now_ms: i64) {
            self.now_ms.set(now_ms);
        }

        pub fn advance(&self, duration: Duration) {
            let step = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
            self.now_ms.set(self.now_ms.get().saturating_add(step));
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.now_ms.get()
        }
    }

    #[async_trait(?Send)]
    impl Timer for ManualClock {
        async fn sleep(&self, duration: Duration) {
            self.advance(duration);
            YieldOnce(false).await;
        }
    }

    /// Gives other futures on the same task one chance to run
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_secs_rounds_down() {
        let clock = ManualClock::new(1_700_000_000_999);
        assert_eq!(clock.now_secs(), 1_700_000_000);
    }

    #[tokio::test]
    async fn test_manual_sleep_advances_time() {
        let clock = ManualClock::new(0);
        clock.sleep(Duration::from_millis(1500)).await;
        assert_eq!(clock.now_ms(), 1500);
        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now_ms(), 3500);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
