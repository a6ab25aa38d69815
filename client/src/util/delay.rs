//! Timer used by the simulated backend.
//!
//! Browser builds sleep with `gloo-timers`; everything else completes
//! immediately so SSR and tests never block.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::future::Future;
use std::time::Duration;

use flows::Delay;

#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            std::future::ready(())
        }
    }
}
