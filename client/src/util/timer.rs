//! Repeating browser timer for the RFID simulator.

use std::time::Duration;

use views::simulator::TimerHandle;

/// A running `setInterval`; cleared when cancelled or dropped.
pub struct IntervalTimer {
    #[cfg(feature = "csr")]
    _interval: gloo_timers::callback::Interval,
}

impl IntervalTimer {
    /// Call `tick` every `every` until the returned handle is cancelled.
    pub fn start(every: Duration, tick: impl FnMut() + 'static) -> Self {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(every.as_millis()).unwrap_or(u32::MAX);
            Self {
                _interval: gloo_timers::callback::Interval::new(millis, tick),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            drop((every, tick));
            Self {}
        }
    }
}

impl TimerHandle for IntervalTimer {
    fn cancel(self) {
        // Dropping the gloo interval clears it.
        drop(self);
    }
}
