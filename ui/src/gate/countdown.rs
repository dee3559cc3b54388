#[cfg(feature = "web")]
use gloo_timers::callback::Interval;

#[cfg(feature = "web")]
const TICK_MS: u32 = 1_000;

/// Owner of the lockout timer handle.
///
/// Holds at most one handle. Timer handles cancel on drop (gloo's
/// [`Interval`] does), so replacing or stopping is cancelling, and two
/// countdowns can never run at the same time.
pub struct Countdown<H> {
    handle: Option<H>,
}

impl<H> Default for Countdown<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Countdown<H> {
    /// Install a new handle. The old one is dropped first.
    pub fn replace(&mut self, handle: H) {
        self.stop();
        self.handle = Some(handle);
    }

    pub fn stop(&mut self) {
        self.handle = None;
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(feature = "web")]
impl Countdown<Interval> {
    /// Start a one-second interval, cancelling any running one.
    pub fn start<F>(&mut self, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.replace(Interval::new(TICK_MS, on_tick));
    }
}
