//! Frame driver: owns the animation loop lifecycle.
//!
//! The driver is a two-state machine (Idle, Running) that holds the frame
//! callback while running. The host's refresh source calls [`FrameDriver::frame`]
//! once per display refresh; the driver applies the optional frame-rate
//! throttle and invokes the callback. `stop()` releases the callback so a
//! torn-down view can never be drawn into; forgetting to call it leaks the
//! callback but crashes nothing.
//!
//! Timestamps come from a [`Clock`] so tests can drive the machine with fake
//! times via [`FrameDriver::frame_at`].

use std::time::{Duration, Instant};

/// Source of monotonic timestamps for frame pacing.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock measuring from its creation instant.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Lifecycle state of a [`FrameDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

type FrameFn = Box<dyn FnMut(Duration)>;

/// Schedules repeated redraws: Idle → Running on `start`, back on `stop`.
pub struct FrameDriver<C = MonotonicClock> {
    clock: C,
    frame_interval: Option<Duration>,
    last_executed: Option<Duration>,
    on_frame: Option<FrameFn>,
}

impl FrameDriver<MonotonicClock> {
    /// Creates an idle driver on the wall clock, with no throttle.
    pub fn new() -> FrameDriver<MonotonicClock> {
        FrameDriver::with_clock(MonotonicClock::new())
    }
}

impl Default for FrameDriver<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameDriver<C> {
    /// Creates an idle driver on the given clock, with no throttle.
    pub fn with_clock(clock: C) -> FrameDriver<C> {
        FrameDriver {
            clock,
            frame_interval: None,
            last_executed: None,
            on_frame: None,
        }
    }

    /// Sets or clears the frame-rate throttle.
    ///
    /// A non-finite or non-positive fps clears the throttle; validation of
    /// user input happens in [`crate::FieldConfig::validate`] before it gets
    /// here.
    pub fn set_target_fps(&mut self, fps: Option<f64>) {
        self.frame_interval = fps
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .map(|fps| Duration::from_secs_f64(1.0 / fps));
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        if self.on_frame.is_some() {
            DriverState::Running
        } else {
            DriverState::Idle
        }
    }

    /// Begins the animation: subsequent [`frame`](Self::frame) calls invoke
    /// `on_frame` with the frame timestamp.
    ///
    /// Calling `start` while already Running is a no-op that keeps the
    /// existing callback, so a second loop can never be attached.
    pub fn start(&mut self, on_frame: impl FnMut(Duration) + 'static) {
        if self.on_frame.is_some() {
            return;
        }
        self.on_frame = Some(Box::new(on_frame));
    }

    /// Cancels the animation and releases the callback.
    ///
    /// After `stop` returns, no further `on_frame` invocation can occur.
    pub fn stop(&mut self) {
        self.on_frame = None;
        self.last_executed = None;
    }

    /// One host refresh tick at the driver's own clock time.
    ///
    /// Returns true if the frame executed (callback invoked), false if the
    /// driver is idle or the throttle skipped the frame.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.now();
        self.frame_at(now)
    }

    /// One host refresh tick at an explicit timestamp.
    ///
    /// A frame is skipped while the elapsed time since the last *executed*
    /// frame is below the throttle interval. A timestamp earlier than the
    /// last executed frame is treated the same way.
    pub fn frame_at(&mut self, now: Duration) -> bool {
        let Some(on_frame) = self.on_frame.as_mut() else {
            return false;
        };
        if let (Some(interval), Some(last)) = (self.frame_interval, self.last_executed) {
            match now.checked_sub(last) {
                Some(elapsed) if elapsed >= interval => {}
                _ => return false,
            }
        }
        on_frame(now);
        self.last_executed = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    /// A driver with a counting callback already started.
    fn counting_driver() -> (FrameDriver, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let mut driver = FrameDriver::new();
        let inner = Rc::clone(&count);
        driver.start(move |_| inner.set(inner.get() + 1));
        (driver, count)
    }

    // -- Lifecycle --

    #[test]
    fn new_driver_is_idle() {
        let driver = FrameDriver::new();
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn start_transitions_to_running() {
        let (driver, _) = counting_driver();
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn stop_transitions_back_to_idle() {
        let (mut driver, _) = counting_driver();
        driver.stop();
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn frame_while_idle_does_nothing() {
        let mut driver = FrameDriver::new();
        assert!(!driver.frame_at(millis(16)));
    }

    #[test]
    fn frame_invokes_callback_with_timestamp() {
        let seen = Rc::new(Cell::new(Duration::ZERO));
        let mut driver = FrameDriver::new();
        let inner = Rc::clone(&seen);
        driver.start(move |ts| inner.set(ts));
        assert!(driver.frame_at(millis(16)));
        assert_eq!(seen.get(), millis(16));
    }

    #[test]
    fn no_invocations_after_stop() {
        let (mut driver, count) = counting_driver();
        driver.frame_at(millis(0));
        driver.frame_at(millis(16));
        assert_eq!(count.get(), 2);
        driver.stop();
        driver.frame_at(millis(32));
        driver.frame_at(millis(48));
        assert_eq!(count.get(), 2, "callback ran after stop()");
    }

    #[test]
    fn start_while_running_keeps_the_original_callback() {
        let (mut driver, original) = counting_driver();
        let usurper = Rc::new(Cell::new(0));
        let inner = Rc::clone(&usurper);
        driver.start(move |_| inner.set(inner.get() + 1));
        driver.frame_at(millis(0));
        assert_eq!(original.get(), 1);
        assert_eq!(usurper.get(), 0, "second start() replaced the callback");
    }

    #[test]
    fn driver_can_be_restarted_after_stop() {
        let (mut driver, first) = counting_driver();
        driver.frame_at(millis(0));
        driver.stop();
        let second = Rc::new(Cell::new(0));
        let inner = Rc::clone(&second);
        driver.start(move |_| inner.set(inner.get() + 1));
        driver.frame_at(millis(16));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    // -- Throttling --

    #[test]
    fn unthrottled_driver_executes_every_tick() {
        let (mut driver, count) = counting_driver();
        for ms in 0..10 {
            assert!(driver.frame_at(millis(ms)));
        }
        assert_eq!(count.get(), 10);
    }

    #[test]
    fn throttle_skips_frames_below_the_interval() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(25.0)); // 40ms interval
        // Ticks every 16ms, like a 60Hz host refresh.
        for tick in 0..10u64 {
            driver.frame_at(millis(tick * 16));
        }
        // Executes at 0, 48, 96, 144 (first tick at/after each 40ms gap).
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn first_frame_always_executes() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(1.0));
        assert!(driver.frame_at(millis(0)));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn frame_exactly_at_the_interval_executes() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(25.0)); // 40ms
        driver.frame_at(millis(0));
        assert!(driver.frame_at(millis(40)));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn backwards_timestamp_is_skipped() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(25.0));
        driver.frame_at(millis(100));
        assert!(!driver.frame_at(millis(50)));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn clearing_the_throttle_resumes_full_rate() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(1.0));
        driver.frame_at(millis(0));
        driver.frame_at(millis(10)); // skipped
        driver.set_target_fps(None);
        driver.frame_at(millis(20));
        driver.frame_at(millis(21));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn degenerate_fps_values_clear_the_throttle() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(0.0));
        driver.frame_at(millis(0));
        driver.frame_at(millis(1));
        driver.set_target_fps(Some(f64::NAN));
        driver.frame_at(millis(2));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn restart_after_stop_forgets_the_last_executed_time() {
        let (mut driver, count) = counting_driver();
        driver.set_target_fps(Some(1.0)); // 1s interval
        driver.frame_at(millis(500));
        driver.stop();
        let again = Rc::new(Cell::new(0));
        let inner = Rc::clone(&again);
        driver.start(move |_| inner.set(inner.get() + 1));
        // Well within the old interval; a fresh run must not inherit it.
        assert!(driver.frame_at(millis(600)));
        assert_eq!(count.get(), 1);
        assert_eq!(again.get(), 1);
    }

    // -- Wall clock --

    #[test]
    fn monotonic_clock_never_runs_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn frame_uses_the_driver_clock() {
        // MonotonicClock timestamps are tiny but valid; the callback must
        // still fire on an unthrottled driver.
        let (mut driver, count) = counting_driver();
        assert!(driver.frame());
        assert_eq!(count.get(), 1);
    }
}
