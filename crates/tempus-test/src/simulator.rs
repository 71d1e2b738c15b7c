//! Clock simulation for deterministic temporal testing
//!
//! Replaces wall-clock scheduling with hand-advanced time so cadence
//! and publish behavior can be asserted without sleeping:
//! - advance simulated time in interval-sized steps
//! - drive the ticker's real publish path on each step
//! - optionally skew each step with seeded jitter, the way a loaded
//!   scheduler would fire late

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tempus_clock::{ClockTicker, DisplaySink};
use tempus_core::TimeSource;

/// Hand-advanced time source.
pub struct ManualTimeSource {
    millis: Mutex<i64>,
}

impl ManualTimeSource {
    pub fn starting_at(millis: i64) -> Self {
        ManualTimeSource {
            millis: Mutex::new(millis),
        }
    }

    pub fn set_millis(&self, millis: i64) {
        *self.millis.lock() = millis;
    }

    pub fn advance(&self, dt: Duration) {
        *self.millis.lock() += dt.as_millis() as i64;
    }
}

impl TimeSource for ManualTimeSource {
    fn now_millis(&self) -> i64 {
        *self.millis.lock()
    }
}

/// Display sink that remembers every write in order.
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }
}

impl DisplaySink for RecordingSink {
    fn publish(&self, text: &str) {
        self.writes.lock().push(text.to_owned());
    }
}

/// Uniform scheduling-jitter model: every simulated tick fires up to
/// `max_skew` late. Seeded, so a jittery run replays identically.
pub struct TickJitter {
    max_skew: Duration,
    rng: StdRng,
}

impl TickJitter {
    pub fn uniform(max_skew: Duration, seed: u64) -> Self {
        TickJitter {
            max_skew,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn skew(&mut self) -> Duration {
        let max_ms = self.max_skew.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(0..=max_ms))
    }
}

/// Drives a real [`ClockTicker`] tick by tick over simulated time.
///
/// Construction performs the same immediate tick `start()` would, so
/// the sinks are never empty while the simulated clock runs.
pub struct ClockSimulator {
    time_source: Arc<ManualTimeSource>,
    ticker: ClockTicker,
    epoch_display: Arc<RecordingSink>,
    date_display: Arc<RecordingSink>,
    tick_interval: Duration,
    jitter: Option<TickJitter>,
    ticks: u64,
}

impl ClockSimulator {
    /// Simulator with the default 1s cadence, started at `epoch_millis`
    pub fn starting_at(epoch_millis: i64) -> Self {
        let time_source = Arc::new(ManualTimeSource::starting_at(epoch_millis));
        let epoch_display = Arc::new(RecordingSink::new());
        let date_display = Arc::new(RecordingSink::new());
        let ticker = ClockTicker::new(
            time_source.clone(),
            epoch_display.clone(),
            date_display.clone(),
        );
        ticker.tick_once();

        ClockSimulator {
            time_source,
            ticker,
            epoch_display,
            date_display,
            tick_interval: Duration::from_millis(1000),
            jitter: None,
            ticks: 0,
        }
    }

    pub fn with_jitter(mut self, max_skew: Duration, seed: u64) -> Self {
        self.jitter = Some(TickJitter::uniform(max_skew, seed));
        self
    }

    /// Advance simulated time by one interval (plus any jitter) and
    /// fire one tick through the real publish path.
    pub fn tick(&mut self) {
        let mut advance = self.tick_interval;
        if let Some(jitter) = &mut self.jitter {
            advance += jitter.skew();
        }
        self.time_source.advance(advance);
        self.ticker.tick_once();
        self.ticks += 1;
    }

    /// Run the simulated clock for `duration`, one tick per interval.
    pub fn run(&mut self, duration: Duration) {
        let ticks = duration.as_millis() / self.tick_interval.as_millis();
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn now_millis(&self) -> i64 {
        self.time_source.now_millis()
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn epoch_display(&self) -> &RecordingSink {
        &self.epoch_display
    }

    pub fn date_display(&self) -> &RecordingSink {
        &self.date_display
    }
}

/// Predefined simulation scenarios
pub mod scenarios {
    use super::*;

    /// A clock started at 2016-01-01 02:03:22 UTC, exact cadence
    pub fn reference_clock() -> ClockSimulator {
        ClockSimulator::starting_at(1_451_613_802_000)
    }

    /// Same start, with up to 80ms of seeded scheduling skew per tick
    pub fn jittery_clock(seed: u64) -> ClockSimulator {
        reference_clock().with_jitter(Duration::from_millis(80), seed)
    }
}
