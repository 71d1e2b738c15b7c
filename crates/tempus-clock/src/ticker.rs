//! Live clock ticker

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use tempus_core::{EpochSeconds, TimeSource};
use tempus_convert::to_date_string;

use crate::DisplaySink;

/// Ticker configuration
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Wall-clock interval between ticks. Not exact under load; drift
    /// is acceptable, the next tick resamples "now" from scratch.
    pub tick_interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        TickerConfig {
            tick_interval: Duration::from_millis(1000),
        }
    }
}

/// Live clock: samples the time source once per interval and publishes
/// the current epoch seconds and formatted date to two display sinks.
///
/// The ticker owns its task handle. `stop` (or dropping the ticker)
/// cancels the scheduled repetition and leaves no dangling timer.
pub struct ClockTicker {
    time_source: Arc<dyn TimeSource>,
    epoch_sink: Arc<dyn DisplaySink>,
    date_sink: Arc<dyn DisplaySink>,
    config: TickerConfig,
    task: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// Create a stopped ticker with the default 1s interval
    pub fn new(
        time_source: Arc<dyn TimeSource>,
        epoch_sink: Arc<dyn DisplaySink>,
        date_sink: Arc<dyn DisplaySink>,
    ) -> Self {
        Self::with_config(time_source, epoch_sink, date_sink, TickerConfig::default())
    }

    pub fn with_config(
        time_source: Arc<dyn TimeSource>,
        epoch_sink: Arc<dyn DisplaySink>,
        date_sink: Arc<dyn DisplaySink>,
        config: TickerConfig,
    ) -> Self {
        ClockTicker {
            time_source,
            epoch_sink,
            date_sink,
            config,
            task: None,
        }
    }

    /// One immediate tick, then a repeating tick every interval.
    ///
    /// Must be called from within a tokio runtime. Starting an already
    /// running ticker is a no-op; there is no second task.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        self.tick_once();

        let time_source = Arc::clone(&self.time_source);
        let epoch_sink = Arc::clone(&self.epoch_sink);
        let date_sink = Arc::clone(&self.date_sink);
        let tick_interval = self.config.tick_interval;

        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            // the first interval tick fires immediately; the start()
            // call already published, so consume it
            interval.tick().await;
            loop {
                interval.tick().await;
                publish_now(&*time_source, &*epoch_sink, &*date_sink);
            }
        }));
    }

    /// Sample "now" and publish to both sinks, synchronously.
    pub fn tick_once(&self) {
        publish_now(&*self.time_source, &*self.epoch_sink, &*self.date_sink);
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cancel the scheduled repetition.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Publish path shared by the immediate and scheduled ticks.
fn publish_now(
    time_source: &dyn TimeSource,
    epoch_sink: &dyn DisplaySink,
    date_sink: &dyn DisplaySink,
) {
    let now = EpochSeconds::from_millis(time_source.now_millis());
    let date = to_date_string(now);
    debug!(epoch = now.as_secs(), date = %date, "tick");
    epoch_sink.publish(&now.to_string());
    date_sink.publish(date.as_str());
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// Advances one second per sample
    struct SteppingSource {
        millis: AtomicI64,
    }

    impl SteppingSource {
        fn starting_at(millis: i64) -> Self {
            SteppingSource {
                millis: AtomicI64::new(millis),
            }
        }
    }

    impl TimeSource for SteppingSource {
        fn now_millis(&self) -> i64 {
            self.millis.fetch_add(1000, Ordering::Relaxed)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        writes: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn writes(&self) -> Vec<String> {
            self.writes.lock().clone()
        }
    }

    impl DisplaySink for RecordingSink {
        fn publish(&self, text: &str) {
            self.writes.lock().push(text.to_owned());
        }
    }

    fn ticker_parts() -> (Arc<SteppingSource>, Arc<RecordingSink>, Arc<RecordingSink>) {
        (
            Arc::new(SteppingSource::starting_at(1_451_613_802_000)),
            Arc::new(RecordingSink::default()),
            Arc::new(RecordingSink::default()),
        )
    }

    #[test]
    fn test_tick_once_publishes_both_sinks() {
        let (source, epoch_sink, date_sink) = ticker_parts();
        let ticker = ClockTicker::new(source, epoch_sink.clone(), date_sink.clone());

        ticker.tick_once();

        assert_eq!(epoch_sink.writes(), vec!["1451613802".to_owned()]);
        assert_eq!(date_sink.writes(), vec!["2016-01-01 02:03:22".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_ticks_immediately_then_every_interval() {
        let (source, epoch_sink, date_sink) = ticker_parts();
        let mut ticker = ClockTicker::new(source, epoch_sink.clone(), date_sink.clone());

        ticker.start();
        assert!(ticker.is_running());
        // immediate tick happened synchronously
        assert_eq!(epoch_sink.writes().len(), 1);

        tokio::time::sleep(Duration::from_millis(3050)).await;

        let epochs = epoch_sink.writes();
        let dates = date_sink.writes();
        assert_eq!(epochs.len(), 4);
        assert_eq!(dates.len(), 4);
        assert_eq!(epochs.last().unwrap(), "1451613805");
        assert_eq!(dates.last().unwrap(), "2016-01-01 02:03:25");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_repetition() {
        let (source, epoch_sink, date_sink) = ticker_parts();
        let mut ticker = ClockTicker::new(source, epoch_sink.clone(), date_sink);

        ticker.start();
        tokio::time::sleep(Duration::from_millis(1050)).await;
        ticker.stop();
        assert!(!ticker.is_running());

        let published = epoch_sink.writes().len();
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(epoch_sink.writes().len(), published);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_repetition() {
        let (source, epoch_sink, date_sink) = ticker_parts();
        {
            let mut ticker = ClockTicker::new(source, epoch_sink.clone(), date_sink);
            ticker.start();
            tokio::time::sleep(Duration::from_millis(1050)).await;
        }

        let published = epoch_sink.writes().len();
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(epoch_sink.writes().len(), published);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_spawns_single_loop() {
        let (source, epoch_sink, date_sink) = ticker_parts();
        let mut ticker = ClockTicker::new(source, epoch_sink.clone(), date_sink);

        ticker.start();
        ticker.start();
        // a second task would double the immediate tick
        assert_eq!(epoch_sink.writes().len(), 1);

        tokio::time::sleep(Duration::from_millis(2050)).await;
        assert_eq!(epoch_sink.writes().len(), 3);
    }
}
