//! Converter panel - field glue around the pure converter
//!
//! Models the four-field conversion form: an epoch input paired with a
//! date output, and a date input paired with an epoch output. The
//! conversions themselves stay in `tempus-convert`; this type owns the
//! field state and the failure behavior: on any parse failure the
//! notifier fires exactly once with a fixed message and every field
//! keeps its previous value.

use std::sync::Arc;

use tracing::warn;

use tempus_convert::{to_date_string, to_epoch_seconds};
use tempus_core::{EpochSeconds, TimeSource};

/// Fixed message raised for any conversion failure
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input!";

/// Modal, user-visible notification channel.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// The conversion form.
pub struct ConverterPanel {
    notifier: Arc<dyn Notifier>,
    epoch_input: String,
    date_output: String,
    date_input: String,
    epoch_output: String,
}

impl ConverterPanel {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        ConverterPanel {
            notifier,
            epoch_input: String::new(),
            date_output: String::new(),
            date_input: String::new(),
            epoch_output: String::new(),
        }
    }

    /// Seed both inputs from the current instant, the way the page
    /// loads with "now" already filled in.
    pub fn prefill(&mut self, time_source: &dyn TimeSource) {
        let now = EpochSeconds::from_millis(time_source.now_millis());
        self.epoch_input = now.to_string();
        self.date_input = to_date_string(now).into_string();
    }

    pub fn set_epoch_input(&mut self, text: impl Into<String>) {
        self.epoch_input = text.into();
    }

    pub fn set_date_input(&mut self, text: impl Into<String>) {
        self.date_input = text.into();
    }

    pub fn epoch_input(&self) -> &str {
        &self.epoch_input
    }

    pub fn date_output(&self) -> &str {
        &self.date_output
    }

    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    pub fn epoch_output(&self) -> &str {
        &self.epoch_output
    }

    /// Epoch-seconds input -> date-string output.
    pub fn convert_timestamp_to_date(&mut self) {
        match self.epoch_input.trim().parse::<i64>() {
            Ok(secs) => {
                self.date_output = to_date_string(EpochSeconds::new(secs)).into_string();
            }
            Err(_) => self.report_invalid("epoch input is not an integer"),
        }
    }

    /// Date-string input -> epoch-seconds output.
    pub fn convert_date_to_timestamp(&mut self) {
        match to_epoch_seconds(&self.date_input) {
            Ok(ts) => self.epoch_output = ts.to_string(),
            Err(err) => self.report_invalid(&err.to_string()),
        }
    }

    fn report_invalid(&self, reason: &str) {
        warn!(reason, "conversion failed");
        self.notifier.alert(INVALID_INPUT_MESSAGE);
    }
}
