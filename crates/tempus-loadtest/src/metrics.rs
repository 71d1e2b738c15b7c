//! Run metrics, percentiles, and thresholds

use std::collections::BTreeMap;
use std::time::Duration;

use parking_lot::Mutex;

use serde::Serialize;

use crate::{Journey, JourneyOutcome};

/// Collects journey outcomes across all virtual users.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    inner: Mutex<MetricsInner>,
}

#[derive(Debug, Default)]
struct MetricsInner {
    latencies_ms: Vec<u64>,
    passed: u64,
    failed: u64,
    per_journey: BTreeMap<&'static str, JourneyCount>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        MetricsCollector::default()
    }

    pub fn record(&self, outcome: JourneyOutcome) {
        let mut inner = self.inner.lock();
        inner.latencies_ms.push(outcome.latency.as_millis() as u64);
        if outcome.passed {
            inner.passed += 1;
        } else {
            inner.failed += 1;
        }
        let entry = inner.per_journey.entry(outcome.journey.name()).or_default();
        entry.requests += 1;
        if !outcome.passed {
            entry.failures += 1;
        }
    }

    /// Snapshot the run into a report.
    pub fn report(&self, started_at: &str, elapsed: Duration) -> Report {
        let inner = self.inner.lock();
        let mut sorted = inner.latencies_ms.clone();
        sorted.sort_unstable();

        let total = inner.passed + inner.failed;
        let pass_rate = if total == 0 {
            1.0
        } else {
            inner.passed as f64 / total as f64
        };

        Report {
            started_at: started_at.to_owned(),
            duration_ms: elapsed.as_millis() as u64,
            total_requests: total,
            checks_passed: inner.passed,
            checks_failed: inner.failed,
            pass_rate,
            latency_ms: LatencySummary {
                p50: percentile(&sorted, 50.0),
                p95: percentile(&sorted, 95.0),
                p99: percentile(&sorted, 99.0),
                max: sorted.last().copied().unwrap_or(0),
            },
            journeys: inner
                .per_journey
                .iter()
                .map(|(name, count)| JourneyReport {
                    name: (*name).to_owned(),
                    requests: count.requests,
                    failures: count.failures,
                })
                .collect(),
        }
    }
}

/// Nearest-rank percentile over pre-sorted samples; 0 when empty.
fn percentile(sorted_ms: &[u64], pct: f64) -> u64 {
    if sorted_ms.is_empty() {
        return 0;
    }
    let rank = ((pct / 100.0) * sorted_ms.len() as f64).ceil() as usize;
    sorted_ms[rank.clamp(1, sorted_ms.len()) - 1]
}

#[derive(Clone, Copy, Debug, Default)]
struct JourneyCount {
    requests: u64,
    failures: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct JourneyReport {
    pub name: String,
    pub requests: u64,
    pub failures: u64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct LatencySummary {
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub max: u64,
}

/// Final run report, serialized to JSON for the operator.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub started_at: String,
    pub duration_ms: u64,
    pub total_requests: u64,
    pub checks_passed: u64,
    pub checks_failed: u64,
    pub pass_rate: f64,
    pub latency_ms: LatencySummary,
    pub journeys: Vec<JourneyReport>,
}

/// Pass/fail gates over a finished run.
#[derive(Clone, Copy, Debug)]
pub struct Thresholds {
    /// Overall p95 latency ceiling
    pub max_p95: Duration,
    /// Minimum fraction of passed checks
    pub min_pass_rate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            max_p95: Duration::from_millis(250),
            min_pass_rate: 0.95,
        }
    }
}

impl Thresholds {
    /// Evaluate a report; returns one violation line per failed gate.
    pub fn evaluate(&self, report: &Report) -> Vec<String> {
        let mut violations = Vec::new();
        let p95_limit = self.max_p95.as_millis() as u64;
        if report.latency_ms.p95 >= p95_limit {
            violations.push(format!(
                "p95 latency {}ms breaches the {p95_limit}ms ceiling",
                report.latency_ms.p95
            ));
        }
        if report.pass_rate <= self.min_pass_rate {
            violations.push(format!(
                "pass rate {:.3} is at or below the {:.2} floor",
                report.pass_rate, self.min_pass_rate
            ));
        }
        violations
    }
}
