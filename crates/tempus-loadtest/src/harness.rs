//! Staged virtual-user harness

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::{Journey, MetricsCollector, Report, Thresholds};

/// One ramp segment: move the virtual-user count linearly to
/// `target_vus` over `duration`.
#[derive(Clone, Copy, Debug)]
pub struct Stage {
    pub duration: Duration,
    pub target_vus: usize,
}

/// The staged load profile.
#[derive(Clone, Debug)]
pub struct LoadProfile {
    pub stages: Vec<Stage>,
    /// How often the VU count is adjusted during a ramp
    pub step: Duration,
}

impl Default for LoadProfile {
    /// Production profile: one minute ramping to 20 VUs, three minutes
    /// steady, one minute ramping down.
    fn default() -> Self {
        LoadProfile {
            stages: vec![
                Stage {
                    duration: Duration::from_secs(60),
                    target_vus: 20,
                },
                Stage {
                    duration: Duration::from_secs(180),
                    target_vus: 20,
                },
                Stage {
                    duration: Duration::from_secs(60),
                    target_vus: 0,
                },
            ],
            step: Duration::from_secs(1),
        }
    }
}

/// Drives the staged profile against a base URL and gathers metrics.
pub struct LoadTest {
    base_url: String,
    profile: LoadProfile,
    thresholds: Thresholds,
    seed: u64,
}

impl LoadTest {
    pub fn new(base_url: impl Into<String>) -> Self {
        LoadTest {
            base_url: base_url.into(),
            profile: LoadProfile::default(),
            thresholds: Thresholds::default(),
            seed: 0x5eed,
        }
    }

    pub fn with_profile(mut self, profile: LoadProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Seed for journey selection and think times; a fixed seed makes
    /// the traffic mix reproducible across runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Run the whole profile to completion and return the report.
    pub async fn run(&self) -> Report {
        let client = Client::new();
        let metrics = Arc::new(MetricsCollector::new());
        let started_at = Utc::now().to_rfc3339();
        let started = Instant::now();

        let mut vus: Vec<JoinHandle<()>> = Vec::new();
        let mut spawned_total = 0u64;
        let mut ramp_from = 0usize;

        for stage in &self.profile.stages {
            let steps =
                (stage.duration.as_millis() / self.profile.step.as_millis().max(1)).max(1) as usize;
            for step in 1..=steps {
                let target = ramp(ramp_from, stage.target_vus, step, steps);
                while vus.len() < target {
                    spawned_total += 1;
                    let seed = self.seed.wrapping_add(spawned_total);
                    vus.push(self.spawn_vu(&client, &metrics, seed));
                }
                while vus.len() > target {
                    if let Some(vu) = vus.pop() {
                        vu.abort();
                    }
                }
                tokio::time::sleep(self.profile.step).await;
            }
            ramp_from = stage.target_vus;
        }

        for vu in vus {
            vu.abort();
        }
        metrics.report(&started_at, started.elapsed())
    }

    fn spawn_vu(
        &self,
        client: &Client,
        metrics: &Arc<MetricsCollector>,
        seed: u64,
    ) -> JoinHandle<()> {
        let client = client.clone();
        let metrics = Arc::clone(metrics);
        let base_url = self.base_url.clone();
        tokio::spawn(async move {
            let mut rng = StdRng::seed_from_u64(seed);
            loop {
                let journey = Journey::pick(&mut rng);
                let outcome = journey.run(&client, &base_url, &mut rng).await;
                metrics.record(outcome);
                tokio::time::sleep(journey.think_time(&mut rng)).await;
            }
        })
    }
}

/// Linear interpolation between VU counts across ramp steps.
fn ramp(from: usize, to: usize, step: usize, steps: usize) -> usize {
    let progress = step as f64 / steps as f64;
    (from as f64 + (to as f64 - from as f64) * progress).round() as usize
}
