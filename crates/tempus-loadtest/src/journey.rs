//! User journeys
//!
//! Each virtual user repeatedly picks one of four journeys, runs it,
//! and sleeps a journey-specific think time. Weights and think-time
//! ranges follow the production traffic model: an even 25% split, with
//! error-path visitors leaving faster than converters.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
use reqwest::Client;
use serde_json::Value;

/// One simulated user action against the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Journey {
    /// Browse the index page
    VisitIndex,
    /// Convert a valid epoch timestamp
    ConvertValid,
    /// Submit an unconvertible value and expect a clean rejection
    ConvertInvalid,
    /// Request a path that does not exist
    UnknownPath,
}

impl Journey {
    pub const ALL: [Journey; 4] = [
        Journey::VisitIndex,
        Journey::ConvertValid,
        Journey::ConvertInvalid,
        Journey::UnknownPath,
    ];

    /// Uniform 25% pick across the four journeys
    pub fn pick(rng: &mut StdRng) -> Journey {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            Journey::VisitIndex => "visit index page",
            Journey::ConvertValid => "convert valid timestamp",
            Journey::ConvertInvalid => "handle conversion error",
            Journey::UnknownPath => "handle 404 error",
        }
    }

    /// Post-journey think time.
    pub fn think_time(self, rng: &mut StdRng) -> Duration {
        let (min_ms, max_ms) = match self {
            // casual browsing: 1-3s
            Journey::VisitIndex => (1000, 3000),
            // reading the conversion result: 1-4s
            Journey::ConvertValid => (1000, 4000),
            // puzzling over the error: 1-3s
            Journey::ConvertInvalid => (1000, 3000),
            // quick exit: 0.5-1.5s
            Journey::UnknownPath => (500, 1500),
        };
        Duration::from_millis(rng.gen_range(min_ms..=max_ms))
    }

    /// Run the journey once and check its expectation.
    pub async fn run(self, client: &Client, base_url: &str, rng: &mut StdRng) -> JourneyOutcome {
        let started = Instant::now();
        let passed = match self {
            Journey::VisitIndex => {
                let response = client.get(format!("{base_url}/")).send().await;
                matches!(response, Ok(r) if r.status() == 200)
            }
            Journey::ConvertValid => {
                let timestamp: i64 = rng.gen_range(0..2_000_000_000);
                let url = format!("{base_url}/api/convert?s={timestamp}");
                match client.get(url).send().await {
                    Ok(r) if r.status() == 200 => {
                        // the body must be a JSON date string
                        matches!(r.json::<Value>().await, Ok(Value::String(_)))
                    }
                    _ => false,
                }
            }
            Journey::ConvertInvalid => {
                let url = format!("{base_url}/api/convert?s=not-a-timestamp");
                matches!(client.get(url).send().await, Ok(r) if r.status() == 400)
            }
            Journey::UnknownPath => {
                let url = format!("{base_url}/api/missing/{}", rng.gen_range(0..u32::MAX));
                matches!(client.get(url).send().await, Ok(r) if r.status() == 404)
            }
        };

        JourneyOutcome {
            journey: self,
            latency: started.elapsed(),
            passed,
        }
    }
}

/// Result of one journey execution.
#[derive(Clone, Copy, Debug)]
pub struct JourneyOutcome {
    pub journey: Journey,
    pub latency: Duration,
    pub passed: bool,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_pick_covers_all_journeys() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let journey = Journey::pick(&mut rng);
            let slot = Journey::ALL.iter().position(|j| *j == journey).unwrap();
            counts[slot] += 1;
        }
        // an even split leaves every journey near 1000 of 4000
        for count in counts {
            assert!(count > 800, "skewed pick distribution: {counts:?}");
        }
    }

    #[test]
    fn test_think_times_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            for journey in Journey::ALL {
                let think = journey.think_time(&mut rng);
                assert!(think >= Duration::from_millis(500));
                assert!(think <= Duration::from_millis(4000));
            }
        }
        // the quick-exit journey never lingers past 1.5s
        for _ in 0..200 {
            let think = Journey::UnknownPath.think_time(&mut rng);
            assert!(think <= Duration::from_millis(1500));
        }
    }
}
