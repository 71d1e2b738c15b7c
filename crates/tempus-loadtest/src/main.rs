use anyhow::Result;

use tempus_loadtest::LoadTest;

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8080".to_owned());

    eprintln!("driving {base_url} with the staged production profile");
    let test = LoadTest::new(&base_url);
    let thresholds = test.thresholds();
    let report = test.run().await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    let violations = thresholds.evaluate(&report);
    for violation in &violations {
        eprintln!("threshold breached: {violation}");
    }
    if !violations.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
