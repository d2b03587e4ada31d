//! Coarse scan for quick parameter exploration
//!
//! A reduced grid (every 2nd ratio, every 10th time) that finishes in
//! seconds, for checking how a parameter change shifts the untapered
//! contour before paying for the full map.
//!
//! ```bash
//! cargo run --release --example quick_scan
//! ```

use std::error::Error;

use taper_rs::config::SweepConfig;
use taper_rs::sweep::run_sweep;

fn main() -> Result<(), Box<dyn Error>> {
    let config = SweepConfig {
        ratio_step: 2.0,
        time_step: 10.0,
        ..SweepConfig::default()
    };
    config.validate()?;

    println!(
        "Quick scan: {} ratios x {} times",
        config.ratio_axis().len(),
        config.time_axis().len()
    );

    let outcome = run_sweep(&config, None)?;

    // Terminal summary instead of files: per-ratio best time.
    println!("\n  ratio    best time   tapering      status");
    println!("  -----    ---------   --------      ------");

    let times = outcome.tapering.time_axis.values();
    for (row, &ratio) in outcome.tapering.ratio_axis.values().iter().enumerate() {
        let series = outcome.tapering.matrix.row(row);
        let (best, &tapering) = series
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .expect("time axis is never empty");

        let straight = outcome
            .untapered
            .points
            .iter()
            .any(|p| p.flux_ratio == ratio);
        let status = if straight { "straight" } else { "tapered" };

        println!(
            "  {:5.1}    {:6.0} min   {:+.4} %    {}",
            ratio, times[best], tapering, status
        );
    }

    println!(
        "\n{} of {} ratios admit an untapered growth time on this grid",
        outcome.untapered.len(),
        outcome.tapering.ratio_axis.len()
    );

    Ok(())
}
