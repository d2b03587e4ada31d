//! Full shape-map computation with the published parameter set
//!
//! Runs the complete (flux ratio × growth time) tapering sweep, exports
//! both CSV artefacts under their conventional filenames, and renders the
//! heatmap and the untapered-sizes figure.
//!
//! ```bash
//! cargo run --release --example shape_map
//!
//! # Much faster on the default grid (143 ratios):
//! cargo run --release --example shape_map --features parallel
//! ```

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use taper_rs::config::SweepConfig;
use taper_rs::output::export::{
    export_tapering_map, export_untapered_sizes, map_filename, size_filename,
};
use taper_rs::output::visualization::{plot_shape_map, plot_untapered_sizes, PlotConfig};
use taper_rs::sweep::run_sweep;

fn main() -> Result<(), Box<dyn Error>> {
    println!("======================================================");
    println!("  Nanowire Shape Map — VLS + VS tapering sweep");
    println!("======================================================\n");

    let config = SweepConfig::default();
    config.validate()?;

    println!("Parameters:");
    println!("  eta               = {}", config.eta);
    println!("  diffusion length  = {} nm", config.diffusion_length);
    println!("  axial growth rate = {} nm/min", config.axial_growth_rate);
    println!("  initial radius    = {} nm", config.initial_radius);
    println!(
        "  flux ratio        = {} .. {} step {}",
        config.ratio_min, config.ratio_max, config.ratio_step
    );
    println!(
        "  growth time       = {} .. {} min step {}",
        config.time_min, config.time_max, config.time_step
    );
    println!(
        "\nGrid: {} ratios x {} times\n",
        config.ratio_axis().len(),
        config.time_axis().len()
    );

    // Percentage progress; rows may finish out of order with the
    // parallel feature, so count completions rather than echoing indices.
    let completed = AtomicUsize::new(0);
    let progress = move |_index: usize, total: usize| {
        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        let percent = 100 * done / total;
        if percent % 10 == 0 && (100 * (done - 1) / total) % 10 != 0 {
            println!("  Completion: {}%", percent);
        }
    };

    let started = Instant::now();
    let outcome = run_sweep(&config, Some(&progress))?;
    println!("\nSweep finished in {:.1?}", started.elapsed());
    println!(
        "Untapered operating points found for {} of {} flux ratios\n",
        outcome.untapered.len(),
        outcome.tapering.ratio_axis.len()
    );

    // ====== CSV export ======

    let map_csv = map_filename(&config);
    let sizes_csv = size_filename(&config);
    export_tapering_map(&outcome.tapering, &map_csv, None)?;
    export_untapered_sizes(&outcome.untapered, &sizes_csv, None)?;
    println!("Wrote {}", map_csv);
    println!("Wrote {}", sizes_csv);

    // ====== Figures ======

    let map_config = PlotConfig::shape_map(format!(
        "Tapering map, lambda = {} nm",
        config.diffusion_length
    ));
    plot_shape_map(
        &outcome.tapering,
        &outcome.untapered,
        "shape_map.png",
        Some(&map_config),
    )?;
    plot_untapered_sizes(&outcome.untapered, "untapered_sizes.png", None)?;
    println!("Wrote shape_map.png");
    println!("Wrote untapered_sizes.png");

    Ok(())
}
