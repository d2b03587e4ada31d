//! End-to-end integration tests for the sweep pipeline
//!
//! These tests exercise the full chain — configuration, VLS solve, VS
//! quadrature, tapering, selection, CSV export, plotting — on a coarse
//! grid, and pin down the determinism and format guarantees downstream
//! tooling relies on.

use std::fs;

use taper_rs::models::VsSidewallModel;
use taper_rs::output::export::{
    export_tapering_map, export_untapered_sizes, map_filename, size_filename,
};
use taper_rs::output::visualization::{plot_shape_map, plot_untapered_sizes};
use taper_rs::solver::SimpsonIntegrator;
use taper_rs::sweep::{run_sweep, selector::UNTAPERED_THRESHOLD};

mod common;
use common::{fast_config, relative_error, vs_integral_closed_form};

#[test]
fn test_sweep_dimensions_match_configuration() {
    let config = fast_config();
    let outcome = run_sweep(&config, None).unwrap();

    assert_eq!(outcome.tapering.matrix.nrows(), config.ratio_axis().len());
    assert_eq!(outcome.tapering.matrix.ncols(), config.time_axis().len());
    assert!(outcome.tapering.is_finite());
}

#[test]
fn test_quadrature_matches_closed_form() {
    // The VS integrand has a closed-form antiderivative; the adaptive
    // quadrature must reproduce it across the sweep's parameter range,
    // including positions the tip reaches mid-integration.
    let config = fast_config();
    let integrator = SimpsonIntegrator::new();

    for &flux_ratio in &[1.5, 2.0, 5.0, 20.0] {
        let model = VsSidewallModel::new(&config, flux_ratio);
        for &t in &[10.0, 60.0, 119.0] {
            for &y in &[380.0, 760.0, 2000.0, 76.0 * t - 20.0] {
                let lower = config.onset_time.max(model.tip_passage_time(y));
                let numeric = integrator
                    .integrate(|tau| model.rate(tau, y), lower, t)
                    .unwrap();
                let exact = vs_integral_closed_form(&config, flux_ratio, y, t);

                // Mixed criterion: tiny integrals near the tip are bounded
                // by the integrator's absolute tolerance, not the relative
                // one.
                assert!(
                    relative_error(numeric, exact) < 1e-6 || (numeric - exact).abs() < 1e-9,
                    "ratio {} t {} y {}: numeric {} vs exact {}",
                    flux_ratio,
                    t,
                    y,
                    numeric,
                    exact
                );
            }
        }
    }
}

#[test]
fn test_untapered_points_are_below_threshold() {
    let config = fast_config();
    let outcome = run_sweep(&config, None).unwrap();

    let ratios = outcome.tapering.ratio_axis.values().to_vec();
    for point in &outcome.untapered.points {
        let row = ratios
            .iter()
            .position(|&r| r == point.flux_ratio)
            .expect("untapered flux ratio must sit on the sweep axis");

        let tapering = outcome.tapering.matrix[[row, point.time_index]];
        assert!(
            tapering.abs() < UNTAPERED_THRESHOLD,
            "selected point tapers at {}",
            tapering
        );

        // The selected time must be the row minimum in magnitude.
        for value in outcome.tapering.matrix.row(row) {
            assert!(tapering.abs() <= value.abs() + 1e-15);
        }
    }
}

#[test]
fn test_repeated_runs_produce_identical_csv_files() {
    let config = fast_config();
    let dir = tempfile::tempdir().unwrap();

    let first_map = dir.path().join("first_map.csv");
    let second_map = dir.path().join("second_map.csv");
    let first_sizes = dir.path().join("first_sizes.csv");
    let second_sizes = dir.path().join("second_sizes.csv");

    let one = run_sweep(&config, None).unwrap();
    let two = run_sweep(&config, None).unwrap();

    export_tapering_map(&one.tapering, first_map.to_str().unwrap(), None).unwrap();
    export_tapering_map(&two.tapering, second_map.to_str().unwrap(), None).unwrap();
    export_untapered_sizes(&one.untapered, first_sizes.to_str().unwrap(), None).unwrap();
    export_untapered_sizes(&two.untapered, second_sizes.to_str().unwrap(), None).unwrap();

    assert_eq!(fs::read(&first_map).unwrap(), fs::read(&second_map).unwrap());
    assert_eq!(
        fs::read(&first_sizes).unwrap(),
        fs::read(&second_sizes).unwrap()
    );
}

#[test]
fn test_exported_map_round_trips_as_matrix() {
    let config = fast_config();
    let outcome = run_sweep(&config, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(map_filename(&config));
    export_tapering_map(&outcome.tapering, path.to_str().unwrap(), None).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let rows: Vec<&str> = content.lines().collect();
    assert_eq!(rows.len(), outcome.tapering.matrix.nrows());

    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<f64> = row
            .split(',')
            .map(|cell| cell.parse::<f64>().unwrap())
            .collect();
        assert_eq!(cells.len(), outcome.tapering.matrix.ncols());

        for (j, &cell) in cells.iter().enumerate() {
            assert!(cell.is_finite());
            // Default export precision is 6 decimal places.
            assert!((cell - outcome.tapering.matrix[[i, j]]).abs() < 5e-7);
        }
    }
}

#[test]
fn test_conventional_filenames_encode_bounds() {
    let config = fast_config();
    // Truncating formatter: 2.0 → 2, 0.5 → 0
    assert_eq!(
        map_filename(&config),
        "Map-time10_13_1-ratio2_3_0-lambda2400.csv"
    );
    assert_eq!(
        size_filename(&config),
        "size-flux10_13_1-ratio2_3_0-lambda2400.csv"
    );
}

#[test]
fn test_plots_render_from_sweep_outcome() {
    let config = fast_config();
    let outcome = run_sweep(&config, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let map_png = dir.path().join("shape_map.png");
    let sizes_png = dir.path().join("sizes.png");

    plot_shape_map(
        &outcome.tapering,
        &outcome.untapered,
        map_png.to_str().unwrap(),
        None,
    )
    .unwrap();
    plot_untapered_sizes(&outcome.untapered, sizes_png.to_str().unwrap(), None).unwrap();

    assert!(map_png.exists());
    assert!(sizes_png.exists());
    assert!(fs::metadata(&map_png).unwrap().len() > 0);
}

#[test]
fn test_progress_reports_cover_all_rows() {
    use std::sync::Mutex;

    let config = fast_config();
    let seen = Mutex::new(Vec::new());
    let progress = |index: usize, total: usize| {
        seen.lock().unwrap().push((index, total));
    };

    run_sweep(&config, Some(&progress)).unwrap();

    let mut seen = seen.into_inner().unwrap();
    seen.sort_unstable();
    let total = config.ratio_axis().len();
    let expected: Vec<(usize, usize)> = (0..total).map(|i| (i, total)).collect();
    assert_eq!(seen, expected);
}
