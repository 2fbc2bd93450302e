// Host-side tests for tuning constants and their relationships.

use detector_core::constants::*;
use detector_core::{DetectorConfig, REGISTRY};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DETECTION_RANGE > 0.0);
    assert!(HEAT_CELL_SIZE > 0.0 && COVERAGE_CELL_SIZE > 0.0);

    // Decay must shrink values without flipping their sign
    assert!(HEAT_DECAY_RATE > 0.0 && HEAT_DECAY_RATE < 1.0);
    assert!(HEAT_EPSILON > 0.0);
    assert!(COVERAGE_FADE_SECS > 0.0);

    assert!(HEAT_MAX_ALPHA > 0.0 && HEAT_MAX_ALPHA <= 1.0);
    assert!(BEEP_DUTY > 0.0 && BEEP_DUTY < 1.0);
    assert!(TONE_GAIN_BASE + TONE_GAIN_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The snap-to-zero epsilon sits below what the painter would draw
    assert!(HEAT_EPSILON < HEAT_VISIBLE_THRESHOLD);
    assert!(HEAT_VISIBLE_THRESHOLD < PAINT_THRESHOLD);

    // Anything painted is also above the analyzer's noise floor
    assert!(PAINT_THRESHOLD > NOISE_FLOOR);

    // Window sizes nest
    assert!(ANALYSIS_WINDOW >= TREND_MIN_SAMPLES);
    assert!(TREND_MIN_SAMPLES >= ANALYSIS_MIN_SAMPLES);
    assert!(ANALYSIS_MIN_SAMPLES >= STABILITY_MIN_READINGS);

    // Quality rungs tighten toward the top
    assert!(EXCELLENT_CONFIDENCE > GOOD_CONFIDENCE && GOOD_CONFIDENCE > FAIR_CONFIDENCE);
    assert!(EXCELLENT_STABILITY > GOOD_STABILITY && GOOD_STABILITY > FAIR_STABILITY);
    assert!(FAIR_CONFIDENCE > POOR_FLOOR && FAIR_STABILITY > POOR_FLOOR);

    // Consistent presence or absence outscores an erratic one
    assert!(ERRATIC_BAND.0 < 0.5 && ERRATIC_BAND.1 > 0.5);
    assert!(REPEATABLE_BASE > ERRATIC_SCORE);
    assert!(REPEATABLE_BASE + 0.5 * REPEATABLE_GAIN <= 100.0);

    // Default canvas fits both grids
    let heat_cells = (CANVAS_WIDTH / HEAT_CELL_SIZE) * (CANVAS_HEIGHT / HEAT_CELL_SIZE);
    assert!(heat_cells as usize <= MAX_GRID_CELLS);

    // Beeps speed up with strength
    assert!(BEEP_PERIOD_SLOW_MS > BEEP_PERIOD_FAST_MS);

    // Coil sweep covers at least one coverage cell
    assert!(SWEEP_RADIUS * 2.0 >= COVERAGE_CELL_SIZE);
}

#[test]
fn confidence_weights_sum_to_one() {
    let sum = CONFIDENCE_STABILITY_WEIGHT
        + CONFIDENCE_REPEATABILITY_WEIGHT
        + CONFIDENCE_STRENGTH_WEIGHT;
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn registry_ranges_are_ordered_and_in_scale() {
    for m in REGISTRY.iter() {
        assert!(m.vdi_range[0] <= m.vdi_range[1], "{}", m.name);
        assert!(m.phase_range[0] <= m.phase_range[1], "{}", m.name);
        assert!(m.audio_freq_range[0] < m.audio_freq_range[1], "{}", m.name);
        assert!(m.vdi_range[0] >= 0.0 && m.vdi_range[1] <= 99.0);
        assert!(m.phase_range[0] >= 0.0 && m.phase_range[1] <= 180.0);
    }
    for pair in REGISTRY.windows(2) {
        assert!(pair[0].vdi_range[1] < pair[1].vdi_range[0]);
        assert!(pair[0].conductivity <= pair[1].conductivity);
    }
}

#[test]
fn default_config_is_valid() {
    assert!(DetectorConfig::default().validate().is_ok());
}
