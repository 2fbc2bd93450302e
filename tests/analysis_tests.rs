// Host-side tests for the signal-quality analyzer.

use detector_core::*;

fn reading(strength: f32, vdi: Option<f32>) -> SignalSample {
    SignalSample {
        strength,
        vdi,
        ..SignalSample::silent()
    }
}

fn analyzer() -> SignalQualityAnalyzer {
    SignalQualityAnalyzer::new(&AnalyzerConfig::default())
}

#[test]
fn fewer_than_five_samples_report_unknown() {
    let mut a = analyzer();
    for _ in 0..4 {
        let r = a.update(&reading(80.0, Some(60.0)));
        assert_eq!(r.quality, SignalQuality::Unknown);
        assert_eq!(r.stability, 0.0);
        assert_eq!(r.repeatability, 0.0);
        assert_eq!(r.confidence, 0.0);
        assert!(!r.target_locked);
        assert_eq!(r.trend, Trend::Stable);
    }
    let r = a.update(&reading(80.0, Some(60.0)));
    assert_ne!(r.quality, SignalQuality::Unknown);
}

#[test]
fn steady_strong_signal_is_excellent() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    for _ in 0..5 {
        r = a.update(&reading(80.0, Some(60.0)));
    }
    assert_eq!(r.stability, 100.0);
    assert_eq!(r.repeatability, 100.0);
    assert!((r.avg_strength - 80.0).abs() < 1e-4);
    assert!((r.confidence - (40.0 + 30.0 + 0.3 * 96.0)).abs() < 1e-3);
    assert_eq!(r.quality, SignalQuality::Excellent);
}

#[test]
fn stability_follows_vdi_spread() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    // mean 54, population sd sqrt(24)
    for vdi in [50.0, 60.0, 50.0, 60.0, 50.0] {
        r = a.update(&reading(50.0, Some(vdi)));
    }
    let expected = 100.0 - 24.0f32.sqrt() * 5.0;
    assert!((r.stability - expected).abs() < 1e-3);
}

#[test]
fn too_few_qualifying_readings_give_zero_stability() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    for _ in 0..5 {
        r = a.update(&reading(5.0, Some(40.0)));
    }
    assert_eq!(r.stability, 0.0);
    // consistently absent still counts as repeatable
    assert_eq!(r.repeatability, 100.0);
    assert_eq!(r.quality, SignalQuality::Poor);
}

#[test]
fn erratic_presence_has_low_repeatability() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    for i in 0..10 {
        let s = if i % 2 == 0 { 50.0 } else { 0.0 };
        r = a.update(&reading(s, Some(45.0)));
    }
    assert_eq!(r.repeatability, 40.0);
}

#[test]
fn repeatability_scales_with_distance_from_even_split() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    // 8 of 10 present: p = 0.8
    for i in 0..10 {
        let s = if i < 8 { 50.0 } else { 0.0 };
        r = a.update(&reading(s, None));
    }
    assert!((r.repeatability - (80.0 + 0.3 * 40.0)).abs() < 1e-3);
}

#[test]
fn target_lock_is_edge_triggered_and_cleared_on_loss() {
    let mut a = analyzer();
    for _ in 0..4 {
        assert!(!a.update(&reading(80.0, Some(60.0))).target_locked);
    }
    let r = a.update(&reading(80.0, Some(60.0)));
    assert!(r.target_locked, "lock should engage on the first full window");
    assert_eq!(r.locked_vdi, Some(60.0));

    // Average strength is 400 / (5 + k); the lock holds while it stays above 40.
    for k in 1..=4 {
        let r = a.update(&reading(0.0, None));
        assert!(r.target_locked, "lock dropped early after {k} silent reads");
        assert_eq!(r.locked_vdi, Some(60.0));
    }
    let r = a.update(&reading(0.0, None));
    assert!(!r.target_locked);
    assert_eq!(r.locked_vdi, None);
}

#[test]
fn lock_re_engages_after_a_dip() {
    let config = AnalyzerConfig {
        capacity: 5,
        ..AnalyzerConfig::default()
    };
    let mut a = SignalQualityAnalyzer::new(&config);
    for _ in 0..5 {
        a.update(&reading(80.0, Some(70.0)));
    }
    assert!(a.last().target_locked);
    for _ in 0..3 {
        a.update(&reading(0.0, None));
    }
    assert!(!a.last().target_locked);
    for _ in 0..5 {
        a.update(&reading(80.0, Some(70.0)));
    }
    assert!(a.last().target_locked);
}

#[test]
fn quality_ladder_prefers_the_highest_rung() {
    // satisfies EXCELLENT and GOOD at once
    assert_eq!(SignalQuality::classify(90.0, 90.0, 90.0), SignalQuality::Excellent);
    assert_eq!(SignalQuality::classify(90.0, 90.0, 10.0), SignalQuality::Good);
    assert_eq!(SignalQuality::classify(70.0, 70.0, 0.0), SignalQuality::Good);
    assert_eq!(SignalQuality::classify(50.0, 50.0, 0.0), SignalQuality::Fair);
    assert_eq!(SignalQuality::classify(65.0, 30.0, 0.0), SignalQuality::Poor);
    assert_eq!(SignalQuality::classify(10.0, 25.0, 0.0), SignalQuality::Poor);
    assert_eq!(SignalQuality::classify(25.0, 0.0, 0.0), SignalQuality::Poor);
    assert_eq!(SignalQuality::classify(10.0, 10.0, 0.0), SignalQuality::Junk);
}

#[test]
fn trend_compares_window_halves() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    for i in 0..10 {
        r = a.update(&reading(if i < 5 { 20.0 } else { 60.0 }, Some(60.0)));
    }
    assert_eq!(r.trend, Trend::Increasing);

    let mut a = analyzer();
    for i in 0..10 {
        r = a.update(&reading(if i < 5 { 60.0 } else { 20.0 }, Some(60.0)));
    }
    assert_eq!(r.trend, Trend::Decreasing);

    let mut a = analyzer();
    for i in 0..10 {
        r = a.update(&reading(if i < 5 { 50.0 } else { 54.0 }, Some(60.0)));
    }
    assert_eq!(r.trend, Trend::Stable);
}

#[test]
fn trend_needs_ten_samples() {
    let mut a = analyzer();
    let mut r = AnalysisResult::default();
    for i in 0..9 {
        r = a.update(&reading(i as f32 * 10.0, Some(60.0)));
    }
    assert_eq!(r.trend, Trend::Stable);
}

#[test]
fn window_is_bounded_and_reset_clears_it() {
    let mut a = analyzer();
    for _ in 0..50 {
        a.update(&reading(50.0, Some(40.0)));
    }
    assert_eq!(a.len(), AnalyzerConfig::default().capacity);
    a.reset();
    assert!(a.is_empty());
    assert_eq!(a.update(&reading(50.0, Some(40.0))).quality, SignalQuality::Unknown);
}

#[test]
fn window_span_tracks_timestamps() {
    use instant::Instant;
    use std::time::Duration;
    let mut a = analyzer();
    let t0 = Instant::now();
    a.update_at(&reading(10.0, None), t0);
    a.update_at(&reading(10.0, None), t0 + Duration::from_millis(250));
    assert_eq!(a.window_span(), Duration::from_millis(250));
}
