// Host-side tests for the signal model and metal registry.

use detector_core::*;
use glam::Vec2;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn model_with(objects: Vec<BuriedObject>) -> SignalModel {
    let mut model = SignalModel::new(SignalConfig::default(), 7);
    model.set_objects(objects);
    model
}

#[test]
fn falloff_matches_fourth_power_reference_points() {
    assert!((falloff_strength(90.0, 0.0, 150.0) - 90.0).abs() < 1e-4);
    assert!((falloff_strength(90.0, 75.0, 150.0) - 5.625).abs() < 1e-4);
    assert_eq!(falloff_strength(90.0, 150.0, 150.0), 0.0);
    assert_eq!(falloff_strength(90.0, 400.0, 150.0), 0.0);
}

#[test]
fn falloff_is_non_increasing_with_distance() {
    let mut prev = falloff_strength(90.0, 0.0, 150.0);
    for d in 1..=160 {
        let s = falloff_strength(90.0, d as f32, 150.0);
        assert!(s <= prev, "strength increased at distance {d}");
        prev = s;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn falloff_is_clamped_to_full_scale() {
    assert_eq!(falloff_strength(250.0, 0.0, 150.0), 100.0);
}

#[test]
fn empty_field_yields_silent_sample() {
    let mut model = model_with(Vec::new());
    let s = model.query(Vec2::new(10.0, 10.0));
    assert_eq!(s.strength, 0.0);
    assert!(s.distance.is_infinite());
    assert!(s.object.is_none());
    assert!(s.vdi.is_none() && s.phase.is_none() && s.metal.is_none());
    assert!(s.frequency_hz.is_none());
}

#[test]
fn object_at_exact_range_is_not_detected() {
    let mut model = model_with(vec![BuriedObject::new(
        Vec2::new(150.0, 0.0),
        90.0,
        MetalKind::Gold,
        "ring",
    )]);
    let s = model.query(Vec2::ZERO);
    assert!(!s.has_target());
    assert!(s.distance.is_infinite());
}

#[test]
fn strongest_object_wins_over_nearest() {
    // Near but weak: 20 * (1 - 10/150)^4 ~ 15.2
    // Far but strong: 90 * (1 - 30/150)^4 ~ 36.9
    let near = BuriedObject::new(Vec2::new(110.0, 100.0), 20.0, MetalKind::Iron, "nail");
    let far = BuriedObject::new(Vec2::new(70.0, 100.0), 90.0, MetalKind::Silver, "coin");
    let mut model = model_with(vec![near, far]);
    let s = model.query(Vec2::new(100.0, 100.0));
    assert_eq!(s.object, Some(1));
    assert_eq!(s.metal, Some(MetalKind::Silver));
    assert!((s.distance - 30.0).abs() < 1e-4);
    assert!((s.strength - 90.0 * 0.8f32.powi(4)).abs() < 1e-3);
}

#[test]
fn weak_readings_are_still_reported() {
    let mut model = model_with(vec![BuriedObject::new(
        Vec2::new(0.0, 0.0),
        90.0,
        MetalKind::Gold,
        "ring",
    )]);
    let s = model.query(Vec2::new(75.0, 0.0));
    assert!(s.has_target());
    assert!(s.strength > 0.0 && s.strength < detector_core::constants::PAINT_THRESHOLD);
}

#[test]
fn vdi_and_phase_stay_inside_metal_bands() {
    let mut model = model_with(vec![BuriedObject::new(
        Vec2::new(50.0, 50.0),
        80.0,
        MetalKind::Gold,
        "ring",
    )]);
    let gold = MetalKind::Gold.info();
    for i in 0..200 {
        let s = model.query(Vec2::new(50.0 + (i % 40) as f32, 50.0));
        let vdi = s.vdi.unwrap();
        let phase = s.phase.unwrap();
        assert!(vdi >= gold.vdi_range[0] && vdi <= gold.vdi_range[1]);
        assert!(phase >= gold.phase_range[0] && phase <= gold.phase_range[1]);
        assert_eq!(vdi.fract(), 0.0);
        assert_eq!(classify_by_vdi(vdi), MetalKind::Gold);
        assert_eq!(classify_by_phase(phase), MetalKind::Gold);
    }
}

#[test]
fn injected_rng_pins_vdi_and_phase() {
    let mut model = SignalModel::with_rng(SignalConfig::default(), StepRng::new(0, 0));
    model.set_objects(vec![BuriedObject::new(
        Vec2::new(0.0, 0.0),
        100.0,
        MetalKind::Copper,
        "pipe",
    )]);
    let s = model.query(Vec2::ZERO);
    let copper = MetalKind::Copper.info();
    assert_eq!(s.vdi, Some(copper.vdi_range[0]));
    assert_eq!(s.phase, Some(copper.phase_range[0]));
    assert_eq!(s.frequency_hz, Some(copper.audio_freq_range[1]));
}

#[test]
fn same_seed_gives_same_readings() {
    let objects = vec![BuriedObject::new(Vec2::new(0.0, 0.0), 70.0, MetalKind::Aluminum, "can")];
    let mut a = SignalModel::with_rng(SignalConfig::default(), StdRng::seed_from_u64(3));
    let mut b = SignalModel::with_rng(SignalConfig::default(), StdRng::seed_from_u64(3));
    a.set_objects(objects.clone());
    b.set_objects(objects);
    for i in 0..20 {
        let p = Vec2::new(i as f32, 0.0);
        assert_eq!(a.query(p), b.query(p));
    }
}

#[test]
fn frequency_interpolates_linearly() {
    let [lo, hi] = MetalKind::Gold.info().audio_freq_range;
    assert_eq!(frequency_for(MetalKind::Gold, 0.0), lo);
    assert_eq!(frequency_for(MetalKind::Gold, 100.0), hi);
    assert!((frequency_for(MetalKind::Gold, 50.0) - (lo + hi) / 2.0).abs() < 1e-3);
}

#[test]
fn classification_falls_back_to_lowest_conductivity() {
    assert_eq!(classify_by_vdi(60.0), MetalKind::Gold);
    assert_eq!(classify_by_vdi(99.0), MetalKind::Silver);
    assert_eq!(classify_by_vdi(30.5), DEFAULT_METAL);
    assert_eq!(classify_by_vdi(-3.0), MetalKind::Iron);
    assert_eq!(classify_by_phase(500.0), MetalKind::Iron);
    assert_eq!(classify_by_phase(130.0), MetalKind::Copper);
}

#[test]
fn color_blends_from_white_to_base() {
    assert_eq!(color_for(MetalKind::Gold, 0.0), [255, 255, 255]);
    assert_eq!(color_for(MetalKind::Gold, 100.0), MetalKind::Gold.info().color_rgb);
    let mid = color_for(MetalKind::Iron, 50.0);
    assert!(mid[0] > 139 && mid[1] > 69 && mid[2] > 19);
}

#[test]
fn metal_names_parse_case_insensitively() {
    assert_eq!("gold".parse::<MetalKind>(), Ok(MetalKind::Gold));
    assert_eq!(" SILVER ".parse::<MetalKind>(), Ok(MetalKind::Silver));
    assert!("tin".parse::<MetalKind>().is_err());
}
