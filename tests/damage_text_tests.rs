use jiggly::{DamageNumbers, DamageTextConfig, Vec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn labels_rise_and_drift() {
    let mut numbers = DamageNumbers::new(DamageTextConfig::<f32>::new());
    let mut rng = SmallRng::seed_from_u64(11);
    let drift = numbers.spawn("12", Vec2::new(100.0, 50.0), &mut rng).drift;

    numbers.update(0.05);
    let text = &numbers.texts()[0];
    // follow factor clamp01(10 * 0.05) = 0.5 of the (drift, 25) step
    assert!((text.position.y - 62.5).abs() < 1e-4);
    assert!((text.position.x - (100.0 + drift * 0.5)).abs() < 1e-4);
    assert!((text.alpha - 0.9).abs() < 1e-6);
    assert_eq!(text.label, "12");
}

#[test]
fn faded_labels_are_removed_together() {
    let mut numbers = DamageNumbers::new(DamageTextConfig::<f32>::new());
    let mut rng = SmallRng::seed_from_u64(2);
    numbers.spawn("1", Vec2::new(0.0, 0.0), &mut rng);
    numbers.spawn("2", Vec2::new(0.0, 0.0), &mut rng);
    numbers.spawn("3", Vec2::new(0.0, 0.0), &mut rng);

    assert_eq!(numbers.update(0.25), 0);
    assert_eq!(numbers.len(), 3);
    assert_eq!(numbers.update(0.25), 3);
    assert!(numbers.is_empty());
    // the hit counter keeps counting after labels disappear
    assert_eq!(numbers.punch_count(), 3);
    assert_eq!(numbers.counter_label(), "Hits: 3");
}

#[test]
fn newer_labels_outlive_older_ones() {
    let mut numbers = DamageNumbers::new(DamageTextConfig::<f32>::new().with_fade_rate(1.0));
    let mut rng = SmallRng::seed_from_u64(5);
    numbers.spawn("old", Vec2::new(0.0, 0.0), &mut rng);
    numbers.update(0.5);
    numbers.spawn("new", Vec2::new(0.0, 0.0), &mut rng);

    assert_eq!(numbers.update(0.5), 1);
    assert_eq!(numbers.texts()[0].label, "new");
}

#[test]
fn default_pool_is_empty() {
    let numbers = DamageNumbers::<f32>::default();
    assert!(numbers.is_empty());
    assert_eq!(numbers.counter_label(), "Hits: 0");
}
