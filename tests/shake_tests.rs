use jiggly::shake::random_in_unit_sphere;
use jiggly::{CameraShake, ShakeConfig, Vec, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn offset_stays_within_decaying_radius() {
    let origin = Vec3::new(0.0f32, 1.5, -4.0);
    let config = ShakeConfig::new().with_intensity(0.3).with_duration(0.2);
    let mut shake = CameraShake::new(config, origin);
    let mut rng = SmallRng::seed_from_u64(4);

    shake.start();
    let mut current = origin;
    let dt = 0.02;
    let mut remaining = 0.2f32;
    while shake.is_shaking() {
        current = shake.update(dt, current, &mut rng);
        remaining -= dt;
        let radius = 0.3 * (remaining / 0.2).max(0.0);
        assert!(current.distance(origin) <= radius + 1e-4);
    }
}

#[test]
fn settles_back_to_origin() {
    let origin = Vec3::new(0.0f32, 1.0, 0.0);
    let mut shake = CameraShake::new(ShakeConfig::new(), origin);
    let mut rng = SmallRng::seed_from_u64(8);
    assert!(!shake.is_shaking());

    let displaced = Vec3::new(0.4, 1.2, 0.0);
    // settle factor clamp01(0.05 * 10) = 0.5
    let next = shake.update(0.05, displaced, &mut rng);
    assert!((next - Vec3::new(0.2, 1.1, 0.0)).length() < 1e-5);

    let mut current = next;
    for _ in 0..60 {
        current = shake.update(0.05, current, &mut rng);
    }
    assert!(current.distance(origin) < 1e-5);
}

#[test]
fn restart_resets_strength() {
    let mut shake = CameraShake::new(ShakeConfig::<f32>::new(), Vec3::zero());
    let mut rng = SmallRng::seed_from_u64(1);
    shake.start();
    for _ in 0..20 {
        shake.update(0.02, Vec3::zero(), &mut rng);
    }
    assert!(!shake.is_shaking());
    shake.start();
    assert!(shake.is_shaking());
}

#[test]
fn unit_sphere_samples() {
    let mut rng = SmallRng::seed_from_u64(21);
    for _ in 0..500 {
        let p: Vec3<f64> = random_in_unit_sphere(&mut rng);
        assert!(p.length() <= 1.0);
    }
}
