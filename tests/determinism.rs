use jiggly::{
    DamageNumbers, DamageTextConfig, ImpulseSink, JiggleBone, JiggleConfig, NoOpTickObserver,
    Pose, Quat, Vec2, Vec3,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn jiggle_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let pose = Pose::new(Vec3::new(0.0f32, 1.0, 0.0), Quat::identity());
        let mut bone = JiggleBone::new(JiggleConfig::default(), &pose);
        for i in 0..500 {
            if i % 50 == 0 {
                bone.apply_impulse(Vec3::new(1.0, 2.0, -0.5));
            }
            let moved = Pose::new(Vec3::new((i as f32 * 0.01).sin(), 1.0, 0.0), Quat::identity());
            bone.tick(&moved, 1.0 / 60.0, &mut NoOpTickObserver);
        }
        (bone.dynamic_position(), bone.velocity())
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0], *r);
    }
}

#[test]
fn damage_numbers_deterministic_with_seed() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut numbers = DamageNumbers::new(DamageTextConfig::<f32>::new());
        for i in 0..20 {
            numbers.spawn(format!("{i}"), Vec2::new(0.0, 0.0), &mut rng);
            numbers.update(1.0 / 60.0);
        }
        numbers.texts().iter().map(|t| (t.position.x, t.position.y)).collect::<Vec<_>>()
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0], *r);
    }
}
