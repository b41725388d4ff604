//! Benchmarks for jiggly's per-frame work.

use criterion::{criterion_group, criterion_main, Criterion};
use jiggly::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_jiggle_tick(c: &mut Criterion) {
    c.bench_function("jiggle_bone_1000_ticks", |b| {
        b.iter(|| {
            let pose = Pose::new(Vec3::new(0.0f32, 1.0, 0.0), Quat::identity());
            let mut bone = JiggleBone::new(JiggleConfig::default(), &pose);
            for i in 0..1000 {
                if i % 100 == 0 {
                    bone.apply_impulse(Vec3::new(2.0, 1.0, 0.0));
                }
                bone.tick(&pose, 1.0 / 60.0, &mut NoOpTickObserver);
            }
            bone.dynamic_position()
        });
    });
}

fn bench_clamp_rotation(c: &mut Criterion) {
    let rotations: std::vec::Vec<Quat<f32>> = (0..256)
        .map(|i| Quat::from_axis_angle(Vec3::new(0.3, 1.0, -0.4), i as f32 * 0.05))
        .collect();
    let bounds = Vec3::new(150.0, 150.0, 150.0);
    c.bench_function("clamp_rotation_256", |b| {
        b.iter(|| rotations.iter().map(|q| clamp_rotation(*q, bounds)).fold(0.0, |acc, q| acc + q.w));
    });
}

fn bench_damage_numbers(c: &mut Criterion) {
    c.bench_function("damage_numbers_100_spawns_60_frames", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(7);
            let mut numbers = DamageNumbers::new(DamageTextConfig::<f32>::new());
            for i in 0..100 {
                numbers.spawn("10", Vec2::new(i as f32, 0.0), &mut rng);
            }
            for _ in 0..60 {
                numbers.update(1.0 / 60.0);
            }
            numbers.len()
        });
    });
}

criterion_group!(benches, bench_jiggle_tick, bench_clamp_rotation, bench_damage_numbers);
criterion_main!(benches);
