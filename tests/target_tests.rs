use jiggly::{
    Color, Damageable, DeathAction, HitTarget, HitTargetConfig, HostBinding, JiggleConfig,
    JiggleError, Quat, SoundBank, Transform, Vec, Vec3,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(17)
}

fn bound_target(config: HitTargetConfig<f32>) -> HitTarget<f32> {
    let transform = Transform::new(Vec3::zero(), Quat::identity());
    let binding = HostBinding::attach(JiggleConfig::new(), Some(&transform));
    HitTarget::new(config, Vec3::zero(), Quat::identity(), Some(binding))
}

#[test]
fn damage_reduces_health_and_reports_label() {
    let mut target = bound_target(HitTargetConfig::new());
    let report = target.take_damage(12.6, &mut rng());
    assert!((target.current_health() - 87.4).abs() < 1e-4);
    assert_eq!(report.label, "13");
    assert_eq!(report.remaining_health, target.current_health());
    assert!(report.death.is_none());
}

#[test]
fn health_never_goes_negative() {
    let mut target = bound_target(HitTargetConfig::new().with_max_health(20.0));
    target.take_damage(15.0, &mut rng());
    let report = target.take_damage(50.0, &mut rng());
    assert_eq!(report.remaining_health, 0.0);
    assert_eq!(target.health_fraction(), 0.0);
}

#[test]
fn death_is_reported_once() {
    let mut target = bound_target(HitTargetConfig::new().with_max_health(10.0));
    let report = target.take_damage(10.0, &mut rng());
    assert_eq!(report.death, Some(DeathAction::Destroy { delay: 2.0 }));
    assert!(target.is_dead());

    let again = target.take_damage(5.0, &mut rng());
    assert!(again.death.is_none());
}

#[test]
fn deactivates_when_not_destroying() {
    let config = HitTargetConfig::new().with_max_health(1.0).with_destroy_on_death(false);
    let mut target = bound_target(config);
    assert_eq!(target.take_damage(3.0, &mut rng()).death, Some(DeathAction::Deactivate));
}

#[test]
fn hit_kicks_jiggle_away_from_hit_point() {
    let mut target = bound_target(HitTargetConfig::new().with_jiggle_impulse_multiplier(2.0));
    let report = target.take_damage_at(
        5.0,
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 3.0, 4.0),
        &mut rng(),
    );

    // direction (1, 0, 0), magnitude |force| * multiplier = 10
    let impulse = report.impulse.unwrap();
    assert!((impulse - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);

    let bone = target.jiggle().and_then(HostBinding::bone).unwrap();
    assert!((bone.velocity().x - 100.0).abs() < 1e-3);
}

#[test]
fn hit_at_own_position_has_no_direction() {
    let mut target = bound_target(HitTargetConfig::new());
    let report = target.take_damage(5.0, &mut rng());
    assert_eq!(report.impulse, Some(Vec3::zero()));
}

#[test]
fn target_without_jiggle_still_takes_damage() {
    let mut target = HitTarget::new(HitTargetConfig::<f32>::new(), Vec3::zero(), Quat::identity(), None);
    let report = target.take_damage_at(30.0, Vec3::new(1.0, 0.0, 0.0), Vec3::up(), &mut rng());
    assert!(report.impulse.is_none());
    assert_eq!(target.current_health(), 70.0);
}

#[test]
fn flash_fades_back_to_normal() {
    let mut target = bound_target(HitTargetConfig::new().with_color_flash_duration(0.2));
    assert_eq!(target.update(0.1), Color::white());

    target.take_damage(1.0, &mut rng());
    let tint = target.update(0.1);
    // halfway through the flash
    assert!((tint.g - 0.5).abs() < 1e-5);

    target.update(0.1);
    assert_eq!(target.update(0.1), Color::white());
}

#[test]
fn reset_restores_everything() {
    let mut target = bound_target(HitTargetConfig::new().with_max_health(10.0));
    target.take_damage_at(
        20.0,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 0.0, 5.0),
        &mut rng(),
    );
    target.set_pose(Vec3::new(3.0, 0.0, 0.0), Quat::from_axis_angle(Vec3::up(), 1.0));
    assert!(target.is_dead());

    target.reset();
    assert!(!target.is_dead());
    assert_eq!(target.current_health(), 10.0);
    assert_eq!(target.position(), Vec3::zero());
    assert_eq!(target.rotation(), Quat::identity());
    let bone = target.jiggle().and_then(HostBinding::bone).unwrap();
    assert_eq!(bone.velocity(), Vec3::zero());
}

#[test]
fn health_bar_fills_with_health() {
    let mut target = bound_target(HitTargetConfig::new());
    target.set_pose(Vec3::new(0.0, 1.0, 0.0), Quat::identity());
    target.take_damage(25.0, &mut rng());
    let bar = target.health_bar();
    assert_eq!(bar.start, Vec3::new(-1.0, 3.0, 0.0));
    assert_eq!(bar.end, Vec3::new(1.0, 3.0, 0.0));
    assert!((bar.fill_end.x - 0.5).abs() < 1e-6);
}

#[test]
fn config_validation() {
    assert!(HitTargetConfig::<f32>::new().validate().is_ok());
    assert_eq!(
        HitTargetConfig::<f32>::new().with_max_health(0.0).validate(),
        Err(JiggleError::InvalidHealth)
    );
}

#[test]
fn label_rounds_ties_to_even() {
    let mut target = bound_target(HitTargetConfig::new());
    assert_eq!(target.take_damage(2.5, &mut rng()).label, "2");
    assert_eq!(target.take_damage(3.5, &mut rng()).label, "4");
    assert_eq!(target.take_damage(0.5, &mut rng()).label, "0");
}

#[test]
fn hit_sound_pitch_in_target_range() {
    let config = HitTargetConfig::new().with_hit_sounds(SoundBank::target_hits(4));
    let mut target = bound_target(config.with_max_health(1.0e6));
    let mut rng = SmallRng::seed_from_u64(23);
    for _ in 0..200 {
        let sound = target.take_damage(1.0, &mut rng).sound.unwrap();
        assert!(sound.clip < 4);
        assert!((0.8..=1.2).contains(&sound.pitch));
        assert_eq!(sound.volume, 1.0);
    }
}

#[test]
fn target_without_clips_is_silent() {
    let mut target = bound_target(HitTargetConfig::new());
    assert!(target.config().hit_sounds.is_empty());
    assert_eq!(target.config().hit_sounds.pitch_min, 0.8);
    assert_eq!(target.config().hit_sounds.pitch_max, 1.2);
    assert!(target.take_damage(5.0, &mut rng()).sound.is_none());
}
