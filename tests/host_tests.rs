use jiggly::{
    HostBinding, ImpulseSink, JiggleConfig, JiggleError, JiggleParent, NoOpTickObserver, Quat,
    Transform, Vec, Vec3,
};

#[test]
fn attach_without_parent_is_inert() {
    let mut binding = HostBinding::attach(JiggleConfig::<f32>::new(), None::<&Transform<f32>>);
    assert!(binding.is_inert());
    assert!(binding.bone().is_none());

    let mut transform = Transform::new(Vec3::zero(), Quat::identity());
    binding.apply_impulse(Vec3::new(0.0, 10.0, 0.0));
    assert_eq!(binding.update(&mut transform, 0.02, &mut NoOpTickObserver), None);
    assert_eq!(transform.local_rotation, Quat::identity());
}

#[test]
fn try_attach_reports_missing_parent() {
    let result = HostBinding::try_attach(JiggleConfig::<f32>::new(), None::<&Transform<f32>>);
    assert_eq!(result.err(), Some(JiggleError::MissingParent));
}

#[test]
fn update_writes_rotation_but_not_position() {
    let mut transform = Transform::new(Vec3::new(2.0f32, 1.0, 0.0), Quat::identity());
    let mut binding = HostBinding::attach(JiggleConfig::new(), Some(&transform));
    assert!(!binding.is_inert());

    binding.apply_impulse(Vec3::new(1.0, 0.0, 0.0));
    let rotation = binding
        .update(&mut transform, 1.0 / 60.0, &mut NoOpTickObserver)
        .unwrap();

    assert_eq!(transform.local_rotation, rotation);
    assert_eq!(transform.position, Vec3::new(2.0, 1.0, 0.0));
    // a sideways kick swings the bone toward +X
    assert!(rotation.forward().x > 0.0);
}

#[test]
fn bind_rotation_is_captured_at_attach() {
    let bind = Quat::from_axis_angle(Vec3::up(), 0.5f32);
    let mut transform = Transform::new(Vec3::zero(), bind);
    let config = JiggleConfig::new().with_doubled_swing(false);
    let mut binding = HostBinding::attach(config, Some(&transform));

    // host animation overwrote the rotation between ticks
    transform.set_local_rotation(Quat::from_axis_angle(Vec3::right(), 1.0));
    for _ in 0..600 {
        binding.update(&mut transform, 1.0 / 60.0, &mut NoOpTickObserver);
    }
    assert!(transform.local_rotation.angle_between(bind) < 1e-2);
}

#[test]
fn reset_puts_point_back_in_front() {
    let mut transform = Transform::new(Vec3::new(0.0f32, 0.0, 5.0), Quat::identity());
    let mut binding = HostBinding::attach(JiggleConfig::new(), Some(&transform));
    binding.apply_impulse(Vec3::new(4.0, 4.0, 0.0));
    binding.update(&mut transform, 0.02, &mut NoOpTickObserver);

    binding.reset(&transform);
    let bone = binding.bone().unwrap();
    assert_eq!(bone.velocity(), Vec3::zero());
    assert!((bone.dynamic_position() - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-5);
}

#[test]
fn parented_transform_stays_in_local_space() {
    let parent = Quat::from_axis_angle(Vec3::up(), 90.0f32.to_radians());
    let mut transform = Transform {
        position: Vec3::zero(),
        local_rotation: Quat::identity(),
        parent_rotation: parent,
    };
    let mut binding = HostBinding::attach(JiggleConfig::new(), Some(&transform));
    for _ in 0..300 {
        binding.update(&mut transform, 1.0 / 60.0, &mut NoOpTickObserver);
    }
    // at rest the local rotation is the bind rotation, not the parent's world rotation
    assert!(transform.local_rotation.angle_between(Quat::identity()) < 1e-2);
    assert!((transform.pose().forward() - Vec3::right()).length() < 1e-3);
}
