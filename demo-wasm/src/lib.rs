use jiggly::{
    CameraShake, Damageable, DamageNumbers, DamageTextConfig, HitTarget, HitTargetConfig,
    HostBinding, ImpulseSink, JiggleConfig, JiggleParent, NoOpTickObserver, Quat, ShakeConfig,
    Transform, Vec2, Vec3,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

// ---- Jiggle Demo ----

/// A single jiggle bone hanging off a draggable anchor, viewed from the side.
#[wasm_bindgen]
pub struct JiggleDemo {
    transform: Transform<f32>,
    binding: HostBinding<f32>,
}

#[wasm_bindgen]
impl JiggleDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        let transform = Transform::new(Vec3::new(0.0, 0.0, 0.0), Quat::identity());
        let config = JiggleConfig::new().with_stiffness(stiffness).with_damping(damping);
        let binding = HostBinding::attach(config, Some(&transform));
        JiggleDemo { transform, binding }
    }

    pub fn move_anchor(&mut self, x: f32, y: f32) {
        self.transform.position = Vec3::new(x, y, 0.0);
    }

    pub fn poke(&mut self, x: f32, y: f32) {
        self.binding.apply_impulse(Vec3::new(x, y, 0.0));
    }

    pub fn update(&mut self, dt: f32) {
        self.binding.update(&mut self.transform, dt, &mut NoOpTickObserver);
    }

    /// Returns [ax, ay, tx, ty, px, py]: anchor, bone tip (rest distance along
    /// the current forward axis) and the simulated mass point.
    pub fn positions(&self) -> Vec<f32> {
        let pose = self.transform.pose();
        let a = pose.position;
        let reach = self.binding.bone().map_or(0.0, |b| b.config().rest_distance);
        let t = a + Vec3::new(pose.forward().x * reach, pose.forward().y * reach, 0.0);
        let p = self.binding.bone().map_or(a, |b| b.dynamic_position());
        vec![a.x, a.y, t.x, t.y, p.x, p.y]
    }
}

// ---- Punch Demo ----

/// A punching bag: clicks deal damage, spawn damage numbers and shake the camera.
#[wasm_bindgen]
pub struct PunchDemo {
    target: HitTarget<f32>,
    transform: Transform<f32>,
    numbers: DamageNumbers<f32>,
    shake: CameraShake<f32>,
    camera: Vec3<f32>,
    rng: SmallRng,
}

#[wasm_bindgen]
impl PunchDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Self {
        let transform = Transform::new(Vec3::new(0.0, 0.0, 0.0), Quat::identity());
        let binding = HostBinding::attach(JiggleConfig::new(), Some(&transform));
        let target = HitTarget::new(
            HitTargetConfig::new().with_destroy_on_death(false),
            transform.position,
            transform.local_rotation,
            Some(binding),
        );
        PunchDemo {
            target,
            transform,
            numbers: DamageNumbers::new(DamageTextConfig::new()),
            shake: CameraShake::new(ShakeConfig::new(), Vec3::new(0.0, 0.0, 0.0)),
            camera: Vec3::new(0.0, 0.0, 0.0),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Punch at world point (x, y) with the given force. Screen coordinates
    /// place the damage label.
    pub fn punch(&mut self, x: f32, y: f32, force: f32, screen_x: f32, screen_y: f32) {
        let report = self.target.take_damage_at(
            force,
            Vec3::new(x, y, -1.0),
            Vec3::new(0.0, 0.0, force),
            &mut self.rng,
        );
        self.numbers.spawn(report.label, Vec2::new(screen_x, screen_y), &mut self.rng);
        self.shake.start();
    }

    pub fn update(&mut self, dt: f32) {
        self.target.update(dt);
        if let Some(binding) = self.target.jiggle_mut() {
            binding.update(&mut self.transform, dt, &mut NoOpTickObserver);
        }
        self.numbers.update(dt);
        self.camera = self.shake.update(dt, self.camera, &mut self.rng);
    }

    pub fn reset(&mut self) {
        self.target.reset();
    }

    pub fn health_fraction(&self) -> f32 {
        self.target.health_fraction()
    }

    /// Returns [fx, fy, fz]: the bag's forward axis.
    pub fn forward(&self) -> Vec<f32> {
        let f = self.transform.pose().forward();
        vec![f.x, f.y, f.z]
    }

    /// Returns [x, y, z]: the shaken camera offset.
    pub fn camera(&self) -> Vec<f32> {
        vec![self.camera.x, self.camera.y, self.camera.z]
    }

    /// Returns flat [x0, y0, alpha0, x1, y1, alpha1, ...] for live damage labels.
    pub fn labels(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.numbers.len() * 3);
        for t in self.numbers.texts() {
            out.push(t.position.x);
            out.push(t.position.y);
            out.push(t.alpha);
        }
        out
    }

    pub fn label_text(&self, index: usize) -> String {
        self.numbers.texts().get(index).map_or_else(String::new, |t| t.label.clone())
    }

    pub fn counter(&self) -> String {
        self.numbers.counter_label()
    }
}
