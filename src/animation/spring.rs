/// Bounciness used when only a speed is configured.
pub const DEFAULT_BOUNCINESS: f64 = 8.0;

/// Speeds above this only add damping; past it the spring creeps toward its
/// target instead of getting there faster.
pub const MAX_SPEED: f64 = 100.0;

const MAX_FRAME_SECONDS: f64 = 0.064;

/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_displacement_threshold: f64,
    pub rest_speed_threshold: f64,
}

impl SpringConfig {
    pub fn from_speed(speed: f64) -> Self {
        Self::from_bounciness_and_speed(DEFAULT_BOUNCINESS, speed)
    }

    /// Maps the designer-facing bounciness/speed pair onto stiffness and
    /// damping. Both inputs are on the 0..=20 (times 1.7) scale of the
    /// classic origami spring.
    pub fn from_bounciness_and_speed(bounciness: f64, speed: f64) -> Self {
        let speed = speed.clamp(0.0, MAX_SPEED);
        let b = project_normal(normalize(bounciness / 1.7, 0.0, 20.0), 0.0, 0.8);
        let s = normalize(speed / 1.7, 0.0, 20.0);
        let tension = project_normal(s, 0.5, 200.0);
        let friction = quadratic_out_interpolation(b, friction_without_bounce(tension), 0.01);

        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            ..Self::default()
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
        }
    }
}

fn normalize(value: f64, start: f64, end: f64) -> f64 {
    (value - start) / (end - start)
}

fn project_normal(n: f64, start: f64, end: f64) -> f64 {
    start + n * (end - start)
}

fn quadratic_out_interpolation(t: f64, start: f64, end: f64) -> f64 {
    let t = 2.0 * t - t * t;
    t * end + (1.0 - t) * start
}

fn friction_without_bounce(tension: f64) -> f64 {
    if tension <= 18.0 {
        0.0007 * tension.powi(3) - 0.031 * tension.powi(2) + 0.64 * tension + 1.28
    } else if tension <= 44.0 {
        0.000044 * tension.powi(3) - 0.006 * tension.powi(2) + 0.36 * tension + 2.0
    } else {
        0.000_000_45 * tension.powi(3) - 0.000332 * tension.powi(2) + 0.1078 * tension + 5.84
    }
}

/// A scalar pulled toward `target` by a damped spring.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// Starts at rest on `initial`.
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Points the spring at a new target. Position and velocity carry over so an
    /// in-flight transition bends toward the new target instead of restarting.
    pub fn retarget(&mut self, target: f64, config: SpringConfig) {
        self.target = target;
        self.config = config;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() <= self.config.rest_speed_threshold
            && (self.target - self.value).abs() <= self.config.rest_displacement_threshold
    }

    /// Advances the simulation by `dt` seconds. Returns `false` once the spring
    /// has settled on its target.
    pub fn step(&mut self, dt: f64) -> bool {
        let t = dt.clamp(0.0, MAX_FRAME_SECONDS);
        let (offset, velocity) =
            oscillate(self.value - self.target, self.velocity, &self.config, t);
        self.value = self.target + offset;
        self.velocity = velocity;

        if !self.value.is_finite() || !self.velocity.is_finite() || self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Closed-form position and velocity of a damped oscillator `t` seconds after
/// it sat at offset `x0` from equilibrium moving at `v0`.
fn oscillate(x0: f64, v0: f64, config: &SpringConfig, t: f64) -> (f64, f64) {
    let SpringConfig { stiffness, damping, mass, .. } = *config;
    if !(stiffness > 0.0 && mass > 0.0 && damping >= 0.0) {
        return (0.0, 0.0);
    }

    let omega = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());

    if (zeta - 1.0).abs() < 1e-9 {
        let decay = (-omega * t).exp();
        let b = v0 + omega * x0;
        let x = decay * (x0 + b * t);
        (x, decay * b - omega * x)
    } else if zeta < 1.0 {
        let a = zeta * omega;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-a * t).exp();
        let b = (v0 + a * x0) / omega_d;
        let (sin, cos) = (omega_d * t).sin_cos();
        (
            decay * (x0 * cos + b * sin),
            decay * ((b * omega_d - a * x0) * cos - (x0 * omega_d + a * b) * sin),
        )
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        // r_slow * r_fast == omega^2; dividing avoids cancellation at large zeta.
        let r_slow = -omega / (zeta + root);
        let r_fast = -omega * (zeta + root);
        let c_slow = (v0 - r_fast * x0) / (r_slow - r_fast);
        let c_fast = x0 - c_slow;
        let (e_slow, e_fast) = ((r_slow * t).exp(), (r_fast * t).exp());
        (
            c_slow * e_slow + c_fast * e_fast,
            c_slow * r_slow * e_slow + c_fast * r_fast * e_fast,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 0.016;

    fn settle(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while spring.step(FRAME) {
            frames += 1;
            assert!(frames < 1_000, "spring never settled: {:?}", spring);
        }
        frames
    }

    #[test]
    fn speed_maps_to_stiffness_and_damping() {
        let config = SpringConfig::from_speed(2.0);
        assert!((config.stiffness - 129.6918).abs() < 1e-3, "{:?}", config);
        assert!((config.damping - 12.3812).abs() < 1e-3, "{:?}", config);

        let faster = SpringConfig::from_speed(12.0);
        assert!(faster.stiffness > config.stiffness);
    }

    #[test]
    fn new_spring_is_at_rest_on_initial_value() {
        let spring = Spring::new(40.0, SpringConfig::from_speed(2.0));
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 40.0);
        assert_eq!(spring.target(), 40.0);
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut spring = Spring::new(0.0, SpringConfig::from_speed(2.0));
        spring.retarget(75.0, SpringConfig::from_speed(2.0));
        assert!(!spring.is_at_rest());

        let frames = settle(&mut spring);
        assert!(frames > 10);
        assert_eq!(spring.value(), 75.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn retarget_keeps_position_and_velocity() {
        let config = SpringConfig::from_speed(2.0);
        let mut spring = Spring::new(0.0, config);
        spring.retarget(100.0, config);
        for _ in 0..5 {
            spring.step(FRAME);
        }
        let (value, velocity) = (spring.value(), spring.velocity());
        assert!(value > 0.0 && velocity > 0.0);

        spring.retarget(20.0, config);
        assert_eq!(spring.value(), value);
        assert_eq!(spring.velocity(), velocity);

        settle(&mut spring);
        assert_eq!(spring.value(), 20.0);
    }

    #[test]
    fn fast_speeds_settle_instead_of_diverging() {
        for speed in [100.0, 264.0, 1_000.0, 1e6] {
            let config = SpringConfig::from_speed(speed);
            let mut spring = Spring::new(0.0, config);
            spring.retarget(75.0, config);

            let frames = settle(&mut spring);
            assert!(frames < 120, "speed {} took {} frames", speed, frames);
            assert_eq!(spring.value(), 75.0, "speed {}", speed);
        }
        assert_eq!(SpringConfig::from_speed(1e6), SpringConfig::from_speed(MAX_SPEED));
    }

    #[test]
    fn overdamped_spring_approaches_without_crossing() {
        let config = SpringConfig { stiffness: 100.0, damping: 60.0, ..SpringConfig::default() };
        let mut spring = Spring::new(0.0, config);
        spring.retarget(50.0, config);
        let mut previous = 0.0;
        while spring.step(FRAME) {
            assert!(spring.value() >= previous && spring.value() <= 50.0, "{:?}", spring);
            previous = spring.value();
        }
        assert_eq!(spring.value(), 50.0);
    }

    #[test]
    fn unusable_config_snaps_to_target() {
        let config = SpringConfig { stiffness: 0.0, ..SpringConfig::default() };
        let mut spring = Spring::new(10.0, config);
        spring.retarget(60.0, config);
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 60.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn long_frames_are_capped() {
        let config = SpringConfig::from_speed(2.0);
        let mut capped = Spring::new(0.0, config);
        capped.retarget(100.0, config);
        let mut reference = capped.clone();

        capped.step(10.0);
        reference.step(MAX_FRAME_SECONDS);
        assert_eq!(capped, reference);
    }
}
