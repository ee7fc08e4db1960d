//! Motion primitives: interpolation and damped springs
//!
//! A [`SpringValue`] is a continuous scalar pulled toward a target by a
//! damped spring; derived visuals map it through fixed [`Interpolation`]
//! ranges. The host's frame scheduler drives [`SpringValue::step`], so
//! animation never blocks application logic.

// =============================================================================
// Interpolation
// =============================================================================

/// Linear mapping from an input range to an output range
///
/// Values outside the input range extrapolate along the same line, matching
/// the behavior mobile animation systems default to, so an overshooting
/// spring keeps moving its derived transforms instead of pinning them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    input: (f64, f64),
    output: (f64, f64),
}

impl Interpolation {
    /// Create a mapping between two ranges
    ///
    /// The input range must not be degenerate.
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Map a value through the range pair
    pub fn map(&self, value: f64) -> f64 {
        let (i0, i1) = self.input;
        let (o0, o1) = self.output;
        debug_assert!(i0 != i1, "degenerate input range");
        o0 + (value - i0) / (i1 - i0) * (o1 - o0)
    }
}

// =============================================================================
// Spring
// =============================================================================

/// Integration substep in seconds. Large frame deltas are subdivided so the
/// explicit integrator stays stable.
const SUBSTEP: f64 = 0.001;

/// Frame deltas above this are clamped (a backgrounded app should not make
/// the spring explode on resume).
const MAX_FRAME_DELTA: f64 = 0.25;

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Pull toward the target, per unit of displacement
    pub tension: f64,
    /// Velocity damping
    pub friction: f64,
    /// Displacement below which the spring may come to rest
    pub rest_displacement: f64,
    /// Speed below which the spring may come to rest
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 50.0,
            friction: 5.0,
            rest_displacement: 1e-3,
            rest_speed: 1e-3,
        }
    }
}

/// A scalar animated by a damped spring
///
/// Once both rest thresholds are met the value snaps to the target exactly,
/// so a spring driven between 0 and 1 always rests at 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringValue {
    value: f64,
    velocity: f64,
    target: f64,
    settled: bool,
    config: SpringConfig,
}

impl SpringValue {
    /// Create a spring at rest at `value` with the default configuration
    pub fn new(value: f64) -> Self {
        Self::with_config(value, SpringConfig::default())
    }

    /// Create a spring at rest at `value` with a custom configuration
    pub fn with_config(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            settled: true,
            config,
        }
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current target
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the spring has come to rest at its target
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Retarget the spring, keeping the current value and velocity
    ///
    /// Retargeting mid-flight is continuous: no jump in value, momentum is
    /// carried into the new transition.
    pub fn spring_to(&mut self, target: f64) {
        self.target = target;
        self.settled = self.velocity == 0.0 && self.value == target;
    }

    /// Advance the simulation by `dt` seconds; returns whether the spring
    /// is now at rest
    pub fn step(&mut self, dt: f64) -> bool {
        if self.settled || dt <= 0.0 {
            return self.settled;
        }

        let mut remaining = dt.min(MAX_FRAME_DELTA);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let acceleration = self.config.tension * (self.target - self.value)
                - self.config.friction * self.velocity;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;

            if (self.target - self.value).abs() < self.config.rest_displacement
                && self.velocity.abs() < self.config.rest_speed
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
                break;
            }
        }

        self.settled
    }
}
