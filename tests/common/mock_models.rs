//! Mock radial ODE models with known analytical solutions

use taper_rs::physics::RadialOde;

/// dR/dx = -k·R, R(x₀) = r0  →  R(x) = r0·exp(-k·(x − x₀))
pub struct ExponentialDecay {
    pub r0: f64,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(r0: f64, decay_rate: f64) -> Self {
        Self { r0, decay_rate }
    }

    /// Analytical solution, measured from the start of integration
    pub fn exact(&self, distance: f64) -> f64 {
        self.r0 * (-self.decay_rate * distance).exp()
    }
}

impl RadialOde for ExponentialDecay {
    fn derivative(&self, _x: f64, radius: f64) -> f64 {
        -self.decay_rate * radius
    }

    fn initial_radius(&self) -> f64 {
        self.r0
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

/// dR/dx = c  →  R(x) = r0 + c·(x − x₀)
pub struct ConstantGrowth {
    pub r0: f64,
    pub slope: f64,
}

impl ConstantGrowth {
    pub fn new(r0: f64, slope: f64) -> Self {
        Self { r0, slope }
    }
}

impl RadialOde for ConstantGrowth {
    fn derivative(&self, _x: f64, _radius: f64) -> f64 {
        self.slope
    }

    fn initial_radius(&self) -> f64 {
        self.r0
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}
