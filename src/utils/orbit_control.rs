use glam::Vec3;

/// Follow camera rig in spherical (orbit) form.
///
/// The camera's position is derived from the orbit target (`center`) plus a
/// spherical offset (`radius`, `theta`, `phi`). Following the character only
/// moves the center, so the position-minus-target offset is untouched across
/// frames unless the user orbits or zooms. The follow invariant holds
/// exactly, not approximately.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Orbit target.
    pub center: Vec3,
    /// Distance from the target.
    pub radius: f32,
    /// Azimuthal angle around the world up-axis.
    pub theta: f32,
    /// Polar angle from the up-axis, clamped away from the poles.
    pub phi: f32,

    pub min_distance: f32,
    pub max_distance: f32,
}

const POLE_EPS: f32 = 0.0001;

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,
            min_distance: 1.0,
            max_distance: 1000.0,
        }
    }

    /// Builds a rig looking at `center` from `position`.
    #[must_use]
    pub fn from_position(center: Vec3, position: Vec3) -> Self {
        let offset = position - center;
        let radius = offset.length().max(POLE_EPS);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            center,
            radius,
            theta,
            phi: phi.clamp(POLE_EPS, std::f32::consts::PI - POLE_EPS),
            min_distance: 1.0,
            max_distance: 1000.0,
        }
    }

    #[must_use]
    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self.radius = self.radius.clamp(min, max);
        self
    }

    /// The camera's horizontal orbit angle around the target.
    #[inline]
    #[must_use]
    pub fn azimuthal_angle(&self) -> f32 {
        self.theta
    }

    /// Camera offset from the target, a pure function of the spherical state.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        let cos_phi = self.phi.cos();
        let sin_theta = self.theta.sin();
        let cos_theta = self.theta.cos();
        Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }

    /// Camera world position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.center + self.offset()
    }

    /// User orbit: applies angular deltas, keeping phi off the poles.
    pub fn orbit(&mut self, delta_theta: f32, delta_phi: f32) {
        self.theta += delta_theta;
        self.phi = (self.phi + delta_phi).clamp(POLE_EPS, std::f32::consts::PI - POLE_EPS);
    }

    /// User zoom: scales the radius within the distance limits.
    pub fn zoom(&mut self, scale: f32) {
        if scale > 0.0 {
            self.radius = (self.radius * scale).clamp(self.min_distance, self.max_distance);
        }
    }

    /// Re-targets the rig onto `target` without disturbing the offset.
    pub fn follow(&mut self, target: Vec3) {
        self.center = target;
    }
}
