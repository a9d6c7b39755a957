use glam::{Affine3A, Mat4, Quat, Vec3};

/// TRS transform of a movable object, with matrix caching and dirty checking.
///
/// The renderer only ever reads the cached world matrix; the locomotion
/// controller mutates `position` / `rotation` and refreshes the cache through
/// [`Transform::update_matrix_world`] after moving the character.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    local_matrix: Affine3A,
    world_matrix: Affine3A,

    // Shadow state for dirty checking
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Recomputes the local matrix if position/rotation/scale changed.
    /// Returns whether a recompute happened.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix =
                Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position);

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Refreshes the cached world matrix from the current TRS state.
    ///
    /// For a root-level character node the world matrix equals the local one;
    /// callers invoke this after every position/orientation mutation so the
    /// renderer sees a consistent transform.
    pub fn update_matrix_world(&mut self) {
        if self.update_local_matrix() {
            self.world_matrix = self.local_matrix;
        }
    }

    /// Rotates toward `target` by at most `max_angle` radians.
    ///
    /// Reaches `target` exactly once the remaining angle falls within the
    /// step, so repeated calls converge instead of oscillating.
    pub fn rotate_towards(&mut self, target: Quat, max_angle: f32) {
        if max_angle <= 0.0 {
            return;
        }
        let angle = self.rotation.angle_between(target);
        if angle <= f32::EPSILON {
            self.rotation = target;
            return;
        }
        let t = (max_angle / angle).min(1.0);
        self.rotation = self.rotation.slerp(target, t);
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix as a `Mat4`, the form renderers upload.
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }
}
