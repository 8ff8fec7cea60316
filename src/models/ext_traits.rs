use super::*;

/// Helper trait to get direction of movement based on camera transform
pub trait MovementDirection {
    fn movement_direction(&self, input: Vec2) -> Vec3;
}

impl MovementDirection for Transform {
    fn movement_direction(&self, input: Vec2) -> Vec3 {
        let forward = self.forward();
        let forward_flat = Vec3::new(forward.x, 0.0, forward.z);
        let right = forward_flat.cross(Vec3::Y).normalize();
        let direction = (right * input.x) + (forward_flat * input.y);
        direction.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_direction_ignores_camera_pitch() {
        // Looking down 45 degrees while pushing forward must still move on XZ.
        let transform = Transform::from_rotation(Quat::from_rotation_x(-0.78));
        let dir = transform.movement_direction(Vec2::Y);
        assert!(dir.y.abs() < 1e-6);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn strafe_is_perpendicular_to_forward() {
        let transform = Transform::from_rotation(Quat::from_rotation_y(0.6));
        let fwd = transform.movement_direction(Vec2::Y);
        let right = transform.movement_direction(Vec2::X);
        assert!(fwd.dot(right).abs() < 1e-5);
    }
}
