//! Camera facing helpers and follow-camera settings.
//!
//! Anything that can report where it is and where it looks implements
//! [`ViewPoint`], so billboards do not care which camera kind is active.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_FPS;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const PERSPECTIVE_FOV_DEGREES: f32 = 35.0;
pub const PERSPECTIVE_OFFSET: Vec3 = Vec3::new(0.0, 15.0, 30.0);
pub const ORTHOGRAPHIC_FRUSTUM_SIZE: f32 = 25.0;
pub const ORTHOGRAPHIC_OFFSET: Vec3 = Vec3::new(0.0, 10.0, 15.0);

/// Wheel zoom limits, as camera distance from the followed target.
pub const MIN_ZOOM_DISTANCE: f32 = 10.0;
pub const MAX_ZOOM_DISTANCE: f32 = 50.0;
/// Fraction of the remaining zoom gap closed per 60 Hz frame.
pub const ZOOM_DAMPING: f32 = 0.05;
/// Distance multiplier for one wheel line scrolled toward the screen.
pub const ZOOM_STEP: f32 = 0.95;

/// How far palms turn toward the camera, 0 never and 1 fully.
pub const PALM_FACING_BLEND: f32 = 0.3;

pub trait ViewPoint {
    fn world_position(&self) -> Vec3;
    fn world_direction(&self) -> Vec3;
}

impl ViewPoint for Transform {
    fn world_position(&self) -> Vec3 {
        self.translation
    }

    fn world_direction(&self) -> Vec3 {
        self.forward().as_vec3()
    }
}

impl ViewPoint for GlobalTransform {
    fn world_position(&self) -> Vec3 {
        self.translation()
    }

    fn world_direction(&self) -> Vec3 {
        self.forward().as_vec3()
    }
}

/// Yaw that turns a +Z facing quad toward the viewer while staying upright.
pub fn billboard_yaw(view: &impl ViewPoint) -> f32 {
    let forward = view.world_direction();
    (-forward.x).atan2(-forward.z)
}

/// Partial turn toward the camera for decorations that should keep most of
/// their authored orientation.
pub fn palm_yaw(view: &impl ViewPoint, position: Vec3) -> f32 {
    let to_camera = (view.world_position() - position).with_y(0.0);
    if to_camera.length_squared() == 0.0 {
        return 0.0;
    }
    to_camera.x.atan2(to_camera.z) * PALM_FACING_BLEND
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    Perspective,
    #[default]
    Orthographic,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Perspective => CameraMode::Orthographic,
            CameraMode::Orthographic => CameraMode::Perspective,
        }
    }

    pub fn follow_offset(self) -> Vec3 {
        match self {
            CameraMode::Perspective => PERSPECTIVE_OFFSET,
            CameraMode::Orthographic => ORTHOGRAPHIC_OFFSET,
        }
    }

    /// Camera placement that keeps `target` in view.
    pub fn follow_transform(self, target: Vec3) -> Transform {
        Transform::from_translation(target + self.follow_offset()).looking_at(target, Vec3::Y)
    }

    /// Like [`CameraMode::follow_transform`], with the perspective offset
    /// stretched to the zoom distance. Orthographic zoom changes the
    /// viewport instead, see [`CameraZoom::viewport_height`].
    pub fn zoomed_follow_transform(self, target: Vec3, zoom: &CameraZoom) -> Transform {
        let offset = match self {
            CameraMode::Perspective => self.follow_offset().normalize() * zoom.distance(),
            CameraMode::Orthographic => self.follow_offset(),
        };
        Transform::from_translation(target + offset).looking_at(target, Vec3::Y)
    }
}

/// Damped wheel zoom. Only the target jumps on scroll; the distance eases
/// toward it every frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraZoom {
    distance: f32,
    target: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self::for_mode(CameraMode::default())
    }
}

impl CameraZoom {
    /// Unzoomed state for `mode`: the length of its follow offset.
    pub fn for_mode(mode: CameraMode) -> Self {
        let distance = mode
            .follow_offset()
            .length()
            .clamp(MIN_ZOOM_DISTANCE, MAX_ZOOM_DISTANCE);
        Self {
            distance,
            target: distance,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Positive `lines` zoom in.
    pub fn scroll(&mut self, lines: f32) {
        self.target = (self.target * ZOOM_STEP.powf(lines))
            .clamp(MIN_ZOOM_DISTANCE, MAX_ZOOM_DISTANCE);
    }

    pub fn update(&mut self, delta: f32) {
        let blend = 1.0 - (1.0 - ZOOM_DAMPING).powf(delta * REFERENCE_FPS);
        self.distance += (self.target - self.distance) * blend.clamp(0.0, 1.0);
        if (self.target - self.distance).abs() < 1e-3 {
            self.distance = self.target;
        }
    }

    /// Zoom relative to the mode's unzoomed distance.
    pub fn scale(&self, mode: CameraMode) -> f32 {
        self.distance / mode.follow_offset().length()
    }

    pub fn viewport_height(&self, mode: CameraMode) -> f32 {
        ORTHOGRAPHIC_FRUSTUM_SIZE * self.scale(mode)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn billboard_faces_back_along_view_direction() {
        let camera = Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let facing = Quat::from_rotation_y(billboard_yaw(&camera)) * Vec3::Z;
        let back = -camera.world_direction().with_y(0.0).normalize();
        assert!(facing.abs_diff_eq(back, 1e-5));
    }

    #[test]
    fn global_and_local_transforms_agree() {
        let transform =
            Transform::from_xyz(3.0, 2.0, 1.0).looking_at(Vec3::new(-4.0, 0.0, 0.0), Vec3::Y);
        let global = GlobalTransform::from(transform);
        assert!((billboard_yaw(&transform) - billboard_yaw(&global)).abs() < 1e-5);
        assert!(global.world_position().abs_diff_eq(transform.world_position(), 1e-5));
    }

    #[test]
    fn palms_turn_only_partly() {
        let camera = Transform::from_xyz(10.0, 4.0, 0.0);
        let yaw = palm_yaw(&camera, Vec3::ZERO);
        assert!((yaw - FRAC_PI_2 * PALM_FACING_BLEND).abs() < 1e-5);

        let above = Transform::from_xyz(0.0, 10.0, 0.0);
        assert_eq!(palm_yaw(&above, Vec3::ZERO), 0.0);
    }

    #[test]
    fn camera_mode_toggles_offsets() {
        let mode = CameraMode::default();
        assert_eq!(mode, CameraMode::Orthographic);
        assert_eq!(mode.toggled().follow_offset(), PERSPECTIVE_OFFSET);
        assert_eq!(mode.toggled().toggled(), mode);

        let target = Vec3::new(2.0, 1.0, -3.0);
        let transform = CameraMode::Perspective.follow_transform(target);
        assert_eq!(transform.translation, target + PERSPECTIVE_OFFSET);
        let to_target = (target - transform.translation).normalize();
        assert!(transform.forward().as_vec3().abs_diff_eq(to_target, 1e-5));
    }

    #[test]
    fn wheel_zoom_is_clamped() {
        let mut zoom = CameraZoom::for_mode(CameraMode::Perspective);
        zoom.scroll(200.0);
        assert_eq!(zoom.target(), MIN_ZOOM_DISTANCE);
        zoom.scroll(-500.0);
        assert_eq!(zoom.target(), MAX_ZOOM_DISTANCE);

        for _ in 0..600 {
            zoom.update(1.0 / 60.0);
            assert!(zoom.distance() <= MAX_ZOOM_DISTANCE);
        }
        assert_eq!(zoom.distance(), MAX_ZOOM_DISTANCE);
    }

    #[test]
    fn zoom_eases_toward_target() {
        let mut zoom = CameraZoom::for_mode(CameraMode::Perspective);
        let start = zoom.distance();
        zoom.scroll(1.0);
        zoom.update(1.0 / 60.0);
        let expected = start + (start * ZOOM_STEP - start) * ZOOM_DAMPING;
        assert!((zoom.distance() - expected).abs() < 1e-4);
    }

    #[test]
    fn zoom_moves_perspective_camera_and_scales_orthographic_view() {
        let mut zoom = CameraZoom::for_mode(CameraMode::Perspective);
        assert!((zoom.scale(CameraMode::Perspective) - 1.0).abs() < 1e-5);
        zoom.scroll(-100.0);
        for _ in 0..600 {
            zoom.update(1.0 / 60.0);
        }
        let transform = CameraMode::Perspective.zoomed_follow_transform(Vec3::ZERO, &zoom);
        assert!((transform.translation.length() - MAX_ZOOM_DISTANCE).abs() < 1e-3);

        let ortho = CameraZoom::for_mode(CameraMode::Orthographic);
        assert!(
            (ortho.viewport_height(CameraMode::Orthographic) - ORTHOGRAPHIC_FRUSTUM_SIZE).abs()
                < 1e-4
        );
        let fixed = CameraMode::Orthographic.zoomed_follow_transform(Vec3::ZERO, &ortho);
        assert_eq!(fixed.translation, ORTHOGRAPHIC_OFFSET);
    }
}
