//! # Camera Implementation
//!
//! A first-person camera reduced to what editing needs: a position, a yaw and a pitch, and
//! the view ray they define.

use cgmath::*;
use std::f32::consts::FRAC_PI_2;

use crate::engine_state::voxels::raycast::Ray;

/// Safe limit for pitch to prevent gimbal lock
const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;

/// Represents a first-person camera in 3D space.
///
/// A yaw of zero looks along +X; positive yaw turns towards +Z. Pitch is clamped just short
/// of straight up and straight down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis) in radians
    pub yaw: Rad<f32>,
    /// Vertical rotation (around X axis) in radians
    pub pitch: Rad<f32>,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// # Arguments
    /// * `position` - Initial position of the camera in world space
    /// * `yaw` - Initial yaw (horizontal rotation around Y axis)
    /// * `pitch` - Initial pitch, clamped to just under a quarter turn either way
    ///
    /// # Example
    /// ```rust
    /// use cgmath::{Deg, Point3};
    /// use voxel_core::Camera;
    ///
    /// let camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Deg(0.0), Deg(0.0));
    /// assert!((camera.view_vec().x - 1.0).abs() < 1e-6);
    /// ```
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        let mut camera = Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        };
        camera.clamp_pitch();
        camera
    }

    /// Gets the camera's forward direction vector.
    ///
    /// # Returns
    /// A normalized 3D vector representing the camera's forward direction
    pub fn view_vec(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        Vector3::new(pitch_cos * yaw_cos, pitch_sin, pitch_cos * yaw_sin).normalize()
    }

    /// Calculates the view matrix for this camera.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.view_vec(), Vector3::unit_y())
    }

    /// Turns the camera by the given angles, keeping pitch inside its limits.
    pub fn rotate<Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(&mut self, delta_yaw: Y, delta_pitch: P) {
        self.yaw += delta_yaw.into();
        self.pitch += delta_pitch.into();
        self.clamp_pitch();
    }

    /// Turns the camera to face `target`. Does nothing if `target` is the camera position.
    pub fn look_at(&mut self, target: Point3<f32>) {
        let to_target = target - self.position;
        if to_target.magnitude2() < 1e-8 {
            return;
        }
        let to_target = to_target.normalize();
        self.yaw = Rad(to_target.z.atan2(to_target.x));
        self.pitch = Rad(to_target.y.asin());
        self.clamp_pitch();
    }

    /// Moves the camera along its view vector.
    pub fn advance(&mut self, distance: f32) {
        self.position = self.position + self.view_vec() * distance;
    }

    /// The view ray, reaching `reach` units from the camera position.
    pub fn ray(&self, reach: f32) -> Ray {
        Ray::new(self.position, self.view_vec(), reach)
    }

    fn clamp_pitch(&mut self) {
        if self.pitch < -Rad(SAFE_FRAC_PI_2) {
            self.pitch = -Rad(SAFE_FRAC_PI_2);
        } else if self.pitch > Rad(SAFE_FRAC_PI_2) {
            self.pitch = Rad(SAFE_FRAC_PI_2);
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.0), Rad(0.0))
    }
}
