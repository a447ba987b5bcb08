//! Per-frame scene parameters
//!
//! `SceneParams` is a small `Copy` value. Input handling never mutates it in
//! place; every adjustment returns a new value that the next frame uses.

use serde::{Serialize, Deserialize};

/// Coordinate axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A single adjustable parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Translation(Axis),
    /// Rotation in degrees about an axis
    Rotation(Axis),
    Scale(Axis),
    /// All three scale factors at once
    UniformScale,
    /// Vertical field of view in degrees
    FieldOfView,
    /// Orbit camera angle in degrees
    CameraAngle,
}

/// Scale factor range
pub const SCALE_RANGE: (f32, f32) = (-5.0, 5.0);

/// Field of view range in degrees
pub const FOV_RANGE: (f32, f32) = (1.0, 179.0);

/// Most instances an orbit ring may hold
pub const MAX_INSTANCES: u32 = 1024;

/// Scalar inputs for one frame of a demo
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneParams {
    /// Translation in model units (pixels for the orthographic demos)
    pub translation: [f32; 3],
    /// Rotation about each axis in degrees
    pub rotation_deg: [f32; 3],
    pub scale: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Orbit camera angle in degrees
    pub camera_angle_deg: f32,
    /// Radius of the instance ring for the orbit demos
    pub orbit_radius: f32,
    /// Number of instances on the ring
    pub instance_count: u32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_deg: [0.0; 3],
            scale: [1.0; 3],
            fov_deg: 60.0,
            camera_angle_deg: 0.0,
            orbit_radius: 200.0,
            instance_count: 5,
            near: 1.0,
            far: 2000.0,
        }
    }
}

impl SceneParams {
    pub fn with_translation(mut self, axis: Axis, value: f32) -> Self {
        self.translation[axis.index()] = value;
        self
    }

    /// Set a rotation in degrees, wrapped into `[0, 360)`
    pub fn with_rotation(mut self, axis: Axis, degrees: f32) -> Self {
        self.rotation_deg[axis.index()] = wrap_degrees(degrees);
        self
    }

    /// Set a scale factor, clamped to [`SCALE_RANGE`]
    pub fn with_scale(mut self, axis: Axis, value: f32) -> Self {
        self.scale[axis.index()] = value.clamp(SCALE_RANGE.0, SCALE_RANGE.1);
        self
    }

    /// Set the field of view in degrees, clamped to [`FOV_RANGE`]
    pub fn with_fov(mut self, degrees: f32) -> Self {
        self.fov_deg = degrees.clamp(FOV_RANGE.0, FOV_RANGE.1);
        self
    }

    /// Set the orbit camera angle in degrees, wrapped into `[0, 360)`
    pub fn with_camera_angle(mut self, degrees: f32) -> Self {
        self.camera_angle_deg = wrap_degrees(degrees);
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Set the ring radius and instance count, capped at [`MAX_INSTANCES`]
    pub fn with_orbit(mut self, radius: f32, instance_count: u32) -> Self {
        self.orbit_radius = radius;
        self.instance_count = instance_count.min(MAX_INSTANCES);
        self
    }

    /// Current value of a parameter
    pub fn get(&self, kind: ParamKind) -> f32 {
        match kind {
            ParamKind::Translation(axis) => self.translation[axis.index()],
            ParamKind::Rotation(axis) => self.rotation_deg[axis.index()],
            ParamKind::Scale(axis) => self.scale[axis.index()],
            ParamKind::UniformScale => self.scale[0],
            ParamKind::FieldOfView => self.fov_deg,
            ParamKind::CameraAngle => self.camera_angle_deg,
        }
    }

    /// Return a copy with `delta` added to one parameter (ranges still apply)
    pub fn adjusted(self, kind: ParamKind, delta: f32) -> Self {
        match kind {
            ParamKind::Translation(axis) => {
                self.with_translation(axis, self.translation[axis.index()] + delta)
            }
            ParamKind::Rotation(axis) => {
                self.with_rotation(axis, self.rotation_deg[axis.index()] + delta)
            }
            ParamKind::Scale(axis) => self.with_scale(axis, self.scale[axis.index()] + delta),
            ParamKind::UniformScale => Axis::ALL
                .iter()
                .fold(self, |p, &axis| p.with_scale(axis, p.scale[axis.index()] + delta)),
            ParamKind::FieldOfView => self.with_fov(self.fov_deg + delta),
            ParamKind::CameraAngle => self.with_camera_angle(self.camera_angle_deg + delta),
        }
    }

    /// True if every scalar is finite
    pub fn is_finite(&self) -> bool {
        self.translation
            .iter()
            .chain(self.rotation_deg.iter())
            .chain(self.scale.iter())
            .chain([self.fov_deg, self.camera_angle_deg, self.orbit_radius, self.near, self.far].iter())
            .all(|v| v.is_finite())
    }
}

fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
