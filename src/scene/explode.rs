use glam::Vec3;

/// Per-layer scaling constants for the exploded view.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    /// Signed offset along the explode axis at progress 1.
    pub axis_multiplier: f64,
    /// Signed tilt (radians) at progress 1.
    pub tilt_multiplier: f64,
}

/// Derived state of one layer at a given progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ExplodeState {
    /// Offset along the explode axis.
    pub offset: f64,
    /// Tilt angle in radians.
    pub tilt: f64,
}

/// Scale a layer's offsets by progress. Pure and linear: at progress 0 the
/// layer sits assembled, at progress 1 it reaches its configured distance.
pub fn compose_layer(progress: f64, config: &LayerConfig) -> ExplodeState {
    ExplodeState {
        offset: progress * config.axis_multiplier,
        tilt: progress * config.tilt_multiplier,
    }
}

/// One mesh layer of the device model.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DeviceLayer {
    /// Layer name, front to back ("pcb", "display", ...).
    pub name: &'static str,
    /// Resting position of the layer in the assembled device.
    pub base_position: Vec3,
    /// Signed travel along +Z at full explode.
    pub axis_multiplier: f32,
    /// Per-axis tilt weights, multiplied by the rig's tilt angle.
    pub tilt_weights: Vec3,
    /// Uniform mesh scale.
    pub scale: f32,
}

/// Position and rotation of one layer at a given progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerPose {
    /// Layer name.
    pub name: &'static str,
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians (XYZ order).
    pub rotation: Vec3,
    /// Uniform mesh scale.
    pub scale: f32,
}

/// A set of layered meshes that visually disassemble along +/-Z as a
/// single progress value rises.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExplodedRig {
    layers: Vec<DeviceLayer>,
    /// Tilt angle in radians at full explode, shared by all layers before
    /// per-layer weights.
    tilt_base: f32,
}

impl ExplodedRig {
    /// Build a rig from explicit layers.
    pub fn new(layers: Vec<DeviceLayer>, tilt_base: f32) -> Self {
        Self { layers, tilt_base }
    }

    /// The full five-layer device, front (PCB) to back (case).
    ///
    /// Multipliers match the shipped model: at full explode the PCB leads
    /// by 2.5 units while the back cover recedes by 2.
    pub fn device() -> Self {
        Self::new(
            vec![
                DeviceLayer {
                    name: "pcb",
                    base_position: Vec3::ZERO,
                    axis_multiplier: 2.5,
                    tilt_weights: Vec3::new(0.8, 0.0, 0.3),
                    scale: 0.85,
                },
                DeviceLayer {
                    name: "display",
                    base_position: Vec3::new(0.0, 0.45, 0.0),
                    axis_multiplier: 1.5,
                    tilt_weights: Vec3::new(0.5, 0.0, 0.0),
                    scale: 1.0,
                },
                DeviceLayer {
                    name: "frame",
                    base_position: Vec3::ZERO,
                    axis_multiplier: 0.5,
                    tilt_weights: Vec3::new(0.2, 0.0, 0.0),
                    scale: 1.0,
                },
                DeviceLayer {
                    name: "battery",
                    base_position: Vec3::new(0.0, 0.1, 0.0),
                    axis_multiplier: -0.8,
                    tilt_weights: Vec3::new(-0.3, 0.0, 0.0),
                    scale: 0.9,
                },
                DeviceLayer {
                    name: "back_cover",
                    base_position: Vec3::ZERO,
                    axis_multiplier: -2.0,
                    tilt_weights: Vec3::new(-0.6, 0.0, 0.0),
                    scale: 1.0,
                },
            ],
            0.15,
        )
    }

    /// The simplified two-layer scene: stationary back case, battery
    /// sliding out from just inside the case (z 0.1) to z 1.6 with a small
    /// X/Y tilt.
    pub fn back_case() -> Self {
        Self::new(
            vec![
                DeviceLayer {
                    name: "back_case",
                    base_position: Vec3::ZERO,
                    axis_multiplier: 0.0,
                    tilt_weights: Vec3::ZERO,
                    scale: 1.0,
                },
                DeviceLayer {
                    name: "battery",
                    base_position: Vec3::new(0.0, 0.0, 0.1),
                    axis_multiplier: 1.5,
                    tilt_weights: Vec3::new(0.1, 0.15, 0.0),
                    scale: 0.95,
                },
            ],
            1.0,
        )
    }

    /// The rig's layers in front-to-back order.
    pub fn layers(&self) -> &[DeviceLayer] {
        &self.layers
    }

    /// Pose every layer at `progress` (caller clamps to `[0, 1]`).
    ///
    /// At progress 0 all layers coincide with their assembled positions;
    /// any finite progress produces finite poses.
    pub fn pose_at(&self, progress: f64) -> Vec<LayerPose> {
        let p = progress as f32;
        let tilt_angle = p * self.tilt_base;
        self.layers
            .iter()
            .map(|layer| LayerPose {
                name: layer.name,
                position: layer.base_position + Vec3::Z * (p * layer.axis_multiplier),
                rotation: layer.tilt_weights * tilt_angle,
                scale: layer.scale,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/explode.rs"]
mod tests;
