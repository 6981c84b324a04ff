//! Resource Class Table
//!
//! Maps each resource API to the SDK class that implements it.

/// One row of the resource class table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceClass {
    /// Resource API identifier, `<namespace>:<kind>:<name>`
    pub api: &'static str,
    /// Qualified path of the SDK class
    pub class: &'static str,
}

impl ResourceClass {
    pub const fn new(api: &'static str, class: &'static str) -> Self {
        Self { api, class }
    }
}

/// Resource APIs exposed in the manifest, in output order
pub const RESOURCE_CLASSES: &[ResourceClass] = &[
    ResourceClass::new("rdk:component:arm", "viam.components.arm.Arm"),
    ResourceClass::new("rdk:component:base", "viam.components.base.Base"),
    ResourceClass::new("rdk:component:board", "viam.components.board.Board"),
    ResourceClass::new("rdk:component:camera", "viam.components.camera.Camera"),
    ResourceClass::new("rdk:component:gantry", "viam.components.gantry.Gantry"),
    ResourceClass::new("rdk:component:gripper", "viam.components.gripper.Gripper"),
    ResourceClass::new("rdk:component:motor", "viam.components.motor.Motor"),
    ResourceClass::new("rdk:component:sensor", "viam.components.sensor.Sensor"),
    ResourceClass::new("rdk:component:servo", "viam.components.servo.Servo"),
    ResourceClass::new("rdk:service:vision", "viam.services.vision.VisionClient"),
    ResourceClass::new("rdk:service:slam", "viam.services.slam.SLAMClient"),
    ResourceClass::new("rdk:service:motion", "viam.services.motion.MotionClient"),
];
