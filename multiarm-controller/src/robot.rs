/// Identity of one arm in the rig: which controllers file it loads and which
/// namespace prefix its controllers get.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotIdentity {
    pub robot_type: String,
    pub dof: u8,
    pub prefix: String,
}

impl RobotIdentity {
    pub fn new(
        robot_type: impl Into<String>,
        dof: u8,
        prefix: impl Into<String>,
    ) -> RobotIdentity {
        RobotIdentity {
            robot_type: robot_type.into(),
            dof,
            prefix: prefix.into(),
        }
    }

    /// Name of the config subdirectory holding this arm's controllers file.
    ///
    /// "xarm" variants are distinguished by DOF ("xarm6", "xarm7"), "lite" is
    /// always 6-DOF, anything else ("uf850", ...) is used as-is.
    pub fn display_name(&self) -> String {
        match self.robot_type.as_str() {
            "xarm" => format!("{}{}", self.robot_type, self.dof),
            "lite" => format!("{}6", self.robot_type),
            _ => self.robot_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GripperOptions {
    pub add_gripper: bool,
    pub add_bio_gripper: bool,
}

/// Per-robot input to the combiner.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotConfig {
    pub identity: RobotIdentity,
    pub gripper: GripperOptions,
}

impl RobotConfig {
    pub fn new(identity: RobotIdentity, gripper: GripperOptions) -> RobotConfig {
        RobotConfig { identity, gripper }
    }
}
