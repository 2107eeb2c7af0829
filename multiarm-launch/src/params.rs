use multiarm_controller::robot::{GripperOptions, RobotConfig, RobotIdentity};

pub const DEFAULT_ROBOT_TYPE: &str = "xarm";
pub const DEFAULT_DOF: u8 = 7;

/// Default controller prefixes by rig size: a single arm runs unprefixed,
/// dual and triple rigs get side tags.
pub fn default_prefixes(robot_count: usize) -> &'static [&'static str] {
    match robot_count {
        0 | 1 => &[""],
        2 => &["L_", "R_"],
        _ => &["L_", "M_", "R_"],
    }
}

/// Launch arguments carry booleans as text; only a case-insensitive "true"
/// counts as set.
pub fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Per-robot overrides of the shared launch parameters. Unset fields fall
/// back to the shared value (or the arity-dependent default prefix).
#[derive(Debug, Clone, Default)]
pub struct RobotOverrides {
    pub robot_type: Option<String>,
    pub dof: Option<u8>,
    pub prefix: Option<String>,
    pub add_gripper: Option<String>,
    pub add_bio_gripper: Option<String>,
}

/// The shared launch parameters plus one override set per robot in the rig.
#[derive(Debug, Clone)]
pub struct LaunchParams {
    pub robot_type: String,
    pub dof: u8,
    pub add_gripper: String,
    pub add_bio_gripper: String,
    pub robots: Vec<RobotOverrides>,
}

impl LaunchParams {
    pub fn new(robot_count: usize) -> LaunchParams {
        LaunchParams {
            robot_type: DEFAULT_ROBOT_TYPE.to_owned(),
            dof: DEFAULT_DOF,
            add_gripper: "false".to_owned(),
            add_bio_gripper: "false".to_owned(),
            robots: vec![RobotOverrides::default(); robot_count],
        }
    }

    /// Resolve every fallback chain once, up front, into plain per-robot
    /// configurations for the combiner.
    pub fn resolve(&self) -> Vec<RobotConfig> {
        let prefixes = default_prefixes(self.robots.len());
        self.robots
            .iter()
            .enumerate()
            .map(|(index, overrides)| {
                let robot_type = overrides
                    .robot_type
                    .clone()
                    .unwrap_or_else(|| self.robot_type.clone());
                let dof = overrides.dof.unwrap_or(self.dof);
                let prefix = overrides.prefix.clone().unwrap_or_else(|| {
                    prefixes.get(index).copied().unwrap_or_default().to_owned()
                });
                let add_gripper =
                    parse_bool(overrides.add_gripper.as_deref().unwrap_or(&self.add_gripper));
                let add_bio_gripper = parse_bool(
                    overrides
                        .add_bio_gripper
                        .as_deref()
                        .unwrap_or(&self.add_bio_gripper),
                );
                RobotConfig::new(
                    RobotIdentity::new(robot_type, dof, prefix),
                    GripperOptions {
                        add_gripper,
                        add_bio_gripper,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textual_booleans_are_case_insensitive() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn prefix_defaults_depend_on_arity() {
        assert_eq!(default_prefixes(1), &[""]);
        assert_eq!(default_prefixes(2), &["L_", "R_"]);
        assert_eq!(default_prefixes(3), &["L_", "M_", "R_"]);
    }

    #[test]
    fn shared_values_propagate_to_every_robot() {
        let mut params = LaunchParams::new(2);
        params.robot_type = "lite".to_owned();
        params.dof = 6;
        params.add_gripper = "true".to_owned();
        let robots = params.resolve();
        assert_eq!(robots.len(), 2);
        for robot in &robots {
            assert_eq!(robot.identity.robot_type, "lite");
            assert_eq!(robot.identity.dof, 6);
            assert!(robot.gripper.add_gripper);
        }
        assert_eq!(robots[0].identity.prefix, "L_");
        assert_eq!(robots[1].identity.prefix, "R_");
    }

    #[test]
    fn overrides_beat_shared_values() {
        let mut params = LaunchParams::new(3);
        params.robots[1].robot_type = Some("uf850".to_owned());
        params.robots[1].dof = Some(6);
        params.robots[2].prefix = Some("far_".to_owned());
        params.robots[2].add_bio_gripper = Some("True".to_owned());
        let robots = params.resolve();
        assert_eq!(robots[0].identity.robot_type, "xarm");
        assert_eq!(robots[0].identity.dof, DEFAULT_DOF);
        assert_eq!(robots[0].identity.prefix, "L_");
        assert_eq!(robots[1].identity.robot_type, "uf850");
        assert_eq!(robots[1].identity.dof, 6);
        assert_eq!(robots[1].identity.prefix, "M_");
        assert_eq!(robots[2].identity.prefix, "far_");
        assert!(robots[2].gripper.add_bio_gripper);
    }

    #[test]
    fn single_robot_runs_unprefixed() {
        let params = LaunchParams::new(1);
        let robots = params.resolve();
        assert_eq!(robots[0].identity.prefix, "");
    }
}
