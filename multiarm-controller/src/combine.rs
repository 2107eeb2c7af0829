use std::path::PathBuf;

use crate::error::ManifestError;
use crate::gripper::merge_gripper;
use crate::manifest::ControllerManifest;
use crate::prefix::apply_prefix;
use crate::robot::RobotConfig;

/// Append `.yaml` unless the name already carries it.
pub fn normalize_controllers_name(name: &str) -> String {
    if name.ends_with(".yaml") {
        name.to_owned()
    } else {
        format!("{name}.yaml")
    }
}

/// Where the per-robot controllers documents live.
#[derive(Debug, Clone)]
pub struct CombineSettings {
    pub package_path: PathBuf,
    pub controllers_name: String,
    /// Explicit document path taking precedence over the derived
    /// `config/{robot}/{controllers_name}` location, for every robot.
    pub file_path: Option<PathBuf>,
}

impl CombineSettings {
    pub fn new(package_path: impl Into<PathBuf>, controllers_name: &str) -> CombineSettings {
        CombineSettings {
            package_path: package_path.into(),
            controllers_name: normalize_controllers_name(controllers_name),
            file_path: None,
        }
    }

    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> CombineSettings {
        self.file_path = Some(file_path.into());
        self
    }

    fn manifest_path(&self, robot_name: &str) -> PathBuf {
        match &self.file_path {
            Some(path) => path.clone(),
            None => self
                .package_path
                .join("config")
                .join(robot_name)
                .join(&self.controllers_name),
        }
    }
}

/// Run the load / gripper-merge / prefix pipeline for every robot in order
/// and concatenate the results into one manifest.
///
/// `controller_names` ends up in robot order, each robot's block in its
/// document order. A post-prefix controller name that is already taken by an
/// earlier robot is reported as [`ManifestError::PrefixCollision`] rather
/// than silently overwriting its entry.
pub fn combine(
    robots: &[RobotConfig],
    settings: &CombineSettings,
) -> Result<ControllerManifest, ManifestError> {
    let mut result = ControllerManifest::new();
    for robot in robots {
        let manifest = single_robot_manifest(robot, settings);
        for name in &manifest.controller_names {
            if result.controller_names.contains(name) {
                return Err(ManifestError::PrefixCollision(name.clone()));
            }
        }
        result.controller_names.extend(manifest.controller_names);
        for (name, spec) in manifest.controllers {
            result.controllers.insert(name, spec);
        }
    }
    Ok(result)
}

fn single_robot_manifest(robot: &RobotConfig, settings: &CombineSettings) -> ControllerManifest {
    let path = settings.manifest_path(&robot.identity.display_name());
    let mut manifest = ControllerManifest::load_or_empty(&path);
    merge_gripper(
        &mut manifest,
        &robot.identity.robot_type,
        &robot.gripper,
        &settings.package_path,
        &settings.controllers_name,
    );
    apply_prefix(&mut manifest, &robot.identity.prefix);
    manifest
}
