use std::path::Path;

use crate::manifest::ControllerManifest;
use crate::robot::GripperOptions;

/// Fold a gripper controllers document into `manifest`.
///
/// `add_gripper` selects `config/{robot_type}_gripper/`, `add_bio_gripper`
/// selects `config/bio_gripper/`; `add_gripper` wins when both are set.
/// "lite" arms carry their gripper in the base document, so the merge is
/// skipped for them regardless of the flags. A missing or malformed gripper
/// document degrades to "nothing to merge".
pub fn merge_gripper(
    manifest: &mut ControllerManifest,
    robot_type: &str,
    gripper: &GripperOptions,
    package_path: &Path,
    controllers_name: &str,
) {
    if robot_type == "lite" {
        return;
    }
    let subdir = if gripper.add_gripper {
        format!("{robot_type}_gripper")
    } else if gripper.add_bio_gripper {
        "bio_gripper".to_owned()
    } else {
        return;
    };
    let path = package_path.join("config").join(subdir).join(controllers_name);
    let gripper_manifest = ControllerManifest::load_or_empty(&path);
    for name in &gripper_manifest.controller_names {
        // Names with no matching spec are malformed; skip them.
        if let Some(spec) = gripper_manifest.controllers.get(name) {
            if !manifest.controller_names.contains(name) {
                manifest.controller_names.push(name.clone());
            }
            // The gripper document wins over a same-named base entry.
            manifest.controllers.insert(name.clone(), spec.clone());
        }
    }
}
