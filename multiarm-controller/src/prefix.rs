use crate::manifest::ControllerManifest;

/// Prepend `prefix` to every controller name and every joint those
/// controllers reference. No-op when the prefix or the manifest is empty.
///
/// Intended to run exactly once per manifest; entries listed in
/// `controller_names` that have no matching spec keep only the name rename.
pub fn apply_prefix(manifest: &mut ControllerManifest, prefix: &str) {
    if prefix.is_empty() || manifest.is_empty() {
        return;
    }
    // Snapshot the names so the mapping is never mutated under iteration.
    let names = manifest.controller_names.clone();
    for name in &names {
        if let Some(mut spec) = manifest.controllers.shift_remove(name) {
            if let Some(joints) = spec.joints.as_mut() {
                for joint in joints.iter_mut() {
                    *joint = format!("{prefix}{joint}");
                }
            }
            manifest.controllers.insert(format!("{prefix}{name}"), spec);
        }
    }
    for name in manifest.controller_names.iter_mut() {
        *name = format!("{prefix}{name}");
    }
}
