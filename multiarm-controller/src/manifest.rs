use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fs, path::Path};

use crate::error::ManifestError;

pub const CONTROLLER_NAMES_KEY: &str = "controller_names";

/// A single controller entry from a controllers document.
///
/// Only `joints` is interpreted; every other field is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ControllerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joints: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// The merged controllers document handed to the controller manager.
///
/// `controller_names` drives spawn order downstream, so insertion order of
/// both the name list and the name-to-spec mapping is significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControllerManifest {
    pub controller_names: Vec<String>,
    pub controllers: IndexMap<String, ControllerSpec>,
}

impl ControllerManifest {
    pub fn new() -> ControllerManifest {
        ControllerManifest::default()
    }

    pub fn is_empty(&self) -> bool {
        self.controller_names.is_empty() && self.controllers.is_empty()
    }

    pub fn from_value(value: serde_yaml::Value) -> Result<ControllerManifest, ManifestError> {
        match value {
            serde_yaml::Value::Null => Ok(ControllerManifest::default()),
            serde_yaml::Value::Mapping(mapping) => {
                let mut manifest = ControllerManifest::default();
                for (key, value) in mapping {
                    let key = key
                        .as_str()
                        .ok_or(ManifestError::NonStringKey)?
                        .to_owned();
                    if key == CONTROLLER_NAMES_KEY {
                        manifest.controller_names = serde_yaml::from_value(value)?;
                    } else {
                        manifest.controllers.insert(key, serde_yaml::from_value(value)?);
                    }
                }
                Ok(manifest)
            }
            _ => Err(ManifestError::NotAMapping),
        }
    }

    pub fn parse_yaml(text: &str) -> Result<ControllerManifest, ManifestError> {
        if text.trim().is_empty() {
            return Ok(ControllerManifest::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        ControllerManifest::from_value(value)
    }

    pub fn parse_json(text: &str) -> Result<ControllerManifest, ManifestError> {
        let manifest: ControllerManifest = serde_json::from_str(text)?;
        Ok(manifest)
    }

    pub fn serialize_to_yaml(&self) -> Result<String, ManifestError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    pub fn serialize_to_json(&self) -> Result<String, ManifestError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    pub fn save_yaml(&self, path: &Path) -> Result<(), ManifestError> {
        fs::write(path, self.serialize_to_yaml()?)?;
        Ok(())
    }

    pub fn load_yaml(path: &Path) -> Result<ControllerManifest, ManifestError> {
        let text = fs::read_to_string(path)?;
        ControllerManifest::parse_yaml(&text)
    }

    /// Lenient loader used by the merge pipeline: a missing, unreadable or
    /// malformed document degrades to an empty manifest instead of an error.
    pub fn load_or_empty(path: &Path) -> ControllerManifest {
        ControllerManifest::load_yaml(path).unwrap_or_default()
    }
}

impl Serialize for ControllerManifest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.controllers.len() + 1))?;
        map.serialize_entry(CONTROLLER_NAMES_KEY, &self.controller_names)?;
        for (name, spec) in &self.controllers {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ControllerManifest {
    fn deserialize<D>(deserializer: D) -> Result<ControllerManifest, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        ControllerManifest::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_YAML: &str = "\
controller_names:
  - arm_controller
  - joint_state_broadcaster
arm_controller:
  type: joint_trajectory_controller/JointTrajectoryController
  joints:
    - joint1
    - joint2
joint_state_broadcaster:
  type: joint_state_broadcaster/JointStateBroadcaster
";

    #[test]
    fn parse_from_yaml() {
        let manifest = ControllerManifest::parse_yaml(BASE_YAML).unwrap();
        assert_eq!(
            manifest.controller_names,
            vec!["arm_controller", "joint_state_broadcaster"]
        );
        let arm = &manifest.controllers["arm_controller"];
        assert_eq!(
            arm.joints,
            Some(vec!["joint1".to_owned(), "joint2".to_owned()])
        );
        assert_eq!(
            arm.extra.get("type"),
            Some(&serde_yaml::Value::from(
                "joint_trajectory_controller/JointTrajectoryController"
            ))
        );
        assert_eq!(manifest.controllers["joint_state_broadcaster"].joints, None);
    }

    #[test]
    fn parse_empty_document() {
        assert_eq!(
            ControllerManifest::parse_yaml("").unwrap(),
            ControllerManifest::default()
        );
        assert_eq!(
            ControllerManifest::parse_yaml("null").unwrap(),
            ControllerManifest::default()
        );
    }

    #[test]
    fn parse_rejects_non_mapping() {
        assert!(ControllerManifest::parse_yaml("- a\n- b\n").is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let manifest = ControllerManifest::parse_yaml(BASE_YAML).unwrap();
        let yaml = manifest.serialize_to_yaml().unwrap();
        let reparsed = ControllerManifest::parse_yaml(&yaml).unwrap();
        assert_eq!(manifest, reparsed);
    }

    #[test]
    fn json_round_trip() {
        let manifest = ControllerManifest::parse_yaml(BASE_YAML).unwrap();
        let json = manifest.serialize_to_json().unwrap();
        let reparsed = ControllerManifest::parse_json(&json).unwrap();
        assert_eq!(manifest, reparsed);
    }

    #[test]
    fn empty_manifest_keeps_controller_names() {
        let yaml = ControllerManifest::default().serialize_to_yaml().unwrap();
        assert_eq!(yaml, "controller_names: []\n");
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ControllerManifest::load_or_empty(&dir.path().join("missing.yaml"));
        assert!(manifest.is_empty());
    }

    #[test]
    fn load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "controller_names: [unclosed\n").unwrap();
        let manifest = ControllerManifest::load_or_empty(&path);
        assert!(manifest.is_empty());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("controllers.yaml");
        let manifest = ControllerManifest::parse_yaml(BASE_YAML).unwrap();
        manifest.save_yaml(&path).unwrap();
        assert_eq!(ControllerManifest::load_yaml(&path).unwrap(), manifest);
    }
}
