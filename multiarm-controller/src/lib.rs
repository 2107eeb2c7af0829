//! Controller-manifest generation for multi-arm ROS 2 / MoveIt launch setups.

pub mod combine;
pub mod error;
pub mod gripper;
pub mod manifest;
pub mod prefix;
pub mod robot;
