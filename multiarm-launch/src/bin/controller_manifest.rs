use anyhow::Result;
use clap::Parser;
use multiarm_controller::combine::{combine, CombineSettings};
use multiarm_launch::{
    logging,
    params::{LaunchParams, RobotOverrides, DEFAULT_DOF, DEFAULT_ROBOT_TYPE},
};
use std::path::PathBuf;

/// Merge per-robot controllers documents into one manifest for the
/// controller manager of a 1-3 arm rig.
#[derive(Parser)]
#[command(author, version)]
struct Args {
    /// Root of the MoveIt config package holding the config/ tree
    #[arg(long)]
    package_path: PathBuf,

    /// Explicit controllers document used for every robot instead of the
    /// derived config/{robot}/{controllers_name} path
    #[arg(long)]
    file_path: Option<PathBuf>,

    /// Number of arms in the rig
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    robots: u8,

    /// Controllers file name; ".yaml" is appended if absent
    #[arg(long, default_value = "ros2_controllers")]
    controllers_name: String,

    #[arg(long, default_value = DEFAULT_ROBOT_TYPE)]
    robot_type: String,
    #[arg(long)]
    robot_type_1: Option<String>,
    #[arg(long)]
    robot_type_2: Option<String>,
    #[arg(long)]
    robot_type_3: Option<String>,

    #[arg(long, default_value_t = DEFAULT_DOF)]
    dof: u8,
    #[arg(long)]
    dof_1: Option<u8>,
    #[arg(long)]
    dof_2: Option<u8>,
    #[arg(long)]
    dof_3: Option<u8>,

    #[arg(long)]
    prefix_1: Option<String>,
    #[arg(long)]
    prefix_2: Option<String>,
    #[arg(long)]
    prefix_3: Option<String>,

    #[arg(long, default_value = "false")]
    add_gripper: String,
    #[arg(long)]
    add_gripper_1: Option<String>,
    #[arg(long)]
    add_gripper_2: Option<String>,
    #[arg(long)]
    add_gripper_3: Option<String>,

    #[arg(long, default_value = "false")]
    add_bio_gripper: String,
    #[arg(long)]
    add_bio_gripper_1: Option<String>,
    #[arg(long)]
    add_bio_gripper_2: Option<String>,
    #[arg(long)]
    add_bio_gripper_3: Option<String>,

    /// Print the controller names in spawn order instead of the manifest
    #[arg(long)]
    spawners: bool,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sets the level of verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn launch_params(args: &Args) -> LaunchParams {
    let mut params = LaunchParams::new(args.robots as usize);
    params.robot_type = args.robot_type.clone();
    params.dof = args.dof;
    params.add_gripper = args.add_gripper.clone();
    params.add_bio_gripper = args.add_bio_gripper.clone();

    let robot_types = [&args.robot_type_1, &args.robot_type_2, &args.robot_type_3];
    let dofs = [args.dof_1, args.dof_2, args.dof_3];
    let prefixes = [&args.prefix_1, &args.prefix_2, &args.prefix_3];
    let grippers = [&args.add_gripper_1, &args.add_gripper_2, &args.add_gripper_3];
    let bio_grippers = [
        &args.add_bio_gripper_1,
        &args.add_bio_gripper_2,
        &args.add_bio_gripper_3,
    ];
    for (index, overrides) in params.robots.iter_mut().enumerate() {
        *overrides = RobotOverrides {
            robot_type: robot_types[index].clone(),
            dof: dofs[index],
            prefix: prefixes[index].clone(),
            add_gripper: grippers[index].clone(),
            add_bio_gripper: bio_grippers[index].clone(),
        };
    }
    params
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_tracing(args.verbose);

    let robots = launch_params(&args).resolve();
    let mut settings = CombineSettings::new(&args.package_path, &args.controllers_name);
    if let Some(file_path) = &args.file_path {
        settings = settings.with_file_path(file_path);
    }
    for robot in &robots {
        tracing::debug!(
            "robot {} with prefix {:?}",
            robot.identity.display_name(),
            robot.identity.prefix
        );
    }

    let manifest = combine(&robots, &settings)?;
    tracing::info!(
        "Combined {} controllers for {} robot(s)",
        manifest.controller_names.len(),
        robots.len()
    );

    if args.spawners {
        for name in &manifest.controller_names {
            println!("{name}");
        }
        return Ok(());
    }

    let yaml = manifest.serialize_to_yaml()?;
    match &args.output {
        Some(path) => std::fs::write(path, yaml)?,
        None => print!("{yaml}"),
    }
    Ok(())
}
