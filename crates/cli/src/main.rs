//! Pallet reachability CLI.

use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Point2;
use pallet_reach_core::{
    Analyzer, BoxSpec, Config, PalletSpec, PolicyVariant, RobotClass, RobotProfile, Scenario,
};
use std::io;
use std::path::PathBuf;

mod input;
mod report;
mod scene;

use scene::Scene;

#[derive(Parser)]
#[command(name = "pallet-reach")]
#[command(about = "Reachability analysis for palletized boxes under a fixed-base robot")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an analysis from command-line flags
    Analyze {
        /// Box width in mm (X extent)
        #[arg(long)]
        box_width: f64,

        /// Box length in mm (Y extent)
        #[arg(long)]
        box_length: f64,

        /// Box height in mm (Z extent)
        #[arg(long)]
        box_height: f64,

        /// Pallet width in mm
        #[arg(long)]
        pallet_width: f64,

        /// Pallet length in mm
        #[arg(long)]
        pallet_length: f64,

        /// Number of stacked layers
        #[arg(long, default_value = "1")]
        layers: u32,

        /// Robot class code (1 = CS612, 2 = CS620, 3 = CS625)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        robot_class: u8,

        /// Robot base height in mm
        #[arg(long)]
        robot_height: f64,

        /// Pallet master point as "x,y" in world coordinates
        #[arg(long, default_value = "0,0", value_parser = parse_point)]
        master: Point2<f64>,

        /// Classification policy variant
        #[arg(long, value_enum, default_value_t = PolicyArg::TwoTier)]
        policy: PolicyArg,

        /// Output file for the 3D scene (JSON)
        #[arg(long)]
        scene: Option<PathBuf>,
    },

    /// Collect inputs interactively, then analyze
    Interactive {
        /// Classification policy variant
        #[arg(long, value_enum, default_value_t = PolicyArg::TwoTier)]
        policy: PolicyArg,

        /// Output file for the 3D scene (JSON)
        #[arg(long)]
        scene: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Easy/difficult/unreachable with stand-height feedback
    TwoTier,
    /// Reachable/unreachable, single radius
    SingleTier,
}

impl From<PolicyArg> for PolicyVariant {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::TwoTier => PolicyVariant::TwoTier,
            PolicyArg::SingleTier => PolicyVariant::SingleTier,
        }
    }
}

fn parse_point(raw: &str) -> Result<Point2<f64>, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err("expected two comma-separated numbers, e.g. \"0,0\"".to_string());
    }
    let x: f64 = parts[0].parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = parts[1].parse().map_err(|e| format!("bad y: {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err("coordinates must be finite".to_string());
    }
    Ok(Point2::new(x, y))
}

fn run(scenario: &Scenario, variant: PolicyVariant, scene_path: Option<&PathBuf>) -> anyhow::Result<()> {
    let analyzer = Analyzer::new(Config::new().with_variant(variant));
    let result = analyzer.analyze(scenario)?;

    let stdout = io::stdout();
    report::print_report(&mut stdout.lock(), &result)?;

    if let Some(path) = scene_path {
        let scene = Scene::from_result(&result);
        std::fs::write(path, scene.to_json()?)?;
        println!("Scene saved to: {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            box_width,
            box_length,
            box_height,
            pallet_width,
            pallet_length,
            layers,
            robot_class,
            robot_height,
            master,
            policy,
            scene,
        } => {
            let scenario = Scenario::new(
                BoxSpec::new(box_width, box_length, box_height)?,
                PalletSpec::new(pallet_width, pallet_length, master)?,
                layers,
                RobotProfile::new(RobotClass::from_code(robot_class)?, robot_height)?,
            )?;
            run(&scenario, policy.into(), scene.as_ref())
        }
        Commands::Interactive { policy, scene } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let scenario = {
                let mut reader = stdin.lock();
                let mut writer = stdout.lock();
                input::collect_scenario(&mut reader, &mut writer)?
            };
            run(&scenario, policy.into(), scene.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("0,0").unwrap(), Point2::new(0.0, 0.0));
        assert_eq!(parse_point(" 10.5 , -3 ").unwrap(), Point2::new(10.5, -3.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "pallet-reach",
            "analyze",
            "--box-width", "400",
            "--box-length", "300",
            "--box-height", "200",
            "--pallet-width", "1200",
            "--pallet-length", "1000",
            "--layers", "2",
            "--robot-class", "1",
            "--robot-height", "500",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze { layers, robot_class, master, .. } => {
                assert_eq!(layers, 2);
                assert_eq!(robot_class, 1);
                assert_eq!(master, Point2::new(0.0, 0.0));
            }
            _ => panic!("expected analyze subcommand"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_robot_class() {
        assert!(Cli::try_parse_from([
            "pallet-reach",
            "analyze",
            "--box-width", "400",
            "--box-length", "300",
            "--box-height", "200",
            "--pallet-width", "1200",
            "--pallet-length", "1000",
            "--robot-class", "4",
            "--robot-height", "500",
        ])
        .is_err());
    }
}
