use clap::Parser;
use rotation_detector::RAD_TO_DEG;

use crate::twist::{run_twist, TwistConfig};

mod twist;

/// Replays a synthetic two finger twist through the rotation detector.
#[derive(Parser)]
#[command(name = "rotation-detector-demo")]
#[command(about = "Replays a synthetic two finger twist through the rotation detector")]
struct Args {
    /// Number of move frames
    #[arg(long, default_value_t = 36, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,
    /// Rotation of the fingers per frame, clockwise on screen
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    degrees_per_step: f64,
    /// Distance of each finger from the center of the twist in logical pixels
    #[arg(long, default_value_t = 120.0)]
    radius: f64,
    /// Only apply the rotation once it adds up to at least this many degrees
    #[arg(long, default_value_t = 0.0)]
    snap_degrees: f64,
    /// Let a third finger land and the second one lift halfway through the twist
    #[arg(long)]
    third_finger: bool,
}

impl From<Args> for TwistConfig {
    fn from(args: Args) -> Self {
        Self {
            steps: args.steps,
            degrees_per_step: args.degrees_per_step,
            radius: args.radius.abs(),
            snap_degrees: args.snap_degrees.abs(),
            third_finger: args.third_finger,
        }
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = TwistConfig::from(Args::parse());
    let summary = run_twist(&config);

    println!(
        "applied {:.2} degrees in {} updates, {:.2} degrees pending, {} rotation end(s)",
        summary.applied.0 * RAD_TO_DEG,
        summary.updates,
        summary.pending.0 * RAD_TO_DEG,
        summary.ends
    );
}
