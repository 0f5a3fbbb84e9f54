use solsim::{Driver, ScenarioConfig, Simulation};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under scenarios/
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Number of base steps (days at 1x) to simulate
    #[arg(long, default_value_t = 365)]
    days: u64,

    /// Speed multiplier applied to the base step
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let sim = Simulation::from_config(scenario_cfg)?;

    println!(
        "solsim: {} bodies, {} steps at {}x speed",
        sim.bodies().len(),
        args.days,
        args.speed
    );

    let mut driver = Driver::new(sim);
    driver.set_speed(args.speed)?;

    for _ in 0..args.days {
        driver.tick();
    }

    let sim = driver.simulation();
    println!("t = {:.3e} s", sim.time());
    for body in sim.bodies() {
        let x = body.position();
        println!(
            "{:10} x = [{:+.4e}, {:+.4e}] m  |v| = {:.1} m/s  path = {} points",
            body.name(),
            x.x,
            x.y,
            body.velocity().norm(),
            body.path().len()
        );
    }
    println!("Simulation completed.");

    Ok(())
}
