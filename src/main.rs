//! Command-line front end: load a scenario, integrate it, report.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use threebody::diagnostics::{linear_momentum, relative_energy_drift};
use threebody::{Rk4, ScenarioConfig};

/// State length for three bodies
const N: usize = 18;

#[derive(Parser, Debug)]
#[command(about = "Integrate a three-body scenario with fixed-step RK4")]
struct Args {
    /// YAML scenario file; the built-in reference scenario when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Write the full trajectory table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print every k-th row of the trajectory (0 prints none)
    #[arg(long, default_value_t = 50)]
    every: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.scenario {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::reference(),
    };
    let scenario = config
        .build::<N>()
        .context("scenario must describe exactly three bodies")?;

    let mut solver = Rk4::new();
    let trajectory = solver.integrate(&scenario.model, &scenario.initial_state, &scenario.grid)?;
    let layout = scenario.model.layout();

    println!("Three-Body RK4");
    println!("  Bodies:     {}", layout.bodies());
    println!("  Samples:    {}", trajectory.len());
    println!(
        "  Horizon:    [{}, {}]",
        scenario.grid.start(),
        scenario.grid.end()
    );
    println!();

    if args.every > 0 {
        for (i, (t, y)) in trajectory.iter().enumerate().step_by(args.every) {
            let cells: Vec<String> = (0..layout.bodies())
                .map(|b| {
                    let r = layout.position(y, b);
                    format!("({:>8.4}, {:>8.4})", r[0], r[1])
                })
                .collect();
            println!("  [{:>5}] t = {:>7.3}  {}", i, t, cells.join("  "));
        }
        println!();
    }

    match trajectory.first_non_finite() {
        Some(row) => println!(
            "  Non-finite state from row {} (t = {})",
            row,
            trajectory.times()[row]
        ),
        None => {
            let p = linear_momentum(&scenario.model, trajectory.final_state());
            println!(
                "  Energy drift (relative): {:.2e}",
                relative_energy_drift(&scenario.model, &trajectory)
            );
            println!(
                "  Final momentum:          [{:.3e}, {:.3e}, {:.3e}]",
                p[0], p[1], p[2]
            );
        }
    }
    println!("  Function evals: {}", solver.stats.fn_evals);

    if let Some(path) = &args.csv {
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        trajectory.write_csv(layout, BufWriter::new(file))?;
        println!("  Trajectory written to {}", path.display());
    }

    Ok(())
}
