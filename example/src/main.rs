use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use example::{ActionPlan, MAX_SIMULATION, PlanScreen, Retarget, simulate_transition};
use sejahtera_ui::dp::set_scale_factor;
use tracing::info;

const MAX_SIMULATION_MS: u64 = MAX_SIMULATION.as_millis() as u64;

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Action plan screen of the sejahtera planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the action plan's progress circle as SVG
    Render {
        /// Number of completed tasks (defaults to the sample plan)
        #[arg(short, long)]
        completed: Option<usize>,
        /// Draw the dashboard widget with the percentage label
        #[arg(short, long)]
        label: bool,
        /// Write the SVG to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Physical pixels per dp for the document size
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
    /// Simulate the progress transition frame by frame
    Animate {
        /// Starting fraction
        #[arg(long, default_value_t = 0.0)]
        from: f32,
        /// Target fraction
        #[arg(long)]
        to: f32,
        /// Change the target after this many milliseconds
        #[arg(
            long,
            requires = "retarget_to",
            value_parser = clap::value_parser!(u64).range(..=MAX_SIMULATION_MS)
        )]
        retarget_at: Option<u64>,
        /// New target fraction for `--retarget-at`
        #[arg(long, requires = "retarget_at")]
        retarget_to: Option<f32>,
        /// Frames per second
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },
    /// List the action plan tasks
    Tasks {
        /// Toggle these task ids before listing
        #[arg(short, long)]
        toggle: Vec<String>,
    },
}

fn main() -> Result<()> {
    sejahtera_ui::logging::init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Render {
            completed,
            label,
            out,
            scale,
        } => {
            set_scale_factor(scale);
            let plan = match completed {
                Some(count) => ActionPlan::sample().with_completed(count),
                None => ActionPlan::sample(),
            };
            let svg = PlanScreen::new(plan, label).render_svg()?;
            match out {
                Some(path) => {
                    fs::write(&path, svg)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "wrote progress circle");
                }
                None => print!("{svg}"),
            }
        }
        Commands::Animate {
            from,
            to,
            retarget_at,
            retarget_to,
            fps,
        } => {
            let retarget = retarget_at.zip(retarget_to).map(|(at, to)| Retarget {
                at: Duration::from_millis(at),
                to,
            });
            let samples = simulate_transition(from, to, retarget, fps);
            for (frame, sample) in samples.iter().enumerate() {
                info!(
                    frame,
                    elapsed_ms = sample.elapsed.as_secs_f64() * 1000.0,
                    displayed = sample.displayed,
                    target = sample.target,
                    phase = ?sample.phase,
                    "frame"
                );
            }
            if let Some(last) = samples.last() {
                println!(
                    "settled at {:.3} after {} frames ({:?})",
                    last.displayed,
                    samples.len(),
                    last.elapsed
                );
            }
        }
        Commands::Tasks { toggle } => {
            let mut plan = ActionPlan::sample();
            for id in &toggle {
                plan.toggle(id)?;
            }
            for task in plan.tasks() {
                let mark = if task.completed { "x" } else { " " };
                let due = task.due_date.as_deref().unwrap_or("-");
                println!("[{mark}] {}. {} (due {due})", task.id, task.title);
                println!("      {}", task.description);
            }
            println!("{}", plan.caption());
        }
    }

    Ok(())
}
