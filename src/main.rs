use clap::{Parser, Subcommand};
use std::io;
use termfire::config::{FireArgs, FireConfig};
use termfire::scene;
use termfire::settings::Settings;

#[derive(Parser)]
#[command(name = "termfire")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Terminal doom-style fire that ignites and dies down on a timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the fire full-screen (q or Esc to quit, space to pause)
    Run {
        #[command(flatten)]
        fire: FireArgs,
    },

    /// Print one frame to stdout (no interactive display)
    Print {
        /// Ticks to simulate before printing
        #[arg(short = 'n', long, default_value = "40")]
        ticks: u32,

        #[command(flatten)]
        fire: FireArgs,
    },
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Run { fire } => {
            let config = FireConfig::resolve(&fire, &settings.fire);
            log::info!("Starting fire: {:?}", config);
            scene::run(config)?;
        }
        Commands::Print { ticks, fire } => {
            let config = FireConfig::resolve(&fire, &settings.fire);
            scene::print(config, ticks)?;
        }
    }

    Ok(())
}
