use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::error;
use thiserror::Error;

use julia_sets::core::data::window::{DEFAULT_RESOLUTION, DEFAULT_WINDOW_MAX, DEFAULT_WINDOW_MIN};
use julia_sets::core::fractals::julia::params::{DEFAULT_ITERATIONS, DEFAULT_MAX_MODULUS};
use julia_sets::{
    CancelFlag, Colour, Complex, ConfigError, Constraints, EngineConfig, ImageFolder, JuliaError,
    JuliaParameters, JuliaRenderController, RenderError, StorageError, Window,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render Julia sets to PNG files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a Julia set into the image folder and print the file name.
    Render(RenderArgs),
    /// Print the first stored image for any of the given ids.
    Find {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Print the limits accepted by `render` as JSON.
    Constraints,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Real part of c.
    #[arg(long, allow_hyphen_values = true)]
    re: f64,

    /// Imaginary part of c.
    #[arg(long, allow_hyphen_values = true)]
    im: f64,

    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_MODULUS)]
    max_modulus: f64,

    #[arg(long, default_value_t = DEFAULT_WINDOW_MIN, allow_hyphen_values = true)]
    min_x: f64,

    #[arg(long, default_value_t = DEFAULT_WINDOW_MAX, allow_hyphen_values = true)]
    max_x: f64,

    #[arg(long, default_value_t = DEFAULT_WINDOW_MIN, allow_hyphen_values = true)]
    min_y: f64,

    #[arg(long, default_value_t = DEFAULT_WINDOW_MAX, allow_hyphen_values = true)]
    max_y: f64,

    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    width: usize,

    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    height: usize,

    /// Gradient anchor colours, e.g. `#0000ff,#ffffff,#ff0000`.
    #[arg(long, value_delimiter = ',', default_values = ["#0000ff", "#ffffff", "#ff0000"])]
    colours: Vec<Colour>,

    /// Colour of points that never escape.
    #[arg(long, default_value = "#000000")]
    interior: Colour,

    /// Identifier the new image is stored under.
    #[arg(long)]
    id: String,

    /// Ids whose stored image may be returned instead of rendering.
    #[arg(long, value_delimiter = ',')]
    reuse: Vec<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parameters(#[from] JuliaError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RenderArgs {
    fn parameters(&self) -> Result<JuliaParameters, JuliaError> {
        let window = Window::new(
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y,
            self.width,
            self.height,
        )?;

        JuliaParameters::new(
            Complex::new(self.re, self.im),
            self.iterations,
            self.max_modulus,
            window,
            self.colours.clone(),
            self.interior,
        )
    }
}

fn render(args: RenderArgs) -> Result<(), CliError> {
    let params = args.parameters()?;
    let config = EngineConfig::from_env()?;
    let mut controller = JuliaRenderController::from_config(&config)?;

    let cancel = CancelFlag::new();
    let on_interrupt = cancel.clone();
    ctrlc::set_handler(move || on_interrupt.cancel())?;

    let outcome = controller.render_or_reuse(&params, &args.reuse, &args.id, &cancel)?;
    println!("{}", outcome.file_name());

    Ok(())
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render(args) => render(args),
        Commands::Find { ids } => {
            let config = EngineConfig::from_env()?;
            let found = ImageFolder::new(config.image_folder()).find_existing(&ids)?;
            println!("{found}");
            Ok(())
        }
        Commands::Constraints => {
            println!("{}", serde_json::to_string_pretty(&Constraints::current())?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
