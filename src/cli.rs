// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "spin-cube")]
#[command(about = "Spinning cube renderer", long_about = None)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "45.0")]
    pub fov: f32,

    /// Rotation increment per frame in radians
    #[arg(long, default_value = "0.01")]
    pub spin: f32,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
