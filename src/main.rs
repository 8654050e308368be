use clap::Parser;
use winit::event_loop::EventLoop;

use spin_cube::app::App;
use spin_cube::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if !cli.no_ui {
        println!("Spin Cube - Escape to quit");
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    event_loop.run_app(&mut app)?;

    Ok(())
}
