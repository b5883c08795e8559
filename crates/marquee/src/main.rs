use clap::Parser;
use marquee::config;
use marquee::gui::app::AppModel;
use marquee::gui::carousel::State;
use marquee::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about, long_about = None)]
struct Cli {
    /// Use an explicit config file instead of the XDG location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    let config = config::load_or_default(&config_path);
    let state = State::from_catalog(config.layout, config.scroll);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    let app = RelmApp::new("org.backlot.marquee");

    app.run::<AppModel>((state, config_path, rx));
    Ok(())
}
