use color_eyre::Result;
use sphere_dots::{app::ApplicationRunner, settings::ApplicationSettings};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let settings = ApplicationSettings::load()?;
    log::info!("{settings:?}");

    ApplicationRunner::new(settings)?.run()
}
