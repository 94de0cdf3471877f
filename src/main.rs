use anyhow::Context;
use log::info;

use arboretum::config::ConfigManager;
use arboretum::progress::LogProgress;
use arboretum::Model;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    let mut model = Model::new(config.clone()).context("building model")?;
    let mut progress = LogProgress::new(config.simulation.log_every);
    model.run(&mut progress).context("running evolution")?;

    info!(
        "run finished, fittest ever reached fitness {:.0}",
        model.fittest_ever().fitness()
    );
    model.export_fittest().context("exporting fittest tree")?;

    Ok(())
}
