use std::path::PathBuf;

use anyhow::Context as _;
use chessboard_widget::app;
use chessboard_widget::config::BoardConfig;
use gpui::{App, Application};
use log::error;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--config-schema") {
        println!("{}", BoardConfig::schema_json()?);
        return Ok(());
    }

    let config_path = arg.map(PathBuf::from);
    let config = BoardConfig::load(config_path.as_deref()).context("loading configuration")?;

    Application::new().run(move |cx: &mut App| {
        if let Err(e) = app::run(cx, config) {
            error!("failed to open board window: {:#}", e);
            cx.quit();
        }
    });
    Ok(())
}
