use std::io;
use std::path::Path;
use std::sync::mpsc;

use pipeline_logging::{pipeline_info, pipeline_warn};
use search_box_core::{update, AppState};
use search_box_engine::EngineHandle;

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::{logging, ui, AppEvent};

pub fn run_app() -> anyhow::Result<()> {
    let loaded = load_config(Path::new(CONFIG_FILENAME));
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    }
    .with_base_url(std::env::args().nth(1));

    logging::initialize(config.log_destination(), config.log_level());
    match loaded {
        Ok(Some(_)) => pipeline_info!("Loaded config from {}", CONFIG_FILENAME),
        Ok(None) => pipeline_info!("No {} found; using defaults", CONFIG_FILENAME),
        Err(err) => pipeline_warn!("Ignoring config: {}", err),
    }

    let (engine, engine_events) = EngineHandle::new(config.engine_config())?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine.clone(), engine_events, event_tx.clone());
    ui::input::spawn_stdin_reader(event_tx);

    // The textbox starts empty on every launch.
    let mut state = AppState::with_settings(config.renderer_settings());
    let mut stdout = io::stdout();
    ui::render::draw(&mut stdout, &state.view())?;

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Core(msg) => msg,
            AppEvent::Quit => break,
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.enqueue(effects);
        if state.consume_dirty() {
            ui::render::draw(&mut stdout, &state.view())?;
        }
    }

    engine.shutdown();
    pipeline_info!("search box closed");
    Ok(())
}
