use std::cell::Cell;
use std::rc::Rc;

use eventemitter::{EmitterConfig, EmitterError, EventEmitter, EventId};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const GREETING: EventId = 1;
const SHUTDOWN: EventId = 2;

fn load_config(path: Option<String>) -> EmitterConfig {
    let Some(path) = path else {
        return EmitterConfig::default();
    };

    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<EmitterConfig>(&raw).map_err(|e| e.to_string()))
    {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path, error = %e, "Failed to load config, using defaults");
            EmitterConfig::default()
        }
    }
}

fn register_listeners(
    emitter: &mut EventEmitter<str>,
    greetings: Rc<Cell<usize>>,
) -> Result<(), EmitterError> {
    emitter.on(GREETING, move |name: &str| {
        greetings.set(greetings.get() + 1);
        info!(name, "Hello");
    })?;
    emitter.once(SHUTDOWN, |reason: &str| info!(reason, "Shutting down"))?;
    emitter.on_unhandled(|event_id: EventId, data: &str| {
        warn!(event_id, data, "Nobody is listening")
    })?;
    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventemitter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(std::env::args().nth(1));
    info!(?config, "Starting event emitter demo");

    let mut emitter: EventEmitter<str> = EventEmitter::with_config(config);
    let greetings = Rc::new(Cell::new(0usize));

    if let Err(e) = register_listeners(&mut emitter, greetings.clone()) {
        error!(error = %e, "Failed to register listeners");
        return;
    }

    emitter.emit(GREETING, "world");
    emitter.emit(GREETING, "again");
    emitter.emit(42, "lost");
    emitter.emit(SHUTDOWN, "done");
    emitter.emit(SHUTDOWN, "twice");

    info!(
        greetings = greetings.get(),
        remaining_events = emitter.event_ids().count(),
        "Demo finished"
    );
}
