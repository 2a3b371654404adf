pub mod app;
pub mod handlers;
pub mod ui;

use crate::todo::storage::TaskStore;
use app::Effect;
use log::{info, warn};

/// Runs the effects emitted by one update. Returns true once the loop should stop.
pub fn apply_effects(effects: Vec<Effect>, store: &dyn TaskStore) -> bool {
    let mut should_quit = false;
    for effect in effects {
        match effect {
            Effect::Save(tasks) => match store.save(&tasks) {
                Ok(()) => info!("Saved {} tasks", tasks.len()),
                // Quitting wins over a failed save.
                Err(e) => warn!("Failed to save tasks: {}", e),
            },
            Effect::Quit => {
                info!("Quit requested");
                should_quit = true;
            }
        }
    }
    should_quit
}
