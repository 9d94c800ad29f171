//! Headless BULWARK driver.
//!
//! Usage: `bulwark-app [config.json]`
//!
//! Reads one command per line from stdin:
//! - a JSON `PlayerCommand`, e.g. `{"type":"Build","kind":"SamSite","lat":19.1,"lon":72.9}`
//! - `status` prints the latest snapshot as JSON on stdout
//! - `quit` stops the simulation and exits

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{error, warn};

use bulwark_app::config;
use bulwark_app::ipc;
use bulwark_app::logging;
use bulwark_app::state::AppState;
use bulwark_core::commands::PlayerCommand;

fn main() -> Result<(), Box<dyn Error>> {
    logging::setup_from_env()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::resolve_config(config_path.as_deref()).map_err(|e| {
        error!("Could not load config: {}", e);
        e
    })?;

    let state = AppState::new();
    ipc::start_simulation(&state, config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" => break,
            "status" => {
                if let Some(snapshot) = ipc::get_snapshot(&state)? {
                    serde_json::to_writer(&mut stdout, &snapshot)?;
                    writeln!(stdout)?;
                    stdout.flush()?;
                }
            }
            _ => match serde_json::from_str::<PlayerCommand>(line) {
                Ok(command) => ipc::send_command(&state, command)?,
                Err(e) => warn!("Ignoring unparseable command {:?}: {}", line, e),
            },
        }
    }

    ipc::stop_simulation(&state)?;
    Ok(())
}
