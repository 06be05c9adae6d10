pub mod acquire;
pub mod generate;
pub mod predict;
pub mod simulate;

use std::error::Error;
use std::io::{self, Write};

use log::info;
use shadow_core::fresh_master_seed;

/// Writes `text` to stdout in one piece.
pub fn emit(text: &str) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    handle.flush()?;
    Ok(())
}

/// Returns the requested seed or draws and logs a fresh one.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = fresh_master_seed();
        info!("no --seed given, using {seed}");
        seed
    })
}
