use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use tchap_displayname_core::ModuleConfig;

pub mod derive;
pub mod register;

pub struct Context {
    pub json: bool,
    pub config: ModuleConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
