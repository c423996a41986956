use crate::commands::{print_json, Context};
use crate::host::LocalHost;
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tchap_displayname_core::{EmailDisplayname, RegistrationParams, UiaResults};
use tracing::debug;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// UIA results as JSON; `-` reads stdin
    #[arg(long, default_value = "-")]
    pub uia: PathBuf,
    /// Registration request body as JSON
    #[arg(long)]
    pub params: Option<PathBuf>,
}

pub fn register(ctx: &Context, args: RegisterArgs) -> Result<()> {
    let uia_raw = read_input(&args.uia)?;
    let uia_results: UiaResults =
        serde_json::from_str(&uia_raw).with_context(|| "parse uia results")?;
    let params: RegistrationParams = match &args.params {
        Some(path) => {
            let raw = read_input(path)?;
            serde_json::from_str(&raw).with_context(|| "parse registration params")?
        }
        None => RegistrationParams::new(),
    };

    let mut host = LocalHost::default();
    EmailDisplayname::register(ctx.config, &mut host);
    let display_name = host
        .display_name_for_registration(&uia_results, &params)
        .with_context(|| "run registration callback")?;

    if ctx.json {
        return print_json(&serde_json::json!({ "display_name": display_name }));
    }
    match display_name {
        Some(name) => println!("{name}"),
        None => debug!("callback deferred to default display name"),
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
