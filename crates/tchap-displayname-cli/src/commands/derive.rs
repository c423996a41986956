use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tchap_displayname_core::display_name_for_address;

#[derive(Debug, Args)]
pub struct DeriveArgs {
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DerivedNameDto {
    address: String,
    display_name: String,
}

pub fn derive(ctx: &Context, args: DeriveArgs) -> Result<()> {
    let mut items = Vec::with_capacity(args.addresses.len());
    for address in args.addresses {
        if address.trim() != address || address.is_empty() {
            return Err(invalid_input(format!(
                "address must be non-empty without surrounding whitespace: {address:?}"
            )));
        }
        let display_name = display_name_for_address(&ctx.config, &address)
            .with_context(|| format!("derive display name for {address}"))?;
        items.push(DerivedNameDto {
            address,
            display_name,
        });
    }

    if ctx.json {
        return print_json(&items);
    }
    for item in items {
        println!("{}", item.display_name);
    }
    Ok(())
}
