//! `meshview query`: print the CLI equivalent of a dashboard query.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use clap::Args;
use log::warn;
use meshview_lib::cli_query::{caption, cli_command, cli_flag, display_order};

use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Query kind: tap, top, routes or stat.
    pub cmd: String,

    /// Target resource, such as `deploy/web`.
    pub resource: String,

    /// Query field as `NAME=VALUE`, repeatable.
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Control plane namespace. Defaults to the settings.
    #[arg(long)]
    pub controller_namespace: Option<String>,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{}`", raw)),
    }
}

pub fn run(args: &QueryArgs, settings: &Settings) -> Result<String> {
    if display_order(&args.cmd).is_empty() {
        warn!("No query fields are printed for `{}`", args.cmd);
    }

    let query: BTreeMap<String, String> = args.params.iter().cloned().collect();
    for name in query.keys() {
        if cli_flag(name).is_none() {
            warn!("Ignoring unknown query field {:?}", name);
        }
    }

    let controller_namespace = args
        .controller_namespace
        .as_deref()
        .unwrap_or(&settings.controller_namespace);
    let Some(command) = cli_command(&args.cmd, &args.resource, &query, controller_namespace) else {
        bail!("a resource is required");
    };
    Ok(format!("{}\n{}\n", caption(&args.cmd), command))
}
