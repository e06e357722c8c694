//! `meshview settings`: show or update the stored settings.

use anyhow::{Context, Result};
use clap::Args;

use crate::settings::{Settings, SettingsProvider};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Path prefix prepended to dashboard links.
    #[arg(long)]
    pub link_prefix: Option<String>,

    /// Namespace the control plane runs in.
    #[arg(long)]
    pub controller_namespace: Option<String>,

    /// Namespace tables show by default, `_all` for every namespace.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Tight column spacing.
    #[arg(long)]
    pub dense: Option<bool>,
}

/// Apply the given overrides. Returns `true` if anything changed.
fn apply(args: &SettingsArgs, settings: &mut Settings) -> bool {
    let before = settings.clone();
    if let Some(prefix) = &args.link_prefix {
        settings.link_prefix = prefix.clone();
    }
    if let Some(namespace) = &args.controller_namespace {
        settings.controller_namespace = namespace.clone();
    }
    if let Some(namespace) = &args.namespace {
        settings.selected_namespace = namespace.clone();
    }
    if let Some(dense) = args.dense {
        settings.dense = dense;
    }
    *settings != before
}

pub fn run(args: &SettingsArgs, provider: &SettingsProvider, mut settings: Settings) -> Result<String> {
    if apply(args, &mut settings) {
        provider.save(&settings).context("failed to save settings")?;
    }
    let json = serde_json::to_string_pretty(&settings)?;
    Ok(format!("{}\n", json))
}
