//! `meshview table`: render a metrics snapshot as a table.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use log::{debug, info};
use meshview_lib::PrefixedLinks;
use meshview_lib::config::Padding;
use meshview_lib::model::{MetricRow, ResourceKind};
use meshview_lib::schema::{MetricsTable, MetricsTableProps};
use meshview_lib::table::SortOrder;

use crate::render::{RenderOptions, render_table};
use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Metrics snapshot: a JSON array of rows, `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Resource kind of the rows (singular, plural or short name).
    #[arg(short, long)]
    pub resource: String,

    /// Selected namespace, `_all` for every namespace. Defaults to the settings.
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Show TCP stats instead of HTTP stats.
    #[arg(long)]
    pub tcp: bool,

    /// Never show the namespace column.
    #[arg(long)]
    pub hide_namespace: bool,

    /// Hide the name column (traffic splits only).
    #[arg(long)]
    pub hide_name: bool,

    /// Column id to sort by.
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort direction, defaults to the column's own.
    #[arg(long, value_enum, requires = "sort")]
    pub order: Option<Order>,

    /// Only show rows containing this text.
    #[arg(long)]
    pub filter: Option<String>,

    /// Print link targets.
    #[arg(long)]
    pub links: bool,

    /// Table title, defaults to the plural resource title.
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => SortOrder::Asc,
            Order::Desc => SortOrder::Desc,
        }
    }
}

pub fn run(args: &TableArgs, settings: &Settings) -> Result<String> {
    let json = read_input(&args.input)?;
    let metrics = MetricRow::parse_snapshot(&json)
        .with_context(|| format!("failed to parse metrics from {}", args.input.display()))?;
    info!("Loaded {} rows from {}", metrics.len(), args.input.display());
    render_snapshot(args, settings, &metrics)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("failed to read metrics from stdin")?;
        return Ok(json);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn render_snapshot(args: &TableArgs, settings: &Settings, metrics: &[MetricRow]) -> Result<String> {
    let resource: ResourceKind = args.resource.parse()?;
    let namespace = args
        .namespace
        .clone()
        .unwrap_or_else(|| settings.selected_namespace.clone());
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| resource.titles().plural);

    let props = MetricsTableProps::new(resource, namespace)
        .with_namespace_column(!args.hide_namespace)
        .with_name(!args.hide_name)
        .with_tcp(args.tcp)
        .with_title(title);
    let links = Arc::new(PrefixedLinks::new(settings.link_prefix.as_str()));
    let mut table = MetricsTable::new(props, links);

    if let Some(column) = &args.sort {
        apply_sort(&mut table, column, args.order)?;
    }
    if let Some(filter) = &args.filter {
        table.on_filter_toggle();
        table.on_filter_input(filter);
    }

    let view = table.view(metrics)?;
    debug!(
        "Rendering {} of {} rows",
        view.body.rows().len(),
        metrics.len()
    );

    let padding = if settings.dense {
        view.padding
    } else {
        Padding::Default
    };
    let options = RenderOptions {
        show_links: args.links,
        padding,
    };
    Ok(render_table(&view, &options))
}

/// Click `column` until the table is sorted by it in `order`.
fn apply_sort(table: &mut MetricsTable, column: &str, order: Option<Order>) -> Result<()> {
    if !table.columns().iter().any(|c| c.id() == column) {
        let ids: Vec<&str> = table.columns().iter().map(|c| c.id()).collect();
        bail!("unknown column `{}`, expected one of: {}", column, ids.join(", "));
    }
    if !table.on_header_click(column) {
        bail!("column `{}` is not sortable", column);
    }
    if let Some(order) = order
        && table.engine().sort_state().order != SortOrder::from(order)
    {
        table.on_header_click(column);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: TableArgs,
    }

    fn args(argv: &[&str]) -> TableArgs {
        let mut full = vec!["meshview", "snapshot.json"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    const SNAPSHOT: &str = r#"[
        {"name": "web", "namespace": "emojivoto", "type": "deployment", "added": true,
         "pods": {"meshedPods": "1", "totalPods": "1"}, "requestRate": 5, "successRate": 1},
        {"name": "voting", "namespace": "emojivoto", "type": "deployment", "added": true,
         "pods": {"meshedPods": "1", "totalPods": "1"}, "requestRate": 50, "successRate": 0.5}
    ]"#;

    fn first_column(out: &str) -> Vec<&str> {
        out.lines()
            .skip(2)
            .map(|line| line.split_whitespace().next().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_sorted_by_request_rate_desc() {
        let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
        let args = args(&[
            "--resource", "deploy", "--namespace", "emojivoto",
            "--sort", "requestRate", "--order", "desc",
        ]);
        let out = render_snapshot(&args, &Settings::default(), &metrics).unwrap();
        assert!(out.starts_with("Deployments\n"));
        assert_eq!(first_column(&out), vec!["voting", "web"]);
    }

    #[test]
    fn test_default_sort_by_name() {
        let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
        let args = args(&["--resource", "deployments", "--namespace", "emojivoto"]);
        let out = render_snapshot(&args, &Settings::default(), &metrics).unwrap();
        assert_eq!(first_column(&out), vec!["voting", "web"]);
        assert!(out.lines().nth(1).unwrap().contains("Deployment ▲"));
    }

    #[test]
    fn test_sort_same_column_asc() {
        let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
        let args = args(&[
            "--resource", "deploy", "--namespace", "emojivoto",
            "--sort", "name", "--order", "asc",
        ]);
        let out = render_snapshot(&args, &Settings::default(), &metrics).unwrap();
        assert_eq!(first_column(&out), vec!["voting", "web"]);
    }

    #[test]
    fn test_filter_to_empty_state() {
        let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
        let args = args(&["--resource", "deploy", "--filter", "nothing-matches"]);
        let out = render_snapshot(&args, &Settings::default(), &metrics).unwrap();
        assert!(out.ends_with("No data to display\n"));
    }

    #[test]
    fn test_namespace_column_across_namespaces() {
        let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
        let settings = Settings {
            link_prefix: "/proxy".into(),
            ..Settings::default()
        };
        let out = render_snapshot(&args(&["--resource", "deploy", "--links"]), &settings, &metrics).unwrap();
        let header = out.lines().nth(1).unwrap();
        assert!(header.starts_with("Namespace"));
        assert!(out.contains("</proxy/namespaces/emojivoto/deployments/web>"));
    }

    #[test]
    fn test_rejects_unknown_input() {
        let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();

        let err = render_snapshot(&args(&["--resource", "gateway"]), &Settings::default(), &metrics)
            .unwrap_err();
        assert!(err.to_string().contains("gateway"));

        let err = render_snapshot(
            &args(&["--resource", "deploy", "--sort", "nope"]),
            &Settings::default(),
            &metrics,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown column `nope`"));

        let err = render_snapshot(
            &args(&["--resource", "deploy", "--sort", "grafanaDashboard"]),
            &Settings::default(),
            &metrics,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not sortable"));
    }

    #[test]
    fn test_order_requires_sort() {
        let parsed = Harness::try_parse_from(["meshview", "-", "--resource", "po", "--order", "asc"]);
        assert!(parsed.is_err());
    }
}
