//! CLI equivalent of a dashboard query.
//!
//! Prints a query the dashboard issued (tap, top, routes, stat) as the CLI
//! command a user could paste into a terminal.

use std::collections::BTreeMap;

use crate::model::start_case;

/// Controller namespace the CLI assumes when none is given.
pub const DEFAULT_CONTROLLER_NAMESPACE: &str = "linkerd";

/// Query field names and their CLI flag spellings.
pub const CLI_PARAMS: [(&str, &str); 10] = [
    ("namespace", "--namespace"),
    ("toResource", "--to"),
    ("toNamespace", "--to-namespace"),
    ("method", "--method"),
    ("path", "--path"),
    ("scheme", "--scheme"),
    ("authority", "--authority"),
    ("maxRps", "--max-rps"),
    ("from", "--from"),
    ("from_namespace", "--from-namespace"),
];

/// CLI flag of a query field.
pub fn cli_flag(field: &str) -> Option<&'static str> {
    CLI_PARAMS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, flag)| *flag)
}

const REQUEST_FIELDS: &[&str] = &[
    "namespace",
    "toResource",
    "toNamespace",
    "method",
    "path",
    "scheme",
    "authority",
    "maxRps",
];

/// Order in which query fields are printed for `cmd`.
pub fn display_order(cmd: &str) -> &'static [&'static str] {
    match cmd {
        "tap" | "top" => REQUEST_FIELDS,
        "routes" => &["namespace", "toResource", "toNamespace"],
        "stat" => &[
            "namespace",
            "from",
            "from_namespace",
            "toResource",
            "toNamespace",
        ],
        _ => &[],
    }
}

/// Caption shown above the command.
pub fn caption(cmd: &str) -> String {
    format!("Current {} query", start_case(cmd))
}

/// The CLI command equivalent to `query`, or `None` without a resource.
///
/// ```
/// use std::collections::BTreeMap;
/// use meshview_lib::cli_query::cli_command;
///
/// let query = BTreeMap::from([
///     ("namespace".to_string(), "emojivoto".to_string()),
///     ("method".to_string(), "GET".to_string()),
///     ("path".to_string(), String::new()),
/// ]);
/// assert_eq!(
///     cli_command("tap", "deploy/web", &query, "linkerd").as_deref(),
///     Some("linkerd tap deploy/web --namespace emojivoto --method GET")
/// );
/// ```
pub fn cli_command(
    cmd: &str,
    resource: &str,
    query: &BTreeMap<String, String>,
    controller_namespace: &str,
) -> Option<String> {
    if resource.is_empty() {
        return None;
    }

    let mut command = format!("linkerd {} {}", cmd, resource);
    for field in display_order(cmd) {
        let (Some(flag), Some(value)) = (cli_flag(field), query.get(*field)) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        command.push_str(&format!(" {} {}", flag, value));
    }
    if controller_namespace != DEFAULT_CONTROLLER_NAMESPACE {
        command.push_str(&format!(" --linkerd-namespace {}", controller_namespace));
    }
    Some(command)
}
