//! Mesh resource kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The mesh entity category a table displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Namespace,
    Deployment,
    Pod,
    ReplicationController,
    StatefulSet,
    DaemonSet,
    Job,
    CronJob,
    ReplicaSet,
    Service,
    Authority,
    TrafficSplit,
    /// Rows of several kinds in one table.
    MultiResource,
}

/// Human readable titles of a resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Titles {
    pub singular: String,
    pub plural: String,
}

impl ResourceKind {
    /// All kinds, in menu order.
    pub const ALL: [ResourceKind; 13] = [
        ResourceKind::Namespace,
        ResourceKind::Deployment,
        ResourceKind::Pod,
        ResourceKind::ReplicationController,
        ResourceKind::StatefulSet,
        ResourceKind::DaemonSet,
        ResourceKind::Job,
        ResourceKind::CronJob,
        ResourceKind::ReplicaSet,
        ResourceKind::Service,
        ResourceKind::Authority,
        ResourceKind::TrafficSplit,
        ResourceKind::MultiResource,
    ];

    /// Canonical lowercase singular name, as used in API paths.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Namespace => "namespace",
            ResourceKind::Deployment => "deployment",
            ResourceKind::Pod => "pod",
            ResourceKind::ReplicationController => "replicationcontroller",
            ResourceKind::StatefulSet => "statefulset",
            ResourceKind::DaemonSet => "daemonset",
            ResourceKind::Job => "job",
            ResourceKind::CronJob => "cronjob",
            ResourceKind::ReplicaSet => "replicaset",
            ResourceKind::Service => "service",
            ResourceKind::Authority => "authority",
            ResourceKind::TrafficSplit => "trafficsplit",
            ResourceKind::MultiResource => "multi_resource",
        }
    }

    /// Short CLI name (`deploy`, `sts`, ...).
    pub fn short_name(self) -> &'static str {
        match self {
            ResourceKind::Namespace => "ns",
            ResourceKind::Deployment => "deploy",
            ResourceKind::Pod => "po",
            ResourceKind::ReplicationController => "rc",
            ResourceKind::StatefulSet => "sts",
            ResourceKind::DaemonSet => "ds",
            ResourceKind::Job => "job",
            ResourceKind::CronJob => "cj",
            ResourceKind::ReplicaSet => "rs",
            ResourceKind::Service => "svc",
            ResourceKind::Authority => "au",
            ResourceKind::TrafficSplit => "ts",
            ResourceKind::MultiResource => "multi_resource",
        }
    }

    fn words(self) -> &'static str {
        match self {
            ResourceKind::ReplicationController => "replication controller",
            ResourceKind::StatefulSet => "stateful set",
            ResourceKind::DaemonSet => "daemon set",
            ResourceKind::CronJob => "cron job",
            ResourceKind::ReplicaSet => "replica set",
            ResourceKind::TrafficSplit => "traffic split",
            ResourceKind::MultiResource => "resource",
            other => other.as_str(),
        }
    }

    /// Friendly singular and plural titles ("Traffic Split", "Authorities").
    pub fn titles(self) -> Titles {
        let singular = start_case(self.words());
        let plural = match self {
            ResourceKind::Authority => "Authorities".to_string(),
            _ => format!("{}s", singular),
        };
        Titles { singular, plural }
    }
}

/// Short name for a row's type string, falling back to the string itself.
pub fn short_type_name(resource_type: &str) -> &str {
    match resource_type.parse::<ResourceKind>() {
        Ok(kind) => kind.short_name(),
        Err(_) => resource_type,
    }
}

/// Upper-cases the first letter of every word and joins words with a space.
///
/// Words are split on non-alphanumeric characters and on lower-to-upper case
/// boundaries, so `"maxRps"` becomes `"Max Rps"`.
pub fn start_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ModelError;

    /// Accepts canonical names, plurals and short names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = match lower.as_str() {
            "authorities" => "authority",
            "multi_resources" => "multi_resource",
            other => other.strip_suffix('s').filter(|_| other != "ns").unwrap_or(other),
        };
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.short_name() == name || kind.short_name() == lower)
            .ok_or_else(|| ModelError::UnknownResource(s.to_string()))
    }
}
