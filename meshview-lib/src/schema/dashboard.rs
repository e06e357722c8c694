//! Links out to the metrics dashboards.

use std::sync::Arc;

use crate::link::LinkBuilder;
use crate::model::{MetricRow, ResourceKind};
use crate::table::{Cell, Column};

/// Column id of the dashboard-link column.
pub const DASHBOARD_COLUMN: &str = "grafanaDashboard";

/// Dashboard path for one resource.
///
/// ```
/// use meshview_lib::schema::dashboard_path;
///
/// assert_eq!(
///     dashboard_path("deployment", "web", "emojivoto"),
///     "/grafana/dashboard/db/linkerd-deployment?var-deployment=web&var-namespace=emojivoto"
/// );
/// ```
pub fn dashboard_path(resource_type: &str, name: &str, namespace: &str) -> String {
    let resource_type = resource_type.to_lowercase();
    let dashboard = resource_type.replace(' ', "-");
    let variable = resource_type.replace(' ', "_");
    let mut path = format!(
        "/grafana/dashboard/db/linkerd-{}?var-{}={}",
        dashboard,
        variable,
        urlencoding::encode(name)
    );
    if !namespace.is_empty() {
        path.push_str("&var-namespace=");
        path.push_str(&urlencoding::encode(namespace));
    }
    path
}

/// Whether a row of a `resource` table gets a dashboard link.
///
/// Authorities always do; other rows only once they are meshed and have pods.
pub fn has_dashboard(resource: ResourceKind, row: &MetricRow) -> bool {
    resource == ResourceKind::Authority || (row.added && row.total_pods() != Some(0))
}

pub(super) fn dashboard_column(
    resource: ResourceKind,
    links: Arc<dyn LinkBuilder>,
) -> Column<MetricRow> {
    Column::keyed(DASHBOARD_COLUMN, "Grafana")
        .numeric()
        .render_with(move |row: &MetricRow| {
            if !has_dashboard(resource, row) {
                return Cell::Empty;
            }
            let path = dashboard_path(&row.resource_type, &row.name, &row.namespace);
            Cell::Link(links.external_link(&path, "Grafana"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrefixedLinks;
    use crate::model::PodCounts;

    fn row(added: bool, total_pods: Option<u64>) -> MetricRow {
        MetricRow {
            added,
            pods: total_pods.map(|total_pods| PodCounts {
                meshed_pods: total_pods,
                total_pods,
            }),
            resource_type: "deployment".into(),
            namespace: "emojivoto".into(),
            ..MetricRow::named("web")
        }
    }

    #[test]
    fn test_path_encoding_and_spaces() {
        assert_eq!(
            dashboard_path("Replica Set", "a b", ""),
            "/grafana/dashboard/db/linkerd-replica-set?var-replica_set=a%20b"
        );
    }

    #[test]
    fn test_has_dashboard() {
        assert!(has_dashboard(ResourceKind::Deployment, &row(true, Some(2))));
        assert!(has_dashboard(ResourceKind::Deployment, &row(true, None)));
        assert!(!has_dashboard(ResourceKind::Deployment, &row(true, Some(0))));
        assert!(!has_dashboard(ResourceKind::Deployment, &row(false, Some(2))));
        assert!(has_dashboard(ResourceKind::Authority, &row(false, Some(0))));
    }

    #[test]
    fn test_column_renders_nothing_for_unmeshed() {
        let column = dashboard_column(ResourceKind::Deployment, Arc::new(PrefixedLinks::default()));
        assert_eq!(column.render_cell(&row(false, Some(1))), Cell::Empty);

        let cell = column.render_cell(&row(true, Some(1)));
        let link = cell.link().unwrap();
        assert!(link.external);
        assert_eq!(
            link.href,
            "/grafana/dashboard/db/linkerd-deployment?var-deployment=web&var-namespace=emojivoto"
        );
    }
}
