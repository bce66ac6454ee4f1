//! Selection validator.
//!
//! Pure predicate deciding whether an export or import action applies to the
//! current selection. Hosts use it to gate action visibility; the actions
//! re-check it before doing any work.

use crate::host::{NodeKind, SelectionContext};
use crate::models::{Direction, SQLSERVER_URL_PREFIX};

/// True when `direction` can run against the current selection.
///
/// Export applies to a database-level node, import to the server root; both
/// require a SQL Server connection URL. An empty or foreign selection is
/// simply not applicable.
pub fn is_applicable(selection: &dyn SelectionContext, direction: Direction) -> bool {
    let expected = match direction {
        Direction::Export => NodeKind::Database,
        Direction::Import => NodeKind::Server,
    };
    if selection.node_kind() != Some(expected) {
        return false;
    }

    selection
        .data_source()
        .is_some_and(|ds| ds.url.starts_with(SQLSERVER_URL_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DataSource;

    struct FakeSelection {
        kind: Option<NodeKind>,
        url: Option<&'static str>,
    }

    impl SelectionContext for FakeSelection {
        fn node_kind(&self) -> Option<NodeKind> {
            self.kind
        }

        fn node_name(&self) -> Option<String> {
            Some("Sales".to_string())
        }

        fn data_source(&self) -> Option<DataSource> {
            self.url.map(|url| DataSource {
                id: "ds".to_string(),
                url: url.to_string(),
                auth_provider: None,
            })
        }
    }

    #[test]
    fn test_export_applies_to_database_node_on_sqlserver() {
        let selection = FakeSelection {
            kind: Some(NodeKind::Database),
            url: Some("jdbc:sqlserver://host:1433"),
        };
        assert!(is_applicable(&selection, Direction::Export));
        assert!(!is_applicable(&selection, Direction::Import));
    }

    #[test]
    fn test_import_applies_to_server_node_on_sqlserver() {
        let selection = FakeSelection {
            kind: Some(NodeKind::Server),
            url: Some("jdbc:sqlserver://host"),
        };
        assert!(is_applicable(&selection, Direction::Import));
        assert!(!is_applicable(&selection, Direction::Export));
    }

    #[test]
    fn test_wrong_scheme_is_not_applicable() {
        let selection = FakeSelection {
            kind: Some(NodeKind::Database),
            url: Some("jdbc:postgresql://host:5432/db"),
        };
        assert!(!is_applicable(&selection, Direction::Export));
    }

    #[test]
    fn test_empty_selection_is_not_applicable() {
        let selection = FakeSelection {
            kind: None,
            url: None,
        };
        assert!(!is_applicable(&selection, Direction::Export));
        assert!(!is_applicable(&selection, Direction::Import));
    }

    #[test]
    fn test_node_without_data_source_is_not_applicable() {
        let selection = FakeSelection {
            kind: Some(NodeKind::Database),
            url: None,
        };
        assert!(!is_applicable(&selection, Direction::Export));
    }

    #[test]
    fn test_other_node_kind_is_not_applicable() {
        let selection = FakeSelection {
            kind: Some(NodeKind::Other),
            url: Some("jdbc:sqlserver://host"),
        };
        assert!(!is_applicable(&selection, Direction::Export));
        assert!(!is_applicable(&selection, Direction::Import));
    }
}
