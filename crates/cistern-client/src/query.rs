//! Query parameters shared across list and get endpoints.

use serde::Serialize;

/// Query parameters for listing resources.
///
/// Unset fields are omitted from the query string; the server applies its
/// own defaults. `filter` is passed through verbatim as the `where`
/// parameter (`name:foo` syntax) — the client does not parse it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    /// Field to sort by, `-` prefix for descending (e.g. `-created_at`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Maximum number of rows to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Filter criteria (`field:value`).
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Comma-separated relations to embed in each record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<String>,
}

/// Query parameters for fetching a single resource.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetQuery {
    /// Filter criteria (`field:value`).
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Comma-separated relations to embed in the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serializes_as_where() {
        let query = ListQuery {
            filter: Some("name:foo".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["where"], "name:foo");
        assert!(value.get("filter").is_none());
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let value = serde_json::to_value(ListQuery::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
