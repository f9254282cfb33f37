//! Classification of a fetched page by color and disposition

use serde::Serialize;

use crate::colors::{is_primary_name, Disposition};
use crate::query::RetrieveOptions;
use crate::response::Record;

/// An open record annotated with whether its color is primary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRecord {
    pub id: u64,
    pub color: String,
    pub disposition: Disposition,
    pub is_primary: bool,
}

impl From<Record> for OpenRecord {
    fn from(record: Record) -> Self {
        let is_primary = is_primary_name(&record.color);
        Self {
            id: record.id,
            color: record.color,
            disposition: record.disposition,
            is_primary,
        }
    }
}

/// The page-derived part of a retrieve response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub ids: Vec<u64>,
    pub open: Vec<OpenRecord>,
    pub closed_primary_count: usize,
}

impl Summary {
    /// Attach page links to produce the caller-facing response.
    pub fn into_response(
        self,
        previous_page: Option<u64>,
        next_page: Option<u64>,
    ) -> RetrieveResponse {
        RetrieveResponse {
            ids: self.ids,
            open: self.open,
            closed_primary_count: self.closed_primary_count,
            previous_page,
            next_page,
        }
    }
}

/// Result of a single retrieve call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveResponse {
    pub ids: Vec<u64>,
    pub open: Vec<OpenRecord>,
    pub closed_primary_count: usize,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
}

/// Filter `records` by the requested colors and classify what remains.
///
/// The color filter is local: it only narrows the page that was fetched.
pub fn aggregate(records: Vec<Record>, options: &RetrieveOptions) -> Summary {
    let mut summary = Summary::default();

    let kept = records.into_iter().filter(|record| match &options.colors {
        Some(colors) => colors.iter().any(|c| *c == record.color),
        None => true,
    });

    for record in kept {
        summary.ids.push(record.id);

        match record.disposition {
            Disposition::Open => summary.open.push(OpenRecord::from(record)),
            Disposition::Closed => {
                if is_primary_name(&record.color) {
                    summary.closed_primary_count += 1;
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, color: &str, disposition: Disposition) -> Record {
        Record {
            id,
            color: color.to_string(),
            disposition,
        }
    }

    fn sample_page() -> Vec<Record> {
        vec![
            record(1, "red", Disposition::Open),
            record(2, "brown", Disposition::Closed),
            record(3, "blue", Disposition::Closed),
            record(4, "green", Disposition::Open),
            record(5, "yellow", Disposition::Closed),
            record(6, "teal", Disposition::Closed),
            record(7, "teal", Disposition::Open),
        ]
    }

    #[test]
    fn test_aggregate_without_filter_keeps_everything() {
        let summary = aggregate(sample_page(), &RetrieveOptions::default());

        assert_eq!(summary.ids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(summary.open.len(), 3);
        assert_eq!(summary.closed_primary_count, 2);
    }

    #[test]
    fn test_open_records_are_annotated() {
        let summary = aggregate(sample_page(), &RetrieveOptions::default());
        let flags: Vec<(u64, bool)> = summary.open.iter().map(|r| (r.id, r.is_primary)).collect();

        assert_eq!(flags, vec![(1, true), (4, false), (7, false)]);
        assert!(summary
            .open
            .iter()
            .all(|r| r.disposition == Disposition::Open));
    }

    #[test]
    fn test_color_filter_is_applied_locally() {
        let options = RetrieveOptions::default().with_colors(["blue", "teal"]);
        let summary = aggregate(sample_page(), &options);

        assert_eq!(summary.ids, vec![3, 6, 7]);
        assert_eq!(summary.open.len(), 1);
        assert_eq!(summary.open[0].id, 7);
        assert_eq!(summary.closed_primary_count, 1);
    }

    #[test]
    fn test_unknown_closed_color_is_not_counted() {
        let records = vec![
            record(1, "teal", Disposition::Closed),
            record(2, "magenta", Disposition::Closed),
        ];
        let summary = aggregate(records, &RetrieveOptions::default());

        assert_eq!(summary.ids, vec![1, 2]);
        assert_eq!(summary.closed_primary_count, 0);
    }

    #[test]
    fn test_empty_color_filter_drops_everything() {
        let options = RetrieveOptions::default().with_colors(Vec::<String>::new());
        let summary = aggregate(sample_page(), &options);

        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_response_serializes_null_links() {
        let records = vec![record(1, "red", Disposition::Closed)];
        let response = aggregate(records, &RetrieveOptions::default()).into_response(None, Some(2));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "ids": [1],
                "open": [],
                "closedPrimaryCount": 1,
                "previousPage": null,
                "nextPage": 2
            })
        );
    }

    #[test]
    fn test_open_record_serializes_camel_case() {
        let open = OpenRecord::from(record(9, "red", Disposition::Open));
        let json = serde_json::to_value(&open).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 9, "color": "red", "disposition": "open", "isPrimary": true})
        );
    }
}
