//! List-query interpretation: name filter vs. caller-supplied sort spec.

use crate::error::AppError;

/// Query key that switches a list request into exact-match filtering on the
/// `task` column. When present, any sort pairs are not consulted.
pub const FILTER_BY_NAME: &str = "filterByName";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn parse(token: &str) -> Result<SortDir, AppError> {
        match token {
            "asc" | "ascending" | "1" => Ok(SortDir::Asc),
            "desc" | "descending" | "-1" => Ok(SortDir::Desc),
            other => Err(AppError::InvalidSort(other.to_string())),
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// How a list request is interpreted.
#[derive(Clone, Debug)]
pub enum Listing {
    /// `filterByName` was present: match `task` exactly.
    ByTask(String),
    /// Remaining query pairs, in caller order, form the sort spec.
    Sorted(SortSpec),
}

impl Listing {
    /// Interpret raw query pairs against a resource's sortable columns.
    /// Pairs naming unknown columns are ignored; an unrecognized direction
    /// token is an operation failure.
    pub fn from_pairs(
        pairs: &[(String, String)],
        columns: &'static [&'static str],
    ) -> Result<Listing, AppError> {
        if let Some((_, name)) = pairs.iter().find(|(k, _)| k == FILTER_BY_NAME) {
            return Ok(Listing::ByTask(name.clone()));
        }
        let mut keys = Vec::new();
        for (key, token) in pairs {
            if let Some(col) = columns.iter().find(|c| **c == key.as_str()) {
                keys.push((*col, SortDir::parse(token)?));
            }
        }
        Ok(Listing::Sorted(SortSpec { keys }))
    }
}

/// Validated sort keys; columns are guaranteed to come from the whitelist.
#[derive(Clone, Debug, Default)]
pub struct SortSpec {
    keys: Vec<(&'static str, SortDir)>,
}

impl SortSpec {
    /// ORDER BY clause for the spec, or None when no keys were given.
    pub fn order_by(&self) -> Option<String> {
        if self.keys.is_empty() {
            return None;
        }
        let cols: Vec<String> = self
            .keys
            .iter()
            .map(|(col, dir)| format!("\"{}\" {}", col, dir.as_sql()))
            .collect();
        Some(format!("ORDER BY {}", cols.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["id", "task", "completed", "date", "finished"];

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn filter_by_name_wins_over_sort_pairs() {
        let listing =
            Listing::from_pairs(&pairs(&[("date", "desc"), ("filterByName", "buy milk")]), COLUMNS)
                .unwrap();
        match listing {
            Listing::ByTask(name) => assert_eq!(name, "buy milk"),
            other => panic!("expected ByTask, got {:?}", other),
        }
    }

    #[test]
    fn sort_pairs_keep_caller_order() {
        let listing =
            Listing::from_pairs(&pairs(&[("completed", "desc"), ("date", "asc")]), COLUMNS)
                .unwrap();
        let Listing::Sorted(spec) = listing else {
            panic!("expected Sorted");
        };
        assert_eq!(
            spec.order_by().unwrap(),
            "ORDER BY \"completed\" DESC, \"date\" ASC"
        );
    }

    #[test]
    fn numeric_direction_tokens_are_accepted() {
        let listing = Listing::from_pairs(&pairs(&[("date", "-1"), ("task", "1")]), COLUMNS).unwrap();
        let Listing::Sorted(spec) = listing else {
            panic!("expected Sorted");
        };
        assert_eq!(spec.order_by().unwrap(), "ORDER BY \"date\" DESC, \"task\" ASC");
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let listing = Listing::from_pairs(&pairs(&[("priority", "asc")]), COLUMNS).unwrap();
        let Listing::Sorted(spec) = listing else {
            panic!("expected Sorted");
        };
        assert!(spec.order_by().is_none());
    }

    #[test]
    fn bad_direction_token_is_an_error() {
        let err = Listing::from_pairs(&pairs(&[("date", "sideways")]), COLUMNS).unwrap_err();
        assert!(matches!(err, AppError::InvalidSort(t) if t == "sideways"));
    }

    #[test]
    fn no_pairs_means_unsorted() {
        let listing = Listing::from_pairs(&[], COLUMNS).unwrap();
        let Listing::Sorted(spec) = listing else {
            panic!("expected Sorted");
        };
        assert!(spec.order_by().is_none());
    }
}
