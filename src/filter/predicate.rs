//! Free-text matching over listing records.
//!
//! Matching is a case-insensitive substring test against a fixed set of fields per
//! record type. Jobs search title, company and location. Resources search title,
//! organization and description. The two sets deliberately differ.

use crate::domain::{JobListing, ResourceListing};

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// The fields a query is matched against, in no particular order.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for JobListing {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.company, &self.location]
    }
}

impl Searchable for ResourceListing {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.organization, &self.description]
    }
}

/// Whether any searchable field of `record` contains `query`, ignoring case.
///
/// An empty query matches every record.
///
/// ```
/// use worklink::domain::catalog;
/// use worklink::filter::matches_text;
///
/// let jobs = catalog::jobs();
/// assert!(matches_text(&jobs[0], "makati"));
/// assert!(!matches_text(&jobs[0], "mobility")); // descriptions are not searched for jobs
/// ```
pub fn matches_text<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Character ranges of `text` where `query` occurs, ignoring case.
///
/// Ranges are `(start, end)` character indices with an exclusive end and never
/// overlap. Returns nothing for an empty query, or when lowercasing changes the
/// character count of `text` (the indices would no longer line up).
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn job_search_covers_title_company_location() {
        let jobs = catalog::jobs();
        assert!(matches_text(&jobs[2], "DATA ENTRY"));
        assert!(matches_text(&jobs[2], "digital solutions"));
        assert!(matches_text(&jobs[2], "taguig"));
        assert!(!matches_text(&jobs[2], "remotely"));
    }

    #[test]
    fn resource_search_covers_description() {
        let resources = catalog::resources();
        assert!(matches_text(&resources[1], "digital skills"));
        assert!(matches_text(&resources[1], "national council"));
        assert!(!matches_text(&resources[1], "training programs for youth"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(catalog::jobs().iter().all(|job| matches_text(job, "")));
    }

    #[test]
    fn highlight_finds_every_occurrence() {
        assert_eq!(highlight_ranges("Data Entry Data", "data"), vec![(0, 4), (11, 15)]);
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(highlight_ranges("Data", "").is_empty());
        assert!(highlight_ranges("Data", "database").is_empty());
    }
}
