//! Listing controller: a record set plus query and selection state.
//!
//! The visible subset is recomputed eagerly after every mutation, so readers never
//! observe a stale result. Filtering preserves the original record order.

use super::predicate::{matches_text, Searchable};
use super::selection::{CategorySelection, Selection, TagSelection};
use crate::domain::{JobListing, ResourceListing};

/// Returns the records passing both the text query and the selection, in order.
///
/// ```
/// use worklink::domain::catalog;
/// use worklink::filter::{filter_records, TagSelection};
///
/// let jobs = catalog::jobs();
/// let hits = filter_records(&jobs, "data entry", &TagSelection::default());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Data Entry Specialist");
/// ```
pub fn filter_records<'a, T, S>(records: &'a [T], query: &str, selection: &S) -> Vec<&'a T>
where
    T: Searchable,
    S: Selection<T>,
{
    records
        .iter()
        .filter(|record| passes(*record, query, selection))
        .collect()
}

/// The single filter predicate: selection first, then text.
fn passes<T, S>(record: &T, query: &str, selection: &S) -> bool
where
    T: Searchable,
    S: Selection<T>,
{
    selection.admits(record) && matches_text(record, query)
}

/// Owns a static record set and the user's current filter state.
#[derive(Debug, Clone)]
pub struct ListingController<T, S> {
    records: Vec<T>,
    query: String,
    selection: S,
    /// Indices into `records` of the currently visible subset.
    visible: Vec<usize>,
}

/// Controller behind the Find Jobs screen.
pub type JobsController = ListingController<JobListing, TagSelection>;

/// Controller behind the Resources screen.
pub type ResourcesController = ListingController<ResourceListing, CategorySelection>;

impl<T, S> ListingController<T, S>
where
    T: Searchable,
    S: Selection<T> + Default,
{
    /// Creates a controller with an empty query and the default selection.
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        let mut controller = Self {
            records,
            query: String::new(),
            selection: S::default(),
            visible: vec![],
        };
        controller.recompute();
        controller
    }

    /// Replaces the query text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.recompute();
    }

    /// Appends one character to the query.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.recompute();
    }

    /// Removes the last character of the query, if any.
    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.recompute();
        }
    }

    /// Resets the query and the selection in a single step.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.selection.reset();
        self.recompute();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn selection(&self) -> &S {
        &self.selection
    }

    /// The full record set, unfiltered.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The visible records in original order.
    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(|&idx| &self.records[idx])
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Whether the empty-state indicator should be shown.
    #[must_use]
    pub fn has_no_matches(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether the query or selection differs from the defaults.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || !self.selection.is_default()
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!(
            "recompute_listing",
            total_records = self.records.len(),
            query_len = self.query.len()
        )
        .entered();

        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| passes(*record, &self.query, &self.selection))
            .map(|(idx, _)| idx)
            .collect();

        tracing::debug!(visible_count = self.visible.len(), "listing filter applied");
    }
}

impl JobsController {
    /// Toggles a job tag on or off.
    pub fn toggle_tag(&mut self, tag: &str) {
        let now_active = self.selection.toggle(tag);
        tracing::debug!(tag = %tag, now_active, "job tag toggled");
        self.recompute();
    }
}

impl ResourcesController {
    /// Switches the resource tab.
    ///
    /// An id that is neither `all` nor a resource kind is still selected; it
    /// admits no record, so the listing shows its empty state.
    pub fn select_category(&mut self, id: &str) {
        if self.selection.select(id) {
            tracing::debug!(tab = %id, "resource tab selected");
        } else {
            tracing::warn!(tab = %id, "unknown resource tab selected");
        }
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn job_ids(controller: &JobsController) -> Vec<u32> {
        controller.visible().map(|job| job.id).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let controller = JobsController::new(catalog::jobs());
        assert_eq!(job_ids(&controller), vec![1, 2, 3, 4]);
        assert!(!controller.is_filtered());
    }

    #[test]
    fn pwds_tag_selects_first_three_jobs() {
        let mut controller = JobsController::new(catalog::jobs());
        controller.toggle_tag("PWDs");
        assert_eq!(job_ids(&controller), vec![1, 2, 3]);
    }

    #[test]
    fn query_and_tags_combine_with_and() {
        let mut controller = JobsController::new(catalog::jobs());
        controller.toggle_tag("Youth");
        controller.set_query("city");
        assert_eq!(job_ids(&controller), vec![2, 4]);
        controller.set_query("quezon");
        assert_eq!(job_ids(&controller), vec![2]);
    }

    #[test]
    fn typing_edits_the_query_incrementally() {
        let mut controller = JobsController::new(catalog::jobs());
        for c in "cebu".chars() {
            controller.push_query_char(c);
        }
        assert_eq!(job_ids(&controller), vec![4]);
        controller.pop_query_char();
        assert_eq!(controller.query(), "ceb");
        controller.pop_query_char();
        controller.pop_query_char();
        controller.pop_query_char();
        controller.pop_query_char();
        assert_eq!(controller.query(), "");
        assert_eq!(controller.visible_count(), 4);
    }

    #[test]
    fn no_matches_then_clear() {
        let mut controller = ResourcesController::new(catalog::resources());
        controller.select_category("legal");
        controller.set_query("entrepreneur");
        assert!(controller.has_no_matches());
        controller.clear_filters();
        assert_eq!(controller.visible_count(), 5);
        assert_eq!(controller.selection().tab_id(), "all");
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn training_tab_then_all_restores_text_matches() {
        let mut controller = ResourcesController::new(catalog::resources());
        controller.set_query("programs");
        controller.select_category("training");
        let titles: Vec<&str> = controller.visible().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Senior Citizen Job Training"]);

        controller.select_category("all");
        let ids: Vec<u32> = controller.visible().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn unknown_tab_shows_empty_state_until_cleared() {
        let mut controller = ResourcesController::new(catalog::resources());
        controller.select_category("training");
        controller.select_category("webinars");
        assert!(controller.has_no_matches());
        assert_eq!(controller.selection().tab_id(), "webinars");
        assert!(controller.is_filtered());

        controller.clear_filters();
        assert_eq!(controller.visible_count(), 5);
        assert_eq!(controller.selection().tab_id(), "all");
    }

    #[test]
    fn controller_agrees_with_filter_records() {
        let jobs = catalog::jobs();
        let mut controller = JobsController::new(jobs.clone());
        controller.toggle_tag("Senior Citizens");
        controller.set_query("ta");
        let expected: Vec<u32> = filter_records(&jobs, "ta", controller.selection())
            .into_iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(job_ids(&controller), expected);
    }
}
