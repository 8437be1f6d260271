//! Tag and category constraints layered on top of text matching.

use crate::domain::{JobListing, ResourceKind, ResourceListing};

/// A non-text constraint a listing applies to each record.
pub trait Selection<T> {
    /// Whether `record` passes the constraint.
    fn admits(&self, record: &T) -> bool;

    /// Restores the default constraint, which admits every record.
    fn reset(&mut self);

    /// Whether the constraint is currently the default.
    fn is_default(&self) -> bool;
}

/// Active job tags. Matching is a logical OR across the selected tags.
///
/// The order of `active` is the order tags were switched on; it matters for
/// display only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    active: Vec<String>,
}

impl TagSelection {
    /// Switches `tag` on if inactive, off if active. Returns the new state.
    ///
    /// ```
    /// use worklink::filter::TagSelection;
    ///
    /// let mut tags = TagSelection::default();
    /// assert!(tags.toggle("Youth"));
    /// assert!(!tags.toggle("Youth"));
    /// assert!(tags.active().is_empty());
    /// ```
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.active.iter().position(|t| t == tag) {
            self.active.remove(pos);
            false
        } else {
            self.active.push(tag.to_string());
            true
        }
    }

    #[must_use]
    pub fn active(&self) -> &[String] {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, tag: &str) -> bool {
        self.active.iter().any(|t| t == tag)
    }
}

impl Selection<JobListing> for TagSelection {
    fn admits(&self, record: &JobListing) -> bool {
        self.active.is_empty() || self.active.iter().any(|tag| record.has_tag(tag))
    }

    fn reset(&mut self) {
        self.active.clear();
    }

    fn is_default(&self) -> bool {
        self.active.is_empty()
    }
}

/// The tab a [`CategorySelection`] points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    All,
    Kind(ResourceKind),
    /// An id naming no resource type. Admits nothing.
    Unknown(String),
}

/// Single-select resource tab, `all` by default.
///
/// Records pass when their type id equals the tab id exactly, so a tab id that
/// names no resource type is kept as selected and shows an empty listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    tab: Tab,
}

impl CategorySelection {
    /// Identifier of the `all` tab.
    pub const ALL_TAB: &'static str = "all";

    /// Selects a tab by id. Returns whether `id` is `all` or a resource kind.
    ///
    /// ```
    /// use worklink::filter::CategorySelection;
    ///
    /// let mut category = CategorySelection::default();
    /// assert!(category.select("legal"));
    /// assert!(!category.select("webinars"));
    /// assert_eq!(category.tab_id(), "webinars");
    /// ```
    pub fn select(&mut self, id: &str) -> bool {
        self.tab = if id == Self::ALL_TAB {
            Tab::All
        } else {
            match id.parse::<ResourceKind>() {
                Ok(kind) => Tab::Kind(kind),
                Err(_) => Tab::Unknown(id.to_string()),
            }
        };
        !matches!(self.tab, Tab::Unknown(_))
    }

    /// The selected tab id.
    #[must_use]
    pub fn tab_id(&self) -> &str {
        match &self.tab {
            Tab::All => Self::ALL_TAB,
            Tab::Kind(kind) => kind.as_str(),
            Tab::Unknown(id) => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<ResourceKind> {
        match &self.tab {
            Tab::Kind(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl Selection<ResourceListing> for CategorySelection {
    fn admits(&self, record: &ResourceListing) -> bool {
        match &self.tab {
            Tab::All => true,
            Tab::Kind(kind) => record.kind == *kind,
            Tab::Unknown(_) => false,
        }
    }

    fn reset(&mut self) {
        self.tab = Tab::All;
    }

    fn is_default(&self) -> bool {
        self.tab == Tab::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn tags_match_with_or_semantics() {
        let jobs = catalog::jobs();
        let mut tags = TagSelection::default();
        tags.toggle("Indigenous Peoples");
        tags.toggle("Part-time");
        let ids: Vec<u32> = jobs.iter().filter(|j| tags.admits(j)).map(|j| j.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn toggle_keeps_activation_order() {
        let mut tags = TagSelection::default();
        tags.toggle("Youth");
        tags.toggle("PWDs");
        tags.toggle("Full-time");
        tags.toggle("PWDs");
        assert_eq!(tags.active(), ["Youth", "Full-time"]);
    }

    #[test]
    fn unknown_category_admits_nothing() {
        let resources = catalog::resources();
        let mut category = CategorySelection::default();
        category.select("legal");
        assert!(!category.select("recipes"));
        assert_eq!(category.tab_id(), "recipes");
        assert_eq!(category.kind(), None);
        assert!(!category.is_default());
        assert!(resources.iter().all(|r| !category.admits(r)));

        category.reset();
        assert!(resources.iter().all(|r| category.admits(r)));
    }

    #[test]
    fn all_tab_is_default() {
        let mut category = CategorySelection::default();
        assert!(category.is_default());
        assert!(category.select("training"));
        assert!(!category.is_default());
        assert!(category.select("all"));
        assert!(Selection::<ResourceListing>::is_default(&category));
    }
}
