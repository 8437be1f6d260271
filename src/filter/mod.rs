//! Search-and-filter logic shared by the listing screens.
//!
//! # Modules
//!
//! - [`predicate`]: Case-insensitive text matching and highlight ranges
//! - [`selection`]: Tag (OR) and category (single-select) constraints
//! - [`controller`]: Listing controller recomputing the visible subset
//!
//! # Example
//!
//! ```rust
//! use worklink::domain::catalog;
//! use worklink::filter::JobsController;
//!
//! let mut jobs = JobsController::new(catalog::jobs());
//! jobs.toggle_tag("PWDs");
//! assert_eq!(jobs.visible().map(|j| j.id).collect::<Vec<_>>(), vec![1, 2, 3]);
//! jobs.clear_filters();
//! assert_eq!(jobs.visible_count(), 4);
//! ```

pub mod controller;
pub mod predicate;
pub mod selection;

pub use controller::{filter_records, JobsController, ListingController, ResourcesController};
pub use predicate::{highlight_ranges, matches_text, Searchable};
pub use selection::{CategorySelection, Selection, TagSelection};
