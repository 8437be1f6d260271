//! Job board and resource directory filtering over the seeded catalog.

use proptest::prelude::*;

use worklink::domain::{catalog, JobListing};
use worklink::filter::{filter_records, JobsController, ResourcesController, TagSelection};

fn jobs() -> JobsController {
    JobsController::new(catalog::jobs())
}

fn resources() -> ResourcesController {
    ResourcesController::new(catalog::resources())
}

fn job_ids(controller: &JobsController) -> Vec<u32> {
    controller.visible().map(|job| job.id).collect()
}

fn resource_ids(controller: &ResourcesController) -> Vec<u32> {
    controller.visible().map(|resource| resource.id).collect()
}

#[test]
fn query_narrows_jobs_by_title() {
    let mut controller = jobs();
    controller.set_query("data entry");
    assert_eq!(job_ids(&controller), vec![3]);
    assert_eq!(controller.visible_count(), 1);
}

#[test]
fn tag_admits_every_job_carrying_it() {
    let mut controller = jobs();
    controller.toggle_tag("PWDs");
    assert_eq!(job_ids(&controller), vec![1, 2, 3]);

    // Any active tag is enough.
    controller.toggle_tag("Indigenous Peoples");
    assert_eq!(job_ids(&controller), vec![1, 2, 3, 4]);
}

#[test]
fn tag_and_query_combine() {
    let mut controller = jobs();
    controller.toggle_tag("Youth");
    controller.set_query("city");
    assert_eq!(job_ids(&controller), vec![2, 4]);

    controller.set_query("quezon");
    assert_eq!(job_ids(&controller), vec![2]);
}

#[test]
fn resource_tab_and_query_combine() {
    let mut controller = resources();
    controller.select_category("training");
    assert_eq!(resource_ids(&controller), vec![2]);

    controller.select_category("all");
    controller.set_query("programs");
    assert_eq!(resource_ids(&controller), vec![2, 4]);

    controller.select_category("training");
    assert_eq!(resource_ids(&controller), vec![2]);
}

#[test]
fn unknown_resource_tab_admits_nothing() {
    let mut controller = resources();
    controller.select_category("training");
    controller.select_category("webinars");

    assert_eq!(controller.selection().tab_id(), "webinars");
    assert!(controller.has_no_matches());

    controller.clear_filters();
    assert_eq!(controller.selection().tab_id(), "all");
    assert_eq!(resource_ids(&controller), vec![1, 2, 3, 4, 5]);
}

#[test]
fn descriptions_are_searched_for_resources_only() {
    let mut job_board = jobs();
    job_board.set_query("mentorship");
    assert!(job_board.has_no_matches());

    let mut directory = resources();
    directory.set_query("mentorship");
    assert_eq!(resource_ids(&directory), vec![3]);
}

#[test]
fn no_matches_is_reported() {
    let mut controller = jobs();
    controller.set_query("astronaut");
    assert!(controller.has_no_matches());
    assert!(controller.is_filtered());
}

#[test]
fn clear_filters_restores_full_catalog() {
    let mut controller = jobs();
    controller.toggle_tag("Youth");
    controller.set_query("cebu");
    controller.clear_filters();

    assert_eq!(job_ids(&controller), vec![1, 2, 3, 4]);
    assert_eq!(controller.query(), "");
    assert!(!controller.is_filtered());

    let mut directory = resources();
    directory.select_category("legal");
    directory.set_query("guide");
    directory.clear_filters();
    assert_eq!(resource_ids(&directory), vec![1, 2, 3, 4, 5]);
}

fn any_tag() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Full-time"),
        Just("Part-time"),
        Just("PWDs"),
        Just("Senior Citizens"),
        Just("Youth"),
        Just("Work from Home"),
        Just("Rural Communities"),
        Just("Indigenous Peoples"),
    ]
}

fn any_tab() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("all"),
        Just("training"),
        Just("legal"),
        Just("employment"),
        Just("entrepreneurship"),
        Just("accessibility"),
        Just("webinars"),
    ]
}

proptest! {
    #[test]
    fn prop_visible_jobs_match_every_active_filter(
        query in "[a-zA-Z ]{0,6}",
        tags in prop::collection::vec(any_tag(), 0..4),
    ) {
        let mut controller = jobs();
        for tag in &tags {
            controller.toggle_tag(tag);
        }
        controller.set_query(query.clone());

        let needle = query.to_lowercase();
        for job in controller.visible() {
            let text_hit = [&job.title, &job.company, &job.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            prop_assert!(text_hit);
            let active = controller.selection().active();
            prop_assert!(active.is_empty() || active.iter().any(|tag| job.has_tag(tag)));
        }
    }

    #[test]
    fn prop_filtering_the_filtered_jobs_changes_nothing(
        query in "[a-zA-Z ]{0,6}",
        tags in prop::collection::vec(any_tag(), 0..4),
    ) {
        let mut selection = TagSelection::default();
        for tag in &tags {
            selection.toggle(tag);
        }
        let records = catalog::jobs();
        let first: Vec<JobListing> = filter_records(&records, &query, &selection)
            .into_iter()
            .cloned()
            .collect();
        let second: Vec<&JobListing> = filter_records(&first, &query, &selection);

        let first_ids: Vec<u32> = first.iter().map(|job| job.id).collect();
        let second_ids: Vec<u32> = second.iter().map(|job| job.id).collect();
        prop_assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn prop_controller_matches_a_second_filtering_pass(query in "[a-z ]{0,8}", tab in any_tab()) {
        let mut controller = resources();
        controller.select_category(tab);
        controller.set_query(query.clone());
        let visible: Vec<_> = controller.visible().cloned().collect();
        let again: Vec<u32> = filter_records(&visible, &query, controller.selection())
            .into_iter()
            .map(|resource| resource.id)
            .collect();
        prop_assert_eq!(resource_ids(&controller), again);
    }

    #[test]
    fn prop_toggling_a_tag_twice_restores_the_listing(
        query in "[a-z]{0,4}",
        tag in any_tag(),
    ) {
        let mut controller = jobs();
        controller.set_query(query);
        let before = job_ids(&controller);
        controller.toggle_tag(tag);
        controller.toggle_tag(tag);
        prop_assert_eq!(before, job_ids(&controller));
    }

    #[test]
    fn prop_clear_filters_always_restores_everything(
        query in "[a-z]{0,5}",
        tab in any_tab(),
    ) {
        let mut controller = resources();
        controller.select_category(tab);
        controller.set_query(query);
        controller.clear_filters();
        prop_assert_eq!(resource_ids(&controller), vec![1, 2, 3, 4, 5]);
        prop_assert!(!controller.is_filtered());
    }
}
