//! Statically seeded job and resource records.
//!
//! The catalog is the only source of listings; nothing is fetched or stored.
//! Each call returns a fresh copy so a screen can own its records outright.

use super::listing::{JobKind, JobListing, ResourceKind, ResourceListing};

/// Resource tabs offered on the Resources screen as `(id, label)`.
///
/// `all` is the default tab; every other id is a [`ResourceKind`] identifier.
pub const RESOURCE_TABS: [(&str, &str); 3] = [
    ("all", "All Resources"),
    ("training", "Training"),
    ("legal", "Legal Resources"),
];

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(ToString::to_string).collect()
}

fn resource(
    id: u32,
    title: &str,
    organization: &str,
    category: &str,
    description: &str,
    kind: ResourceKind,
) -> ResourceListing {
    ResourceListing {
        id,
        title: title.to_string(),
        organization: organization.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        kind,
    }
}

/// Returns the seeded job postings in display order.
#[must_use]
pub fn jobs() -> Vec<JobListing> {
    vec![
        JobListing {
            id: 1,
            title: "Customer Service Representative".into(),
            company: "TeleCare Solutions".into(),
            location: "Makati City".into(),
            posted_label: "2 days ago".into(),
            tags: tags(&["Full-time", "PWDs", "Senior Citizens"]),
            description: "Remote position ideal for individuals with mobility challenges. Flexible hours and comprehensive training provided.".into(),
            kind: JobKind::Remote,
        },
        JobListing {
            id: 2,
            title: "Administrative Assistant".into(),
            company: "Inclusive Workspace Inc.".into(),
            location: "Quezon City".into(),
            posted_label: "1 week ago".into(),
            tags: tags(&["Part-time", "PWDs", "Youth"]),
            description: "Entry-level position with mentorship program. Accessible office with accommodations for various disabilities.".into(),
            kind: JobKind::Office,
        },
        JobListing {
            id: 3,
            title: "Data Entry Specialist".into(),
            company: "Digital Solutions PH".into(),
            location: "Taguig City".into(),
            posted_label: "3 days ago".into(),
            tags: tags(&["Work from Home", "PWDs", "Senior Citizens", "Rural Communities"]),
            description: "Work remotely with flexible hours. Training provided for all technical skills required.".into(),
            kind: JobKind::Remote,
        },
        JobListing {
            id: 4,
            title: "Community Coordinator".into(),
            company: "Bayanihan Foundation".into(),
            location: "Cebu City".into(),
            posted_label: "5 days ago".into(),
            tags: tags(&["Full-time", "Youth", "Indigenous Peoples"]),
            description: "Engage with local communities to develop sustainable livelihood programs. Transportation allowance provided.".into(),
            kind: JobKind::Field,
        },
    ]
}

/// Returns the seeded resource directory in display order.
#[must_use]
pub fn resources() -> Vec<ResourceListing> {
    vec![
        resource(
            1,
            "PWD Employment Rights Guide",
            "Department of Labor and Employment",
            "Legal Resources",
            "Comprehensive guide on employment rights and benefits for Persons with Disabilities in the Philippines.",
            ResourceKind::Legal,
        ),
        resource(
            2,
            "Senior Citizen Job Training",
            "National Council of Senior Citizens",
            "Training",
            "Free digital skills training programs designed specifically for senior citizens seeking employment.",
            ResourceKind::Training,
        ),
        resource(
            3,
            "Youth Entrepreneurship Program",
            "Department of Trade and Industry",
            "Entrepreneurship",
            "Funding and mentorship opportunities for young entrepreneurs from marginalized communities.",
            ResourceKind::Entrepreneurship,
        ),
        resource(
            4,
            "Rural Employment Initiative",
            "Department of Agriculture",
            "Employment Programs",
            "Agricultural employment programs specifically designed for rural communities and indigenous peoples.",
            ResourceKind::Employment,
        ),
        resource(
            5,
            "Accessibility Tools for PWDs",
            "National Council on Disability Affairs",
            "Accessibility",
            "Free resources and tools to help PWDs navigate digital platforms and job applications.",
            ResourceKind::Accessibility,
        ),
    ]
}

/// Distinct job tags in first-appearance order.
///
/// Used as the chip row of the Find Jobs screen.
#[must_use]
pub fn distinct_tags(jobs: &[JobListing]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in jobs.iter().flat_map(|job| job.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
