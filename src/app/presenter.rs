//! View model computation.
//!
//! Each screen is flattened into [`BodyLine`]s, one per terminal row. When the
//! body is taller than the pane it is windowed around the focused row, the same
//! way a long list keeps its selection in view.

use super::forms::{LoginControl, LoginForm, SignUpControl, SignUpForm, SignUpStep};
use super::modes::InputMode;
use super::screens::{
    DashboardControl, HomeScreen, JobsControl, JobsScreen, ProfileControl, ProfileScreen,
    ResourcesControl, ResourcesScreen, ScreenState,
};
use super::sidebar::SIDEBAR_ITEMS;
use super::state::AppState;
use crate::domain::catalog::RESOURCE_TABS;
use crate::domain::{
    AccessibilityOption, JobPreference, NotificationChannel, ProfileText, ScreenId,
};
use crate::filter::highlight_ranges;
use crate::ui::viewmodel::{
    BodyLine, ButtonRow, CardTitle, Chip, EmptyState, FieldRow, FooterInfo, HeaderInfo,
    MeterRow, Notice, NoticeTone, SidebarEntry, SidebarInfo, ToggleRow, UIViewModel,
};

/// Rows taken by the header, borders and footer.
const CHROME_ROWS: usize = 6;

/// Left margin used when wrapping chips.
const CHIP_MARGIN: usize = 2;

const APP_TITLE: &str = "WorkLink PH";

impl AppState {
    /// Computes the view model for a pane of `rows` by `cols` cells.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", screen = %self.current_screen(), rows, cols).entered();

        let body = match self.screen() {
            ScreenState::Splash(_) => splash_body(),
            ScreenState::Login(form) => login_body(form),
            ScreenState::SignUp(form) => signup_body(form),
            ScreenState::Home(home) => dashboard_body(home),
            ScreenState::FindJobs(jobs) => jobs_body(jobs, cols),
            ScreenState::Resources(resources) => resources_body(resources, cols),
            ScreenState::Profile(profile) => profile_body(profile),
        };

        let notice = self.compute_notice();
        let available = rows.saturating_sub(CHROME_ROWS + usize::from(notice.is_some()));

        UIViewModel {
            header: self.compute_header(),
            lines: window(body, available),
            sidebar: self.compute_sidebar(),
            notice,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let current = self.current_screen();
        let subtitle = match current {
            ScreenId::Splash => None,
            ScreenId::Login => Some("Log In"),
            ScreenId::SignUp => Some("Sign Up"),
            ScreenId::Home => Some("Home"),
            ScreenId::FindJobs => Some("Find Jobs"),
            ScreenId::Resources => Some("Resources"),
            ScreenId::Profile => Some("Profile"),
        };
        HeaderInfo {
            title: APP_TITLE.to_string(),
            subtitle: subtitle.map(ToString::to_string),
            has_menu: current.has_sidebar(),
        }
    }

    fn compute_sidebar(&self) -> Option<SidebarInfo> {
        let sidebar = self.screen().sidebar().filter(|s| s.is_open())?;
        let current = self.current_screen();
        let items = SIDEBAR_ITEMS
            .iter()
            .enumerate()
            .map(|(i, (id, label))| SidebarEntry {
                label: (*label).to_string(),
                is_current: *id == current,
                is_highlighted: i == sidebar.cursor(),
            })
            .collect();
        Some(SidebarInfo { items })
    }

    fn compute_notice(&self) -> Option<Notice> {
        let warning = |message: &str| Notice {
            message: message.to_string(),
            tone: NoticeTone::Warning,
        };
        match self.screen() {
            ScreenState::Login(form) => form.notice().map(warning),
            ScreenState::SignUp(form) => form.notice().map(warning),
            ScreenState::Profile(profile) => profile.saved().map(|ack| Notice {
                message: format!("{} ({} UTC)", ack.message, ack.at.format("%H:%M:%S")),
                tone: NoticeTone::Success,
            }),
            _ => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let menu = if self.current_screen().has_sidebar() {
            "  Ctrl+b: menu"
        } else {
            ""
        };
        let keybindings = match self.input_mode() {
            InputMode::Idle => "Esc: hide".to_string(),
            InputMode::Menu => "↑/↓ or j/k: move  Enter: open  Esc: close menu".to_string(),
            InputMode::Editing => {
                format!("Type to edit  Tab/↓: next  Shift+Tab/↑: previous  Enter: submit{menu}  Esc: hide")
            }
            InputMode::Normal => {
                format!("Tab/j: next  Shift+Tab/k: previous  Enter/Space: select{menu}  Esc/q: hide")
            }
        };
        FooterInfo { keybindings }
    }
}

/// Keeps at most `available` rows, centred on the focused row when possible.
fn window(lines: Vec<BodyLine>, available: usize) -> Vec<BodyLine> {
    if lines.len() <= available {
        return lines;
    }
    let focus = lines.iter().position(BodyLine::is_focused).unwrap_or(0);
    let start = focus.saturating_sub(available / 2);
    let end = (start + available).min(lines.len());
    let start = end.saturating_sub(available);
    lines.into_iter().skip(start).take(end - start).collect()
}

fn text(s: &str) -> BodyLine {
    BodyLine::Text {
        text: s.to_string(),
        dim: false,
    }
}

fn dim(s: &str) -> BodyLine {
    BodyLine::Text {
        text: s.to_string(),
        dim: true,
    }
}

fn heading(s: &str) -> BodyLine {
    BodyLine::Heading(s.to_string())
}

fn field(label: &str, value: &str, placeholder: &str, is_focused: bool) -> BodyLine {
    BodyLine::Field(FieldRow {
        label: label.to_string(),
        value: value.to_string(),
        placeholder: placeholder.to_string(),
        is_focused,
    })
}

fn secret(label: &str, value: &str, shown: bool, placeholder: &str, is_focused: bool) -> BodyLine {
    let display = if shown {
        value.to_string()
    } else {
        "•".repeat(value.chars().count())
    };
    field(label, &display, placeholder, is_focused)
}

fn button(label: &str, is_focused: bool, is_primary: bool) -> BodyLine {
    BodyLine::Button(ButtonRow {
        label: label.to_string(),
        is_focused,
        is_primary,
    })
}

fn toggle(label: &str, checked: bool, is_focused: bool) -> BodyLine {
    BodyLine::Toggle(ToggleRow {
        label: label.to_string(),
        checked,
        is_focused,
    })
}

/// Lays chips out left to right, starting a new row when `cols` would overflow.
fn wrap_chips(chips: Vec<Chip>, cols: usize) -> Vec<BodyLine> {
    let mut rows = vec![];
    let mut row: Vec<Chip> = vec![];
    let mut width = CHIP_MARGIN;
    for chip in chips {
        let chip_width = chip.label.chars().count() + 5;
        if !row.is_empty() && width + chip_width > cols {
            rows.push(BodyLine::Chips(std::mem::take(&mut row)));
            width = CHIP_MARGIN;
        }
        width += chip_width;
        row.push(chip);
    }
    if !row.is_empty() {
        rows.push(BodyLine::Chips(row));
    }
    rows
}

fn splash_body() -> Vec<BodyLine> {
    vec![
        BodyLine::Blank,
        BodyLine::Blank,
        heading(APP_TITLE),
        text("Inclusive Employment and Empowerment"),
        BodyLine::Blank,
        dim("Loading..."),
    ]
}

fn login_body(form: &LoginForm) -> Vec<BodyLine> {
    let focus = form.focused();
    let mut lines = vec![
        dim("Your unified Job platform"),
        BodyLine::Blank,
        field(
            "Email or Phone Number",
            form.email_or_phone(),
            "Enter your email or phone number",
            focus == LoginControl::EmailOrPhone,
        ),
    ];
    if let Some(hint) = form.identifier_hint() {
        lines.push(BodyLine::Hint(hint.to_string()));
    }
    lines.extend([
        secret(
            "Password",
            form.password(),
            form.show_password(),
            "Enter your password",
            focus == LoginControl::Password,
        ),
        toggle("Show password", form.show_password(), focus == LoginControl::ShowPassword),
        button("Forgot password?", focus == LoginControl::ForgotPassword, false),
        button("Log In", focus == LoginControl::Submit, true),
        BodyLine::Blank,
        dim("Don't have an account?"),
        button("Sign Up", focus == LoginControl::SignUpLink, false),
    ]);
    lines
}

fn signup_body(form: &SignUpForm) -> Vec<BodyLine> {
    let focus = form.focused();
    let mut lines = vec![
        heading("Create your account"),
        BodyLine::Progress {
            step: form.step().number(),
            total: 2,
        },
        BodyLine::Blank,
    ];

    match form.step() {
        SignUpStep::Details => {
            lines.push(field(
                "Full Name",
                form.full_name(),
                "Enter your full name",
                focus == SignUpControl::FullName,
            ));
            lines.push(field(
                "Email Address",
                form.email(),
                "Enter your email address",
                focus == SignUpControl::Email,
            ));
            if let Some(hint) = form.email_hint() {
                lines.push(BodyLine::Hint(hint.to_string()));
            }
            lines.push(field(
                "Phone Number",
                form.phone(),
                "09XXXXXXXXX",
                focus == SignUpControl::Phone,
            ));
            if let Some(hint) = form.phone_hint() {
                lines.push(BodyLine::Hint(hint.to_string()));
            }
            lines.push(button("Next", focus == SignUpControl::Next, true));
        }
        SignUpStep::Password => {
            lines.push(button("← Back", focus == SignUpControl::Back, false));
            lines.push(secret(
                "Create Password",
                form.password(),
                form.show_password(),
                "Create a strong password",
                focus == SignUpControl::Password,
            ));
            lines.push(toggle(
                "Show password",
                form.show_password(),
                focus == SignUpControl::ShowPassword,
            ));
            if let Some(strength) = form.strength() {
                lines.push(BodyLine::Meter(MeterRow {
                    level: strength.level(),
                    label: strength.label().to_string(),
                }));
            }
            lines.push(secret(
                "Confirm Password",
                form.confirm_password(),
                form.show_confirm_password(),
                "Confirm your password",
                focus == SignUpControl::Confirm,
            ));
            lines.push(toggle(
                "Show password",
                form.show_confirm_password(),
                focus == SignUpControl::ShowConfirm,
            ));
            if form.mismatch() {
                lines.push(BodyLine::Hint("Passwords do not match".to_string()));
            }
            lines.push(button(
                "Create Account",
                focus == SignUpControl::CreateAccount,
                true,
            ));
        }
    }

    lines.extend([
        BodyLine::Blank,
        dim("Already have an account?"),
        button("Log In", focus == SignUpControl::LogInLink, false),
    ]);
    lines
}

fn dashboard_body(home: &HomeScreen) -> Vec<BodyLine> {
    let focus = home.focused();
    let mut lines = vec![
        heading("Inclusive Employment & Empowerment"),
        dim("Connecting PWDs, Senior Citizens, Youth, and Marginalized Groups to Opportunities"),
        BodyLine::Blank,
        button("Find Jobs", focus == DashboardControl::FindJobs, true),
        button("Resources", focus == DashboardControl::Resources, false),
        BodyLine::Blank,
        heading("How WorkLink PH Helps You"),
    ];
    for (title, blurb) in [
        (
            "Inclusive Job Matching",
            "Find employment opportunities tailored to your specific needs and abilities.",
        ),
        (
            "Resource Directory",
            "Access a comprehensive list of services and support organizations.",
        ),
        (
            "Personalized Experience",
            "Customize your profile to receive recommendations that match your preferences.",
        ),
    ] {
        lines.push(text(title));
        lines.push(dim(blurb));
    }
    lines.push(BodyLine::Blank);
    lines.push(heading("Who We Serve"));
    for (group, blurb) in [
        (
            "Persons with Disabilities",
            "Accessible job listings with employers committed to inclusive workplaces.",
        ),
        (
            "Senior Citizens",
            "Flexible and part-time work opportunities suited to experience and lifestyle.",
        ),
        (
            "Youth",
            "Entry-level positions, internships, and training programs to build career paths.",
        ),
        (
            "Marginalized Groups",
            "Sustainable job opportunities and resources for underserved communities.",
        ),
    ] {
        lines.push(text(group));
        lines.push(dim(blurb));
    }
    lines.extend([
        BodyLine::Blank,
        heading("Start Your Journey Today"),
        dim("Create your profile and discover opportunities tailored for you"),
        button("Create Profile", focus == DashboardControl::CreateProfile, true),
    ]);
    lines
}

fn jobs_body(jobs: &JobsScreen, cols: usize) -> Vec<BodyLine> {
    let focus = jobs.focused();
    let listing = &jobs.listing;
    let mut lines = vec![
        heading("Find Inclusive Job Opportunities"),
        field(
            "Search",
            listing.query(),
            "Search jobs, companies, or locations...",
            focus == JobsControl::Search,
        ),
    ];

    let chips = jobs
        .chips()
        .iter()
        .enumerate()
        .map(|(i, tag)| Chip {
            label: tag.clone(),
            is_active: listing.selection().is_active(tag),
            is_focused: focus == JobsControl::Tag(i),
        })
        .collect();
    lines.extend(wrap_chips(chips, cols));

    lines.push(dim(&format!("{} jobs found  ·  Philippines", listing.visible_count())));
    lines.push(button("Clear Filters", focus == JobsControl::ClearFilters, false));

    if listing.has_no_matches() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Empty(EmptyState {
            message: "No jobs found matching your criteria.".to_string(),
            action: "Clear Filters".to_string(),
        }));
        return lines;
    }

    for job in listing.visible() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::CardTitle(CardTitle {
            text: job.title.clone(),
            highlight_ranges: highlight_ranges(&job.title, listing.query()),
            action: "View Details".to_string(),
            is_focused: focus == JobsControl::Details(job.id),
        }));
        lines.push(dim(&format!(
            "{}  ·  {}  ·  Posted {}  ·  {}",
            job.company,
            job.location,
            job.posted_label,
            job.kind.as_str()
        )));
        lines.push(dim(&format!("Tags: {}", job.tags.join(", "))));
        lines.push(text(&job.description));
    }
    lines
}

fn resources_body(resources: &ResourcesScreen, cols: usize) -> Vec<BodyLine> {
    let focus = resources.focused();
    let listing = &resources.listing;
    let mut lines = vec![
        heading("Employment Resources Directory"),
        field(
            "Search",
            listing.query(),
            "Search for resources...",
            focus == ResourcesControl::Search,
        ),
    ];

    let tabs = RESOURCE_TABS
        .iter()
        .enumerate()
        .map(|(i, (id, label))| Chip {
            label: (*label).to_string(),
            is_active: listing.selection().tab_id() == *id,
            is_focused: focus == ResourcesControl::Tab(i),
        })
        .collect();
    lines.extend(wrap_chips(tabs, cols));

    lines.push(dim(&format!("{} resources found", listing.visible_count())));
    lines.push(button(
        "Clear Filters",
        focus == ResourcesControl::ClearFilters,
        false,
    ));

    if listing.has_no_matches() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Empty(EmptyState {
            message: "No resources found matching your criteria.".to_string(),
            action: "Clear Filters".to_string(),
        }));
        return lines;
    }

    for resource in listing.visible() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::CardTitle(CardTitle {
            text: resource.title.clone(),
            highlight_ranges: highlight_ranges(&resource.title, listing.query()),
            action: "More Info".to_string(),
            is_focused: focus == ResourcesControl::MoreInfo(resource.id),
        }));
        lines.push(dim(&format!("{}  ·  {}", resource.organization, resource.category)));
        lines.push(text(&resource.description));
        lines.push(button("Visit", focus == ResourcesControl::Visit(resource.id), false));
    }
    lines
}

fn profile_body(profile: &ProfileScreen) -> Vec<BodyLine> {
    let focus = profile.focused();
    let draft = &profile.draft;
    let text_field = |field_id: ProfileText, placeholder: &str| {
        field(
            field_id.label(),
            draft.text(field_id),
            placeholder,
            focus == ProfileControl::Text(field_id),
        )
    };

    let mut lines = vec![
        heading("My Profile"),
        BodyLine::Blank,
        heading("Personal Information"),
        text_field(ProfileText::FullName, "Enter your full name"),
        text_field(ProfileText::Email, "Enter your email"),
        text_field(ProfileText::Phone, "09XXXXXXXXX"),
        text_field(ProfileText::City, "Enter your city"),
        text_field(ProfileText::Province, "Enter your province"),
        field(
            "I identify as:",
            draft.identity.map_or("", |identity| identity.label()),
            "Select an option",
            focus == ProfileControl::Identity,
        ),
        BodyLine::Blank,
        heading("Skills & Experience"),
        field(
            "List your skills and previous work experience",
            draft.text(ProfileText::Skills),
            "Describe your skills, work experience, and qualifications...",
            focus == ProfileControl::Text(ProfileText::Skills),
        ),
        BodyLine::Blank,
        heading("Job Preferences"),
    ];
    lines.extend(JobPreference::ALL.into_iter().map(|pref| {
        toggle(
            pref.label(),
            draft.job_preferences.get(pref),
            focus == ProfileControl::JobPreference(pref),
        )
    }));
    lines.push(BodyLine::Blank);
    lines.push(heading("Accessibility Settings"));
    lines.extend(AccessibilityOption::ALL.into_iter().map(|option| {
        toggle(
            option.label(),
            draft.accessibility.get(option),
            focus == ProfileControl::Accessibility(option),
        )
    }));
    lines.push(BodyLine::Blank);
    lines.push(heading("Notification Preferences"));
    lines.extend(NotificationChannel::ALL.into_iter().map(|channel| {
        toggle(
            channel.label(),
            draft.notifications.get(channel),
            focus == ProfileControl::Notification(channel),
        )
    }));
    lines.extend([
        BodyLine::Blank,
        button("Save Profile", focus == ProfileControl::Save, true),
        button("Sign Out →", focus == ProfileControl::SignOut, false),
    ]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(vm: &UIViewModel) -> Vec<String> {
        vm.lines
            .iter()
            .filter_map(|line| match line {
                BodyLine::CardTitle(card) => Some(card.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn jobs_view_lists_filtered_cards_with_highlights() {
        let mut state = AppState::default();
        state.navigate(ScreenId::FindJobs);
        state.set_query("data entry");
        let vm = state.compute_viewmodel(60, 100);
        assert_eq!(titles(&vm), vec!["Data Entry Specialist"]);
        let card = vm
            .lines
            .iter()
            .find_map(|line| match line {
                BodyLine::CardTitle(card) => Some(card.clone()),
                _ => None,
            })
            .expect("card");
        assert_eq!(card.highlight_ranges, vec![(0, 10)]);
        assert!(vm.lines.contains(&BodyLine::Text {
            text: "1 jobs found  ·  Philippines".to_string(),
            dim: true,
        }));
    }

    #[test]
    fn empty_listing_shows_clear_action() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Resources);
        state.set_query("zzz");
        let vm = state.compute_viewmodel(60, 100);
        assert!(vm.lines.iter().any(|line| matches!(
            line,
            BodyLine::Empty(EmptyState { action, .. }) if action == "Clear Filters"
        )));
    }

    #[test]
    fn hidden_password_is_masked() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Login);
        state.focus_next();
        for c in "secret".chars() {
            state.input_char(c);
        }
        let vm = state.compute_viewmodel(40, 80);
        assert!(vm.lines.iter().any(|line| matches!(
            line,
            BodyLine::Field(f) if f.label == "Password" && f.value == "••••••"
        )));
    }

    #[test]
    fn long_body_is_windowed_around_focus() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Profile);
        for _ in 0..18 {
            state.focus_next();
        }
        let vm = state.compute_viewmodel(12, 80);
        assert_eq!(vm.lines.len(), 6);
        assert!(vm.lines.iter().any(BodyLine::is_focused));
    }

    #[test]
    fn sidebar_marks_current_and_cursor() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Resources);
        state.toggle_sidebar();
        state.focus_next();
        let sidebar = state.compute_viewmodel(30, 80).sidebar.expect("open sidebar");
        let current: Vec<_> = sidebar.items.iter().filter(|i| i.is_current).map(|i| i.label.as_str()).collect();
        let cursor: Vec<_> = sidebar.items.iter().filter(|i| i.is_highlighted).map(|i| i.label.as_str()).collect();
        assert_eq!(current, vec!["Resources"]);
        assert_eq!(cursor, vec!["Profile"]);
    }

    #[test]
    fn chips_wrap_to_width() {
        let chips = ["Full-time", "PWDs", "Senior Citizens"]
            .into_iter()
            .map(|label| Chip {
                label: label.to_string(),
                is_active: false,
                is_focused: false,
            })
            .collect();
        assert_eq!(wrap_chips(chips, 30).len(), 2);
    }
}
