//! Screen-local state.
//!
//! Every screen owns its inputs, focus and (where composed) a sidebar. A screen is
//! mounted fresh whenever navigation moves to it from another screen and torn
//! down when navigation leaves it, so queries, forms and overlays never leak
//! between visits. The splash screen is the only one with a teardown effect: it
//! cancels its pending transition.

use super::focus::FocusRing;
use super::forms::{LoginForm, SignUpForm};
use super::sidebar::Sidebar;
use super::timer::{Scheduler, TimerId, SPLASH_DELAY};
use super::Action;
use crate::domain::catalog::{self, RESOURCE_TABS};
use crate::domain::{
    AccessibilityOption, Identity, JobPreference, NotificationChannel, ProfileDraft, ProfileText,
    ProfileUpdate, ScreenId,
};
use crate::filter::{JobsController, ResourcesController};
use chrono::{DateTime, Utc};

/// Request raised by a screen that only the root state can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Navigate(ScreenId),
    Login,
    SignUp,
    Logout,
}

/// Splash screen. Holds the handle of its pending transition to login.
#[derive(Debug, Clone, Default)]
pub struct SplashScreen {
    timer: Option<TimerId>,
}

impl SplashScreen {
    /// Handle that cancels the pending transition.
    #[must_use]
    pub const fn cancel_handle(&self) -> Option<TimerId> {
        self.timer
    }

    /// Schedules the transition to login unless one is already pending.
    pub fn arm(&mut self, scheduler: &mut Scheduler) -> Option<Action> {
        if self.timer.is_some_and(|id| scheduler.is_pending(id)) {
            return None;
        }
        let scheduled = scheduler.schedule(ScreenId::Login, SPLASH_DELAY);
        self.timer = Some(scheduled.id);
        Some(Action::SetTimeout {
            timer: scheduled.id,
            delay: scheduled.delay,
        })
    }

    fn tear_down(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
    }
}

/// Dashboard buttons, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardControl {
    FindJobs,
    Resources,
    CreateProfile,
}

impl DashboardControl {
    pub const ALL: [Self; 3] = [Self::FindJobs, Self::Resources, Self::CreateProfile];

    #[must_use]
    pub const fn target(self) -> ScreenId {
        match self {
            Self::FindJobs => ScreenId::FindJobs,
            Self::Resources => ScreenId::Resources,
            Self::CreateProfile => ScreenId::Profile,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    pub sidebar: Sidebar,
    focus: FocusRing,
}

impl HomeScreen {
    #[must_use]
    pub fn focused(&self) -> DashboardControl {
        DashboardControl::ALL[self.focus.index(DashboardControl::ALL.len())]
    }
}

/// Interactive elements of the jobs screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsControl {
    Search,
    /// Index into [`JobsScreen::chips`].
    Tag(usize),
    ClearFilters,
    Details(u32),
}

#[derive(Debug, Clone)]
pub struct JobsScreen {
    pub listing: JobsController,
    pub sidebar: Sidebar,
    chips: Vec<String>,
    focus: FocusRing,
}

impl Default for JobsScreen {
    fn default() -> Self {
        let records = catalog::jobs();
        let chips = catalog::distinct_tags(&records);
        Self {
            listing: JobsController::new(records),
            sidebar: Sidebar::default(),
            chips,
            focus: FocusRing::default(),
        }
    }
}

impl JobsScreen {
    /// Tags offered as filter chips.
    #[must_use]
    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    #[must_use]
    pub fn controls(&self) -> Vec<JobsControl> {
        let mut controls = vec![JobsControl::Search];
        controls.extend((0..self.chips.len()).map(JobsControl::Tag));
        controls.push(JobsControl::ClearFilters);
        controls.extend(self.listing.visible().map(|job| JobsControl::Details(job.id)));
        controls
    }

    #[must_use]
    pub fn focused(&self) -> JobsControl {
        let controls = self.controls();
        controls[self.focus.index(controls.len())]
    }

    fn activate(&mut self) {
        match self.focused() {
            JobsControl::Search => {}
            JobsControl::Tag(index) => {
                if let Some(tag) = self.chips.get(index).cloned() {
                    self.listing.toggle_tag(&tag);
                }
            }
            JobsControl::ClearFilters => self.listing.clear_filters(),
            JobsControl::Details(id) => tracing::info!(job_id = id, "job details requested"),
        }
    }
}

/// Interactive elements of the resources screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcesControl {
    Search,
    /// Index into [`RESOURCE_TABS`].
    Tab(usize),
    ClearFilters,
    MoreInfo(u32),
    Visit(u32),
}

#[derive(Debug, Clone)]
pub struct ResourcesScreen {
    pub listing: ResourcesController,
    pub sidebar: Sidebar,
    focus: FocusRing,
}

impl Default for ResourcesScreen {
    fn default() -> Self {
        Self {
            listing: ResourcesController::new(catalog::resources()),
            sidebar: Sidebar::default(),
            focus: FocusRing::default(),
        }
    }
}

impl ResourcesScreen {
    #[must_use]
    pub fn controls(&self) -> Vec<ResourcesControl> {
        let mut controls = vec![ResourcesControl::Search];
        controls.extend((0..RESOURCE_TABS.len()).map(ResourcesControl::Tab));
        controls.push(ResourcesControl::ClearFilters);
        for resource in self.listing.visible() {
            controls.push(ResourcesControl::MoreInfo(resource.id));
            controls.push(ResourcesControl::Visit(resource.id));
        }
        controls
    }

    #[must_use]
    pub fn focused(&self) -> ResourcesControl {
        let controls = self.controls();
        controls[self.focus.index(controls.len())]
    }

    fn activate(&mut self) {
        match self.focused() {
            ResourcesControl::Search => {}
            ResourcesControl::Tab(index) => {
                let (id, _) = RESOURCE_TABS[index];
                self.listing.select_category(id);
            }
            ResourcesControl::ClearFilters => self.listing.clear_filters(),
            ResourcesControl::MoreInfo(id) => {
                tracing::info!(resource_id = id, "resource details requested");
            }
            ResourcesControl::Visit(id) => tracing::info!(resource_id = id, "resource visit requested"),
        }
    }
}

/// Interactive elements of the profile editor, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileControl {
    Text(ProfileText),
    Identity,
    JobPreference(JobPreference),
    Accessibility(AccessibilityOption),
    Notification(NotificationChannel),
    Save,
    SignOut,
}

impl ProfileControl {
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut controls: Vec<Self> = [
            ProfileText::FullName,
            ProfileText::Email,
            ProfileText::Phone,
            ProfileText::City,
            ProfileText::Province,
        ]
        .into_iter()
        .map(Self::Text)
        .collect();
        controls.push(Self::Identity);
        controls.push(Self::Text(ProfileText::Skills));
        controls.extend(JobPreference::ALL.into_iter().map(Self::JobPreference));
        controls.extend(AccessibilityOption::ALL.into_iter().map(Self::Accessibility));
        controls.extend(NotificationChannel::ALL.into_iter().map(Self::Notification));
        controls.push(Self::Save);
        controls.push(Self::SignOut);
        controls
    }
}

/// Local acknowledgment of a profile save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAcknowledgment {
    pub message: &'static str,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    pub draft: ProfileDraft,
    pub sidebar: Sidebar,
    saved: Option<SaveAcknowledgment>,
    focus: FocusRing,
}

impl ProfileScreen {
    #[must_use]
    pub fn saved(&self) -> Option<&SaveAcknowledgment> {
        self.saved.as_ref()
    }

    #[must_use]
    pub fn focused(&self) -> ProfileControl {
        let controls = ProfileControl::all();
        controls[self.focus.index(controls.len())]
    }

    pub fn update(&mut self, update: ProfileUpdate) {
        tracing::debug!(update = ?update, "profile field updated");
        self.draft.apply(update);
    }

    /// Records the acknowledgment and logs the draft. Nothing is persisted.
    pub fn save(&mut self) {
        match serde_json::to_string(&self.draft) {
            Ok(json) => tracing::info!(profile = %json, "profile saved"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize profile"),
        }
        self.saved = Some(SaveAcknowledgment {
            message: "Profile saved successfully!",
            at: Utc::now(),
        });
    }

    fn activate(&mut self) -> Option<Intent> {
        match self.focused() {
            ProfileControl::Text(_) => None,
            ProfileControl::Identity => {
                self.update(ProfileUpdate::Identity(Identity::cycle(self.draft.identity)));
                None
            }
            ProfileControl::JobPreference(pref) => {
                let on = !self.draft.job_preferences.get(pref);
                self.update(ProfileUpdate::JobPreference(pref, on));
                None
            }
            ProfileControl::Accessibility(option) => {
                let on = !self.draft.accessibility.get(option);
                self.update(ProfileUpdate::Accessibility(option, on));
                None
            }
            ProfileControl::Notification(channel) => {
                let on = !self.draft.notifications.get(channel);
                self.update(ProfileUpdate::Notification(channel, on));
                None
            }
            ProfileControl::Save => {
                self.save();
                None
            }
            ProfileControl::SignOut => Some(Intent::Logout),
        }
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) -> bool {
        let ProfileControl::Text(field) = self.focused() else {
            return false;
        };
        let mut value = self.draft.text(field).to_string();
        edit(&mut value);
        self.update(ProfileUpdate::Text(field, value));
        true
    }
}

/// Local state of the mounted screen.
#[derive(Debug, Clone)]
pub enum ScreenState {
    Splash(SplashScreen),
    Login(LoginForm),
    SignUp(SignUpForm),
    Home(HomeScreen),
    FindJobs(JobsScreen),
    Resources(ResourcesScreen),
    Profile(ProfileScreen),
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Splash(SplashScreen::default())
    }
}

impl ScreenState {
    /// Builds fresh local state for `id`, returning any host actions mounting requires.
    pub fn mount(id: ScreenId, scheduler: &mut Scheduler) -> (Self, Vec<Action>) {
        let _span = tracing::debug_span!("mount", screen = %id).entered();
        match id {
            ScreenId::Splash => {
                let mut splash = SplashScreen::default();
                let actions = splash.arm(scheduler).into_iter().collect();
                (Self::Splash(splash), actions)
            }
            ScreenId::Login => (Self::Login(LoginForm::default()), vec![]),
            ScreenId::SignUp => (Self::SignUp(SignUpForm::default()), vec![]),
            ScreenId::Home => (Self::Home(HomeScreen::default()), vec![]),
            ScreenId::FindJobs => (Self::FindJobs(JobsScreen::default()), vec![]),
            ScreenId::Resources => (Self::Resources(ResourcesScreen::default()), vec![]),
            ScreenId::Profile => (Self::Profile(ProfileScreen::default()), vec![]),
        }
    }

    /// Releases whatever the screen holds outside itself.
    pub fn tear_down(&mut self, scheduler: &mut Scheduler) {
        if let Self::Splash(splash) = self {
            splash.tear_down(scheduler);
        }
    }

    #[must_use]
    pub const fn id(&self) -> ScreenId {
        match self {
            Self::Splash(_) => ScreenId::Splash,
            Self::Login(_) => ScreenId::Login,
            Self::SignUp(_) => ScreenId::SignUp,
            Self::Home(_) => ScreenId::Home,
            Self::FindJobs(_) => ScreenId::FindJobs,
            Self::Resources(_) => ScreenId::Resources,
            Self::Profile(_) => ScreenId::Profile,
        }
    }

    #[must_use]
    pub fn sidebar(&self) -> Option<&Sidebar> {
        match self {
            Self::Home(s) => Some(&s.sidebar),
            Self::FindJobs(s) => Some(&s.sidebar),
            Self::Resources(s) => Some(&s.sidebar),
            Self::Profile(s) => Some(&s.sidebar),
            Self::Splash(_) | Self::Login(_) | Self::SignUp(_) => None,
        }
    }

    pub fn sidebar_mut(&mut self) -> Option<&mut Sidebar> {
        match self {
            Self::Home(s) => Some(&mut s.sidebar),
            Self::FindJobs(s) => Some(&mut s.sidebar),
            Self::Resources(s) => Some(&mut s.sidebar),
            Self::Profile(s) => Some(&mut s.sidebar),
            Self::Splash(_) | Self::Login(_) | Self::SignUp(_) => None,
        }
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar().is_some_and(Sidebar::is_open)
    }

    /// Number of focusable controls and the focused position among them.
    #[must_use]
    pub fn focus_position(&self) -> (usize, usize) {
        match self {
            Self::Splash(_) => (0, 0),
            Self::Login(form) => (super::forms::LoginControl::ALL.len(), form.focus_index()),
            Self::SignUp(form) => (form.controls().len(), form.focus_index()),
            Self::Home(s) => {
                let len = DashboardControl::ALL.len();
                (len, s.focus.index(len))
            }
            Self::FindJobs(s) => {
                let len = s.controls().len();
                (len, s.focus.index(len))
            }
            Self::Resources(s) => {
                let len = s.controls().len();
                (len, s.focus.index(len))
            }
            Self::Profile(s) => {
                let len = ProfileControl::all().len();
                (len, s.focus.index(len))
            }
        }
    }

    pub fn focus_next(&mut self) {
        let (len, _) = self.focus_position();
        match self {
            Self::Splash(_) => {}
            Self::Login(form) => form.focus_next(),
            Self::SignUp(form) => form.focus_next(),
            Self::Home(s) => s.focus.next(len),
            Self::FindJobs(s) => s.focus.next(len),
            Self::Resources(s) => s.focus.next(len),
            Self::Profile(s) => s.focus.next(len),
        }
    }

    pub fn focus_prev(&mut self) {
        let (len, _) = self.focus_position();
        match self {
            Self::Splash(_) => {}
            Self::Login(form) => form.focus_prev(),
            Self::SignUp(form) => form.focus_prev(),
            Self::Home(s) => s.focus.prev(len),
            Self::FindJobs(s) => s.focus.prev(len),
            Self::Resources(s) => s.focus.prev(len),
            Self::Profile(s) => s.focus.prev(len),
        }
    }

    /// Whether keystrokes currently go into a text field.
    #[must_use]
    pub fn text_focused(&self) -> bool {
        match self {
            Self::Splash(_) | Self::Home(_) => false,
            Self::Login(form) => form.focused().is_text(),
            Self::SignUp(form) => form.focused().is_text(),
            Self::FindJobs(s) => s.focused() == JobsControl::Search,
            Self::Resources(s) => s.focused() == ResourcesControl::Search,
            Self::Profile(s) => matches!(s.focused(), ProfileControl::Text(_)),
        }
    }

    /// Types a character into the focused text field.
    pub fn input_char(&mut self, c: char) -> bool {
        match self {
            Self::Splash(_) | Self::Home(_) => false,
            Self::Login(form) => form.input_char(c),
            Self::SignUp(form) => form.input_char(c),
            Self::FindJobs(s) if s.focused() == JobsControl::Search => {
                s.listing.push_query_char(c);
                true
            }
            Self::Resources(s) if s.focused() == ResourcesControl::Search => {
                s.listing.push_query_char(c);
                true
            }
            Self::FindJobs(_) | Self::Resources(_) => false,
            Self::Profile(s) => s.edit_text(|value| value.push(c)),
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self {
            Self::Splash(_) | Self::Home(_) => false,
            Self::Login(form) => form.backspace(),
            Self::SignUp(form) => form.backspace(),
            Self::FindJobs(s) if s.focused() == JobsControl::Search => {
                s.listing.pop_query_char();
                true
            }
            Self::Resources(s) if s.focused() == ResourcesControl::Search => {
                s.listing.pop_query_char();
                true
            }
            Self::FindJobs(_) | Self::Resources(_) => false,
            Self::Profile(s) => s.edit_text(|value| {
                value.pop();
            }),
        }
    }

    /// Activates the focused control.
    pub fn activate(&mut self) -> Option<Intent> {
        match self {
            Self::Splash(_) => None,
            Self::Login(form) => form.activate(),
            Self::SignUp(form) => form.activate(),
            Self::Home(s) => Some(Intent::Navigate(s.focused().target())),
            Self::FindJobs(s) => {
                s.activate();
                None
            }
            Self::Resources(s) => {
                s.activate();
                None
            }
            Self::Profile(s) => s.activate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounting_splash_schedules_login() {
        let mut scheduler = Scheduler::default();
        let (screen, actions) = ScreenState::mount(ScreenId::Splash, &mut scheduler);
        let ScreenState::Splash(splash) = &screen else {
            panic!("expected splash");
        };
        let id = splash.cancel_handle().expect("timer armed");
        assert_eq!(
            actions,
            vec![Action::SetTimeout {
                timer: id,
                delay: SPLASH_DELAY
            }]
        );
        assert!(scheduler.is_pending(id));
    }

    #[test]
    fn tearing_down_splash_cancels_timer() {
        let mut scheduler = Scheduler::default();
        let (mut screen, _) = ScreenState::mount(ScreenId::Splash, &mut scheduler);
        screen.tear_down(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn sidebar_only_on_app_screens() {
        let mut scheduler = Scheduler::default();
        for id in ScreenId::ALL {
            let (screen, _) = ScreenState::mount(id, &mut scheduler);
            assert_eq!(screen.sidebar().is_some(), id.has_sidebar(), "{id}");
            assert_eq!(screen.id(), id);
        }
    }

    #[test]
    fn jobs_chip_activation_toggles_tag() {
        let mut jobs = JobsScreen::default();
        let pwd = jobs.chips().iter().position(|t| t == "PWDs").expect("PWDs chip");
        jobs.focus.set(1 + pwd);
        jobs.activate();
        assert!(jobs.listing.selection().is_active("PWDs"));
        assert_eq!(jobs.listing.visible_count(), 3);
    }

    #[test]
    fn profile_identity_cycles_on_activate() {
        let mut profile = ProfileScreen::default();
        let index = ProfileControl::all()
            .iter()
            .position(|c| *c == ProfileControl::Identity)
            .expect("identity control");
        profile.focus.set(index);
        assert_eq!(profile.activate(), None);
        assert_eq!(profile.draft.identity, Some(Identity::Pwd));
    }

    #[test]
    fn profile_phone_edit_is_sanitized() {
        let mut state = ScreenState::Profile(ProfileScreen::default());
        state.focus_next();
        state.focus_next();
        for c in "0917-123".chars() {
            assert!(state.input_char(c));
        }
        let ScreenState::Profile(profile) = &state else {
            panic!("expected profile");
        };
        assert_eq!(profile.draft.phone, "0917123");
    }

    #[test]
    fn save_records_acknowledgment() {
        let mut profile = ProfileScreen::default();
        profile.save();
        assert_eq!(
            profile.saved().map(|ack| ack.message),
            Some("Profile saved successfully!")
        );
    }
}
