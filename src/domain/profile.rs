//! Profile draft model.
//!
//! [`ProfileDraft`] mirrors the profile form: identity fields, free-text skills and
//! three independent groups of boolean options. Fields are changed one at a time
//! through [`ProfileUpdate`]; nothing here is persisted.

use super::credentials::sanitize_phone;
use serde::{Deserialize, Serialize};

/// Self-identified group selected on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    Pwd,
    Senior,
    Youth,
    Marginalized,
    Other,
}

impl Identity {
    pub const ALL: [Self; 5] = [
        Self::Pwd,
        Self::Senior,
        Self::Youth,
        Self::Marginalized,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pwd => "Person with Disability",
            Self::Senior => "Senior Citizen",
            Self::Youth => "Youth",
            Self::Marginalized => "Marginalized Group",
            Self::Other => "Other",
        }
    }

    /// Steps through the selector: unset, each identity in order, then unset again.
    ///
    /// ```
    /// use worklink::domain::Identity;
    ///
    /// assert_eq!(Identity::cycle(None), Some(Identity::Pwd));
    /// assert_eq!(Identity::cycle(Some(Identity::Other)), None);
    /// ```
    #[must_use]
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(identity) => {
                let idx = Self::ALL.iter().position(|i| *i == identity).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

/// Employment arrangements the user is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobPreferences {
    pub full_time: bool,
    pub part_time: bool,
    pub remote: bool,
    pub flexible: bool,
}

/// A single option within [`JobPreferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPreference {
    FullTime,
    PartTime,
    Remote,
    Flexible,
}

impl JobPreference {
    pub const ALL: [Self; 4] = [Self::FullTime, Self::PartTime, Self::Remote, Self::Flexible];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time employment",
            Self::PartTime => "Part-time employment",
            Self::Remote => "Remote / Work from home",
            Self::Flexible => "Flexible hours",
        }
    }
}

impl JobPreferences {
    #[must_use]
    pub const fn get(&self, pref: JobPreference) -> bool {
        match pref {
            JobPreference::FullTime => self.full_time,
            JobPreference::PartTime => self.part_time,
            JobPreference::Remote => self.remote,
            JobPreference::Flexible => self.flexible,
        }
    }

    pub fn set(&mut self, pref: JobPreference, on: bool) {
        match pref {
            JobPreference::FullTime => self.full_time = on,
            JobPreference::PartTime => self.part_time = on,
            JobPreference::Remote => self.remote = on,
            JobPreference::Flexible => self.flexible = on,
        }
    }
}

/// Accessibility settings requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessibilityOptions {
    pub screen_reader: bool,
    pub high_contrast: bool,
    pub large_text: bool,
}

/// A single option within [`AccessibilityOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityOption {
    ScreenReader,
    HighContrast,
    LargeText,
}

impl AccessibilityOption {
    pub const ALL: [Self; 3] = [Self::ScreenReader, Self::HighContrast, Self::LargeText];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ScreenReader => "I use a screen reader",
            Self::HighContrast => "Enable high contrast mode",
            Self::LargeText => "Use larger text size",
        }
    }
}

impl AccessibilityOptions {
    #[must_use]
    pub const fn get(&self, option: AccessibilityOption) -> bool {
        match option {
            AccessibilityOption::ScreenReader => self.screen_reader,
            AccessibilityOption::HighContrast => self.high_contrast,
            AccessibilityOption::LargeText => self.large_text,
        }
    }

    pub fn set(&mut self, option: AccessibilityOption, on: bool) {
        match option {
            AccessibilityOption::ScreenReader => self.screen_reader = on,
            AccessibilityOption::HighContrast => self.high_contrast = on,
            AccessibilityOption::LargeText => self.large_text = on,
        }
    }
}

/// Channels through which the user wants to be notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub email: bool,
    pub sms: bool,
    pub in_app: bool,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            in_app: true,
        }
    }
}

/// A single channel within [`NotificationOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Email,
    Sms,
    InApp,
}

impl NotificationChannel {
    pub const ALL: [Self; 3] = [Self::Email, Self::Sms, Self::InApp];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email notifications",
            Self::Sms => "SMS notifications",
            Self::InApp => "In-app notifications",
        }
    }
}

impl NotificationOptions {
    #[must_use]
    pub const fn get(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::InApp => self.in_app,
        }
    }

    pub fn set(&mut self, channel: NotificationChannel, on: bool) {
        match channel {
            NotificationChannel::Email => self.email = on,
            NotificationChannel::Sms => self.sms = on,
            NotificationChannel::InApp => self.in_app = on,
        }
    }
}

/// Text fields of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileText {
    FullName,
    Email,
    Phone,
    City,
    Province,
    Skills,
}

impl ProfileText {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::City => "Location (City)",
            Self::Province => "Province",
            Self::Skills => "Skills & Experience",
        }
    }
}

/// The editable profile record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub province: String,
    pub identity: Option<Identity>,
    pub skills: String,
    pub job_preferences: JobPreferences,
    pub accessibility: AccessibilityOptions,
    pub notifications: NotificationOptions,
}

/// One field-level change to a [`ProfileDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Text(ProfileText, String),
    Identity(Option<Identity>),
    JobPreference(JobPreference, bool),
    Accessibility(AccessibilityOption, bool),
    Notification(NotificationChannel, bool),
}

impl ProfileDraft {
    /// Returns the current value of a text field.
    #[must_use]
    pub fn text(&self, field: ProfileText) -> &str {
        match field {
            ProfileText::FullName => &self.full_name,
            ProfileText::Email => &self.email,
            ProfileText::Phone => &self.phone,
            ProfileText::City => &self.city,
            ProfileText::Province => &self.province,
            ProfileText::Skills => &self.skills,
        }
    }

    /// Sets a text field. The phone number keeps digits only, at most 11.
    pub fn set_text(&mut self, field: ProfileText, value: String) {
        match field {
            ProfileText::FullName => self.full_name = value,
            ProfileText::Email => self.email = value,
            ProfileText::Phone => self.phone = sanitize_phone(&value),
            ProfileText::City => self.city = value,
            ProfileText::Province => self.province = value,
            ProfileText::Skills => self.skills = value,
        }
    }

    /// Applies a single field update.
    ///
    /// ```
    /// use worklink::domain::{JobPreference, ProfileDraft, ProfileText, ProfileUpdate};
    ///
    /// let mut draft = ProfileDraft::default();
    /// draft.apply(ProfileUpdate::JobPreference(JobPreference::Remote, true));
    /// draft.apply(ProfileUpdate::Text(ProfileText::Phone, "0917-123-4567".into()));
    /// assert!(draft.job_preferences.remote);
    /// assert_eq!(draft.phone, "09171234567");
    /// ```
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Text(field, value) => self.set_text(field, value),
            ProfileUpdate::Identity(identity) => self.identity = identity,
            ProfileUpdate::JobPreference(pref, on) => self.job_preferences.set(pref, on),
            ProfileUpdate::Accessibility(option, on) => self.accessibility.set(option, on),
            ProfileUpdate::Notification(channel, on) => self.notifications.set(channel, on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_blank_form() {
        let draft = ProfileDraft::default();
        assert_eq!(draft.job_preferences, JobPreferences::default());
        assert_eq!(draft.accessibility, AccessibilityOptions::default());
        assert!(draft.notifications.email);
        assert!(!draft.notifications.sms);
        assert!(draft.notifications.in_app);
        assert!(draft.identity.is_none());
    }

    #[test]
    fn group_updates_touch_only_their_field() {
        let mut draft = ProfileDraft::default();
        draft.apply(ProfileUpdate::Accessibility(AccessibilityOption::HighContrast, true));
        assert!(draft.accessibility.high_contrast);
        assert!(!draft.accessibility.screen_reader);
        assert!(!draft.accessibility.large_text);

        draft.apply(ProfileUpdate::Notification(NotificationChannel::Email, false));
        assert!(!draft.notifications.email);
        assert!(draft.notifications.in_app);
    }

    #[test]
    fn identity_cycle_visits_every_option_then_unsets() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..Identity::ALL.len() {
            current = Identity::cycle(current);
            seen.push(current.unwrap());
        }
        assert_eq!(seen, Identity::ALL.to_vec());
        assert_eq!(Identity::cycle(current), None);
    }

    #[test]
    fn text_accessor_matches_setter() {
        let mut draft = ProfileDraft::default();
        draft.set_text(ProfileText::City, "Iloilo".into());
        draft.set_text(ProfileText::Skills, "Bookkeeping".into());
        assert_eq!(draft.text(ProfileText::City), "Iloilo");
        assert_eq!(draft.text(ProfileText::Skills), "Bookkeeping");
    }
}
