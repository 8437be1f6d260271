//! Login and sign-up form state.
//!
//! Forms own their field values, visibility toggles and focus. Activating a
//! control may yield an [`Intent`] for the root state to carry out; the forms
//! themselves never touch the session or the navigator.
//!
//! Validation is advisory: format hints, password strength and mismatch notes are
//! shown but never block. Submission is gated only on required fields being
//! present.

use super::focus::FocusRing;
use super::screens::Intent;
use crate::domain::credentials::{
    looks_like_email, looks_like_mobile, passwords_mismatch, sanitize_email_or_phone,
    sanitize_phone,
};
use crate::domain::{PasswordStrength, ScreenId};

/// Advisory shown when a submission is attempted with empty required fields.
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill out all required fields.";

/// Interactive elements of the login screen, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginControl {
    EmailOrPhone,
    Password,
    ShowPassword,
    ForgotPassword,
    Submit,
    SignUpLink,
}

impl LoginControl {
    pub const ALL: [Self; 6] = [
        Self::EmailOrPhone,
        Self::Password,
        Self::ShowPassword,
        Self::ForgotPassword,
        Self::Submit,
        Self::SignUpLink,
    ];

    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::EmailOrPhone | Self::Password)
    }
}

/// Login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    email_or_phone: String,
    password: String,
    show_password: bool,
    notice: Option<&'static str>,
    focus: FocusRing,
}

impl LoginForm {
    #[must_use]
    pub fn email_or_phone(&self) -> &str {
        &self.email_or_phone
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub const fn show_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Replaces the identifier. All-digit input is truncated like a phone number.
    pub fn set_email_or_phone(&mut self, raw: &str) {
        self.email_or_phone = sanitize_email_or_phone(raw);
    }

    pub fn set_password(&mut self, raw: &str) {
        self.password = raw.to_string();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email_or_phone.is_empty() && !self.password.is_empty()
    }

    /// Format hint for the identifier field, if it matches neither accepted shape.
    #[must_use]
    pub fn identifier_hint(&self) -> Option<&'static str> {
        let value = &self.email_or_phone;
        if value.is_empty() || looks_like_mobile(value) || looks_like_email(value) {
            None
        } else if value.chars().all(|c| c.is_ascii_digit()) {
            Some("Phone numbers use the format 09XXXXXXXXX")
        } else {
            Some("Enter a valid email address")
        }
    }

    /// Attempts submission. Returns [`Intent::Login`] once both fields are present.
    pub fn submit(&mut self) -> Option<Intent> {
        if self.can_submit() {
            self.notice = None;
            Some(Intent::Login)
        } else {
            self.notice = Some(REQUIRED_FIELDS_NOTICE);
            None
        }
    }

    #[must_use]
    pub fn focused(&self) -> LoginControl {
        LoginControl::ALL[self.focus.index(LoginControl::ALL.len())]
    }

    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.focus.index(LoginControl::ALL.len())
    }

    pub fn focus_next(&mut self) {
        self.focus.next(LoginControl::ALL.len());
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev(LoginControl::ALL.len());
    }

    /// Types into the focused field. Returns `false` when no text field has focus.
    pub fn input_char(&mut self, c: char) -> bool {
        match self.focused() {
            LoginControl::EmailOrPhone => {
                let mut next = self.email_or_phone.clone();
                next.push(c);
                self.set_email_or_phone(&next);
                true
            }
            LoginControl::Password => {
                self.password.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.focused() {
            LoginControl::EmailOrPhone => self.email_or_phone.pop().is_some(),
            LoginControl::Password => self.password.pop().is_some(),
            _ => false,
        }
    }

    /// Activates the focused control.
    pub fn activate(&mut self) -> Option<Intent> {
        match self.focused() {
            LoginControl::ShowPassword => {
                self.toggle_show_password();
                None
            }
            LoginControl::ForgotPassword => {
                tracing::info!("forgot password requested");
                None
            }
            LoginControl::SignUpLink => Some(Intent::Navigate(ScreenId::SignUp)),
            LoginControl::EmailOrPhone | LoginControl::Password | LoginControl::Submit => {
                self.submit()
            }
        }
    }
}

/// Wizard step of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpStep {
    #[default]
    Details,
    Password,
}

impl SignUpStep {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Password => 2,
        }
    }
}

/// Interactive elements of the sign-up screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpControl {
    FullName,
    Email,
    Phone,
    Next,
    Back,
    Password,
    ShowPassword,
    Confirm,
    ShowConfirm,
    CreateAccount,
    LogInLink,
}

impl SignUpControl {
    const DETAILS: [Self; 5] = [Self::FullName, Self::Email, Self::Phone, Self::Next, Self::LogInLink];
    const PASSWORD: [Self; 7] = [
        Self::Back,
        Self::Password,
        Self::ShowPassword,
        Self::Confirm,
        Self::ShowConfirm,
        Self::CreateAccount,
        Self::LogInLink,
    ];

    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::FullName | Self::Email | Self::Phone | Self::Password | Self::Confirm
        )
    }
}

/// Two-step sign-up wizard. Data entered in either step survives moving between them.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    step: SignUpStep,
    full_name: String,
    email: String,
    phone: String,
    password: String,
    confirm_password: String,
    show_password: bool,
    show_confirm_password: bool,
    notice: Option<&'static str>,
    focus: FocusRing,
}

impl SignUpForm {
    #[must_use]
    pub const fn step(&self) -> SignUpStep {
        self.step
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    #[must_use]
    pub const fn show_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub const fn show_confirm_password(&self) -> bool {
        self.show_confirm_password
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn set_full_name(&mut self, value: &str) {
        self.full_name = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
    }

    /// Keeps digits only, at most 11.
    pub fn set_phone(&mut self, value: &str) {
        self.phone = sanitize_phone(value);
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    pub fn set_confirm_password(&mut self, value: &str) {
        self.confirm_password = value.to_string();
    }

    /// Strength of the password entered so far, `None` while empty.
    #[must_use]
    pub fn strength(&self) -> Option<PasswordStrength> {
        PasswordStrength::for_display(&self.password)
    }

    #[must_use]
    pub fn mismatch(&self) -> bool {
        passwords_mismatch(&self.password, &self.confirm_password)
    }

    #[must_use]
    pub fn phone_hint(&self) -> Option<&'static str> {
        (!self.phone.is_empty() && !looks_like_mobile(&self.phone))
            .then_some("Phone numbers use the format 09XXXXXXXXX")
    }

    #[must_use]
    pub fn email_hint(&self) -> Option<&'static str> {
        (!self.email.is_empty() && !looks_like_email(&self.email))
            .then_some("Enter a valid email address")
    }

    /// Advances to the password step when every detail field is filled.
    pub fn next(&mut self) -> bool {
        if self.step != SignUpStep::Details {
            return false;
        }
        if self.full_name.is_empty() || self.email.is_empty() || self.phone.is_empty() {
            self.notice = Some(REQUIRED_FIELDS_NOTICE);
            return false;
        }
        self.notice = None;
        self.step = SignUpStep::Password;
        self.focus.set(1);
        tracing::debug!("sign-up advanced to password step");
        true
    }

    /// Returns to the details step, keeping everything entered.
    pub fn back(&mut self) {
        self.step = SignUpStep::Details;
        self.notice = None;
        self.focus.set(0);
    }

    /// Completes the wizard once both password fields are present.
    pub fn submit(&mut self) -> Option<Intent> {
        if self.step != SignUpStep::Password {
            return None;
        }
        if self.password.is_empty() || self.confirm_password.is_empty() {
            self.notice = Some(REQUIRED_FIELDS_NOTICE);
            return None;
        }
        self.notice = None;
        tracing::debug!(full_name = %self.full_name, email = %self.email, "sign-up submitted");
        Some(Intent::SignUp)
    }

    #[must_use]
    pub fn controls(&self) -> &'static [SignUpControl] {
        match self.step {
            SignUpStep::Details => &SignUpControl::DETAILS,
            SignUpStep::Password => &SignUpControl::PASSWORD,
        }
    }

    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.focus.index(self.controls().len())
    }

    #[must_use]
    pub fn focused(&self) -> SignUpControl {
        self.controls()[self.focus_index()]
    }

    pub fn focus_next(&mut self) {
        self.focus.next(self.controls().len());
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev(self.controls().len());
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focused() {
            SignUpControl::FullName => Some(&mut self.full_name),
            SignUpControl::Email => Some(&mut self.email),
            SignUpControl::Password => Some(&mut self.password),
            SignUpControl::Confirm => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) -> bool {
        if self.focused() == SignUpControl::Phone {
            let mut next = self.phone.clone();
            next.push(c);
            self.set_phone(&next);
            return true;
        }
        match self.focused_text() {
            Some(field) => {
                field.push(c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        if self.focused() == SignUpControl::Phone {
            return self.phone.pop().is_some();
        }
        self.focused_text().is_some_and(|field| field.pop().is_some())
    }

    pub fn activate(&mut self) -> Option<Intent> {
        match self.focused() {
            SignUpControl::FullName
            | SignUpControl::Email
            | SignUpControl::Phone
            | SignUpControl::Next => {
                self.next();
                None
            }
            SignUpControl::Back => {
                self.back();
                None
            }
            SignUpControl::ShowPassword => {
                self.show_password = !self.show_password;
                None
            }
            SignUpControl::ShowConfirm => {
                self.show_confirm_password = !self.show_confirm_password;
                None
            }
            SignUpControl::Password | SignUpControl::Confirm | SignUpControl::CreateAccount => {
                self.submit()
            }
            SignUpControl::LogInLink => Some(Intent::Navigate(ScreenId::Login)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_details() -> SignUpForm {
        let mut form = SignUpForm::default();
        form.set_full_name("Maria Santos");
        form.set_email("maria@example.ph");
        form.set_phone("09171234567");
        form
    }

    #[test]
    fn login_requires_both_fields() {
        let mut form = LoginForm::default();
        form.set_email_or_phone("maria@example.ph");
        assert_eq!(form.submit(), None);
        assert_eq!(form.notice(), Some(REQUIRED_FIELDS_NOTICE));

        form.set_password("x");
        assert_eq!(form.submit(), Some(Intent::Login));
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn login_identifier_truncates_digits_only() {
        let mut form = LoginForm::default();
        form.set_email_or_phone("091712345678999");
        assert_eq!(form.email_or_phone(), "09171234567");
        form.set_email_or_phone("someone.with.a.long.address@example.ph");
        assert_eq!(form.email_or_phone(), "someone.with.a.long.address@example.ph");
    }

    #[test]
    fn login_typing_goes_to_focused_field() {
        let mut form = LoginForm::default();
        for c in "0917".chars() {
            assert!(form.input_char(c));
        }
        form.focus_next();
        assert!(form.input_char('p'));
        assert_eq!(form.email_or_phone(), "0917");
        assert_eq!(form.password(), "p");
        assert_eq!(form.identifier_hint(), Some("Phone numbers use the format 09XXXXXXXXX"));

        form.focus_next();
        assert!(!form.input_char('z'));
        assert_eq!(form.activate(), None);
        assert!(form.show_password());
    }

    #[test]
    fn details_step_is_gated_on_presence() {
        let mut form = SignUpForm::default();
        form.set_full_name("Maria Santos");
        assert!(!form.next());
        assert_eq!(form.step(), SignUpStep::Details);
        assert_eq!(form.notice(), Some(REQUIRED_FIELDS_NOTICE));
    }

    #[test]
    fn back_keeps_entered_data() {
        let mut form = filled_details();
        assert!(form.next());
        form.set_password("Secret123");
        form.back();
        assert_eq!(form.step(), SignUpStep::Details);
        assert_eq!(form.full_name(), "Maria Santos");
        assert!(form.next());
        assert_eq!(form.password(), "Secret123");
    }

    #[test]
    fn mismatch_is_advisory() {
        let mut form = filled_details();
        form.next();
        form.set_password("Secret123");
        form.set_confirm_password("Secret124");
        assert!(form.mismatch());
        assert_eq!(form.submit(), Some(Intent::SignUp));
    }

    #[test]
    fn phone_keeps_eleven_digits() {
        let mut form = SignUpForm::default();
        form.set_phone("+63 917-123-4567-89");
        assert_eq!(form.phone(), "63917123456");
        assert!(form.phone_hint().is_some());
        form.set_phone("0917abc1234567");
        assert_eq!(form.phone(), "09171234567");
        assert!(form.phone_hint().is_none());
    }

    #[test]
    fn strength_hidden_until_typed() {
        let mut form = filled_details();
        form.next();
        assert_eq!(form.strength(), None);
        form.set_password("abcdefgh");
        assert_eq!(form.strength(), Some(PasswordStrength::Good));
    }

    #[test]
    fn password_step_focuses_first_field() {
        let mut form = filled_details();
        form.next();
        assert_eq!(form.focused(), SignUpControl::Password);
        assert!(form.input_char('A'));
        assert_eq!(form.password(), "A");
    }
}
