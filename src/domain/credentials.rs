//! Advisory credential helpers used by the authentication forms.
//!
//! Nothing in this module is enforcement. Strength levels, mismatch detection and
//! format checks only drive hints on screen; submission is gated solely on required
//! fields being present.

/// Maximum number of digits kept in a phone field.
pub const PHONE_MAX_DIGITS: usize = 11;

/// Password strength, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Classifies a password.
    ///
    /// Shorter than 6 characters is weak, shorter than 8 is fair. At 8 or more it
    /// is strong when it contains both an uppercase letter and a digit, otherwise
    /// good.
    ///
    /// ```
    /// use worklink::domain::PasswordStrength;
    ///
    /// assert_eq!(PasswordStrength::classify("abc"), PasswordStrength::Weak);
    /// assert_eq!(PasswordStrength::classify("Abcdefg1"), PasswordStrength::Strong);
    /// ```
    #[must_use]
    pub fn classify(password: &str) -> Self {
        let len = password.chars().count();
        if len < 6 {
            Self::Weak
        } else if len < 8 {
            Self::Fair
        } else if password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
        {
            Self::Strong
        } else {
            Self::Good
        }
    }

    /// Classification for display: `None` while the password is empty.
    #[must_use]
    pub fn for_display(password: &str) -> Option<Self> {
        (!password.is_empty()).then(|| Self::classify(password))
    }

    /// Number of filled meter segments out of four.
    #[must_use]
    pub const fn level(self) -> usize {
        match self {
            Self::Weak => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::Strong => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

/// Whether the confirmation visibly disagrees with the password.
///
/// Only reported once both fields have content.
#[must_use]
pub fn passwords_mismatch(password: &str, confirmation: &str) -> bool {
    !password.is_empty() && !confirmation.is_empty() && password != confirmation
}

/// Keeps the digits of a phone entry, truncated to [`PHONE_MAX_DIGITS`].
///
/// ```
/// use worklink::domain::credentials::sanitize_phone;
///
/// assert_eq!(sanitize_phone("0917 123 4567 89"), "09171234567");
/// ```
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_MAX_DIGITS)
        .collect()
}

/// Normalizes the login "email or phone" field.
///
/// An all-digit entry is treated as a phone number and truncated; anything else is
/// kept exactly as typed.
#[must_use]
pub fn sanitize_email_or_phone(raw: &str) -> String {
    if raw.chars().all(|c| c.is_ascii_digit()) {
        raw.chars().take(PHONE_MAX_DIGITS).collect()
    } else {
        raw.to_string()
    }
}

/// Whether `phone` has the local mobile shape `09XXXXXXXXX`.
#[must_use]
pub fn looks_like_mobile(phone: &str) -> bool {
    phone.len() == PHONE_MAX_DIGITS
        && phone.starts_with("09")
        && phone.chars().all(|c| c.is_ascii_digit())
}

/// Whether `email` has the rough shape `local@domain.tld`.
#[must_use]
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && !host.is_empty()
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_thresholds() {
        assert_eq!(PasswordStrength::classify("abc"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("abcdef"), PasswordStrength::Fair);
        assert_eq!(PasswordStrength::classify("abcdefgh"), PasswordStrength::Good);
        assert_eq!(PasswordStrength::classify("Abcdefg1"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify("ABCDEFG1"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify("Abcdefgh"), PasswordStrength::Good);
        assert_eq!(PasswordStrength::classify("Abc1"), PasswordStrength::Weak);
    }

    #[test]
    fn strength_levels_are_ordered() {
        assert!(PasswordStrength::Weak < PasswordStrength::Fair);
        assert!(PasswordStrength::Good < PasswordStrength::Strong);
        assert_eq!(PasswordStrength::Strong.level(), 4);
        assert_eq!(PasswordStrength::for_display(""), None);
    }

    #[test]
    fn mismatch_needs_both_fields() {
        assert!(!passwords_mismatch("secret", ""));
        assert!(!passwords_mismatch("", "secret"));
        assert!(!passwords_mismatch("secret", "secret"));
        assert!(passwords_mismatch("secret", "secreT"));
    }

    #[test]
    fn email_or_phone_only_truncates_digit_runs() {
        assert_eq!(sanitize_email_or_phone("091712345678"), "09171234567");
        assert_eq!(
            sanitize_email_or_phone("maria.santos@example.ph"),
            "maria.santos@example.ph"
        );
        assert_eq!(sanitize_email_or_phone(""), "");
    }

    #[test]
    fn format_hints() {
        assert!(looks_like_mobile("09171234567"));
        assert!(!looks_like_mobile("08171234567"));
        assert!(!looks_like_mobile("0917123456"));
        assert!(looks_like_email("juan@worklink.ph"));
        assert!(!looks_like_email("juan@worklink"));
        assert!(!looks_like_email("@worklink.ph"));
        assert!(!looks_like_email("juan dela@worklink.ph"));
    }
}
