//! Password strength and field sanitizing as the sign-up form sees them.

use worklink::app::ScreenState;
use worklink::domain::credentials::{
    looks_like_email, looks_like_mobile, passwords_mismatch, sanitize_email_or_phone,
    sanitize_phone,
};
use worklink::domain::PasswordStrength;
use worklink::{handle_event, AppState, Event, ScreenId};

#[test]
fn strength_follows_length_then_character_mix() {
    let cases = [
        ("abc", PasswordStrength::Weak),
        ("abcde", PasswordStrength::Weak),
        ("abcdef", PasswordStrength::Fair),
        ("Abcdef1", PasswordStrength::Fair),
        ("abcdefgh", PasswordStrength::Good),
        ("ABCDEFGH", PasswordStrength::Good),
        ("abcdefg1", PasswordStrength::Good),
        ("Abcdefg1", PasswordStrength::Strong),
    ];
    for (password, expected) in cases {
        assert_eq!(PasswordStrength::classify(password), expected, "{password}");
    }
}

#[test]
fn strength_levels_fill_the_meter() {
    assert_eq!(PasswordStrength::for_display(""), None);
    assert_eq!(PasswordStrength::Weak.level(), 1);
    assert_eq!(PasswordStrength::Strong.level(), 4);
    assert_eq!(PasswordStrength::Good.label(), "Good");
    assert!(PasswordStrength::Fair < PasswordStrength::Good);
}

#[test]
fn mismatch_needs_both_fields() {
    assert!(!passwords_mismatch("secret12", ""));
    assert!(!passwords_mismatch("", "secret12"));
    assert!(!passwords_mismatch("secret12", "secret12"));
    assert!(passwords_mismatch("secret12", "secret13"));
}

#[test]
fn phone_keeps_eleven_digits() {
    assert_eq!(sanitize_phone("+63 917 123 4567"), "63917123456");
    assert_eq!(sanitize_phone("abc"), "");
    assert!(looks_like_mobile("09171234567"));
    assert!(!looks_like_mobile("63917123456"));
}

#[test]
fn email_or_phone_only_truncates_numbers() {
    assert_eq!(sanitize_email_or_phone("091712345678"), "09171234567");
    assert_eq!(sanitize_email_or_phone("juan@example.com"), "juan@example.com");
    assert!(looks_like_email("juan@example.com"));
    assert!(!looks_like_email("juan@example"));
}

#[test]
fn sign_up_form_tracks_strength_while_typing() {
    let mut state = AppState::default();
    handle_event(&mut state, &Event::Navigate(ScreenId::SignUp)).unwrap();
    for c in "Ana".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::FocusNext).unwrap();
    for c in "ana@example.com".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::FocusNext).unwrap();
    for c in "09181234567".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::Activate).unwrap();

    let mut strengths = vec![];
    for c in "Abcdefg1".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
        let ScreenState::SignUp(form) = state.screen() else {
            panic!("expected sign-up form");
        };
        strengths.push(form.strength());
    }

    assert_eq!(strengths.first(), Some(&Some(PasswordStrength::Weak)));
    assert_eq!(strengths[5], Some(PasswordStrength::Fair));
    assert_eq!(strengths.last(), Some(&Some(PasswordStrength::Strong)));
}
