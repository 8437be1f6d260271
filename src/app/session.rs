//! Session state.
//!
//! A single authentication flag. There is no credential store: every login or
//! sign-up is accepted. A real credential check would be consulted before
//! [`Session::login`] flips the flag.

/// Whether a user is signed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn login(&mut self) {
        self.logged_in = true;
        tracing::info!("user logged in");
    }

    pub fn sign_up(&mut self) {
        self.logged_in = true;
        tracing::info!("user signed up");
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        tracing::info!("user logged out");
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}
