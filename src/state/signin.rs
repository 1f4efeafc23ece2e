//! Sign-in workflow: validation gates, submit phases, and the role routing
//! table.
//!
//! The workflow is modelled explicitly rather than as a boolean loading
//! flag. A submit moves `Idle -> Submitting`, and the request's outcome
//! moves `Submitting -> Succeeded | Failed`; a later submit starts the
//! cycle over. `Submitting` doubles as the mutual-exclusion gate: while a
//! request is in flight, further submits are rejected, so at most one
//! request is ever outstanding per form.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

/// Credentials collected from the sign-in form. Input only; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 20;

/// Per-field validation outcome for the sign-in form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Run every pre-submit gate. Any error here blocks the request entirely.
#[must_use]
pub fn validate(credentials: &Credentials) -> FieldErrors {
    FieldErrors {
        email: validate_email(&credentials.email).err(),
        password: validate_password(&credentials.password).err(),
    }
}

/// Email gate: required, and must look like `local@domain.tld`.
///
/// # Errors
///
/// Returns the field-level message to display.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email) {
        return Err("This is not a valid email");
    }
    Ok(())
}

/// Password gate: required, no whitespace, length 8..=20.
///
/// # Errors
///
/// Returns the field-level message to display.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().any(char::is_whitespace) {
        return Err("Password cannot contain spaces");
    }
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        return Err("Password must be minimum 8 characters");
    }
    if len > PASSWORD_MAX {
        return Err("Password cannot exceed more than 20 characters");
    }
    Ok(())
}

/// Standard email syntax: ASCII letters/digits/`._%+-` local part, a domain
/// of letters/digits/`.-`, and an alphabetic TLD of at least two characters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c))
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Where the sign-in workflow stands for the current form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a submit.
    #[default]
    Idle,
    /// Exactly one authentication request is in flight.
    Submitting,
    /// Session written and navigation issued; ready for a fresh submit.
    Succeeded,
    /// Request failed; error available for display, ready for resubmission.
    Failed,
}

/// Sign-in workflow state provided via context to the form and its button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInState {
    pub phase: Phase,
    pub error: Option<String>,
}

impl SignInState {
    /// Move into `Submitting`. Returns `false` while a request is already
    /// in flight, in which case the state is left untouched.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.phase = Phase::Submitting;
        self.error = None;
        true
    }

    /// Record a completed request with a well-formed response.
    pub fn succeed(&mut self) {
        self.phase = Phase::Succeeded;
        self.error = None;
    }

    /// Record a failed request and the message to display for it.
    pub fn fail(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.error = Some(message);
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// Post-login destination for a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub path: &'static str,
    /// The customer landing page does a full reload so the whole app
    /// rehydrates against the freshly stored session.
    pub force_reload: bool,
}

/// Fixed role-to-route table.
///
/// Roles outside the table produce no navigation at all; the session is
/// still recorded for them and the user stays on the sign-in page.
#[must_use]
pub fn navigation_target(role_type: &str) -> Option<NavTarget> {
    match role_type {
        "CUSTOMER" => Some(NavTarget {
            path: "/user-landing-page",
            force_reload: true,
        }),
        "SUPER_ADMIN" => Some(NavTarget {
            path: "/super/admin/products",
            force_reload: false,
        }),
        "PARTNER" => Some(NavTarget {
            path: "/partner/dashboard",
            force_reload: false,
        }),
        "ADMIN" => Some(NavTarget {
            path: "/admin/usermanagement",
            force_reload: false,
        }),
        _ => None,
    }
}
