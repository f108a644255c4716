//! Signup form model and client-side validation.

use super::error::AuthError;
use crate::net::types::SignupRequest;

/// A `(value, label)` choice for a select input.
pub type Choice = (&'static str, &'static str);

pub const AGE_GROUPS: [Choice; 3] = [("20-30", "20–30"), ("30-40", "30–40"), ("40-50", "40–50")];

pub const EXPERTISE_LEVELS: [Choice; 3] = [("beginner", "Beginner"), ("advanced", "Advanced"), ("expert", "Expert")];

pub const FOCUS_AREAS: [&str; 4] = ["Long Term Trading", "Swing Trading", "Day Trading", "Portfolio Management"];

pub const MISSING_SELECTION_MESSAGE: &str = "Please select age group and trading expertise";

/// Display label for a stored choice value; unknown values pass through.
#[must_use]
pub fn choice_label<'a>(choices: &[Choice], value: &'a str) -> &'a str {
    choices
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |&(_, label)| label)
}

/// Raw signup form state as edited on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub age_group: String,
    pub trading_expertise: String,
    /// Selected focus areas in selection order.
    pub focus_areas: Vec<String>,
}

impl SignupForm {
    /// Add `area` if absent, remove it if present.
    pub fn toggle_focus(&mut self, area: &str) {
        if let Some(pos) = self.focus_areas.iter().position(|a| a == area) {
            self.focus_areas.remove(pos);
        } else {
            self.focus_areas.push(area.to_owned());
        }
    }

    #[must_use]
    pub fn has_focus(&self, area: &str) -> bool {
        self.focus_areas.iter().any(|a| a == area)
    }

    /// Check the selection fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when the age group or trading
    /// expertise is unselected.
    pub fn validate(&self) -> Result<SignupRequest, AuthError> {
        if self.age_group.trim().is_empty() || self.trading_expertise.trim().is_empty() {
            return Err(AuthError::Validation(MISSING_SELECTION_MESSAGE.to_owned()));
        }
        Ok(SignupRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: super::normalize_email(&self.email),
            password: self.password.clone(),
            age_group: self.age_group.clone(),
            trading_expertise: self.trading_expertise.clone(),
            focus_areas: self.focus_areas.clone(),
        })
    }
}
