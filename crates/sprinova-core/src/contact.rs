//! Contact form intake: the message shape and its validation. Delivery is a
//! collaborator concern; this module only decides what counts as acceptable.

use crate::error::{Result, SiteError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid literal")
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::invalid("name", "must not be empty"));
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err(SiteError::invalid("email", "must be a valid email address"));
        }
        if self.subject.trim().is_empty() {
            return Err(SiteError::invalid("subject", "must not be empty"));
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::invalid("message", "must not be empty"));
        }
        Ok(())
    }
}
