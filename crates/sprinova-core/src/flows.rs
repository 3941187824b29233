//! Input/output contracts and prompt templates for the site's AI tools.
//!
//! The tools themselves are thin: validate the request, render a prompt, and
//! hand it to the generation client. No retries and no partial results; a
//! failed generation surfaces to the user as a single error toast.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// The kinds of content the draft generator offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[serde(alias = "Blog Post")]
    BlogPost,
    #[serde(alias = "Social Media Update")]
    SocialMediaUpdate,
    #[serde(alias = "Email Campaign")]
    EmailCampaign,
}

impl ContentKind {
    pub fn all() -> [ContentKind; 3] {
        [
            ContentKind::BlogPost,
            ContentKind::SocialMediaUpdate,
            ContentKind::EmailCampaign,
        ]
    }

    /// Human-readable label as shown in the tool's picker.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::BlogPost => "Blog Post",
            ContentKind::SocialMediaUpdate => "Social Media Update",
            ContentKind::EmailCampaign => "Email Campaign",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = SiteError;

    /// Accepts both the snake_case wire form and the human label.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "blog_post" => Ok(ContentKind::BlogPost),
            "social_media_update" => Ok(ContentKind::SocialMediaUpdate),
            "email_campaign" => Ok(ContentKind::EmailCampaign),
            _ => Err(SiteError::UnknownContentType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Analytics summary flow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummaryInput {
    /// Raw analytics report to summarize, typically JSON.
    pub analytics_data: String,
    pub industry: String,
    pub target_audience: String,
}

impl AnalyticsSummaryInput {
    pub fn validate(&self) -> Result<()> {
        if self.analytics_data.trim().is_empty() {
            return Err(SiteError::invalid("analytics_data", "must not be empty"));
        }
        if self.industry.trim().is_empty() {
            return Err(SiteError::invalid("industry", "must not be empty"));
        }
        if self.target_audience.trim().is_empty() {
            return Err(SiteError::invalid("target_audience", "must not be empty"));
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        format!(
            "You are an expert digital marketing analyst. You will summarize \
             analytics data and provide actionable recommendations.\n\n\
             Industry: {}\n\
             Target Audience: {}\n\n\
             Analytics Data: {}\n\n\
             Summary:\n",
            self.industry, self.target_audience, self.analytics_data
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummaryOutput {
    /// Concise summary of the data, highlighting key trends and recommendations.
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Content draft flow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftInput {
    pub industry: String,
    pub target_audience: String,
    pub desired_message: String,
    pub content_type: ContentKind,
}

impl DraftInput {
    /// Same minimum lengths the site form enforces.
    pub fn validate(&self) -> Result<()> {
        if self.industry.trim().chars().count() < 2 {
            return Err(SiteError::invalid(
                "industry",
                "must be at least 2 characters",
            ));
        }
        if self.target_audience.trim().chars().count() < 2 {
            return Err(SiteError::invalid(
                "target_audience",
                "must be at least 2 characters",
            ));
        }
        if self.desired_message.trim().chars().count() < 10 {
            return Err(SiteError::invalid(
                "desired_message",
                "must be at least 10 characters",
            ));
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        format!(
            "You are an expert marketing copywriter at a digital agency. \
             Write an initial draft of a {} for a client.\n\n\
             Industry: {}\n\
             Target Audience: {}\n\
             Desired Message: {}\n\n\
             Keep the tone professional and engaging, and end with a clear \
             call to action.\n\n\
             Draft:\n",
            self.content_type.label().to_lowercase(),
            self.industry,
            self.target_audience,
            self.desired_message
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftOutput {
    pub draft_content: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
