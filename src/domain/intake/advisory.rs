//! Non-blocking notices shown alongside the form.

use serde::Serialize;

use crate::domain::contact::ContactSchedule;

/// A warning or hint that never prevents submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The draft goal is below the value floor and was not offered.
    GoalValueTooLow { value: i64 },
    /// A specific contact day falls on a weekend.
    WeekendContact,
    /// Existing clients are pointed at their adviser or the portal.
    ExistingClient { portal_url: String },
    /// Confirms the chosen day and time while a specific slot is selected.
    ScheduledContact { schedule: ContactSchedule },
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::GoalValueTooLow { .. } => "Goal Value must be at least £1,000.".to_string(),
            Advisory::WeekendContact => "Cannot select a weekend for contact.".to_string(),
            Advisory::ExistingClient { portal_url } => format!(
                "As you are an existing client, please get in touch with your Adviser \
                 or Point of Contact directly or via the portal: {}.",
                portal_url
            ),
            Advisory::ScheduledContact { schedule } => {
                format!("You prefer to be contacted on {}.", schedule)
            }
        }
    }
}
