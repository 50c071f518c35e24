//! What the board shows, and the capability it shows it through.

use crate::api::ApiError;
use crate::format::{get_initials, participants_header, spots_left_text};
use crate::model::Activity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub initials: String,
}

/// One `<li>` of a card's participant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantItem {
    /// Stands in for an empty list; has no delete control.
    Placeholder,
    Participant(ParticipantRow),
}

impl ParticipantItem {
    pub fn is_removable(&self) -> bool {
        matches!(self, ParticipantItem::Participant(_))
    }
}

/// Render-ready form of one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub availability: String,
    pub participants_header: String,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            availability: spots_left_text(activity.spots_left()),
            participants_header: participants_header(activity.participants.len()),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    email: email.clone(),
                    initials: get_initials(email),
                })
                .collect(),
        }
    }

    pub fn participant_items(&self) -> Vec<ParticipantItem> {
        if self.participants.is_empty() {
            return vec![ParticipantItem::Placeholder];
        }
        self.participants
            .iter()
            .cloned()
            .map(ParticipantItem::Participant)
            .collect()
    }
}

/// Content of the activity list container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListView {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Everything the board needs from the page. The browser implementation
/// lives in `app`; tests record calls instead.
pub trait BoardSurface {
    /// Replaces the whole activity list container.
    fn show_activities(&self, view: ListView);

    /// Replaces the select options that follow the placeholder.
    fn set_activity_options(&self, names: Vec<String>);

    /// Sets text and style of the status area and unhides it.
    fn show_status(&self, status: StatusMessage);

    /// Hides the status area after `delay_ms`. Earlier pending hides are not
    /// cancelled.
    fn hide_status_after(&self, delay_ms: u32);

    /// Clears the signup form fields.
    fn reset_form(&self);

    /// Blocking yes/no prompt.
    fn confirm(&self, prompt: &str) -> bool;

    /// Blocking notice.
    fn alert(&self, message: &str);

    fn log_info(&self, message: &str);

    fn log_error(&self, context: &str, err: &ApiError);
}
