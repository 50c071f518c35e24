//! The board's three user actions. Each one handles its own failures and
//! reports them through the surface; none of them return an error.

use crate::api::{ActivityApi, ApiError};
use crate::config::DEFAULT_STATUS_HIDE_MS;
use crate::format;
use crate::surface::{ActivityCard, BoardSurface, ListView, StatusMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// User said no; nothing was sent.
    Declined,
    Removed,
    Failed,
}

pub struct ActivityBoard<A, S> {
    api: A,
    surface: S,
    status_hide_ms: u32,
}

impl<A: ActivityApi, S: BoardSurface> ActivityBoard<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            status_hide_ms: DEFAULT_STATUS_HIDE_MS,
        }
    }

    pub fn with_status_hide_ms(mut self, ms: u32) -> Self {
        self.status_hide_ms = ms;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetches every activity and rebuilds the list and the select options.
    /// On failure only the list is replaced; the options are left alone.
    pub async fn load_and_render(&self) {
        match self.api.fetch_activities().await {
            Ok(collection) => {
                let cards = collection.iter().map(ActivityCard::from_activity).collect();
                self.surface.show_activities(ListView::Loaded(cards));
                self.surface.set_activity_options(collection.names());
                self.surface
                    .log_info(&format!("Loaded {} activities", collection.len()));
            }
            Err(err) => {
                self.surface
                    .show_activities(ListView::Failed(format::LOAD_FAILED.to_string()));
                self.surface.log_error("Error fetching activities", &err);
            }
        }
    }

    pub async fn remove_participant(&self, activity: &str, email: &str) -> RemovalOutcome {
        if !self.surface.confirm(&format::remove_prompt(email, activity)) {
            return RemovalOutcome::Declined;
        }

        match self.api.remove_participant(activity, email).await {
            Ok(()) => {
                self.load_and_render().await;
                RemovalOutcome::Removed
            }
            Err(ApiError::Server { detail, .. }) => {
                let text = detail.unwrap_or_else(|| format::REMOVE_FALLBACK.to_string());
                self.surface.alert(&text);
                RemovalOutcome::Failed
            }
            Err(err) => {
                self.surface.log_error("Error removing participant", &err);
                self.surface.alert(format::REMOVE_FAILED);
                RemovalOutcome::Failed
            }
        }
    }

    /// Does not refresh the list on success; counts stay as they were until
    /// the next load.
    pub async fn submit_signup(&self, email: &str, activity: &str) -> StatusMessage {
        let status = match self.api.signup(activity, email).await {
            Ok(message) => {
                let status = StatusMessage::success(message);
                self.surface.show_status(status.clone());
                self.surface.reset_form();
                status
            }
            Err(ApiError::Server { detail, .. }) => {
                let status = StatusMessage::error(
                    detail.unwrap_or_else(|| format::SIGNUP_FALLBACK.to_string()),
                );
                self.surface.show_status(status.clone());
                status
            }
            Err(err) => {
                let status = StatusMessage::error(format::SIGNUP_FAILED);
                self.surface.show_status(status.clone());
                self.surface.log_error("Error signing up", &err);
                status
            }
        };
        self.surface.hide_status_after(self.status_hide_ms);
        status
    }
}
