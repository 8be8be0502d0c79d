use dioxus::prelude::*;

use services::ApiError;

/// View-facing error taxonomy: a localized notice, a dedicated not-found
/// state, or an expired session that sends the user back to login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    Unauthorized,
}

impl ViewError {
    #[must_use]
    pub fn from_api(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => ViewError::Unauthorized,
            ApiError::NotFound => ViewError::NotFound,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotFound => "This page does not exist anymore.",
            ViewError::Unauthorized => "Your session has expired. Please sign in again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
