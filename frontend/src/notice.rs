use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::styles::alert_style;

const NOTICE_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// Only transient failures invite the user to retry.
    pub fn failure(action: &str, err: &shared::Error) -> Self {
        if err.is_retryable() {
            Notice::Error(format!("Error {}. Please try again.", action))
        } else {
            let reason = err.details.as_deref().unwrap_or(&err.message);
            Notice::Error(format!("Error {}: {}", action, reason))
        }
    }

    fn style(&self) -> &'static str {
        match self {
            Notice::Success(_) => "success",
            Notice::Error(_) => "error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Shows `notice` and clears it again after a few seconds.
pub fn flash(slot: &UseStateHandle<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice));
    let slot = slot.clone();
    Timeout::new(NOTICE_MS, move || slot.set(None)).forget();
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div class={alert_style(notice.style())} role="alert">
                <p class="text-center font-medium">{notice.text()}</p>
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use shared::{Error, ErrorCode, ValidationError};

    use super::Notice;

    #[test]
    fn test_remote_failures_prompt_retry() {
        let err = Error::remote("Failed to submit vote", "connection refused");
        assert_eq!(
            Notice::failure("submitting vote", &err),
            Notice::Error("Error submitting vote. Please try again.".into())
        );
    }

    #[test]
    fn test_rejections_show_reason_without_retry() {
        let err = Error::with_details(
            ErrorCode::ValidationFailed,
            "Failed to submit vote",
            "Invalid vote: Unknown goal m9 for category men",
        );
        assert_eq!(
            Notice::failure("submitting vote", &err),
            Notice::Error("Error submitting vote: Invalid vote: Unknown goal m9 for category men".into())
        );

        let err = Error::from(ValidationError::EmptyUserId);
        match Notice::failure("resetting votes", &err) {
            Notice::Error(text) => assert!(!text.contains("try again")),
            other => panic!("unexpected notice {:?}", other),
        }
    }
}
