use thiserror::Error;

/// Failure surfaced to the host application through a response's
/// [`Responder`](crate::task::Responder).
///
/// Everything else in a task's lifecycle (timeout, forced stop, a behavior
/// with no effect) is a successful completion, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlingError {
    /// The requested behavior would change the notification's presentation,
    /// which is the job of the native presentation layer, not this crate.
    #[error("Notification presenting not implemented.")]
    PresentationNotImplemented,
}

impl HandlingError {
    /// Stable error code delivered to the host application alongside the
    /// message on the reject path.
    pub fn code(&self) -> &'static str {
        match self {
            HandlingError::PresentationNotImplemented => "ERR_NOTIFICATION_PRESENTATION_IMPL",
        }
    }
}

/// Lifecycle misuse of a [`ResponseTask`](crate::task::ResponseTask).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task has already been started")]
    AlreadyStarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_error_matches_bridge_contract() {
        let err = HandlingError::PresentationNotImplemented;
        assert_eq!(err.code(), "ERR_NOTIFICATION_PRESENTATION_IMPL");
        assert_eq!(err.to_string(), "Notification presenting not implemented.");
    }
}
