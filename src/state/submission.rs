//! Membership consent and submit lifecycle.
//!
//! The `membership` select gates the `agree` checkbox: the checkbox is only
//! enabled while a membership is requested. Once a submit passes every
//! check, the page switches into the posting state until the browser
//! navigates away.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

pub const MEMBERSHIP_REQUESTED: &str = "1";
pub const MEMBERSHIP_DECLINED: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("يجب الموافقة على شروط العضوية")]
    TermsNotAccepted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub membership_requested: bool,
    pub agreed: bool,
    pub posting: bool,
}

impl SubmissionState {
    /// Apply a new `membership` select value. Unknown values leave the state
    /// unchanged.
    pub fn set_membership(&mut self, value: &str) {
        match value {
            MEMBERSHIP_REQUESTED => self.membership_requested = true,
            MEMBERSHIP_DECLINED => self.membership_requested = false,
            other => log::warn!("ignoring unknown membership value {other:?}"),
        }
    }

    pub fn agree_enabled(&self) -> bool {
        self.membership_requested
    }

    pub fn set_agreed(&mut self, agreed: bool) {
        if self.agree_enabled() {
            self.agreed = agreed;
        }
    }

    /// Consent is only required when a membership is requested.
    pub fn check_consent(&self) -> Result<(), SubmitError> {
        if self.membership_requested && !self.agreed {
            Err(SubmitError::TermsNotAccepted)
        } else {
            Ok(())
        }
    }

    pub fn begin_posting(&mut self) {
        self.posting = true;
    }
}
