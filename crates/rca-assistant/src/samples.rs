//! Suggested questions and the input draft they fill.
//!
//! Choosing a sample copies it into the draft. The deep-analysis sample is
//! special: when the affordance is enabled the user is asked to confirm, and a
//! yes replaces the draft with a canned remediation write-up instead. This is
//! separate from the classifier rule table.

/// Sample questions offered to the user, in display order.
pub const SAMPLE_QUERIES: [&str; 7] = [
    "What incidents happened in the last 24 hours?",
    "Show me SLO compliance for auth-service",
    "Why did latency spike at 12:30?",
    "What's the MTTR trend this week?",
    "Which services have the most incidents?",
    "Show me database connection issues",
    DEEP_ANALYSIS_QUERY,
];

/// Sample that triggers the confirmation-gated prefill. Matched exactly.
pub const DEEP_ANALYSIS_QUERY: &str = "Analyze the SLI breach and figure out the root cause";

/// Yes/no question asked before the remediation text is prefilled.
pub const DEEP_ANALYSIS_CONFIRMATION: &str = "Do you want to analyse the SLI breach and root cause for the metric service.latency.avg for auth-service spiked to 420 at 12:30 UTC?";

/// Draft text used when the deep-analysis prompt is confirmed.
pub const DEEP_ANALYSIS_REMEDIATION: &str = "The analysis of the auth-service latency spike to 420ms at 12:30 UTC is as follows:

- The observed 420ms latency likely breached the SLI (Service Level Indicator) for this user-facing service.

- The root cause was a NullPointerException in the AuthController caused by improper initialization of the session variable before accessing user data during login. This led to crashes and increased latency.

To resolve the issue and prevent future SLI breaches:

1. Fix the NullPointerException by initializing the session variable properly before accessing user data, as per issue_101 \"Null pointer on login\".

2. Review and optimize inefficient database queries in AuthController and related classes.

3. Increase the database connection pool size to handle higher concurrency.

4. Implement caching for frequently accessed user data to reduce database load.

5. Monitor auth-service performance and latency metrics after changes to ensure SLIs are met.

By implementing these steps, the NullPointerException should be resolved, auth-service latency should decrease, and potential SLI breaches should be prevented going forward.";

/// Whether `text` is exactly the deep-analysis sample.
#[must_use]
pub fn is_deep_analysis(text: &str) -> bool {
    text == DEEP_ANALYSIS_QUERY
}

/// Sample at 1-based `index`, as shown to the user.
#[must_use]
pub fn sample(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|zero_based| SAMPLE_QUERIES.get(zero_based))
        .copied()
}

/// Source of yes/no answers for the deep-analysis prompt.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// How [`InputDraft::choose_sample`] changed the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleChoice {
    /// Draft now holds the sample text.
    Filled,
    /// Draft now holds [`DEEP_ANALYSIS_REMEDIATION`].
    RemediationFilled,
    /// Confirmation was declined; draft untouched.
    Declined,
}

/// Text waiting in the input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDraft {
    text: String,
}

impl InputDraft {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empty the field and return what it held.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Fill the draft from a chosen sample.
    ///
    /// With `deep_analysis` enabled, the deep-analysis sample asks `confirm`
    /// first. Any other sample, or the deep-analysis sample with the affordance
    /// disabled, is copied verbatim.
    pub fn choose_sample(
        &mut self,
        sample: &str,
        deep_analysis: bool,
        confirm: &mut impl Confirm,
    ) -> SampleChoice {
        if deep_analysis && is_deep_analysis(sample) {
            if confirm.confirm(DEEP_ANALYSIS_CONFIRMATION) {
                tracing::debug!("deep-analysis prefill confirmed");
                self.set(DEEP_ANALYSIS_REMEDIATION);
                return SampleChoice::RemediationFilled;
            }
            tracing::debug!("deep-analysis prefill declined");
            return SampleChoice::Declined;
        }

        self.set(sample);
        SampleChoice::Filled
    }
}
