use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::AnalysisResult;

/// Code Analysis Interface
///
/// Forwards a snippet to the static-analysis service and returns its
/// refactoring suggestion.
///
/// # Errors
///
/// Returns [`crate::error::Error::Analysis`] with
/// [`crate::error::AnalysisFailure::Transport`] when the service cannot be
/// reached or answers with an unreadable body, and with
/// [`crate::error::AnalysisFailure::Service`] when the service reports an
/// error of its own. The message of a service failure is the service's
/// message, unchanged.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Analyze one snippet
    async fn analyze(&self, code: &str) -> Result<AnalysisResult>;

    /// Get the name/identifier of this analysis provider
    fn provider_name(&self) -> &str;
}
