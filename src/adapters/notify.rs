use crate::domain::ports::ErrorChannel;
use crate::utils::error::ServiceError;

/// Prints a banner on stderr for every service failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrBanner;

impl ErrorChannel for StderrBanner {
    fn report(&self, keyword: &str, error: &ServiceError) {
        tracing::error!("Gemini API call failed for '{}': {}", keyword, error);
        eprintln!(
            "❌ An error occurred while communicating with the Gemini API: {}",
            error
        );
    }
}
