use crate::core::variation::VariationGenerator;
use crate::domain::model::{Credential, Keyword, KeywordReport};
use crate::domain::ports::{ErrorChannel, TextGenerator};

/// Runs keywords one at a time, in input order. A failed keyword never stops
/// the ones after it.
pub struct VariationEngine<G: TextGenerator, N: ErrorChannel> {
    generator: VariationGenerator<G, N>,
}

impl<G: TextGenerator, N: ErrorChannel> VariationEngine<G, N> {
    pub fn new(generator: VariationGenerator<G, N>) -> Self {
        Self { generator }
    }

    pub async fn run(&self, credential: &Credential, keywords: &[Keyword]) -> Vec<KeywordReport> {
        tracing::info!("Generating variations for {} keywords", keywords.len());

        let mut reports = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            tracing::info!("Generating variations for '{}'...", keyword);
            let result = self.generator.generate(credential, keyword.as_str()).await;

            match result.error_message() {
                Some(message) => tracing::debug!("{}", message),
                None => tracing::info!(
                    "Received {} variations for '{}'",
                    result.lines().len(),
                    keyword
                ),
            }

            reports.push(KeywordReport::new(keyword.clone(), result));
        }

        let failed = reports.iter().filter(|r| r.result.is_error()).count();
        if failed > 0 {
            tracing::warn!("{} of {} keywords failed", failed, reports.len());
        }

        reports
    }
}
