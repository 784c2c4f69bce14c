use crate::domain::model::{Credential, VariationResult, EXPECTED_VARIATIONS};
use crate::domain::ports::{ErrorChannel, TextGenerator};

/// Builds the instruction sent to the model for one keyword.
pub fn build_prompt(keyword: &str) -> String {
    format!(
        "Generate exactly {count} possible variations of how the following keyword could be used\n\
         in a conversational query by a user asking a question to an LLM.\n\
         \n\
         - The variations should be natural-sounding questions or phrases.\n\
         - Do not add any introduction, conclusion, or extra formatting.\n\
         - Return only a numbered list of the {count} variations.\n\
         \n\
         KEYWORD: \"{keyword}\"",
        count = EXPECTED_VARIATIONS,
    )
}

/// Removes one leading `<digits>. ` marker.
///
/// Leading whitespace before the marker is ignored. A line without a marker is
/// returned unchanged, so a model that skips numbering still yields usable
/// lines, and a `. ` later in the sentence is never touched.
pub fn strip_enumeration(line: &str) -> &str {
    let trimmed = line.trim_start();
    let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == trimmed.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(after_dot) if after_dot.is_empty() || after_dot.starts_with(char::is_whitespace) => {
            after_dot.trim_start()
        }
        _ => line,
    }
}

/// Splits raw model output into cleaned variations, keeping model order.
/// The count is not enforced.
pub fn parse_variations(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_enumeration(line).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct VariationGenerator<G: TextGenerator, N: ErrorChannel> {
    generator: G,
    errors: N,
}

impl<G: TextGenerator, N: ErrorChannel> VariationGenerator<G, N> {
    pub fn new(generator: G, errors: N) -> Self {
        Self { generator, errors }
    }

    /// Produces the variations for one keyword.
    ///
    /// Never fails: an empty keyword short-circuits without a network call,
    /// and any service failure is reported on the error channel and turned
    /// into a sentinel naming the keyword.
    pub async fn generate(&self, credential: &Credential, keyword: &str) -> VariationResult {
        if keyword.is_empty() {
            return VariationResult::EmptyKeyword;
        }

        let prompt = build_prompt(keyword);
        tracing::debug!("Requesting variations for '{}'", keyword);

        match self.generator.submit(&prompt, credential).await {
            Ok(text) => {
                let variations = parse_variations(&text);
                if variations.len() != EXPECTED_VARIATIONS {
                    tracing::warn!(
                        "Expected {} variations for '{}', model returned {}",
                        EXPECTED_VARIATIONS,
                        keyword,
                        variations.len()
                    );
                }
                VariationResult::Variations(variations)
            }
            Err(error) => {
                self.errors.report(keyword, &error);
                VariationResult::ServiceFailure {
                    keyword: keyword.to_string(),
                }
            }
        }
    }
}
