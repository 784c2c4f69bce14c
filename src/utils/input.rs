use crate::domain::model::Keyword;
use crate::utils::error::{AppError, Result};
use std::io::Read;
use std::path::Path;

/// One keyword per line; lines are trimmed and blank ones dropped. Order and
/// duplicates are kept.
pub fn collect_keywords(text: &str) -> Vec<Keyword> {
    text.lines().filter_map(Keyword::parse).collect()
}

/// Gathers keywords from arguments first, then from the file (or stdin when
/// the path is `-`).
pub fn read_keyword_sources<R: Read>(
    args: &[String],
    file: Option<&Path>,
    stdin: R,
) -> Result<Vec<Keyword>> {
    let mut keywords: Vec<Keyword> = args.iter().flat_map(|a| collect_keywords(a)).collect();

    if let Some(path) = file {
        let content = if path == Path::new("-") {
            read_all(stdin)?
        } else {
            std::fs::read_to_string(path).map_err(|e| AppError::InputFileError {
                what: "keywords file",
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        };
        keywords.extend(collect_keywords(&content));
    }

    Ok(keywords)
}

fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}
