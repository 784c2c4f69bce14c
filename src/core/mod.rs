pub mod engine;
pub mod variation;

pub use crate::domain::model::{Credential, Keyword, KeywordReport, VariationResult};
pub use crate::domain::ports::{ConfigProvider, ErrorChannel, TextGenerator};
