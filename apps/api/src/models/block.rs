use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::vocabulary::{ContentType, Language, Layout, VocabularyError};

/// Content block as it arrives from a client, before any vocabulary check.
/// Codes are kept wide so out-of-range and negative values reach validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContentBlock {
    pub layout: i64,
    pub content_type: i64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub layout: Layout,
    pub content_type: ContentType,
    pub language: Option<Language>,
    pub body: String,
}

impl TryFrom<RawContentBlock> for ContentBlock {
    type Error = VocabularyError;

    fn try_from(raw: RawContentBlock) -> Result<Self, Self::Error> {
        Ok(ContentBlock {
            layout: Layout::try_from(raw.layout)?,
            content_type: ContentType::try_from(raw.content_type)?,
            language: raw.language.as_deref().map(str::parse::<Language>).transpose()?,
            body: raw.body,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockFailure {
    /// Position of the rejected block in the submitted batch.
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockValidationReport {
    pub passed: bool,
    pub blocks: Vec<ContentBlock>,
    pub failures: Vec<BlockFailure>,
}

/// Validates a batch of blocks, collecting every failure.
pub fn validate_blocks(raw_blocks: &[RawContentBlock]) -> BlockValidationReport {
    collect_report(
        raw_blocks
            .iter()
            .map(|raw| ContentBlock::try_from(raw.clone()).map_err(|e| e.to_string())),
    )
}

/// Validates a batch of untyped JSON blocks. An element with the wrong shape
/// (wrong JSON type, code outside `i64`) fails on its own index only.
pub fn validate_json_blocks(values: &[Value]) -> BlockValidationReport {
    collect_report(values.iter().map(|value| {
        let raw = RawContentBlock::deserialize(value).map_err(|e| e.to_string())?;
        ContentBlock::try_from(raw).map_err(|e| e.to_string())
    }))
}

fn collect_report<I>(results: I) -> BlockValidationReport
where
    I: Iterator<Item = Result<ContentBlock, String>>,
{
    let mut blocks = Vec::new();
    let mut failures = Vec::new();

    for (index, result) in results.enumerate() {
        match result {
            Ok(block) => blocks.push(block),
            Err(reason) => failures.push(BlockFailure { index, reason }),
        }
    }

    BlockValidationReport {
        passed: failures.is_empty(),
        blocks,
        failures,
    }
}
