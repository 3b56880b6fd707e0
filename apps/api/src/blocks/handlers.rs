use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{AppError, AppJson};
use crate::models::{
    validate_json_blocks, BlockValidationReport, ContentBlock, ContentType, Language, Layout,
    RawContentBlock,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VocabularyMember {
    pub name: &'static str,
    pub code: u8,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub layouts: Vec<VocabularyMember>,
    pub content_types: Vec<VocabularyMember>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Deserialize)]
pub struct BatchValidateRequest {
    /// Kept untyped so one malformed element fails on its own index.
    pub blocks: Vec<Value>,
}

/// GET /api/v1/vocabulary
pub async fn handle_vocabulary() -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        layouts: Layout::ALL
            .iter()
            .map(|l| VocabularyMember {
                name: l.name(),
                code: l.code(),
            })
            .collect(),
        content_types: ContentType::ALL
            .iter()
            .map(|t| VocabularyMember {
                name: t.name(),
                code: t.code(),
            })
            .collect(),
        languages: Language::ALL.to_vec(),
    })
}

/// POST /api/v1/blocks/validate
pub async fn handle_validate(
    AppJson(raw): AppJson<RawContentBlock>,
) -> Result<Json<ContentBlock>, AppError> {
    let block = ContentBlock::try_from(raw)?;
    debug!(
        layout = %block.layout,
        content_type = %block.content_type,
        language = ?block.language,
        "Validated content block"
    );
    Ok(Json(block))
}

/// POST /api/v1/blocks/validate/batch
pub async fn handle_validate_batch(
    State(state): State<AppState>,
    AppJson(req): AppJson<BatchValidateRequest>,
) -> Result<Json<BlockValidationReport>, AppError> {
    if req.blocks.len() > state.config.max_batch_blocks {
        return Err(AppError::Validation(format!(
            "Batch of {} blocks exceeds the limit of {}",
            req.blocks.len(),
            state.config.max_batch_blocks
        )));
    }

    let report = validate_json_blocks(&req.blocks);
    info!(
        "Batch validation: {} accepted, {} rejected",
        report.blocks.len(),
        report.failures.len()
    );
    Ok(Json(report))
}
