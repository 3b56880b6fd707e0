pub mod block;
pub mod vocabulary;

pub use block::{
    validate_blocks, validate_json_blocks, BlockFailure, BlockValidationReport, ContentBlock,
    RawContentBlock,
};
pub use vocabulary::{ContentType, Language, Layout, VocabularyError};
