// Assistant gateway modules
//
// This module forwards employee questions to an external text-generation
// service, grounding them in the induction content corpus. Each call is
// independent: no conversation memory, no retries.

pub mod errors;
pub mod gateway;
pub mod prompts;
pub mod types;

// Re-export main types
pub use errors::AssistantError;
pub use gateway::{
    AssistantGateway, CONNECTION_ERROR_REPLY, DEFAULT_BASE_URL, DEFAULT_MODEL,
    EMPTY_ANSWER_REPLY, SUMMARY_FAILED_REPLY, SUMMARY_UNAVAILABLE_REPLY,
};
