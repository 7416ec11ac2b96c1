// Generation flow: form state -> prompt -> text generator -> raw result.
// All LLM calls go through llm_client; parsing lives in document.

pub mod generator;
pub mod handlers;
pub mod prompts;
