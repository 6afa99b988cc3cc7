// AI career roadmap: prompt building, Gemini call, extraction and fallback.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod extractor;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
