// Content generation: prompt building, the single backend call, and
// per-type normalization of the returned text.
// All backend calls go through llm_client — no direct HTTP calls here.

pub mod builder;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
