// Skill-relevance matching: corpus, similarity, scoring backends, and the
// filter/rank pipeline with its location fallback.
// Everything here is synchronous and pure; handlers are the only async layer.

pub mod corpus;
pub mod handlers;
pub mod pipeline;
pub mod scoring;
pub mod similarity;
