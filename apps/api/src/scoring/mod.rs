// Fit Scoring Engine
// Implements: five sub-scorers, the weighted composite with explanation, and the
// bounded-concurrency ranker. All LLM calls go through llm_client via SkillMatcher.

pub mod aggregator;
pub mod availability;
pub mod experience;
pub mod profile;
pub mod prompts;
pub mod ranker;
pub mod salary;
pub mod skills;
pub mod timezone;
pub mod weights;
