pub mod agent;

pub use agent::{AgentManifest, Category, ModelSpec, ModelTier, ParseEnumError};
