//! Configuration consumed by the unification pipeline.

pub mod defaults;
pub mod unify_config;

pub use unify_config::UnifyConfig;
