//! Data model and collaborator contracts for foreign SAM resolution.

pub mod error;
pub mod models;
pub mod provider;
pub mod resolver;

pub use error::{SamError, SamResult};
pub use models::*;
pub use provider::{
    ClassLookup, ProcessorAction, SamConversionPolicy, TypeSubstitutor, UseSiteMemberScope,
};
pub use resolver::SamResolver;
