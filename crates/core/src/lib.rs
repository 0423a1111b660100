pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod sam;
pub mod substitution;

pub use cache::CachedSamResolver;
pub use config::{CacheConfig, ResolverConfig};
pub use error::{CoreError, Result};
pub use sam::{PermissivePolicy, SamResolverImpl};
pub use substitution::StructuralSubstitutor;
