//! JVM collaborators for SAM resolution: a class table and a use-site scope
//! with annotation-driven nullability enhancement.

pub mod enhancement;
pub mod error;
pub mod scope;
pub mod table;

pub use enhancement::EnhancementConfig;
pub use error::{Result, TableError};
pub use scope::JavaUseSiteScope;
pub use table::JavaClassTable;

use samscope_api::SamResolver;
use samscope_core::{CachedSamResolver, ResolverConfig, SamResolverImpl, StructuralSubstitutor};
use std::sync::Arc;

/// Assembles a resolver over `table` with the structural substitutor and the
/// permissive conversion policy, cached when the config asks for it.
pub fn build_default_resolver(
    table: Arc<JavaClassTable>,
    enhancement: EnhancementConfig,
    config: ResolverConfig,
) -> Arc<dyn SamResolver> {
    let scope = Arc::new(JavaUseSiteScope::new(table.clone(), enhancement));
    let cache = config.cache.clone();
    let resolver =
        SamResolverImpl::new(table, scope, Arc::new(StructuralSubstitutor)).with_config(config);

    tracing::info!(cached = cache.enabled, "SAM resolver ready");
    if cache.enabled {
        Arc::new(CachedSamResolver::new(resolver, &cache))
    } else {
        Arc::new(resolver)
    }
}
