//! Memoization on top of a [`SamResolver`].

use crate::config::CacheConfig;
use dashmap::DashMap;
use samscope_api::{
    ClassDeclaration, FunctionType, MethodDeclaration, SamResolver, SamResult, TypeValue,
};
use tracing::trace;

/// Caches resolver answers per class declaration and per type.
///
/// Classes are keyed by the whole declaration, not its id, so two
/// declarations sharing an id never share an answer. Only successful answers
/// (including "not convertible") are stored; invariant violations are
/// returned every time.
pub struct CachedSamResolver<R> {
    inner: R,
    classes: DashMap<ClassDeclaration, Option<FunctionType>>,
    types: DashMap<TypeValue, Option<TypeValue>>,
    max_entries: usize,
}

impl<R: SamResolver> CachedSamResolver<R> {
    pub fn new(inner: R, config: &CacheConfig) -> Self {
        Self {
            inner,
            classes: DashMap::new(),
            types: DashMap::new(),
            max_entries: config.max_entries,
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of cached class and type entries.
    pub fn len(&self) -> usize {
        self.classes.len() + self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.classes.clear();
        self.types.clear();
    }

    fn make_room<K: Eq + std::hash::Hash, V>(&self, map: &DashMap<K, V>) {
        if self.max_entries > 0 && map.len() >= self.max_entries {
            trace!(entries = map.len(), "flushing SAM cache");
            map.clear();
        }
    }
}

impl<R: SamResolver> SamResolver for CachedSamResolver<R> {
    fn resolve_function_type_if_sam_interface(
        &self,
        class: &ClassDeclaration,
    ) -> SamResult<Option<FunctionType>> {
        if let Some(hit) = self.classes.get(class) {
            return Ok(hit.value().clone());
        }
        let result = self.inner.resolve_function_type_if_sam_interface(class)?;
        self.make_room(&self.classes);
        self.classes.insert(class.clone(), result.clone());
        Ok(result)
    }

    fn function_type_for_possible_sam_type(&self, ty: &TypeValue) -> SamResult<Option<TypeValue>> {
        if let Some(hit) = self.types.get(ty) {
            return Ok(hit.value().clone());
        }
        let result = self.inner.function_type_for_possible_sam_type(ty)?;
        self.make_room(&self.types);
        self.types.insert(ty.clone(), result.clone());
        Ok(result)
    }

    fn should_run_conversion_for_callable(&self, callable: &MethodDeclaration) -> bool {
        self.inner.should_run_conversion_for_callable(callable)
    }
}
