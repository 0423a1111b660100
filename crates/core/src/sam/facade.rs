use super::dispatch::TypeShapeDispatcher;
use super::function_type_for_class;
use super::instantiate::GenericSubstitutorAdapter;
use super::policy::PermissivePolicy;
use crate::config::ResolverConfig;
use samscope_api::provider::{ClassLookupPtr, ConversionPolicyPtr, MemberScopePtr, SubstitutorPtr};
use samscope_api::{
    ClassDeclaration, FunctionType, MethodDeclaration, SamResolver, SamResult, TypeValue,
};
use std::sync::Arc;
use tracing::instrument;

/// Default [`SamResolver`], assembled from explicitly injected collaborators.
pub struct SamResolverImpl {
    lookup: ClassLookupPtr,
    scope: MemberScopePtr,
    substitutor: SubstitutorPtr,
    policy: ConversionPolicyPtr,
    config: ResolverConfig,
}

impl SamResolverImpl {
    pub fn new(lookup: ClassLookupPtr, scope: MemberScopePtr, substitutor: SubstitutorPtr) -> Self {
        Self {
            lookup,
            scope,
            substitutor,
            policy: Arc::new(PermissivePolicy),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_policy(mut self, policy: ConversionPolicyPtr) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn dispatcher(&self) -> TypeShapeDispatcher<'_> {
        let top_type = &self.config.top_type;
        TypeShapeDispatcher::new(
            self.lookup.as_ref(),
            self.scope.as_ref(),
            GenericSubstitutorAdapter::new(self.substitutor.as_ref(), top_type),
            top_type,
        )
    }
}

impl SamResolver for SamResolverImpl {
    #[instrument(level = "debug", skip_all, fields(class = %class.class_id))]
    fn resolve_function_type_if_sam_interface(
        &self,
        class: &ClassDeclaration,
    ) -> SamResult<Option<FunctionType>> {
        function_type_for_class(class, self.scope.as_ref(), &self.config.top_type)
    }

    #[instrument(level = "debug", skip_all, fields(ty = %ty))]
    fn function_type_for_possible_sam_type(&self, ty: &TypeValue) -> SamResult<Option<TypeValue>> {
        self.dispatcher().function_type_for_possible_sam_type(ty)
    }

    fn should_run_conversion_for_callable(&self, callable: &MethodDeclaration) -> bool {
        self.policy.should_run_conversion(callable)
    }
}
