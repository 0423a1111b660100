use crate::error::SamResult;
use crate::models::{ClassDeclaration, FunctionType, MethodDeclaration, TypeValue};

/// Entry point for SAM conversion queries.
///
/// `Ok(None)` means "not SAM-convertible". `Err` is reserved for broken
/// invariants between the resolver and its collaborators.
pub trait SamResolver: Send + Sync {
    /// Function type of `class`'s single abstract method, before any
    /// use-site substitution.
    fn resolve_function_type_if_sam_interface(
        &self,
        class: &ClassDeclaration,
    ) -> SamResult<Option<FunctionType>>;

    /// Function type a value of `ty` can be replaced with, instantiated for
    /// the type arguments and nullability of this use.
    fn function_type_for_possible_sam_type(&self, ty: &TypeValue) -> SamResult<Option<TypeValue>>;

    /// Whether SAM conversion should be attempted for arguments of `callable`.
    fn should_run_conversion_for_callable(&self, callable: &MethodDeclaration) -> bool;
}
