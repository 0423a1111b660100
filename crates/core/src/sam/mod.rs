//! SAM (single abstract method) resolution.
//!
//! ```text
//! SamResolverImpl (facade)
//!       │
//!       ▼
//! TypeShapeDispatcher      →  Class / Flexible / Error / unsupported shapes
//!       │
//!       ▼
//! single_abstract_method   →  eligibility + use-site scope walk
//!       │
//!       ▼
//! synthesize               →  FunctionType
//!       │
//!       ▼
//! GenericSubstitutorAdapter → use-site type arguments and nullability
//! ```

pub mod abstract_method;
pub mod dispatch;
pub mod facade;
pub mod instantiate;
pub mod policy;
pub mod synthesis;

pub use abstract_method::single_abstract_method;
pub use dispatch::TypeShapeDispatcher;
pub use facade::SamResolverImpl;
pub use instantiate::GenericSubstitutorAdapter;
pub use policy::PermissivePolicy;
pub use synthesis::synthesize;

use samscope_api::{ClassDeclaration, ClassId, FunctionType, SamResult, UseSiteMemberScope};

/// Unsubstituted function type of `class`, if it is a SAM interface.
pub fn function_type_for_class(
    class: &ClassDeclaration,
    scope: &dyn UseSiteMemberScope,
    top_type: &ClassId,
) -> SamResult<Option<FunctionType>> {
    let method = single_abstract_method(class, scope, top_type)?;
    Ok(method.as_ref().map(synthesize))
}
