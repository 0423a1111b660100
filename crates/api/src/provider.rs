//! Collaborator contracts consumed by the resolver.
//!
//! Implementations must be safe for concurrent reads; the resolver never
//! synchronizes access to them.

use crate::models::{ClassDeclaration, ClassId, MethodDeclaration, SubstitutionMap, TypeValue};
use std::sync::Arc;

/// Maps a fully qualified name to its class declaration.
pub trait ClassLookup: Send + Sync {
    /// Returns `None` if no class-shaped declaration exists for `class_id`.
    fn class_by_id(&self, class_id: &ClassId) -> Option<Arc<ClassDeclaration>>;
}

/// Outcome of a scope visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorAction {
    Next,
    Stop,
}

/// Use-site view of a class's members.
///
/// Yields inherited and declared functions with host-platform signature
/// enhancement already applied.
pub trait UseSiteMemberScope: Send + Sync {
    /// Lazily enumerate every function named `name` visible in `class`.
    fn functions_by_name<'a>(
        &'a self,
        class: &'a ClassDeclaration,
        name: &'a str,
    ) -> Box<dyn Iterator<Item = MethodDeclaration> + 'a>;

    /// Visitor form of [`functions_by_name`](Self::functions_by_name).
    fn process_functions_by_name(
        &self,
        class: &ClassDeclaration,
        name: &str,
        visit: &mut dyn FnMut(MethodDeclaration) -> ProcessorAction,
    ) {
        for function in self.functions_by_name(class, name) {
            if visit(function) == ProcessorAction::Stop {
                break;
            }
        }
    }
}

/// Generic substitution primitive.
///
/// Must be total over every [`TypeValue`] shape and return the input
/// unchanged when no free parameter matches.
pub trait TypeSubstitutor: Send + Sync {
    fn substitute_or_self(&self, map: &SubstitutionMap, ty: &TypeValue) -> TypeValue;
}

/// Decides whether SAM conversion is attempted for arguments of a callable.
pub trait SamConversionPolicy: Send + Sync {
    fn should_run_conversion(&self, callable: &MethodDeclaration) -> bool;
}

pub type ClassLookupPtr = Arc<dyn ClassLookup>;
pub type MemberScopePtr = Arc<dyn UseSiteMemberScope>;
pub type SubstitutorPtr = Arc<dyn TypeSubstitutor>;
pub type ConversionPolicyPtr = Arc<dyn SamConversionPolicy>;
