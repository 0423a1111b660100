//! Finds the single abstract method of an interface.

use samscope_api::{
    ClassDeclaration, ClassId, Declaration, MethodDeclaration, Modality, SamError, SamResult,
    UseSiteMemberScope,
};
use tracing::{debug, error, trace};

/// Effective abstract method of `class`, or `None` if the class is not
/// eligible for SAM treatment.
///
/// The declared members decide eligibility; the method itself is taken from
/// the use-site scope so that the returned signature carries enhancement the
/// raw declaration lacks.
pub fn single_abstract_method(
    class: &ClassDeclaration,
    scope: &dyn UseSiteMemberScope,
    top_type: &ClassId,
) -> SamResult<Option<MethodDeclaration>> {
    if !class.is_interface() {
        trace!(class = %class.class_id, kind = ?class.kind, "not an interface");
        return Ok(None);
    }

    if !has_only_top_supertype(class, top_type) {
        debug!(class = %class.class_id, "supertypes other than the top type are not analyzed");
        return Ok(None);
    }

    let Some(declared) = declared_abstract_method(class) else {
        debug!(class = %class.class_id, "no single abstract method declared");
        return Ok(None);
    };

    let effective = effective_abstract_method(class, declared.name(), scope)?;

    if !effective.type_parameters.is_empty() {
        debug!(method = %effective.callable_id, "abstract method is generic");
        return Ok(None);
    }

    Ok(Some(effective))
}

fn has_only_top_supertype(class: &ClassDeclaration, top_type: &ClassId) -> bool {
    match class.supertypes.as_slice() {
        [] => true,
        [single] => single
            .as_class()
            .is_some_and(|supertype| &supertype.lookup_tag == top_type),
        _ => false,
    }
}

/// The only abstract callable declared in the class body, if it is a method.
fn declared_abstract_method(class: &ClassDeclaration) -> Option<&MethodDeclaration> {
    let mut abstract_members = class
        .declarations
        .iter()
        .filter(|decl| decl.modality() == Some(Modality::Abstract));

    let single = abstract_members.next()?;
    if abstract_members.next().is_some() {
        return None;
    }
    Declaration::as_method(single)
}

fn effective_abstract_method(
    class: &ClassDeclaration,
    name: &str,
    scope: &dyn UseSiteMemberScope,
) -> SamResult<MethodDeclaration> {
    let found = scope
        .functions_by_name(class, name)
        .filter(MethodDeclaration::is_abstract)
        .try_fold(None, |found: Option<MethodDeclaration>, function| match found {
            None => Ok(Some(function)),
            Some(_) => Err(SamError::AmbiguousAbstractMethod {
                class_id: class.class_id.clone(),
                name: name.to_string(),
            }),
        })
        .inspect_err(|e| error!("{e}"))?;

    found.ok_or_else(|| {
        let e = SamError::AbstractMethodNotFound {
            class_id: class.class_id.clone(),
            name: name.to_string(),
        };
        error!("{e}");
        e
    })
}
