//! Builds the function type of a resolved abstract method.

use samscope_api::{FunctionType, MethodDeclaration, TypeValue};

/// Canonical, non-null function type for `method`.
///
/// Unresolved parameter or return types become error types in place, so the
/// arity always matches the declaration.
pub fn synthesize(method: &MethodDeclaration) -> FunctionType {
    let parameters = method
        .value_parameters
        .iter()
        .map(|param| {
            param.ty.clone().unwrap_or_else(|| {
                TypeValue::error(format!(
                    "No type for parameter {} of {}",
                    param.name, method.callable_id
                ))
            })
        })
        .collect();

    let return_type = method.return_type.clone().unwrap_or_else(|| {
        TypeValue::error(format!("No type for return type of {}", method.callable_id))
    });

    // TODO: consult sam-with-receiver policies to move the first parameter into the receiver slot.
    FunctionType::new(parameters, return_type)
}
