//! Instantiates an unsubstituted SAM function type for a concrete use.

use samscope_api::{
    ClassId, FunctionType, SamError, SamResult, SubstitutionMap, TypeParameter, TypeProjection,
    TypeSubstitutor, TypeValue,
};
use tracing::error;

/// Applies the substitution primitive on behalf of the resolver.
#[derive(Clone, Copy)]
pub struct GenericSubstitutorAdapter<'a> {
    substitutor: &'a dyn TypeSubstitutor,
    top_type: &'a ClassId,
}

impl<'a> GenericSubstitutorAdapter<'a> {
    pub fn new(substitutor: &'a dyn TypeSubstitutor, top_type: &'a ClassId) -> Self {
        Self {
            substitutor,
            top_type,
        }
    }

    /// Pairs each class type parameter with the matching use-site argument.
    ///
    /// Star projections are replaced by the nullable top type. Surplus
    /// parameters or arguments on either side are ignored.
    pub fn substitution_map(
        &self,
        class_type_params: &[TypeParameter],
        type_args: &[TypeProjection],
    ) -> SubstitutionMap {
        class_type_params
            .iter()
            .zip(type_args)
            .map(|(param, arg)| {
                let ty = arg.typed().cloned().unwrap_or_else(|| {
                    TypeValue::class(self.top_type.clone()).with_nullability(true)
                });
                (param.symbol.clone(), ty)
            })
            .collect()
    }

    /// Substitutes `unsubstituted` and gives it the nullability of the use
    /// site, e.g. `Foo<String>?` yields a nullable function type.
    pub fn instantiate(
        &self,
        unsubstituted: FunctionType,
        type_args: &[TypeProjection],
        class_type_params: &[TypeParameter],
        use_nullable: bool,
    ) -> SamResult<TypeValue> {
        let map = self.substitution_map(class_type_params, type_args);
        let result = self
            .substitutor
            .substitute_or_self(&map, &unsubstituted.into_type())
            .with_nullability(use_nullable);

        match result {
            TypeValue::Class(_) => Ok(result),
            other => {
                let e = SamError::UnexpectedSubstitutionShape {
                    found: other.shape_name(),
                };
                error!(result = %other, "{e}");
                Err(e)
            }
        }
    }
}
