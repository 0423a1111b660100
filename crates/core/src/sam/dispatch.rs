//! Routes an arbitrary type value into SAM analysis by shape.

use super::function_type_for_class;
use super::instantiate::GenericSubstitutorAdapter;
use samscope_api::{ClassId, ClassLookup, ClassType, SamResult, TypeValue, UseSiteMemberScope};
use tracing::trace;

pub struct TypeShapeDispatcher<'a> {
    lookup: &'a dyn ClassLookup,
    scope: &'a dyn UseSiteMemberScope,
    adapter: GenericSubstitutorAdapter<'a>,
    top_type: &'a ClassId,
}

impl<'a> TypeShapeDispatcher<'a> {
    pub fn new(
        lookup: &'a dyn ClassLookup,
        scope: &'a dyn UseSiteMemberScope,
        adapter: GenericSubstitutorAdapter<'a>,
        top_type: &'a ClassId,
    ) -> Self {
        Self {
            lookup,
            scope,
            adapter,
            top_type,
        }
    }

    pub fn function_type_for_possible_sam_type(
        &self,
        ty: &TypeValue,
    ) -> SamResult<Option<TypeValue>> {
        match ty {
            TypeValue::Class(class_type) => self.function_type_for_class_type(class_type),
            // Both bounds must convert independently.
            TypeValue::Flexible(flexible) => {
                let Some(lower) = self.function_type_for_possible_sam_type(&flexible.lower)? else {
                    return Ok(None);
                };
                let Some(upper) = self.function_type_for_possible_sam_type(&flexible.upper)? else {
                    return Ok(None);
                };
                Ok(Some(TypeValue::flexible(lower, upper)))
            }
            TypeValue::Error(_) => Ok(None),
            // Shapes below are not analyzed yet; each keeps its own arm so
            // support can be added one at a time.
            TypeValue::Abbreviated(_) => Ok(None),
            TypeValue::TypeParameter(_) => Ok(None),
            TypeValue::TypeVariable(_) => Ok(None),
            TypeValue::Captured(_) => Ok(None),
            TypeValue::DefinitelyNotNull(_) => Ok(None),
            TypeValue::Intersection(_) => Ok(None),
        }
    }

    fn function_type_for_class_type(&self, ty: &ClassType) -> SamResult<Option<TypeValue>> {
        let Some(class) = self.lookup.class_by_id(&ty.lookup_tag) else {
            trace!(class = %ty.lookup_tag, "class not found");
            return Ok(None);
        };

        let Some(unsubstituted) = function_type_for_class(&class, self.scope, self.top_type)? else {
            return Ok(None);
        };

        self.adapter
            .instantiate(
                unsubstituted,
                &ty.type_arguments,
                &class.type_parameters,
                ty.nullable,
            )
            .map(Some)
    }
}
