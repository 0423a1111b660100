//! Default structural implementation of the substitution primitive.

use samscope_api::{
    AbbreviatedType, CapturedType, ClassType, DefinitelyNotNullType, IntersectionType,
    SubstitutionMap, TypeSubstitutor, TypeValue,
};

/// Replaces free type-parameter references by walking the type structure.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralSubstitutor;

impl TypeSubstitutor for StructuralSubstitutor {
    fn substitute_or_self(&self, map: &SubstitutionMap, ty: &TypeValue) -> TypeValue {
        if map.is_empty() {
            return ty.clone();
        }
        substitute(map, ty)
    }
}

fn substitute(map: &SubstitutionMap, ty: &TypeValue) -> TypeValue {
    match ty {
        TypeValue::Class(class) => TypeValue::Class(ClassType {
            type_arguments: class
                .type_arguments
                .iter()
                .map(|arg| arg.map_type(|t| substitute(map, t)))
                .collect(),
            ..class.clone()
        }),
        TypeValue::Flexible(flexible) => {
            TypeValue::flexible(substitute(map, &flexible.lower), substitute(map, &flexible.upper))
        }
        TypeValue::TypeParameter(param) => match map.get(&param.symbol) {
            // `T?` stays nullable whatever `T` is bound to.
            Some(bound) if param.nullable => bound.clone().with_nullability(true),
            Some(bound) => bound.clone(),
            None => ty.clone(),
        },
        TypeValue::Abbreviated(abbreviated) => TypeValue::Abbreviated(AbbreviatedType {
            expanded: Box::new(substitute(map, &abbreviated.expanded)),
            ..abbreviated.clone()
        }),
        TypeValue::Captured(captured) => TypeValue::Captured(CapturedType {
            projection: Box::new(captured.projection.map_type(|t| substitute(map, t))),
            lower: captured
                .lower
                .as_ref()
                .map(|lower| Box::new(substitute(map, lower))),
            nullable: captured.nullable,
        }),
        TypeValue::DefinitelyNotNull(dnn) => definitely_not_null(substitute(map, &dnn.original)),
        TypeValue::Intersection(intersection) => TypeValue::Intersection(IntersectionType {
            members: intersection
                .members
                .iter()
                .map(|member| substitute(map, member))
                .collect(),
        }),
        TypeValue::Error(_) | TypeValue::TypeVariable(_) => ty.clone(),
    }
}

/// `T & Any` for types whose nullability is only known later, plain
/// non-null otherwise.
fn definitely_not_null(ty: TypeValue) -> TypeValue {
    match ty {
        TypeValue::TypeParameter(_) | TypeValue::TypeVariable(_) | TypeValue::Captured(_) => {
            TypeValue::DefinitelyNotNull(DefinitelyNotNullType {
                original: Box::new(ty.with_nullability(false)),
            })
        }
        TypeValue::DefinitelyNotNull(_) => ty,
        other => other.with_nullability(false),
    }
}
