//! Annotation-driven nullability enhancement of JVM signatures.

use samscope_api::{ClassId, MethodDeclaration, TypeValue, ValueParameter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    pub not_null_annotations: Vec<ClassId>,
    pub nullable_annotations: Vec<ClassId>,
    /// Types that can never hold `null` on the JVM and are never flexible.
    pub primitive_types: Vec<ClassId>,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        let ids = |names: &[&str]| -> Vec<ClassId> {
            names.iter().map(|n| ClassId::new(*n)).collect()
        };
        Self {
            not_null_annotations: ids(&[
                "org.jetbrains.annotations.NotNull",
                "javax.annotation.Nonnull",
                "androidx.annotation.NonNull",
                "lombok.NonNull",
            ]),
            nullable_annotations: ids(&[
                "org.jetbrains.annotations.Nullable",
                "javax.annotation.Nullable",
                "androidx.annotation.Nullable",
            ]),
            primitive_types: ids(&[
                "kotlin.Boolean",
                "kotlin.Byte",
                "kotlin.Char",
                "kotlin.Short",
                "kotlin.Int",
                "kotlin.Long",
                "kotlin.Float",
                "kotlin.Double",
                "kotlin.Unit",
            ]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NullabilityQualifier {
    NotNull,
    Nullable,
    Unknown,
}

impl EnhancementConfig {
    /// Signature of `method` as seen from Kotlin.
    pub fn enhance_method(&self, mut method: MethodDeclaration) -> MethodDeclaration {
        method.value_parameters = method
            .value_parameters
            .into_iter()
            .map(|param| self.enhance_parameter(param))
            .collect();
        let qualifier = self.qualifier(&method.annotations);
        method.return_type = method
            .return_type
            .map(|ty| self.enhance_type(ty, qualifier));
        method
    }

    fn enhance_parameter(&self, mut param: ValueParameter) -> ValueParameter {
        let qualifier = self.qualifier(&param.annotations);
        param.ty = param.ty.map(|ty| self.enhance_type(ty, qualifier));
        param
    }

    fn qualifier(&self, annotations: &[ClassId]) -> NullabilityQualifier {
        if annotations.iter().any(|a| self.not_null_annotations.contains(a)) {
            NullabilityQualifier::NotNull
        } else if annotations.iter().any(|a| self.nullable_annotations.contains(a)) {
            NullabilityQualifier::Nullable
        } else {
            NullabilityQualifier::Unknown
        }
    }

    fn enhance_type(&self, ty: TypeValue, qualifier: NullabilityQualifier) -> TypeValue {
        // Annotations pick one bound of an already flexible type.
        let ty = match ty {
            TypeValue::Flexible(flexible) => {
                return match qualifier {
                    NullabilityQualifier::NotNull => flexible.lower.with_nullability(false),
                    NullabilityQualifier::Nullable => flexible.upper.with_nullability(true),
                    NullabilityQualifier::Unknown => TypeValue::Flexible(flexible),
                };
            }
            other => other,
        };

        match qualifier {
            NullabilityQualifier::NotNull => ty.with_nullability(false),
            NullabilityQualifier::Nullable => ty.with_nullability(true),
            NullabilityQualifier::Unknown if self.is_platform(&ty) => {
                TypeValue::flexible(ty.clone().with_nullability(false), ty.with_nullability(true))
            }
            NullabilityQualifier::Unknown => ty,
        }
    }

    /// Reference types whose nullability Java does not pin down.
    fn is_platform(&self, ty: &TypeValue) -> bool {
        match ty {
            TypeValue::Class(class) => {
                !class.nullable && !self.primitive_types.contains(&class.lookup_tag)
            }
            TypeValue::TypeParameter(param) => !param.nullable,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TypeValue {
        TypeValue::class("kotlin.String")
    }

    #[test]
    fn unannotated_reference_becomes_flexible() {
        let method = MethodDeclaration::new("test.A", "name").with_return_type(string());
        let enhanced = EnhancementConfig::default().enhance_method(method);
        assert_eq!(
            enhanced.return_type,
            Some(TypeValue::flexible(string(), string().with_nullability(true)))
        );
    }

    #[test]
    fn primitives_stay_non_null() {
        let method = MethodDeclaration::new("test.A", "size")
            .with_return_type(TypeValue::class("kotlin.Int"));
        let enhanced = EnhancementConfig::default().enhance_method(method);
        assert_eq!(enhanced.return_type, Some(TypeValue::class("kotlin.Int")));
    }

    #[test]
    fn annotations_pin_nullability() {
        let method = MethodDeclaration::new("test.A", "accept")
            .with_value_parameter(
                ValueParameter::new("value", string()).annotated("javax.annotation.Nullable"),
            )
            .with_return_type(string())
            .annotated("org.jetbrains.annotations.NotNull");
        let enhanced = EnhancementConfig::default().enhance_method(method);
        assert_eq!(
            enhanced.value_parameters[0].ty,
            Some(string().with_nullability(true))
        );
        assert_eq!(enhanced.return_type, Some(string()));
    }

    #[test]
    fn not_null_collapses_flexible_to_lower_bound() {
        let flexible = TypeValue::flexible(string(), string().with_nullability(true));
        let method = MethodDeclaration::new("test.A", "name")
            .with_return_type(flexible)
            .annotated("lombok.NonNull");
        let enhanced = EnhancementConfig::default().enhance_method(method);
        assert_eq!(enhanced.return_type, Some(string()));
    }
}
