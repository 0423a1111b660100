use super::class::{ClassId, TypeParameterSymbol};
use super::function::FunctionType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type as seen by SAM resolution.
///
/// Exactly one shape is active per value. `Class`, `Flexible` and `Error` are
/// analyzed; the remaining shapes are carried through unchanged and never
/// considered SAM-convertible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TypeValue {
    Class(ClassType),
    Flexible(FlexibleType),
    Error(ErrorType),
    Abbreviated(AbbreviatedType),
    TypeParameter(TypeParameterType),
    TypeVariable(TypeVariableType),
    Captured(CapturedType),
    DefinitelyNotNull(DefinitelyNotNullType),
    Intersection(IntersectionType),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypeAttributes {
    /// Set on function types whose first argument is the receiver.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub extension_function: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    pub lookup_tag: ClassId,
    #[serde(default)]
    pub type_arguments: Vec<TypeProjection>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub attributes: TypeAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeProjection {
    Star,
    Invariant(TypeValue),
    Out(TypeValue),
    In(TypeValue),
}

impl TypeProjection {
    /// The projected type for proper (typed) projections.
    pub fn typed(&self) -> Option<&TypeValue> {
        match self {
            TypeProjection::Star => None,
            TypeProjection::Invariant(t) | TypeProjection::Out(t) | TypeProjection::In(t) => {
                Some(t)
            }
        }
    }

    /// Rebuilds a typed projection around `ty`, keeping the variance.
    pub fn map_type(&self, f: impl FnOnce(&TypeValue) -> TypeValue) -> TypeProjection {
        match self {
            TypeProjection::Star => TypeProjection::Star,
            TypeProjection::Invariant(t) => TypeProjection::Invariant(f(t)),
            TypeProjection::Out(t) => TypeProjection::Out(f(t)),
            TypeProjection::In(t) => TypeProjection::In(f(t)),
        }
    }
}

/// Platform type with unknown exact nullability: `lower..upper`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlexibleType {
    pub lower: Box<TypeValue>,
    pub upper: Box<TypeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorType {
    pub reason: String,
}

/// Type alias use together with its expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbbreviatedType {
    pub abbreviation: ClassId,
    pub expanded: Box<TypeValue>,
    #[serde(default)]
    pub nullable: bool,
}

/// Reference to a declared type parameter, e.g. `T` or `T?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameterType {
    pub symbol: TypeParameterSymbol,
    #[serde(default)]
    pub nullable: bool,
}

/// Inference variable introduced while solving a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariableType {
    pub name: String,
    #[serde(default)]
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapturedType {
    pub projection: Box<TypeProjection>,
    #[serde(default)]
    pub lower: Option<Box<TypeValue>>,
    #[serde(default)]
    pub nullable: bool,
}

/// `T & Any`: the original type with nullability stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinitelyNotNullType {
    pub original: Box<TypeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntersectionType {
    pub members: Vec<TypeValue>,
}

impl TypeValue {
    pub fn class(lookup_tag: impl Into<ClassId>) -> Self {
        Self::class_with_args(lookup_tag, Vec::new())
    }

    pub fn class_with_args(lookup_tag: impl Into<ClassId>, args: Vec<TypeProjection>) -> Self {
        TypeValue::Class(ClassType {
            lookup_tag: lookup_tag.into(),
            type_arguments: args,
            nullable: false,
            attributes: TypeAttributes::default(),
        })
    }

    /// `kotlin.Any?`, the conservative substitute for star projections.
    pub fn nullable_any() -> Self {
        Self::class(ClassId::any()).with_nullability(true)
    }

    pub fn error(reason: impl Into<String>) -> Self {
        TypeValue::Error(ErrorType {
            reason: reason.into(),
        })
    }

    pub fn flexible(lower: TypeValue, upper: TypeValue) -> Self {
        TypeValue::Flexible(FlexibleType {
            lower: Box::new(lower),
            upper: Box::new(upper),
        })
    }

    pub fn type_parameter(symbol: TypeParameterSymbol) -> Self {
        TypeValue::TypeParameter(TypeParameterType {
            symbol,
            nullable: false,
        })
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            TypeValue::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Name of the active shape, used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            TypeValue::Class(_) => "ClassType",
            TypeValue::Flexible(_) => "FlexibleType",
            TypeValue::Error(_) => "ErrorType",
            TypeValue::Abbreviated(_) => "AbbreviatedType",
            TypeValue::TypeParameter(_) => "TypeParameterType",
            TypeValue::TypeVariable(_) => "TypeVariableType",
            TypeValue::Captured(_) => "CapturedType",
            TypeValue::DefinitelyNotNull(_) => "DefinitelyNotNullType",
            TypeValue::Intersection(_) => "IntersectionType",
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            TypeValue::Class(c) => c.nullable,
            TypeValue::Flexible(f) => f.upper.is_nullable(),
            TypeValue::Error(_) => false,
            TypeValue::Abbreviated(a) => a.nullable,
            TypeValue::TypeParameter(p) => p.nullable,
            TypeValue::TypeVariable(v) => v.nullable,
            TypeValue::Captured(c) => c.nullable,
            TypeValue::DefinitelyNotNull(_) => false,
            TypeValue::Intersection(i) => i.members.iter().all(TypeValue::is_nullable),
        }
    }

    /// Returns this type with the given nullability.
    pub fn with_nullability(self, nullable: bool) -> TypeValue {
        match self {
            TypeValue::Class(mut c) => {
                c.nullable = nullable;
                TypeValue::Class(c)
            }
            TypeValue::Flexible(f) => TypeValue::flexible(
                f.lower.with_nullability(nullable),
                f.upper.with_nullability(nullable),
            ),
            TypeValue::Error(e) => TypeValue::Error(e),
            TypeValue::Abbreviated(mut a) => {
                a.nullable = nullable;
                a.expanded = Box::new(a.expanded.with_nullability(nullable));
                TypeValue::Abbreviated(a)
            }
            TypeValue::TypeParameter(mut p) => {
                p.nullable = nullable;
                TypeValue::TypeParameter(p)
            }
            TypeValue::TypeVariable(mut v) => {
                v.nullable = nullable;
                TypeValue::TypeVariable(v)
            }
            TypeValue::Captured(mut c) => {
                c.nullable = nullable;
                TypeValue::Captured(c)
            }
            TypeValue::DefinitelyNotNull(d) if nullable => d.original.with_nullability(true),
            TypeValue::DefinitelyNotNull(d) => TypeValue::DefinitelyNotNull(d),
            TypeValue::Intersection(i) => TypeValue::Intersection(IntersectionType {
                members: i
                    .members
                    .into_iter()
                    .map(|m| m.with_nullability(nullable))
                    .collect(),
            }),
        }
    }
}

impl fmt::Display for TypeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeValue::Class(c) => {
                if let Some(function) = FunctionType::from_class(c) {
                    return write!(f, "{function}");
                }
                write!(f, "{}", c.lookup_tag.short_name())?;
                if !c.type_arguments.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in c.type_arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                if c.nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            TypeValue::Flexible(fl) => write!(f, "({}..{})", fl.lower, fl.upper),
            TypeValue::Error(e) => write!(f, "<ERROR: {}>", e.reason),
            TypeValue::Abbreviated(a) => {
                write!(f, "{}", a.abbreviation.short_name())?;
                if a.nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            TypeValue::TypeParameter(p) => {
                write!(f, "{}", p.symbol.name)?;
                if p.nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            TypeValue::TypeVariable(v) => {
                write!(f, "TV({})", v.name)?;
                if v.nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            TypeValue::Captured(c) => {
                write!(f, "Captured({})", c.projection)?;
                if c.nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            TypeValue::DefinitelyNotNull(d) => write!(f, "{} & Any", d.original),
            TypeValue::Intersection(i) => {
                write!(f, "it(")?;
                for (idx, m) in i.members.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{m}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for TypeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeProjection::Star => write!(f, "*"),
            TypeProjection::Invariant(t) => write!(f, "{t}"),
            TypeProjection::Out(t) => write!(f, "out {t}"),
            TypeProjection::In(t) => write!(f, "in {t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flexible_nullability_follows_upper_bound() {
        let string = TypeValue::class("kotlin.String");
        let flexible = TypeValue::flexible(string.clone(), string.with_nullability(true));
        assert!(flexible.is_nullable());
    }

    #[test]
    fn definitely_not_null_made_nullable_unwraps() {
        let t = TypeValue::type_parameter(TypeParameterSymbol::new("a.Box", "T"));
        let dnn = TypeValue::DefinitelyNotNull(DefinitelyNotNullType {
            original: Box::new(t.clone()),
        });
        assert_eq!(dnn.with_nullability(true), t.with_nullability(true));
    }

    #[test]
    fn star_projection_has_no_type() {
        assert!(TypeProjection::Star.typed().is_none());
        let string = TypeValue::class("kotlin.String");
        assert_eq!(TypeProjection::Out(string.clone()).typed(), Some(&string));
    }

    #[test]
    fn every_shape_survives_json() {
        let string = TypeValue::class("kotlin.String");
        let t = TypeValue::type_parameter(TypeParameterSymbol::new("a.Box", "T"));
        let shapes = vec![
            TypeValue::class_with_args(
                "a.Pair",
                vec![
                    TypeProjection::Star,
                    TypeProjection::Invariant(string.clone()),
                    TypeProjection::Out(t.clone()),
                    TypeProjection::In(string.clone()),
                ],
            )
            .with_nullability(true),
            TypeValue::flexible(string.clone(), string.clone().with_nullability(true)),
            TypeValue::error("unresolved"),
            TypeValue::Abbreviated(AbbreviatedType {
                abbreviation: ClassId::new("a.Alias"),
                expanded: Box::new(string.clone()),
                nullable: true,
            }),
            t.clone(),
            TypeValue::TypeVariable(TypeVariableType {
                name: "T1".to_string(),
                nullable: false,
            }),
            TypeValue::Captured(CapturedType {
                projection: Box::new(TypeProjection::Star),
                lower: Some(Box::new(string.clone())),
                nullable: false,
            }),
            TypeValue::DefinitelyNotNull(DefinitelyNotNullType {
                original: Box::new(t),
            }),
            TypeValue::Intersection(IntersectionType {
                members: vec![string, TypeValue::nullable_any()],
            }),
            FunctionType::new(vec![], TypeValue::class("kotlin.Unit")).into_type(),
        ];

        for shape in shapes {
            let json = serde_json::to_value(&shape).unwrap();
            assert!(json.get("shape").is_some(), "untagged encoding: {json}");
            let back: TypeValue = serde_json::from_value(json).unwrap();
            assert_eq!(back, shape);
        }
    }

    #[test]
    fn shape_tags_are_snake_case() {
        let json = serde_json::json!({
            "shape": "definitely_not_null",
            "original": { "shape": "type_parameter", "symbol": { "owner": "a.Box", "name": "T" } }
        });
        let ty: TypeValue = serde_json::from_value(json).unwrap();
        assert_eq!(ty.shape_name(), "DefinitelyNotNullType");
    }

    #[test]
    fn display_uses_short_names() {
        let list = TypeValue::class_with_args(
            "java.util.List",
            vec![TypeProjection::Out(TypeValue::class("kotlin.String"))],
        )
        .with_nullability(true);
        assert_eq!(list.to_string(), "List<out String>?");
    }
}
