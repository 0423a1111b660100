use super::class::ClassId;
use super::types::{ClassType, TypeAttributes, TypeProjection, TypeValue};
use std::fmt;

/// Package-qualified prefix of the `FunctionN` class family.
pub const FUNCTION_CLASS_PREFIX: &str = "kotlin.Function";

/// Native callable signature.
///
/// A function type has no storage of its own inside [`TypeValue`]: it is a
/// class type of `kotlin.Function{N}` whose arguments are
/// `[receiver?, parameters.., return]`. This keeps it usable by every
/// lookup-tag based operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub parameters: Vec<TypeValue>,
    pub receiver: Option<Box<TypeValue>>,
    pub return_type: Box<TypeValue>,
    pub nullable: bool,
}

impl FunctionType {
    pub fn new(parameters: Vec<TypeValue>, return_type: TypeValue) -> Self {
        Self {
            parameters,
            receiver: None,
            return_type: Box::new(return_type),
            nullable: false,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len() + usize::from(self.receiver.is_some())
    }

    pub fn class_id(&self) -> ClassId {
        function_class_id(self.arity())
    }

    pub fn into_type(self) -> TypeValue {
        let lookup_tag = self.class_id();
        let extension_function = self.receiver.is_some();
        let mut args = Vec::with_capacity(self.arity() + 1);
        if let Some(receiver) = self.receiver {
            args.push(TypeProjection::Invariant(*receiver));
        }
        args.extend(self.parameters.into_iter().map(TypeProjection::Invariant));
        args.push(TypeProjection::Invariant(*self.return_type));

        TypeValue::Class(ClassType {
            lookup_tag,
            type_arguments: args,
            nullable: self.nullable,
            attributes: TypeAttributes { extension_function },
        })
    }

    /// Reads a function type back from its class-type encoding.
    pub fn from_type(ty: &TypeValue) -> Option<FunctionType> {
        FunctionType::from_class(ty.as_class()?)
    }

    pub fn from_class(class: &ClassType) -> Option<FunctionType> {
        let arity = function_arity(&class.lookup_tag)?;
        if class.type_arguments.len() != arity + 1 {
            return None;
        }

        let mut types = class
            .type_arguments
            .iter()
            .map(|arg| arg.typed().cloned())
            .collect::<Option<Vec<_>>>()?;
        let return_type = types.pop()?;
        let receiver = if class.attributes.extension_function && !types.is_empty() {
            Some(Box::new(types.remove(0)))
        } else {
            None
        };

        Some(FunctionType {
            parameters: types,
            receiver,
            return_type: Box::new(return_type),
            nullable: class.nullable,
        })
    }
}

pub fn function_class_id(arity: usize) -> ClassId {
    ClassId::new(format!("{FUNCTION_CLASS_PREFIX}{arity}"))
}

/// Arity encoded in a `kotlin.Function{N}` class id.
///
/// The suffix must be a canonical decimal: no sign, no leading zero.
pub fn function_arity(class_id: &ClassId) -> Option<usize> {
    let digits = class_id.as_str().strip_prefix(FUNCTION_CLASS_PREFIX)?;
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !canonical {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "(")?;
        }
        if let Some(receiver) = &self.receiver {
            write!(f, "{receiver}.")?;
        }
        write!(f, "(")?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ") -> {}", self.return_type)?;
        if self.nullable {
            write!(f, ")?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_function_n_class() {
        let ft = FunctionType::new(
            vec![TypeValue::class("kotlin.String")],
            TypeValue::class("kotlin.Int"),
        );
        let ty = ft.clone().into_type();
        let class = ty.as_class().expect("class type");
        assert_eq!(class.lookup_tag.as_str(), "kotlin.Function1");
        assert_eq!(class.type_arguments.len(), 2);
        assert_eq!(FunctionType::from_type(&ty), Some(ft));
    }

    #[test]
    fn receiver_is_first_argument() {
        let mut ft = FunctionType::new(vec![], TypeValue::class("kotlin.Unit"));
        ft.receiver = Some(Box::new(TypeValue::class("kotlin.String")));
        let ty = ft.clone().into_type();
        assert_eq!(ty.as_class().map(|c| c.lookup_tag.as_str()), Some("kotlin.Function1"));
        assert_eq!(FunctionType::from_type(&ty), Some(ft));
    }

    #[test]
    fn plain_classes_are_not_function_types() {
        assert_eq!(FunctionType::from_type(&TypeValue::class("kotlin.String")), None);
        assert_eq!(function_arity(&ClassId::new("kotlin.FunctionX")), None);
    }

    #[test]
    fn arity_suffix_must_be_canonical() {
        assert_eq!(function_arity(&ClassId::new("kotlin.Function0")), Some(0));
        assert_eq!(function_arity(&ClassId::new("kotlin.Function10")), Some(10));
        assert_eq!(function_arity(&ClassId::new("kotlin.Function+1")), None);
        assert_eq!(function_arity(&ClassId::new("kotlin.Function01")), None);
        assert_eq!(function_arity(&ClassId::new("kotlin.Function")), None);
    }

    #[test]
    fn display_wraps_nullable_function() {
        let mut ft = FunctionType::new(vec![], TypeValue::class("kotlin.String"));
        assert_eq!(ft.to_string(), "() -> String");
        ft.nullable = true;
        assert_eq!(ft.to_string(), "(() -> String)?");
    }
}
