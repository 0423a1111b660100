use super::types::TypeValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified name of a class, e.g. `java.lang.Runnable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub const ANY: &'static str = "kotlin.Any";

    pub fn new(fqn: impl Into<String>) -> Self {
        Self(fqn.into())
    }

    pub fn any() -> Self {
        Self::new(Self::ANY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Simple (last segment) name.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ClassId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ClassId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    #[default]
    Final,
    Open,
    Abstract,
    Sealed,
}

/// Identity of a callable: declaring class + name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallableId {
    pub class_id: ClassId,
    pub name: String,
}

impl CallableId {
    pub fn new(class_id: impl Into<ClassId>, name: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class_id, self.name)
    }
}

/// Declared generic parameter of a class or method.
///
/// The symbol is the identity used as the key of a substitution map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameter {
    pub symbol: TypeParameterSymbol,
    #[serde(default)]
    pub bounds: Vec<TypeValue>,
}

impl TypeParameter {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: TypeParameterSymbol::new(owner, name),
            bounds: Vec::new(),
        }
    }
}

/// `owner` is the FQN of the declaring class, or the callable id for method
/// level parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeParameterSymbol {
    pub owner: String,
    pub name: String,
}

impl TypeParameterSymbol {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeParameterSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueParameter {
    pub name: String,
    /// `None` when the declared type could not be resolved.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeValue>,
    #[serde(default)]
    pub annotations: Vec<ClassId>,
}

impl ValueParameter {
    pub fn new(name: impl Into<String>, ty: TypeValue) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            annotations: Vec::new(),
        }
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: impl Into<ClassId>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub callable_id: CallableId,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default)]
    pub value_parameters: Vec<ValueParameter>,
    #[serde(default)]
    pub return_type: Option<TypeValue>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Annotation classes present on the method, used by signature enhancement.
    #[serde(default)]
    pub annotations: Vec<ClassId>,
}

impl MethodDeclaration {
    pub fn new(class_id: impl Into<ClassId>, name: impl Into<String>) -> Self {
        Self {
            callable_id: CallableId::new(class_id, name),
            modality: Modality::Final,
            value_parameters: Vec::new(),
            return_type: None,
            type_parameters: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.callable_id.name
    }

    pub fn is_abstract(&self) -> bool {
        self.modality == Modality::Abstract
    }

    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeValue) -> Self {
        self.value_parameters.push(ValueParameter::new(name, ty));
        self
    }

    pub fn with_value_parameter(mut self, param: ValueParameter) -> Self {
        self.value_parameters.push(param);
        self
    }

    pub fn annotated(mut self, annotation: impl Into<ClassId>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn with_return_type(mut self, ty: TypeValue) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        let owner = self.callable_id.to_string();
        self.type_parameters.push(TypeParameter::new(owner, name));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub callable_id: CallableId,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub class_id: ClassId,
    #[serde(default)]
    pub value_parameters: Vec<ValueParameter>,
}

/// A member declared directly in a class body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum Declaration {
    Method(MethodDeclaration),
    Property(PropertyDeclaration),
    Constructor(ConstructorDeclaration),
    NestedClass { class_id: ClassId },
}

impl Declaration {
    /// Modality of callable members; `None` for shapes that have none.
    pub fn modality(&self) -> Option<Modality> {
        match self {
            Declaration::Method(m) => Some(m.modality),
            Declaration::Property(p) => Some(p.modality),
            Declaration::Constructor(_) | Declaration::NestedClass { .. } => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDeclaration> {
        match self {
            Declaration::Method(m) => Some(m),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub class_id: ClassId,
    pub kind: ClassKind,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default)]
    pub supertypes: Vec<TypeValue>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

impl ClassDeclaration {
    pub fn new(class_id: impl Into<ClassId>, kind: ClassKind) -> Self {
        let modality = match kind {
            ClassKind::Interface => Modality::Abstract,
            _ => Modality::Final,
        };
        Self {
            class_id: class_id.into(),
            kind,
            modality,
            supertypes: Vec::new(),
            declarations: Vec::new(),
            type_parameters: Vec::new(),
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.declarations.iter().filter_map(Declaration::as_method)
    }
}
