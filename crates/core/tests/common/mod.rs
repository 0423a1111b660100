//! Builder-style symbol table used by the resolver tests.
#![allow(dead_code)]

use samscope_api::{
    ClassDeclaration, ClassId, ClassKind, ClassLookup, Declaration, MethodDeclaration, Modality,
    TypeParameter, TypeParameterSymbol, TypeProjection, TypeValue, UseSiteMemberScope,
};
use samscope_core::{SamResolverImpl, StructuralSubstitutor};
use std::collections::HashMap;
use std::sync::Arc;

/// Class table + use-site scope returning the declared methods as-is.
///
/// `scope_yields` replaces what the scope reports for one member name, to
/// simulate collaborators that disagree with the declarations.
#[derive(Default)]
pub struct MockSymbols {
    classes: HashMap<ClassId, ClassDeclaration>,
    scope_overrides: HashMap<(ClassId, String), Vec<MethodDeclaration>>,
}

impl MockSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interface with no supertypes.
    pub fn add_interface(self, fqn: &str) -> Self {
        self.add_interface_with_type_params(fqn, vec![])
    }

    pub fn add_interface_with_type_params(mut self, fqn: &str, type_parameters: Vec<&str>) -> Self {
        let mut decl = ClassDeclaration::new(fqn, ClassKind::Interface);
        decl.type_parameters = type_parameters
            .into_iter()
            .map(|name| TypeParameter::new(fqn, name))
            .collect();
        self.classes.insert(ClassId::new(fqn), decl);
        self
    }

    pub fn add_class(mut self, fqn: &str, kind: ClassKind) -> Self {
        self.classes
            .insert(ClassId::new(fqn), ClassDeclaration::new(fqn, kind));
        self
    }

    pub fn add_supertype(mut self, fqn: &str, supertype: TypeValue) -> Self {
        self.entry(fqn).supertypes.push(supertype);
        self
    }

    pub fn add_method(mut self, fqn: &str, method: MethodDeclaration) -> Self {
        self.entry(fqn).declarations.push(Declaration::Method(method));
        self
    }

    pub fn add_abstract_method(
        self,
        fqn: &str,
        name: &str,
        params: Vec<TypeValue>,
        return_type: TypeValue,
    ) -> Self {
        self.add_method(fqn, method(fqn, name, Modality::Abstract, params, return_type))
    }

    pub fn add_open_method(
        self,
        fqn: &str,
        name: &str,
        params: Vec<TypeValue>,
        return_type: TypeValue,
    ) -> Self {
        self.add_method(fqn, method(fqn, name, Modality::Open, params, return_type))
    }

    pub fn scope_yields(mut self, fqn: &str, name: &str, methods: Vec<MethodDeclaration>) -> Self {
        self.scope_overrides
            .insert((ClassId::new(fqn), name.to_string()), methods);
        self
    }

    /// Freeze the table and wire a resolver over it.
    pub fn build(self) -> (Arc<MockSymbols>, SamResolverImpl) {
        let symbols = Arc::new(self);
        let resolver = SamResolverImpl::new(
            symbols.clone(),
            symbols.clone(),
            Arc::new(StructuralSubstitutor),
        );
        (symbols, resolver)
    }

    pub fn class(&self, fqn: &str) -> ClassDeclaration {
        self.classes
            .get(&ClassId::new(fqn))
            .cloned()
            .unwrap_or_else(|| panic!("{fqn} not declared"))
    }

    fn entry(&mut self, fqn: &str) -> &mut ClassDeclaration {
        self.classes
            .get_mut(&ClassId::new(fqn))
            .unwrap_or_else(|| panic!("{fqn} not declared"))
    }
}

impl ClassLookup for MockSymbols {
    fn class_by_id(&self, class_id: &ClassId) -> Option<Arc<ClassDeclaration>> {
        self.classes.get(class_id).cloned().map(Arc::new)
    }
}

impl UseSiteMemberScope for MockSymbols {
    fn functions_by_name<'a>(
        &'a self,
        class: &'a ClassDeclaration,
        name: &'a str,
    ) -> Box<dyn Iterator<Item = MethodDeclaration> + 'a> {
        let key = (class.class_id.clone(), name.to_string());
        if let Some(methods) = self.scope_overrides.get(&key) {
            return Box::new(methods.iter().cloned());
        }
        Box::new(class.methods().filter(move |m| m.name() == name).cloned())
    }
}

pub fn method(
    fqn: &str,
    name: &str,
    modality: Modality,
    params: Vec<TypeValue>,
    return_type: TypeValue,
) -> MethodDeclaration {
    params
        .into_iter()
        .enumerate()
        .fold(
            MethodDeclaration::new(fqn, name).with_modality(modality),
            |m, (i, ty)| m.with_parameter(format!("p{i}"), ty),
        )
        .with_return_type(return_type)
}

pub fn string() -> TypeValue {
    TypeValue::class("kotlin.String")
}

pub fn int() -> TypeValue {
    TypeValue::class("kotlin.Int")
}

pub fn boolean() -> TypeValue {
    TypeValue::class("kotlin.Boolean")
}

pub fn unit() -> TypeValue {
    TypeValue::class("kotlin.Unit")
}

pub fn any() -> TypeValue {
    TypeValue::class(ClassId::any())
}

pub fn param(owner: &str, name: &str) -> TypeValue {
    TypeValue::type_parameter(TypeParameterSymbol::new(owner, name))
}

pub fn class_of(fqn: &str, args: Vec<TypeValue>) -> TypeValue {
    TypeValue::class_with_args(fqn, args.into_iter().map(TypeProjection::Invariant).collect())
}
