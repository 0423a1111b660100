//! In-memory table of JVM class declarations.

use crate::error::{Result, TableError};
use samscope_api::{
    ClassDeclaration, ClassId, ClassKind, ClassLookup, Declaration, MethodDeclaration, Modality,
    TypeParameter, TypeParameterSymbol, TypeValue,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Read-only after construction, so lookups need no locking.
#[derive(Debug, Default, Clone)]
pub struct JavaClassTable {
    classes: HashMap<ClassId, Arc<ClassDeclaration>>,
}

#[derive(Deserialize)]
struct TableFile {
    classes: Vec<ClassDeclaration>,
}

impl JavaClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-populated with `kotlin.Any` and its open members.
    pub fn with_builtins() -> Self {
        let any = ClassId::any();
        let any_type = TypeValue::class(any.clone());
        let mut decl = ClassDeclaration::new(any.clone(), ClassKind::Class);
        decl.modality = Modality::Open;
        decl.declarations = vec![
            Declaration::Method(
                MethodDeclaration::new(any.clone(), "equals")
                    .with_modality(Modality::Open)
                    .with_parameter("other", any_type.with_nullability(true))
                    .with_return_type(TypeValue::class("kotlin.Boolean")),
            ),
            Declaration::Method(
                MethodDeclaration::new(any.clone(), "hashCode")
                    .with_modality(Modality::Open)
                    .with_return_type(TypeValue::class("kotlin.Int")),
            ),
            Declaration::Method(
                MethodDeclaration::new(any, "toString")
                    .with_modality(Modality::Open)
                    .with_return_type(TypeValue::class("kotlin.String")),
            ),
        ];
        Self::new().add_class(decl)
    }

    /// Parses `{ "classes": [ ... ] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)?;
        let mut table = Self::with_builtins();
        for class in file.classes {
            if table.classes.contains_key(&class.class_id) && class.class_id != ClassId::any() {
                return Err(TableError::DuplicateClass(class.class_id));
            }
            table = table.add_class(class);
        }
        tracing::debug!(classes = table.len(), "loaded class table");
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, class_id: &ClassId) -> Option<&Arc<ClassDeclaration>> {
        self.classes.get(class_id)
    }

    /// Insert or replace a declaration.
    pub fn add_class(mut self, decl: ClassDeclaration) -> Self {
        self.classes.insert(decl.class_id.clone(), Arc::new(decl));
        self
    }

    /// Add an interface whose only supertype is `kotlin.Any`.
    pub fn add_interface(self, fqn: &str) -> Self {
        self.add_interface_with_type_params(fqn, vec![])
    }

    pub fn add_interface_with_type_params(self, fqn: &str, type_parameters: Vec<&str>) -> Self {
        let mut decl = ClassDeclaration::new(fqn, ClassKind::Interface);
        decl.supertypes = vec![TypeValue::class(ClassId::any())];
        decl.type_parameters = type_parameters
            .into_iter()
            .map(|name| TypeParameter::new(fqn, name))
            .collect();
        self.add_class(decl)
    }

    pub fn add_supertype(mut self, fqn: &str, supertype: TypeValue) -> Self {
        self.class_mut(fqn).supertypes.push(supertype);
        self
    }

    pub fn add_method(mut self, fqn: &str, method: MethodDeclaration) -> Self {
        self.class_mut(fqn)
            .declarations
            .push(Declaration::Method(method));
        self
    }

    pub fn add_abstract_method(self, fqn: &str, method: MethodDeclaration) -> Self {
        self.add_method(fqn, method.with_modality(Modality::Abstract))
    }

    /// Reference to a type parameter declared by class `fqn`.
    pub fn type_parameter(fqn: &str, name: &str) -> TypeValue {
        TypeValue::type_parameter(TypeParameterSymbol::new(fqn, name))
    }

    /// Entry for `fqn`, created as an empty class if missing.
    fn class_mut(&mut self, fqn: &str) -> &mut ClassDeclaration {
        let entry = self
            .classes
            .entry(ClassId::new(fqn))
            .or_insert_with(|| Arc::new(ClassDeclaration::new(fqn, ClassKind::Class)));
        Arc::make_mut(entry)
    }
}

impl ClassLookup for JavaClassTable {
    fn class_by_id(&self, class_id: &ClassId) -> Option<Arc<ClassDeclaration>> {
        self.classes.get(class_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_missing_classes() {
        let table = JavaClassTable::new().add_method(
            "test.Util",
            MethodDeclaration::new("test.Util", "help").with_modality(Modality::Final),
        );
        let util = table.class_by_id(&ClassId::new("test.Util")).unwrap();
        assert_eq!(util.kind, ClassKind::Class);
        assert_eq!(util.methods().count(), 1);
    }

    #[test]
    fn interfaces_extend_any() {
        let table = JavaClassTable::new().add_interface_with_type_params("test.Box", vec!["T"]);
        let class = table.get(&ClassId::new("test.Box")).unwrap();
        assert_eq!(class.supertypes, vec![TypeValue::class(ClassId::any())]);
        assert_eq!(class.type_parameters[0].symbol, TypeParameterSymbol::new("test.Box", "T"));
    }

    #[test]
    fn duplicate_classes_are_rejected() {
        let json = r#"{ "classes": [
            { "class_id": "test.A", "kind": "interface" },
            { "class_id": "test.A", "kind": "class" }
        ] }"#;
        let err = JavaClassTable::from_json(json).unwrap_err();
        assert!(matches!(err, TableError::DuplicateClass(id) if id.as_str() == "test.A"));
    }
}
