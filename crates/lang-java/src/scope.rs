//! Use-site member scope over a [`JavaClassTable`].

use crate::enhancement::EnhancementConfig;
use crate::table::JavaClassTable;
use samscope_api::{ClassDeclaration, ClassId, MethodDeclaration, TypeValue, UseSiteMemberScope};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

/// Merges declared and inherited functions, closest declaration first, and
/// enhances each signature on the way out.
pub struct JavaUseSiteScope {
    table: Arc<JavaClassTable>,
    enhancement: EnhancementConfig,
}

impl JavaUseSiteScope {
    pub fn new(table: Arc<JavaClassTable>, enhancement: EnhancementConfig) -> Self {
        Self { table, enhancement }
    }
}

impl UseSiteMemberScope for JavaUseSiteScope {
    fn functions_by_name<'a>(
        &'a self,
        class: &'a ClassDeclaration,
        name: &'a str,
    ) -> Box<dyn Iterator<Item = MethodDeclaration> + 'a> {
        let mut walk = FunctionsNamed {
            scope: self,
            name,
            queue: VecDeque::new(),
            visited: HashSet::new(),
            pending: VecDeque::new(),
            seen_signatures: HashSet::new(),
        };
        walk.visited.insert(class.class_id.clone());
        walk.visit(class);
        Box::new(walk)
    }
}

/// Erased parameter shape used to detect overrides.
type Signature = Vec<Option<String>>;

/// Breadth-first walk up the supertype graph, one class at a time.
struct FunctionsNamed<'a> {
    scope: &'a JavaUseSiteScope,
    name: &'a str,
    queue: VecDeque<ClassId>,
    visited: HashSet<ClassId>,
    pending: VecDeque<MethodDeclaration>,
    seen_signatures: HashSet<Signature>,
}

impl FunctionsNamed<'_> {
    fn visit(&mut self, class: &ClassDeclaration) {
        let name = self.name;
        self.pending
            .extend(class.methods().filter(|m| m.name() == name).cloned());
        for supertype in &class.supertypes {
            if let Some(id) = erased_class(supertype) {
                if self.visited.insert(id.clone()) {
                    self.queue.push_back(id);
                }
            }
        }
    }
}

impl Iterator for FunctionsNamed<'_> {
    type Item = MethodDeclaration;

    fn next(&mut self) -> Option<MethodDeclaration> {
        loop {
            if let Some(method) = self.pending.pop_front() {
                // Hidden by an override closer to the use site.
                if !self.seen_signatures.insert(signature(&method)) {
                    continue;
                }
                return Some(self.scope.enhancement.enhance_method(method));
            }

            let next = self.queue.pop_front()?;
            if let Some(class) = self.scope.table.get(&next).cloned() {
                self.visit(&class);
            }
        }
    }
}

fn signature(method: &MethodDeclaration) -> Signature {
    method
        .value_parameters
        .iter()
        .map(|p| p.ty.as_ref().and_then(erased_name))
        .collect()
}

fn erased_class(ty: &TypeValue) -> Option<ClassId> {
    match ty {
        TypeValue::Class(class) => Some(class.lookup_tag.clone()),
        TypeValue::Flexible(flexible) => erased_class(&flexible.lower),
        _ => None,
    }
}

fn erased_name(ty: &TypeValue) -> Option<String> {
    match ty {
        TypeValue::TypeParameter(param) => Some(param.symbol.name.clone()),
        other => erased_class(other).map(|id| id.as_str().to_string()),
    }
}
