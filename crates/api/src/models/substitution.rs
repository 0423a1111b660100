use super::class::TypeParameterSymbol;
use super::types::TypeValue;
use std::collections::HashMap;

/// Type parameter → concrete type mapping used to instantiate a template.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubstitutionMap {
    map: HashMap<TypeParameterSymbol, TypeValue>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: TypeParameterSymbol, ty: TypeValue) {
        self.map.insert(symbol, ty);
    }

    pub fn get(&self, symbol: &TypeParameterSymbol) -> Option<&TypeValue> {
        self.map.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeParameterSymbol, &TypeValue)> {
        self.map.iter()
    }
}

impl FromIterator<(TypeParameterSymbol, TypeValue)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (TypeParameterSymbol, TypeValue)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
