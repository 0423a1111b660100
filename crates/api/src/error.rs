use crate::models::ClassId;

/// Broken invariant between the resolver and its collaborators.
///
/// A query that is merely not SAM-convertible answers `Ok(None)`; these
/// errors must never be downgraded to that.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamError {
    #[error("More than one abstract method was found for {name} in {class_id}")]
    AmbiguousAbstractMethod { class_id: ClassId, name: String },
    #[error("Abstract method was not found for {name} in {class_id}")]
    AbstractMethodNotFound { class_id: ClassId, name: String },
    #[error("Function type should always be a lookup-tag based type, but {found} was found")]
    UnexpectedSubstitutionShape { found: &'static str },
}

pub type SamResult<T> = std::result::Result<T, SamError>;
