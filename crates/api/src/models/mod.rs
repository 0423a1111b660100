pub mod class;
pub mod function;
pub mod substitution;
pub mod types;

pub use class::*;
pub use function::*;
pub use substitution::*;
pub use types::*;
