use samscope_api::{MethodDeclaration, SamConversionPolicy};

/// Attempts SAM conversion for every callable.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissivePolicy;

impl SamConversionPolicy for PermissivePolicy {
    fn should_run_conversion(&self, _callable: &MethodDeclaration) -> bool {
        true
    }
}
