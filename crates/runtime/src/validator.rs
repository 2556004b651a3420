use std::fmt::Debug;

use crate::error::ValidationError;

/// Pluggable check invoked for every argument before normalization
pub trait Validator: Send + Sync {
    fn assert_valid(
        &self,
        method_name: &str,
        parameter_name: &str,
        argument_value: &dyn Debug,
    ) -> Result<(), ValidationError>;
}

/// Validator that accepts everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopValidator;

impl Validator for NoopValidator {
    fn assert_valid(&self, _: &str, _: &str, _: &dyn Debug) -> Result<(), ValidationError> {
        Ok(())
    }
}
