use std::future::Future;

use crate::domain::consultation::value_objects::GenerateAdviceInput;

/// Service trait for the AI hair consultant
#[cfg_attr(test, mockall::automock)]
pub trait ConsultationService: Send + Sync {
    /// Always yields displayable text; failures become an apology.
    fn generate_advice(&self, input: GenerateAdviceInput) -> impl Future<Output = String> + Send;
}
