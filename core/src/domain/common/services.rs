use std::sync::Arc;

use crate::domain::{diagnostic::ports::DiagnosticSessionRepository, llm::ports::LLMClient};

/// Application service. Every feature service trait is implemented on it.
#[derive(Debug)]
pub struct Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) diagnostic_session_repository: Arc<DS>,
}

impl<LLM, DS> Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    pub fn new(llm_client: LLM, diagnostic_session_repository: DS) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            diagnostic_session_repository: Arc::new(diagnostic_session_repository),
        }
    }
}

impl<LLM, DS> Clone for Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            diagnostic_session_repository: Arc::clone(&self.diagnostic_session_repository),
        }
    }
}
