use tracing::{info, warn};

use crate::{
    domain::common::{HairsphereConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{diagnostic::InMemoryDiagnosticSessionRepository, llm::GeminiLLMClient},
};

pub type HairsphereService = Service<GeminiLLMClient, InMemoryDiagnosticSessionRepository>;

pub async fn create_service(config: HairsphereConfig) -> Result<HairsphereService, CoreError> {
    let llm_client = GeminiLLMClient::from_config(&config.llm);

    if llm_client.is_configured() {
        info!(model = %config.llm.gemini_model, "Gemini client configured");
    } else {
        warn!("GEMINI_API_KEY is not set, consultation and product scan will degrade");
    }

    Ok(Service::new(
        llm_client,
        InMemoryDiagnosticSessionRepository::with_idle_timeout(
            config.diagnostic.session_idle_timeout,
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{DiagnosticConfig, LLMConfig},
        diagnostic::{
            ports::DiagnosticService,
            value_objects::{AnswerOutcome, AnswerQuestionInput},
        },
    };

    #[tokio::test]
    async fn test_service_runs_diagnostic_without_llm_credentials() {
        let service = create_service(HairsphereConfig {
            llm: LLMConfig::default(),
            diagnostic: DiagnosticConfig::default(),
        })
        .await
        .unwrap();

        let session = service.start_session().await.unwrap();
        let (_, outcome) = service
            .answer_question(AnswerQuestionInput {
                session_id: session.id,
                question_id: "curlPattern".to_string(),
                value: "Type 1".to_string(),
            })
            .await
            .unwrap();

        assert!(matches!(outcome, AnswerOutcome::Continue { .. }));
    }
}
