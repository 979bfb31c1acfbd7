use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consultation::{
        ports::ConsultationService,
        prompts::{
            APOLOGY_REPLY, API_KEY_MISSING_REPLY, EMPTY_REPLY, SYSTEM_INSTRUCTION,
            build_consultation_prompt,
        },
        value_objects::GenerateAdviceInput,
    },
    diagnostic::ports::DiagnosticSessionRepository,
    llm::ports::LLMClient,
};

impl<LLM, DS> ConsultationService for Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    #[instrument(skip_all, fields(history_len = input.history.len()))]
    async fn generate_advice(&self, input: GenerateAdviceInput) -> String {
        let prompt = build_consultation_prompt(&input.message, &input.history);

        match self
            .llm_client
            .generate_with_text(prompt, Some(SYSTEM_INSTRUCTION.to_string()), None)
            .await
        {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(CoreError::MissingApiKey) => {
                error!("API_KEY is missing from environment variables.");
                API_KEY_MISSING_REPLY.to_string()
            }
            Err(e) => {
                error!("Gemini API Error: {}", e);
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{consultation::entities::ChatTurn, llm::ports::MockLLMClient},
        infrastructure::diagnostic::InMemoryDiagnosticSessionRepository,
    };

    fn service_with(
        llm: MockLLMClient,
    ) -> Service<MockLLMClient, InMemoryDiagnosticSessionRepository> {
        Service::new(llm, InMemoryDiagnosticSessionRepository::new())
    }

    fn input(message: &str) -> GenerateAdviceInput {
        GenerateAdviceInput {
            message: message.to_string(),
            history: vec![ChatTurn::user("Hi")],
        }
    }

    #[tokio::test]
    async fn test_returns_model_text_and_sends_system_instruction() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, system, schema| {
                prompt.ends_with("User Query: Any tips?")
                    && system.as_deref() == Some(SYSTEM_INSTRUCTION)
                    && schema.is_none()
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok("Try the LOC method.".to_string()) }));

        let reply = service_with(llm).generate_advice(input("Any tips?")).await;
        assert_eq!(reply, "Try the LOC method.");
    }

    #[tokio::test]
    async fn test_blank_reply_falls_back() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _, _| Box::pin(async { Ok("   ".to_string()) }));

        let reply = service_with(llm).generate_advice(input("Any tips?")).await;
        assert_eq!(reply, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_service_failure_becomes_apology() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("503".to_string())) })
        });

        let reply = service_with(llm).generate_advice(input("Any tips?")).await;
        assert_eq!(reply, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn test_missing_key_is_reported() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _, _| Box::pin(async { Err(CoreError::MissingApiKey) }));

        let reply = service_with(llm).generate_advice(input("Any tips?")).await;
        assert_eq!(reply, API_KEY_MISSING_REPLY);
    }
}
