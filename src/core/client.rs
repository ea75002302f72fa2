use crate::domain::model::{
    Draft, PresetQuestions, ServerAck, ServerRejection, SubmissionPayload, SubmitOutcome,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

pub const SUBMIT_PATH: &str = "/api/submit-dog-info";
pub const PRESET_QUESTIONS_PATH: &str = "/api/questions/preset";

/// Turns a draft into the outbound request and resolves the outcome.
///
/// One fire-once request per submit call: no retries, no timeout, no
/// cancellation. The in-flight flag makes the double-submit decision
/// explicit: while a request is outstanding, further submits are refused
/// without touching the network.
pub struct SubmissionClient<C: ConfigProvider> {
    config: C,
    client: Client,
    in_flight: AtomicBool,
}

impl<C: ConfigProvider> SubmissionClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// POST the draft to the backend and interpret the response.
    ///
    /// A 2xx response must carry a `message`; a non-2xx response is expected
    /// to carry a `detail`, with the HTTP status standing in when the body
    /// is not the expected JSON. A request that never produced a response
    /// resolves to `Unreachable` rather than an error, so the caller can
    /// keep the draft and let the user retry.
    pub async fn submit(&self, draft: &Draft) -> Result<SubmitOutcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("submission refused: a request is already outstanding");
            return Ok(SubmitOutcome::AlreadyInFlight);
        }

        let result = self.submit_once(draft).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_once(&self, draft: &Draft) -> Result<SubmitOutcome> {
        let payload = SubmissionPayload::from(draft);
        let url = Url::parse(self.config.api_base())?.join(SUBMIT_PATH)?;

        tracing::debug!("Submitting questionnaire to: {}", url);
        let response = match self.client.post(url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("No response from backend: {}", e);
                return Ok(SubmitOutcome::Unreachable);
            }
        };

        let status = response.status();
        tracing::debug!("Submission response status: {}", status);

        if status.is_success() {
            let ack: ServerAck = serde_json::from_str(&response.text().await?)?;
            Ok(SubmitOutcome::Accepted {
                message: ack.message,
            })
        } else {
            let body = response.text().await?;
            let detail = serde_json::from_str::<ServerRejection>(&body)
                .map(|rejection| rejection.detail)
                .unwrap_or_else(|_| format!("Submission rejected with status {}", status));
            Ok(SubmitOutcome::Rejected { detail })
        }
    }

    /// Fetch the preset vet questions tailored to the current draft.
    pub async fn fetch_preset_questions(&self, draft: &Draft) -> Result<Vec<String>> {
        let mut url = Url::parse(self.config.api_base())?.join(PRESET_QUESTIONS_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("breed_name_AKC", &draft.breed_name);
            if !draft.age_years.is_empty() {
                pairs.append_pair("age_years_preReg", &draft.age_years);
            }
            for status in &draft.diet_statuses {
                pairs.append_pair("status_dietRelat_preReg", status.as_str());
            }
        }

        tracing::debug!("Fetching preset questions from: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let preset: PresetQuestions = response.json().await?;
        Ok(preset.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DietStatus;
    use httpmock::prelude::*;
    use std::sync::Arc;
    use std::time::Duration;

    struct MockConfig {
        api_base: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_base(&self) -> &str {
            &self.api_base
        }
    }

    fn sample_draft() -> Draft {
        Draft {
            breed_name: "Labrador Retriever".to_string(),
            age_years: "3.5".to_string(),
            diet_statuses: vec![DietStatus::Puppy, DietStatus::Allergy],
        }
    }

    fn client_for(server: &MockServer) -> SubmissionClient<MockConfig> {
        SubmissionClient::new(MockConfig {
            api_base: server.base_url(),
        })
    }

    #[tokio::test]
    async fn test_submit_sends_exact_backend_schema() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/submit-dog-info")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "breed_name_AKC": "Labrador Retriever",
                    "age_years_preReg": "3.5",
                    "status_dietRelat_preReg": ["puppy", "allergy"]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"message": "Saved"}));
        });

        let outcome = client_for(&server).submit(&sample_draft()).await.unwrap();

        api_mock.assert();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                message: "Saved".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_rejection_surfaces_detail() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/submit-dog-info");
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "Invalid breed"}));
        });

        let outcome = client_for(&server).submit(&sample_draft()).await.unwrap();

        api_mock.assert();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                detail: "Invalid breed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_rejection_without_json_body_falls_back_to_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/submit-dog-info");
            then.status(502).body("Bad Gateway");
        });

        let outcome = client_for(&server).submit(&sample_draft()).await.unwrap();

        match outcome {
            SubmitOutcome::Rejected { detail } => assert!(detail.contains("502")),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_transport_failure_is_unreachable() {
        // Discard port; nothing listens there.
        let client = SubmissionClient::new(MockConfig {
            api_base: "http://127.0.0.1:9".to_string(),
        });

        let outcome = client.submit(&sample_draft()).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Unreachable);
    }

    #[tokio::test]
    async fn test_second_submit_while_outstanding_is_refused() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/submit-dog-info");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"message": "Saved"}))
                .delay(Duration::from_millis(500));
        });

        let client = Arc::new(client_for(&server));
        let first = {
            let client = client.clone();
            tokio::spawn(async move { client.submit(&sample_draft()).await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        let second = client.submit(&sample_draft()).await.unwrap();
        assert_eq!(second, SubmitOutcome::AlreadyInFlight);

        let first = first.await.unwrap().unwrap();
        assert_eq!(
            first,
            SubmitOutcome::Accepted {
                message: "Saved".to_string()
            }
        );
        // Only the first call reached the backend.
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_preset_questions_sends_draft_as_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/questions/preset")
                .query_param("breed_name_AKC", "Labrador Retriever")
                .query_param("age_years_preReg", "3.5")
                .query_param("status_dietRelat_preReg", "puppy");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "success": true,
                    "questions": [
                        "Are there breed-specific nutrition concerns for Labrador Retriever?",
                        "Is the current body condition and weight on track for this age?"
                    ]
                }));
        });

        let questions = client_for(&server)
            .fetch_preset_questions(&sample_draft())
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].contains("Labrador Retriever"));
    }
}
