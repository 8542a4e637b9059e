//! Run Comparison use case
//!
//! Sends the same question to the LLM twice, once with the dataset as JSON
//! and once in the alternative format, and captures comparable timings.
//!
//! The two calls are strictly sequential and each goes through a fresh
//! session, so neither answer can see the other's context:
//!
//! 1. JSON prompt
//! 2. fixed pause (`ComparisonParams::delay`)
//! 3. alternative-format prompt
//!
//! A failed call is recorded in its [`QueryResult`] and never stops the
//! other call from running.

use crate::config::ComparisonParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use toonbench_domain::util::preview;
use toonbench_domain::{
    ComparisonRecord, ConvertedDataset, DataFormat, Dataset, PromptTemplate, QueryRequest,
    QueryResult, Question, RunMetadata,
};
use tracing::{debug, info, warn};

/// Input for the RunComparison use case
#[derive(Debug, Clone)]
pub struct RunComparisonInput {
    pub dataset: Dataset,
    pub converted: ConvertedDataset,
    pub question: Question,
    pub params: ComparisonParams,
}

impl RunComparisonInput {
    pub fn new(
        dataset: Dataset,
        converted: ConvertedDataset,
        question: Question,
        params: ComparisonParams,
    ) -> Self {
        Self {
            dataset,
            converted,
            question,
            params,
        }
    }

    /// Build both requests in dispatch order (JSON first).
    pub fn requests(&self) -> [QueryRequest; 2] {
        DataFormat::ALL.map(|format| {
            let (name, data) = match format {
                DataFormat::Json => ("JSON", self.dataset.content()),
                DataFormat::Alternative => (self.converted.format_name(), self.converted.text()),
            };
            QueryRequest::new(
                format,
                PromptTemplate::data_analysis(name, data, self.question.content()),
            )
        })
    }

    fn metadata(&self) -> RunMetadata {
        RunMetadata {
            source_file: self.dataset.source_name().to_string(),
            question: self.question.clone(),
            model: self.params.model.clone(),
            alternative_format: self.converted.format_name().to_string(),
            json_chars: self.dataset.char_count(),
            alternative_chars: self.converted.char_count(),
            delay_secs: self.params.delay.as_secs_f64(),
        }
    }
}

/// Use case for running one JSON-versus-alternative comparison
pub struct RunComparisonUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl RunComparisonUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunComparisonInput) -> ComparisonRecord {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Always issues exactly two queries and always returns a record; query
    /// failures are captured inside it.
    pub async fn execute_with_progress(
        &self,
        input: RunComparisonInput,
        progress: &dyn ProgressNotifier,
    ) -> ComparisonRecord {
        info!(
            "Starting comparison on {} with {}: {}",
            input.dataset.source_name(),
            input.params.model,
            preview(input.question.content(), 80)
        );

        let [json_request, alternative_request] = input.requests();
        let total = 2;

        progress.on_query_start(1, total, json_request.format, "JSON");
        let json = self.run_query(&input, &json_request).await;
        progress.on_query_complete(&json);

        // Blocking pause: nothing else happens until the delay has elapsed.
        debug!("Waiting {:?} before the next query", input.params.delay);
        progress.on_delay(input.params.delay);
        tokio::time::sleep(input.params.delay).await;

        progress.on_query_start(
            2,
            total,
            alternative_request.format,
            input.converted.format_name(),
        );
        let alternative = self.run_query(&input, &alternative_request).await;
        progress.on_query_complete(&alternative);

        ComparisonRecord::new(input.metadata(), json, alternative)
    }

    /// Send one request through a fresh session and time it.
    async fn run_query(&self, input: &RunComparisonInput, request: &QueryRequest) -> QueryResult {
        debug!(
            "Sending {} prompt ({} chars)",
            request.format,
            request.prompt_chars()
        );

        let started_at = Utc::now();
        let start = Instant::now();
        let outcome = self.query(input, request).await;
        let latency = start.elapsed();

        match outcome {
            Ok(response) => {
                info!(
                    "{} query answered in {:.2}s",
                    request.format,
                    latency.as_secs_f64()
                );
                QueryResult::success(request, response, started_at, latency)
            }
            Err(e) => {
                warn!("{} query failed: {}", request.format, e);
                QueryResult::failure(request, e.to_string(), started_at, latency)
            }
        }
    }

    async fn query(
        &self,
        input: &RunComparisonInput,
        request: &QueryRequest,
    ) -> Result<String, GatewayError> {
        let session = self.gateway.create_session(&input.params.model).await?;
        session.send(&request.prompt).await
    }
}
