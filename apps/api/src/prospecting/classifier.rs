//! Batch classifier — LLM-backed prospect classification with a strict
//! fail-open contract.
//!
//! The classification provider is an optional capability: without one,
//! every entry point degrades to the deterministic keyword filter. With
//! one, candidates are classified in fixed-size batches and any batch
//! failure keeps that batch rather than aborting the run.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::{LlmCall, LlmClient, LlmError, CLASSIFIER_MODEL};
use crate::models::{Candidate, Segment};
use crate::prospecting::filter;
use crate::prospecting::prompts::BATCH_CLASSIFY_PROMPT_TEMPLATE;

/// Candidates per classification request.
const BATCH_SIZE: usize = 20;
const CLASSIFY_MAX_TOKENS: u32 = 500;
const CLASSIFY_TIMEOUT: Duration = Duration::from_secs(10);
/// Categories listed per candidate in the batch prompt.
const PROMPT_CATEGORY_LIMIT: usize = 3;

/// Which path produced a filtered prospect list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMethod {
    Keyword,
    Llm,
}

/// The external classification capability: one free-form text response
/// per batch prompt. Implemented by `LlmClient`; swapped for a scripted
/// provider in tests.
#[async_trait]
pub trait ClassificationProvider: Send + Sync {
    async fn classify_batch(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl ClassificationProvider for LlmClient {
    async fn classify_batch(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .call(&LlmCall {
                model: CLASSIFIER_MODEL,
                max_tokens: CLASSIFY_MAX_TOKENS,
                temperature: None,
                timeout: CLASSIFY_TIMEOUT,
                prompt,
            })
            .await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Orchestrates batched classification over an optional provider.
pub struct BatchClassifier {
    provider: Option<Arc<dyn ClassificationProvider>>,
}

impl BatchClassifier {
    pub fn new(provider: Option<Arc<dyn ClassificationProvider>>) -> Self {
        Self { provider }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Classifies every candidate as keep (true) or exclude (false).
    ///
    /// The returned list is always exactly as long as the input. Without
    /// a provider, or on any per-batch failure, the affected candidates
    /// default to keep. One unified rule description is sent regardless
    /// of the target segment (the segment only shapes the keyword
    /// fallback path).
    pub async fn classify(&self, candidates: &[Candidate], _segment: Segment) -> Vec<bool> {
        let provider = match &self.provider {
            Some(p) => p,
            None => return vec![true; candidates.len()],
        };
        if candidates.is_empty() {
            return vec![];
        }

        let total_batches = candidates.len().div_ceil(BATCH_SIZE);
        info!(
            "Classifying {} candidates in {} batches",
            candidates.len(),
            total_batches
        );

        let mut decisions = Vec::with_capacity(candidates.len());
        for (batch_idx, batch) in candidates.chunks(BATCH_SIZE).enumerate() {
            let prompt = build_batch_prompt(batch);
            match provider.classify_batch(&prompt).await {
                Ok(response) => {
                    decisions.extend(parse_decisions(&response, batch.len()));
                }
                Err(e) => {
                    // Fail open: keep the whole batch and carry on.
                    warn!(
                        "Classification batch {}/{} failed ({e}), keeping all {} candidates",
                        batch_idx + 1,
                        total_batches,
                        batch.len()
                    );
                    decisions.extend(std::iter::repeat(true).take(batch.len()));
                }
            }
        }

        decisions
    }

    /// Composite entry point: classify-and-filter, or delegate to the
    /// keyword filter when no classification capability is configured.
    pub async fn filter_with_classifier(
        &self,
        candidates: &[Candidate],
        segment: Segment,
    ) -> (Vec<Candidate>, FilterMethod) {
        if !self.has_provider() {
            return (filter::filter(candidates, segment), FilterMethod::Keyword);
        }

        let decisions = self.classify(candidates, segment).await;
        let kept: Vec<Candidate> = candidates
            .iter()
            .zip(decisions)
            .filter(|(c, keep)| *keep && c.has_name())
            .map(|(c, _)| c.clone())
            .collect();

        info!(
            "Classifier kept {}/{} candidates",
            kept.len(),
            candidates.len()
        );
        (kept, FilterMethod::Llm)
    }
}

/// Builds the numbered candidate list and splices it into the batch
/// prompt. Each line carries the name and the top 3 categories.
fn build_batch_prompt(batch: &[Candidate]) -> String {
    let lines: Vec<String> = batch
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let categories = c
                .categories
                .iter()
                .take(PROMPT_CATEGORY_LIMIT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}. {} - Categories: {}", i + 1, c.name, categories)
        })
        .collect();

    BATCH_CLASSIFY_PROMPT_TEMPLATE.replace("{restaurants}", &lines.join("\n"))
}

/// Parses a free-form classification response into keep/exclude
/// decisions, one per expected candidate.
///
/// Each line is scanned for "KEEP" or "EXCLUDE" (case-insensitive
/// substring); lines matching neither are skipped. Short responses are
/// padded with keep, long ones truncated — the output length always
/// equals `expected`.
fn parse_decisions(response: &str, expected: usize) -> Vec<bool> {
    let mut decisions = Vec::with_capacity(expected);
    for line in response.lines() {
        let line = line.trim().to_uppercase();
        if line.contains("KEEP") {
            decisions.push(true);
        } else if line.contains("EXCLUDE") {
            decisions.push(false);
        }
    }

    while decisions.len() < expected {
        decisions.push(true);
    }
    decisions.truncate(expected);
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, categories: &[&str]) -> Candidate {
        Candidate {
            name: name.to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            price_level: None,
            distance_m: 250.0,
            lat: None,
            lon: None,
        }
    }

    struct FixedProvider(&'static str);

    #[async_trait]
    impl ClassificationProvider for FixedProvider {
        async fn classify_batch(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ClassificationProvider for FailingProvider {
        async fn classify_batch(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            })
        }
    }

    #[test]
    fn test_parse_decisions_mixed_lines() {
        let response = "1. KEEP\n2. EXCLUDE - chain restaurant\nsome commentary\n3. keep";
        assert_eq!(parse_decisions(response, 3), vec![true, false, true]);
    }

    #[test]
    fn test_parse_decisions_pads_short_responses_with_keep() {
        let response = "1. EXCLUDE";
        assert_eq!(parse_decisions(response, 3), vec![false, true, true]);
    }

    #[test]
    fn test_parse_decisions_truncates_long_responses() {
        let response = "1. KEEP\n2. KEEP\n3. EXCLUDE\n4. EXCLUDE";
        assert_eq!(parse_decisions(response, 2), vec![true, true]);
    }

    #[test]
    fn test_parse_decisions_garbage_only_defaults_to_keep() {
        let response = "I could not evaluate these restaurants.";
        assert_eq!(parse_decisions(response, 2), vec![true, true]);
    }

    #[tokio::test]
    async fn test_classify_without_provider_keeps_all() {
        let classifier = BatchClassifier::new(None);
        let candidates = vec![
            candidate("Oceanique", &["catering.restaurant.seafood"]),
            candidate("Joe's Pizza", &["catering.restaurant"]),
        ];
        let decisions = classifier.classify(&candidates, Segment::All).await;
        assert_eq!(decisions, vec![true, true]);
    }

    #[tokio::test]
    async fn test_classify_length_matches_input_on_provider_failure() {
        let classifier = BatchClassifier::new(Some(Arc::new(FailingProvider)));
        let candidates: Vec<Candidate> = (0..45)
            .map(|i| candidate(&format!("Restaurant {i}"), &["catering.restaurant"]))
            .collect();
        let decisions = classifier.classify(&candidates, Segment::FineDining).await;
        assert_eq!(decisions.len(), 45);
        assert!(decisions.iter().all(|&d| d));
    }

    #[tokio::test]
    async fn test_classify_length_matches_input_on_partial_parse() {
        // Provider answers for only one candidate per batch; the rest pad
        // to keep.
        let classifier = BatchClassifier::new(Some(Arc::new(FixedProvider("1. EXCLUDE"))));
        let candidates = vec![
            candidate("Sakura Garden", &["catering.restaurant"]),
            candidate("Oceanique", &["catering.restaurant.seafood"]),
            candidate("Chez Moi", &["catering.restaurant.french"]),
        ];
        let decisions = classifier.classify(&candidates, Segment::FineDining).await;
        assert_eq!(decisions, vec![false, true, true]);
    }

    #[tokio::test]
    async fn test_classify_empty_input_returns_empty() {
        let classifier = BatchClassifier::new(Some(Arc::new(FixedProvider("1. KEEP"))));
        let decisions = classifier.classify(&[], Segment::All).await;
        assert!(decisions.is_empty());
    }

    #[tokio::test]
    async fn test_filter_without_provider_matches_keyword_filter() {
        let classifier = BatchClassifier::new(None);
        let candidates = vec![
            candidate("Oceanique", &["catering.restaurant.seafood"]),
            candidate("Joe's Pizza", &["catering.restaurant"]),
            candidate("", &["catering.restaurant.french"]),
            candidate("Trattoria Demi", &["catering.restaurant"]),
        ];

        for segment in [Segment::FineDining, Segment::Gastropub, Segment::All] {
            let (kept, method) = classifier.filter_with_classifier(&candidates, segment).await;
            let expected = filter::filter(&candidates, segment);
            assert_eq!(method, FilterMethod::Keyword);
            assert_eq!(kept.len(), expected.len());
            for (a, b) in kept.iter().zip(expected.iter()) {
                assert_eq!(a.name, b.name);
            }
        }
    }

    #[tokio::test]
    async fn test_filter_with_provider_applies_decisions() {
        let classifier = BatchClassifier::new(Some(Arc::new(FixedProvider(
            "1. EXCLUDE\n2. KEEP\n3. KEEP",
        ))));
        let candidates = vec![
            candidate("Sakura Garden", &["catering.restaurant"]),
            candidate("Oceanique", &["catering.restaurant.seafood"]),
            candidate("Chez Moi", &["catering.restaurant.french"]),
        ];
        let (kept, method) = classifier
            .filter_with_classifier(&candidates, Segment::FineDining)
            .await;
        assert_eq!(method, FilterMethod::Llm);
        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Oceanique", "Chez Moi"]);
    }

    #[tokio::test]
    async fn test_blank_names_never_survive_fail_open() {
        let classifier = BatchClassifier::new(Some(Arc::new(FailingProvider)));
        let candidates = vec![
            candidate("", &["catering.restaurant"]),
            candidate("Oceanique", &["catering.restaurant.seafood"]),
        ];
        let (kept, _) = classifier
            .filter_with_classifier(&candidates, Segment::All)
            .await;
        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Oceanique"]);
    }

    #[test]
    fn test_batch_prompt_lists_top_three_categories() {
        let batch = vec![candidate(
            "Oceanique",
            &["a.one", "a.two", "a.three", "a.four"],
        )];
        let prompt = build_batch_prompt(&batch);
        assert!(prompt.contains("1. Oceanique - Categories: a.one, a.two, a.three"));
        assert!(!prompt.contains("a.four"));
        assert!(prompt.contains("EXCLUDE"));
    }
}
