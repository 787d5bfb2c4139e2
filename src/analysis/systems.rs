// src/analysis/systems.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use serde_json::{json, Value};

use crate::documents::resources::DocumentRegistry;
use crate::matrix::definitions::{Dimension, Document};
use crate::matrix::events::{MatrixOperationFeedback, ReplaceMatrixEvent};

use super::error::ComparisonError;
use super::events::{ComparisonRunResult, RequestComparisonRun};
use super::resources::{ComparisonRunState, SessionApiKey};

const KEYRING_SERVICE_NAME: &str = "insightgrid_ai";
const KEYRING_API_KEY_USERNAME: &str = "llm_api_key";
const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Resolves the provider API key once at startup: keyring first, then the
/// environment (including a `.env` file if present).
pub fn load_api_key_startup(mut session_key: ResMut<SessionApiKey>) {
    match keyring::Entry::new(KEYRING_SERVICE_NAME, KEYRING_API_KEY_USERNAME) {
        Ok(entry) => match entry.get_password() {
            Ok(key) => {
                info!("API key found in keyring on startup.");
                session_key.0 = Some(key);
                return;
            }
            Err(keyring::Error::NoEntry) => {
                info!("No API key in keyring; trying environment.");
            }
            Err(e) => {
                error!("Error accessing keyring on startup: {}", e);
            }
        },
        Err(e) => {
            error!("Could not open keyring entry: {}", e);
        }
    }

    dotenvy::dotenv().ok();
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => {
            info!("API key loaded from environment.");
            session_key.0 = Some(key);
        }
        _ => {
            warn!(
                "No API key available ({} unset); comparison runs disabled.",
                API_KEY_ENV_VAR
            );
        }
    }
}

/// Builds the instruction sent to the provider. The response contract is
/// the engine's wire shape: a JSON array of
/// `{ "name": ..., "insights": { document-id: text } }` records.
fn build_prompt(documents: &[Document], dimension_names: &[String]) -> String {
    let mut prompt = String::from(
        "You are comparing research papers. For each comparison dimension \
         below, write a short free-text insight per document. Respond with \
         ONLY a JSON array, one object per dimension in the given order, \
         shaped as {\"name\": <dimension>, \"insights\": {<document-id>: \
         <text>}}. Use '- ' bullet lines and **emphasis** where helpful.\n\n\
         Documents:\n",
    );
    for doc in documents {
        prompt.push_str(&format!(
            "- id: {} | title: {} | ref: {}\n",
            doc.id, doc.title, doc.reference
        ));
    }
    prompt.push_str("\nDimensions:\n");
    for name in dimension_names {
        prompt.push_str(&format!("- {}\n", name));
    }
    prompt
}

/// Pulls the model text out of a `generateContent` response body and
/// parses it as the wire-shape dimension list. Code fences around the JSON
/// are tolerated.
fn parse_comparison_response(body: &str) -> Result<Vec<Dimension>, ComparisonError> {
    let value: Value = serde_json::from_str(body)?;
    let text = value["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| {
            ComparisonError::MalformedResponse("missing candidates[0] text part".to_string())
        })?;

    let trimmed = text.trim();
    let stripped = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map(|s| s.trim_end_matches("```"))
        .unwrap_or(trimmed)
        .trim();

    let dimensions: Vec<Dimension> = serde_json::from_str(stripped)?;
    Ok(dimensions)
}

/// Kicks off the background comparison run. At most one run is in flight
/// per window; repeated requests while running are dropped with feedback.
pub fn handle_comparison_request(
    mut events: EventReader<RequestComparisonRun>,
    mut run_state: ResMut<ComparisonRunState>,
    session_key: Res<SessionApiKey>,
    registry: Res<DocumentRegistry>,
    runtime: Res<TokioTasksRuntime>,
    mut feedback_writer: EventWriter<MatrixOperationFeedback>,
) {
    for event in events.read() {
        if run_state.running {
            feedback_writer.write(MatrixOperationFeedback {
                message: "A comparison run is already in progress.".to_string(),
                is_error: false,
            });
            continue;
        }
        let Some(api_key) = session_key.0.clone() else {
            feedback_writer.write(MatrixOperationFeedback {
                message: "No API key set; cannot run comparison.".to_string(),
                is_error: true,
            });
            continue;
        };
        if registry.is_empty() {
            feedback_writer.write(MatrixOperationFeedback {
                message: "Add documents before running a comparison.".to_string(),
                is_error: true,
            });
            continue;
        }
        if event.dimension_names.is_empty() {
            feedback_writer.write(MatrixOperationFeedback {
                message: "No comparison dimensions specified.".to_string(),
                is_error: true,
            });
            continue;
        }

        run_state.running = true;
        let prompt = build_prompt(registry.documents(), &event.dimension_names);
        info!(
            "Starting comparison run: {} document(s), {} dimension(s).",
            registry.len(),
            event.dimension_names.len()
        );

        runtime.spawn_background_task(move |mut ctx| async move {
            let outcome = run_comparison(&api_key, &prompt).await;
            let (result, raw_response) = match outcome {
                Ok((dimensions, raw)) => (Ok(dimensions), Some(raw)),
                Err((e, raw)) => (Err(e.to_string()), raw),
            };
            ctx.run_on_main_thread(move |main_ctx| {
                main_ctx
                    .world
                    .send_event(ComparisonRunResult { result, raw_response });
            })
            .await;
        });
    }
}

async fn run_comparison(
    api_key: &str,
    prompt: &str,
) -> Result<(Vec<Dimension>, String), (ComparisonError, Option<String>)> {
    let client = reqwest::Client::new();
    let body = json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    });

    let response = client
        .post(format!("{}?key={}", GEMINI_ENDPOINT, api_key))
        .json(&body)
        .send()
        .await
        .map_err(|e| (ComparisonError::Http(e), None))?;

    let raw = response
        .text()
        .await
        .map_err(|e| (ComparisonError::Http(e), None))?;

    match parse_comparison_response(&raw) {
        Ok(dimensions) => Ok((dimensions, raw)),
        Err(e) => Err((e, Some(raw))),
    }
}

/// Applies comparison results on the main thread. Success installs the
/// matrix wholesale (last-write-wins, discarding unexported edits to the
/// prior matrix); failure leaves the current matrix untouched.
pub fn handle_comparison_results(
    mut events: EventReader<ComparisonRunResult>,
    mut run_state: ResMut<ComparisonRunState>,
    mut replace_writer: EventWriter<ReplaceMatrixEvent>,
    mut feedback_writer: EventWriter<MatrixOperationFeedback>,
) {
    for event in events.read() {
        run_state.running = false;
        match &event.result {
            Ok(dimensions) => {
                info!(
                    "Comparison run succeeded with {} dimension(s).",
                    dimensions.len()
                );
                replace_writer.write(ReplaceMatrixEvent {
                    dimensions: dimensions.clone(),
                });
                feedback_writer.write(MatrixOperationFeedback {
                    message: "Comparison complete.".to_string(),
                    is_error: false,
                });
            }
            Err(message) => {
                error!("Comparison run failed: {}", message);
                if let Some(raw) = &event.raw_response {
                    debug!("Raw provider response: {}", raw);
                }
                feedback_writer.write(MatrixOperationFeedback {
                    message: format!("Comparison failed: {}", message),
                    is_error: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_dimension_payload() {
        let inner = r#"[{"name":"Study Design","insights":{}}]"#;
        let body = serde_json::to_string(&json!({
            "candidates": [{
                "content": { "parts": [{ "text": format!("```json\n{}\n```", inner) }] }
            }]
        }))
        .unwrap();
        let dims = parse_comparison_response(&body).expect("valid payload");
        assert_eq!(dims.len(), 1);
        assert_eq!(dims[0].name, "Study Design");
    }

    #[test]
    fn missing_text_part_is_malformed() {
        let body = r#"{"candidates": []}"#;
        let err = parse_comparison_response(body).unwrap_err();
        assert!(matches!(err, ComparisonError::MalformedResponse(_)));
    }

    #[test]
    fn prompt_lists_documents_and_dimensions() {
        use crate::matrix::definitions::DocumentId;
        let docs = vec![Document {
            id: DocumentId::new(),
            title: "A Paper".to_string(),
            reference: "a.pdf".to_string(),
        }];
        let prompt = build_prompt(&docs, &["Study Design".to_string()]);
        assert!(prompt.contains("A Paper"));
        assert!(prompt.contains("a.pdf"));
        assert!(prompt.contains("Study Design"));
    }
}
