// SPDX-License-Identifier: MIT OR Apache-2.0
//! Prediction panel: sentence, explanation, errors and JSON records.

use std::fmt::Write as _;

use word_predictor::{PredictError, PredictionResult, SessionState};

use crate::style::{styled, Icons, Theme};

/// Text shown before any prediction has been requested.
pub const IDLE_PLACEHOLDER: &str =
    "Prediction results will appear here after running the simulation.";

/// Formats the current session state as the prediction panel.
#[must_use]
pub fn format_state(
    state: &SessionState,
    suggestions: &[String],
    theme: &Theme,
    icons: &Icons,
) -> String {
    match state {
        SessionState::Idle => styled(IDLE_PLACEHOLDER, theme.muted),
        SessionState::Resolved { result, .. } => format_prediction(result, theme),
        SessionState::Failed(e) => format_error(e, suggestions, theme, icons),
    }
}

/// Formats a successful prediction with its explanation.
#[must_use]
pub fn format_prediction(result: &PredictionResult, theme: &Theme) -> String {
    let prompt = result
        .full_sentence
        .strip_suffix(result.predicted_word.as_str())
        .unwrap_or(&result.full_sentence)
        .trim_end();

    let mut output = format!("{}\n", styled("Prediction Result", theme.header));
    let _ = writeln!(
        output,
        "  {} {}",
        styled(prompt, theme.muted),
        styled(&result.predicted_word, theme.highlight)
    );
    let _ = write!(
        output,
        "  {} Word '{}' was chosen because its vector is nearest (score {}) to the target context vector.",
        styled("Explanation:", theme.success),
        styled(&result.predicted_word, theme.highlight),
        styled(format!("{:.4}", result.distance), theme.number)
    );
    output
}

/// Formats a failed prediction.
///
/// Unknown prompts also list the prompts that do resolve.
#[must_use]
pub fn format_error(
    error: &PredictError,
    suggestions: &[String],
    theme: &Theme,
    icons: &Icons,
) -> String {
    let mut output = format!(
        "{} {}\n",
        styled(icons.error, theme.error),
        styled("Error", theme.error)
    );
    let _ = write!(output, "  {error}");
    if matches!(error, PredictError::UnknownPrompt { .. }) && !suggestions.is_empty() {
        let _ = write!(
            output,
            "\n  {} {}",
            styled("Suggested prompts:", theme.muted),
            suggestions
                .iter()
                .map(|s| styled(s, theme.string))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    output
}

/// Formats a prediction outcome as a single-line JSON record.
#[must_use]
pub fn format_json(outcome: &Result<PredictionResult, PredictError>) -> String {
    let value = match outcome {
        Ok(result) => serde_json::to_value(result)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hati() -> PredictionResult {
        PredictionResult {
            predicted_word: "hati".to_string(),
            distance: 0.073_484_692_283_495_36,
            full_sentence: "Menyentuh hati".to_string(),
        }
    }

    #[test]
    fn test_prediction_panel() {
        let result = format_prediction(&hati(), &Theme::plain());
        assert!(result.contains("Prediction Result"));
        assert!(result.contains("  Menyentuh hati\n"));
        assert!(result.contains("Word 'hati' was chosen"));
        assert!(result.contains("(score 0.0735)"));
    }

    #[test]
    fn test_prompt_ending_in_word_keeps_prompt() {
        let result = PredictionResult {
            predicted_word: "hati".to_string(),
            distance: 0.1,
            full_sentence: "hati hati".to_string(),
        };
        assert!(format_prediction(&result, &Theme::plain()).contains("  hati hati\n"));
    }

    #[test]
    fn test_idle_placeholder() {
        let result = format_state(&SessionState::Idle, &[], &Theme::plain(), &Icons::ASCII);
        assert_eq!(result, IDLE_PLACEHOLDER);
    }

    #[test]
    fn test_unknown_prompt_lists_suggestions() {
        let error = PredictError::UnknownPrompt {
            prompt: "halo".to_string(),
        };
        let suggestions = vec!["Bunga di".to_string(), "Menyentuh".to_string()];
        let result = format_state(
            &SessionState::Failed(error),
            &suggestions,
            &Theme::plain(),
            &Icons::ASCII,
        );
        assert!(result.starts_with("[!!] Error"));
        assert!(result.contains("\"halo\""));
        assert!(result.contains("Suggested prompts: Bunga di, Menyentuh"));
    }

    #[test]
    fn test_empty_prompt_has_no_suggestions() {
        let suggestions = vec!["Bunga di".to_string()];
        let result = format_error(
            &PredictError::EmptyPrompt,
            &suggestions,
            &Theme::plain(),
            &Icons::ASCII,
        );
        assert!(result.contains("please enter a prompt"));
        assert!(!result.contains("Suggested"));
    }

    #[test]
    fn test_json_success() {
        let json: serde_json::Value = serde_json::from_str(&format_json(&Ok(hati()))).unwrap();
        assert_eq!(json["predictedWord"], "hati");
        assert_eq!(json["fullSentence"], "Menyentuh hati");
        assert!(json["distance"].as_f64().is_some());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_error() {
        let json: serde_json::Value =
            serde_json::from_str(&format_json(&Err(PredictError::EmptyLexicon))).unwrap();
        assert_eq!(json["error"], "no candidate words available");
    }
}
