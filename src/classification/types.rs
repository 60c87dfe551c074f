use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Body returned by the classification service on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub prediction: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_confidences: Option<IndexMap<String, f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub label: String,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(prediction: impl Into<String>, confidence: f64) -> Self {
        Self {
            prediction: prediction.into(),
            confidence,
            all_confidences: None,
        }
    }

    pub fn with_confidences<I, S>(mut self, confidences: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.all_confidences = Some(
            confidences
                .into_iter()
                .map(|(label, confidence)| (label.into(), confidence))
                .collect(),
        );
        self
    }

    /// Top `limit` labels, highest confidence first. Equal scores keep the
    /// order the service sent them in.
    pub fn breakdown(&self, limit: usize) -> Vec<BreakdownEntry> {
        let Some(all) = &self.all_confidences else {
            return Vec::new();
        };

        let mut entries: Vec<BreakdownEntry> = all
            .iter()
            .map(|(label, confidence)| BreakdownEntry {
                label: label.clone(),
                confidence: *confidence,
            })
            .collect();
        entries.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        entries.truncate(limit);
        entries
    }

    /// Confidence clamped into [0, 1] for display.
    pub fn certainty(&self) -> f32 {
        unit_interval(self.confidence)
    }
}

impl BreakdownEntry {
    pub fn certainty(&self) -> f32 {
        unit_interval(self.confidence)
    }
}

fn unit_interval(value: f64) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0) as f32
    }
}

/// Formats a [0, 1] score as a percentage with one decimal, e.g. `87.0%`.
pub fn format_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_body() {
        let result: ClassificationResult =
            serde_json::from_str(r#"{"prediction":"X","confidence":0.87}"#).unwrap();
        assert_eq!(result.prediction, "X");
        assert_eq!(result.confidence, 0.87);
        assert!(result.all_confidences.is_none());
        assert!(result.breakdown(5).is_empty());
    }

    #[test]
    fn breakdown_is_sorted_descending() {
        let result: ClassificationResult = serde_json::from_str(
            r#"{"prediction":"cat","confidence":0.9,
                "all_confidences":{"fox":0.03,"cat":0.9,"dog":0.07}}"#,
        )
        .unwrap();
        let labels: Vec<_> = result
            .breakdown(5)
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(labels, vec!["cat", "dog", "fox"]);
    }

    #[test]
    fn breakdown_truncates_and_keeps_tie_order() {
        let result = ClassificationResult::new("beagle", 0.3).with_confidences([
            ("pug", 0.1),
            ("beagle", 0.3),
            ("corgi", 0.1),
            ("husky", 0.2),
            ("akita", 0.1),
            ("boxer", 0.1),
            ("collie", 0.1),
        ]);
        let labels: Vec<_> = result
            .breakdown(5)
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(labels, vec!["beagle", "husky", "pug", "corgi", "akita"]);
    }

    #[test]
    fn certainty_is_clamped_for_display() {
        assert_eq!(ClassificationResult::new("a", 1.7).certainty(), 1.0);
        assert_eq!(ClassificationResult::new("a", -0.2).certainty(), 0.0);
        assert_eq!(ClassificationResult::new("a", f64::NAN).certainty(), 0.0);
        assert_eq!(format_percent(0.87), "87.0%");
        assert_eq!(format_percent(0.0312), "3.1%");
    }
}
