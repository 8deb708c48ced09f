use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::SentimentVerdict;

/// Anything that maps a piece of text to a polarity in [-1, 1].
pub trait Polarity {
    fn polarity(&self, text: &str) -> f64;
}

/// Lexicon-based polarity using VADER's compound score.
pub struct VaderPolarity {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderPolarity {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl Polarity for VaderPolarity {
    fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0).clamp(-1.0, 1.0)
    }
}

pub struct SentimentScorer {
    polarity: Box<dyn Polarity>,
}

impl SentimentScorer {
    pub fn new(polarity: Box<dyn Polarity>) -> Self {
        Self { polarity }
    }

    pub fn vader() -> Self {
        Self::new(Box::new(VaderPolarity::new()))
    }

    /// Polarity of every non-blank fragment, in input order.
    pub fn polarities<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<f64> {
        fragments
            .iter()
            .map(|s| s.as_ref())
            .filter(|text| !text.trim().is_empty())
            .map(|text| self.polarity.polarity(text).clamp(-1.0, 1.0))
            .collect()
    }

    /// Mean polarity over non-blank fragments. No usable text scores 0.0 (Neutral).
    pub fn score<S: AsRef<str>>(&self, fragments: &[S]) -> SentimentVerdict {
        let values = self.polarities(fragments);
        if values.is_empty() {
            return SentimentVerdict::neutral();
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        SentimentVerdict::from_score(mean)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use std::collections::HashMap;

    /// Scores a fragment by exact lookup, 0.0 when unknown.
    pub(crate) struct FixedPolarity(pub HashMap<String, f64>);

    impl FixedPolarity {
        pub(crate) fn from_pairs(pairs: &[(&str, f64)]) -> Self {
            Self(pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect())
        }
    }

    impl Polarity for FixedPolarity {
        fn polarity(&self, text: &str) -> f64 {
            self.0.get(text).copied().unwrap_or(0.0)
        }
    }

    #[test]
    fn test_empty_and_blank_inputs_are_neutral() {
        let scorer = SentimentScorer::vader();
        let empty: [&str; 0] = [];
        let expected = SentimentVerdict {
            score: 0.0,
            label: SentimentLabel::Neutral,
        };
        assert_eq!(scorer.score(&empty), expected);
        assert_eq!(scorer.score(&["", "   "]), expected);
    }

    #[test]
    fn test_mean_of_polarities() {
        let scorer = SentimentScorer::new(Box::new(FixedPolarity::from_pairs(&[
            ("good", 0.6),
            ("great", 0.9),
            ("bad", -0.6),
        ])));
        let verdict = scorer.score(&["good", "great", "bad"]);
        assert!((verdict.score - 0.3).abs() < 1e-9);
        assert_eq!(verdict.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_blank_fragments_excluded_from_mean() {
        let scorer = SentimentScorer::new(Box::new(FixedPolarity::from_pairs(&[("bad", -0.5)])));
        let verdict = scorer.score(&["bad", "", "  "]);
        assert!((verdict.score + 0.5).abs() < 1e-9);
        assert_eq!(verdict.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_aggregate_within_individual_bounds() {
        let scorer = SentimentScorer::vader();
        let fragments = [
            "Great learning opportunities and a supportive team",
            "Terrible management and awful burnout",
            "The office is in Berlin",
            "Good benefits",
        ];
        let values = scorer.polarities(&fragments);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let verdict = scorer.score(&fragments);
        assert!(verdict.score >= min && verdict.score <= max);
    }

    #[test]
    fn test_vader_direction() {
        let vader = VaderPolarity::new();
        assert!(vader.polarity("Great place to work, excellent benefits") > 0.1);
        assert!(vader.polarity("Horrible culture, terrible and toxic management") < -0.1);
        assert_eq!(vader.polarity("   "), 0.0);
    }

    #[test]
    fn test_out_of_range_polarity_is_clamped() {
        let scorer = SentimentScorer::new(Box::new(FixedPolarity::from_pairs(&[("x", 3.0)])));
        assert_eq!(scorer.score(&["x"]).score, 1.0);
    }
}
