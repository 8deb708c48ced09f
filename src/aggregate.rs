use crate::models::Fragment;

/// Joins the text fields of one fragment with single spaces.
pub fn fragment_text(fragment: &Fragment) -> String {
    fragment.text_fields().join(" ")
}

/// Concatenates every fragment's text fields into one corpus, in input order.
///
/// Empty fields still contribute their separator so the layout stays stable;
/// fragments without text fields (metrics) contribute nothing.
pub fn aggregate(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .filter(|f| !f.text_fields().is_empty())
        .map(fragment_text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricValue, NewsItem};

    fn news(title: &str, description: &str) -> Fragment {
        Fragment::News(NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert_eq!(aggregate(&[]), "");
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let fragments = vec![
            news("Acme hires", "Hiring spree continues"),
            Fragment::snippet("Great place to work"),
        ];
        assert_eq!(
            aggregate(&fragments),
            "Acme hires Hiring spree continues Great place to work"
        );
    }

    #[test]
    fn test_aggregate_keeps_empty_fields() {
        let fragments = vec![news("Title only", ""), news("", "Description only")];
        assert_eq!(aggregate(&fragments), "Title only   Description only");
    }

    #[test]
    fn test_aggregate_skips_metrics() {
        let fragments = vec![
            Fragment::Metric {
                name: "Satisfaction %".to_string(),
                value: MetricValue::Integer(80),
            },
            Fragment::snippet("Supportive teams"),
        ];
        assert_eq!(aggregate(&fragments), "Supportive teams");
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let fragments = vec![news("A", "B"), Fragment::snippet("C")];
        assert_eq!(aggregate(&fragments), aggregate(&fragments));
    }
}
