use crate::models::{AnalysisResult, Fragment, Provenance, SentimentVerdict, TextSection};

const WRAP_WIDTH: usize = 80;

/// Plain-text report, derived only from the analysis result.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("HR Due Diligence Report: {}\n", result.company));
    out.push_str(&format!("Industry: {}\n", result.industry));
    out.push_str(&format!("Generated: {}\n", result.generated_at));
    out.push_str(&format!("{}\n\n", "=".repeat(WRAP_WIDTH)));

    out.push_str(&format!("Overall Sentiment: {}\n", verdict_line(result.overall.as_ref())));
    let synthetic = synthetic_sections(result);
    if !synthetic.is_empty() {
        out.push_str(&format!(
            "NOTE: Synthetic (fabricated) data used for: {}. No real source had results for these sections.\n",
            synthetic.join(", ")
        ));
    }
    out.push('\n');

    render_text_section(&mut out, "News Sentiment", &result.news);
    render_news_items(&mut out, &result.news);

    render_text_section(&mut out, "Culture & Reviews", &result.culture);
    render_snippets(&mut out, &result.culture);

    out.push_str("## Reputation Metrics\n");
    out.push_str(&format!("Source: {}\n", result.reputation.provenance));
    render_failures(&mut out, &result.reputation.failures);
    if result.reputation.metrics.is_empty() {
        out.push_str("No data available.\n");
    } else {
        for (name, value) in &result.reputation.metrics {
            out.push_str(&format!("  {:<30} {:>8}\n", name, value.to_string()));
        }
    }
    let keywords = result.reputation.ranked_keywords();
    if !keywords.is_empty() {
        out.push_str("\nCulture keywords:\n");
        for (term, count) in keywords {
            out.push_str(&format!("  {:<30} {:>8}\n", term, count));
        }
    }

    out
}

pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

fn verdict_line(verdict: Option<&SentimentVerdict>) -> String {
    match verdict {
        Some(v) => format!("{} ({:+.3})", v.label, v.score),
        None => "No data available".to_string(),
    }
}

/// Names of the sections whose data was fabricated, in report order.
fn synthetic_sections(result: &AnalysisResult) -> Vec<&'static str> {
    [
        ("news", result.news.provenance),
        ("culture", result.culture.provenance),
        ("reputation", result.reputation.provenance),
    ]
    .into_iter()
    .filter(|(_, provenance)| *provenance == Provenance::Synthetic)
    .map(|(name, _)| name)
    .collect()
}

fn render_failures(out: &mut String, failures: &[String]) {
    for failure in failures {
        out.push_str(&format!("  (skipped {})\n", failure));
    }
}

fn render_text_section(out: &mut String, heading: &str, section: &TextSection) {
    out.push_str(&format!("## {}\n", heading));
    out.push_str(&format!("Source: {}\n", section.provenance));
    render_failures(out, &section.failures);
    out.push_str(&format!("Sentiment: {}\n", verdict_line(section.sentiment.as_ref())));
    if !section.keywords.is_empty() {
        let terms: Vec<String> = section
            .keywords
            .iter()
            .map(|(term, count)| format!("{} ({})", term, count))
            .collect();
        for line in textwrap::wrap(&format!("Top terms: {}", terms.join(", ")), WRAP_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }
    }
}

fn render_news_items(out: &mut String, section: &TextSection) {
    let items: Vec<_> = section
        .fragments
        .iter()
        .filter_map(|f| match f {
            Fragment::News(item) => Some(item),
            _ => None,
        })
        .collect();
    if items.is_empty() {
        out.push('\n');
        return;
    }

    out.push_str("\nArticles:\n");
    for item in items {
        let mut line = format!("- {}", item.title);
        if !item.source.is_empty() {
            line.push_str(&format!(" [{}]", item.source));
        }
        if !item.published_at.is_empty() {
            line.push_str(&format!(" {}", item.published_at));
        }
        push_wrapped(out, &line, "  ");
        if !item.link.is_empty() {
            out.push_str(&format!("  {}\n", item.link));
        }
    }
    out.push('\n');
}

fn render_snippets(out: &mut String, section: &TextSection) {
    let snippets: Vec<&str> = section
        .fragments
        .iter()
        .filter_map(|f| match f {
            Fragment::Snippet { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    if !snippets.is_empty() {
        out.push_str("\nExcerpts:\n");
        for snippet in snippets {
            push_wrapped(out, &format!("- {}", snippet), "  ");
        }
    }
    out.push('\n');
}

fn push_wrapped(out: &mut String, text: &str, indent: &str) {
    let options = textwrap::Options::new(WRAP_WIDTH).subsequent_indent(indent);
    for line in textwrap::wrap(text, options) {
        out.push_str(&line);
        out.push('\n');
    }
}
