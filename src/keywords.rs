use std::collections::HashMap;

const MIN_TERM_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "around",
    "because", "been", "before", "being", "below", "between", "both", "but", "can", "could",
    "did", "does", "doing", "down", "during", "each", "else", "ever", "few", "for", "from",
    "further", "had", "has", "have", "having", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "into", "its", "itself", "just", "like", "more", "most",
    "much", "must", "nor", "not", "now", "off", "once", "only", "other", "otherwise", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "said", "same", "says", "shall", "she",
    "should", "since", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "too", "under",
    "until", "very", "was", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "within", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

fn is_stopword(term: &str) -> bool {
    STOPWORDS.contains(&term)
}

/// Lower-cased alphabetic runs of at least three characters, stopwords removed.
fn tokenize(corpus: &str) -> impl Iterator<Item = String> + '_ {
    corpus
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| t.chars().count() >= MIN_TERM_LEN)
        .map(|t| t.to_lowercase())
        .filter(|t| !is_stopword(t))
}

/// Every distinct term with its count, most frequent first. Ties keep the
/// order in which the terms first appeared.
pub fn term_frequencies(corpus: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for term in tokenize(corpus) {
        match index.get(&term) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(term.clone(), counts.len());
                counts.push((term, 1));
            }
        }
    }

    // stable: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `top_n` most frequent terms with their counts, in ranking order.
pub fn extract(corpus: &str, top_n: usize) -> Vec<(String, usize)> {
    let mut terms = term_frequencies(corpus);
    terms.truncate(top_n);
    terms
}
