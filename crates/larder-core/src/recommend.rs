use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recipe_id: String,
    pub title: String,
    pub score: f64,
}

/// Ranks recipes by TF-IDF cosine similarity between a pantry and each
/// recipe's ingredient list.
pub struct Recommender {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// L2-normalized sparse vectors, one per recipe, sorted by term index.
    vectors: Vec<Vec<(usize, f64)>>,
    entries: Vec<(String, String)>,
}

/// Lowercased runs of two or more alphanumeric or underscore characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

fn term_counts(tokens: &[String], vocabulary: &HashMap<String, usize>) -> HashMap<usize, f64> {
    let mut counts = HashMap::new();
    for token in tokens {
        if let Some(&idx) = vocabulary.get(token) {
            *counts.entry(idx).or_insert(0.0) += 1.0;
        }
    }
    counts
}

fn weigh_and_normalize(counts: HashMap<usize, f64>, idf: &[f64]) -> Vec<(usize, f64)> {
    let mut weighted: Vec<(usize, f64)> = counts
        .into_iter()
        .map(|(idx, tf)| (idx, tf * idf[idx]))
        .collect();
    let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in weighted.iter_mut() {
            *w /= norm;
        }
    }
    weighted.sort_by_key(|(idx, _)| *idx);
    weighted
}

impl Recommender {
    pub fn fit(recipes: &[Recipe]) -> Self {
        let docs: Vec<Vec<String>> = recipes
            .iter()
            .map(|r| tokenize(&r.ingredients.join(" ")))
            .collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for tokens in &docs {
            let mut seen: Vec<usize> = Vec::new();
            for token in tokens {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(token.clone()).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen.contains(&idx) {
                    seen.push(idx);
                    doc_freq[idx] += 1;
                }
            }
        }

        // Smoothed idf: as if one extra document contained every term once.
        let n = docs.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = docs
            .iter()
            .map(|tokens| weigh_and_normalize(term_counts(tokens, &vocabulary), &idf))
            .collect();

        let entries = recipes
            .iter()
            .map(|r| (r.id.clone(), r.title.clone()))
            .collect();

        Self {
            vocabulary,
            idf,
            vectors,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cosine similarity of the pantry against every recipe, in catalog order.
    pub fn scores<S: AsRef<str>>(&self, pantry: &[S]) -> Vec<f64> {
        let joined = pantry
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let query: HashMap<usize, f64> =
            weigh_and_normalize(term_counts(&tokenize(&joined), &self.vocabulary), &self.idf)
                .into_iter()
                .collect();

        self.vectors
            .iter()
            .map(|doc| {
                doc.iter()
                    .filter_map(|(idx, w)| query.get(idx).map(|q| q * w))
                    .sum::<f64>()
            })
            .collect()
    }

    /// The `top_n` best matches, highest score first; ties keep catalog order.
    pub fn recommend<S: AsRef<str>>(&self, pantry: &[S], top_n: usize) -> Vec<Recommendation> {
        let mut ranked: Vec<(usize, f64)> = self.scores(pantry).into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(top_n)
            .map(|(idx, score)| {
                let (id, title) = &self.entries[idx];
                Recommendation {
                    recipe_id: id.clone(),
                    title: title.clone(),
                    score,
                }
            })
            .collect()
    }
}
