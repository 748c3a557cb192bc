//! Bag-of-words vectorization.
//!
//! Turns cleaned sentences into fixed-length count vectors over a vocabulary
//! fit once at training time. Feature values are raw token counts; there is
//! no TF-IDF weighting. At transform time, tokens outside the vocabulary
//! contribute no features.

use std::collections::{BTreeSet, HashMap};

use ndarray::{Array1, Array2};

/// Vocabulary-based bag-of-words vectorizer.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    /// Word -> feature index.
    vocabulary: HashMap<String, usize>,
    /// Feature index -> word.
    terms: Vec<String>,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the vocabulary over a corpus of cleaned documents.
    ///
    /// Terms are sorted before indices are assigned, so identical corpora
    /// always produce identical feature layouts.
    pub fn fit(&mut self, documents: &[String]) {
        let distinct: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.split_whitespace())
            .collect();

        self.vocabulary.clear();
        self.terms.clear();
        for (idx, term) in distinct.into_iter().enumerate() {
            self.vocabulary.insert(term.to_string(), idx);
            self.terms.push(term.to_string());
        }
    }

    /// Transform one cleaned document into a count vector.
    pub fn transform(&self, document: &str) -> Array1<f64> {
        let mut vector = Array1::zeros(self.terms.len());
        for token in document.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += 1.0;
            }
        }
        vector
    }

    /// Fit on a corpus and transform it into a document-term matrix.
    pub fn fit_transform(&mut self, documents: &[String]) -> Array2<f64> {
        self.fit(documents);

        let mut matrix = Array2::zeros((documents.len(), self.terms.len()));
        for (i, doc) in documents.iter().enumerate() {
            matrix.row_mut(i).assign(&self.transform(doc));
        }
        matrix
    }

    /// Number of vocabulary terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Word -> index mapping.
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }
}
