use crate::tokenizer::tokenize_set;
use crate::TermId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Dense bijection between terms and ids in `[0, len)`.
///
/// Ids follow the lexicographic (byte) order of the terms, so two builds over the
/// same documents always agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    term_to_id: HashMap<String, TermId>,
    id_to_term: Vec<String>,
}

impl Vocabulary {
    /// Build from raw document texts by unioning their term sets.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_term_sets(texts.into_iter().map(|t| tokenize_set(t.as_ref())))
    }

    /// Build from already tokenized term sets.
    ///
    /// Ids are `u32`; terms past `u32::MAX + 1` distinct entries are not given an id
    /// and are left out of the vocabulary.
    pub fn from_term_sets<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = HashSet<String>>,
    {
        let mut unique: BTreeSet<String> = BTreeSet::new();
        for set in sets {
            unique.extend(set);
        }

        Self::from_sorted_terms(unique.into_iter())
    }

    fn from_sorted_terms(terms: impl Iterator<Item = String>) -> Self {
        let mut term_to_id = HashMap::new();
        let mut id_to_term = Vec::new();
        for (index, term) in terms.enumerate() {
            let Ok(id) = TermId::try_from(index) else {
                tracing::warn!(dropped_from = index, "vocabulary exceeds the term id range");
                break;
            };
            term_to_id.insert(term.clone(), id);
            id_to_term.push(term);
        }
        Self { term_to_id, id_to_term }
    }

    pub fn len(&self) -> usize { self.id_to_term.len() }

    pub fn is_empty(&self) -> bool { self.id_to_term.is_empty() }

    pub fn id(&self, term: &str) -> Option<TermId> { self.term_to_id.get(term).copied() }

    pub fn term(&self, id: TermId) -> Option<&str> { self.id_to_term.get(id as usize).map(String::as_str) }

    pub fn contains(&self, term: &str) -> bool { self.term_to_id.contains_key(term) }

    /// Terms with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> {
        self.id_to_term.iter().enumerate().map(|(id, t)| (id as TermId, t.as_str()))
    }

    /// Map tokens to ids. Tokens outside the vocabulary are dropped, not reported.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TermId> {
        tokens.iter().filter_map(|t| self.id(t.as_ref())).collect()
    }

    pub fn into_parts(self) -> (HashMap<String, TermId>, Vec<String>) {
        (self.term_to_id, self.id_to_term)
    }
}
