use crate::hash::hash32;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

pub type TermId = u32;
pub type DocId = u32;

/// Flattened corpus: every document's term ids back to back, with CSR-style
/// boundaries. Document `i` is `flat_docs[doc_offsets[i]..doc_offsets[i + 1]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusData {
    pub flat_docs: Vec<TermId>,
    /// `num_docs + 1` entries, starting at 0 and ending at `flat_docs.len()`.
    pub doc_offsets: Vec<usize>,
    pub vocab_size: usize,
    pub num_docs: usize,
    pub term_to_id: HashMap<String, TermId>,
    pub id_to_term: Vec<String>,
    /// Source file of each document, in document order.
    pub sources: Vec<PathBuf>,
}

impl CorpusData {
    /// Term ids of one document, or `None` if `doc` is out of range.
    pub fn document(&self, doc: DocId) -> Option<&[TermId]> {
        let i = doc as usize;
        let start = *self.doc_offsets.get(i)?;
        let end = *self.doc_offsets.get(i + 1)?;
        self.flat_docs.get(start..end)
    }

    /// Every document in order. A boundary pair that does not fit `flat_docs` yields an
    /// empty slice, so the count always matches `doc_offsets`.
    pub fn documents(&self) -> impl Iterator<Item = &[TermId]> {
        self.doc_offsets.windows(2).map(|w| self.flat_docs.get(w[0]..w[1]).unwrap_or(&[]))
    }

    pub fn doc_len(&self, doc: DocId) -> Option<usize> {
        self.document(doc).map(<[TermId]>::len)
    }

    pub fn total_tokens(&self) -> usize { self.flat_docs.len() }

    /// Turn one document's ids back into terms.
    pub fn decode(&self, doc: DocId) -> Option<Vec<&str>> {
        let ids = self.document(doc)?;
        ids.iter().map(|&id| self.id_to_term.get(id as usize).map(String::as_str)).collect()
    }

    /// Deterministic embedding of every vocabulary term, keyed by term.
    pub fn term_embeddings(&self) -> BTreeMap<String, u32> {
        self.id_to_term.iter().map(|t| (t.clone(), hash32(t))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> CorpusData {
        CorpusData {
            flat_docs: vec![0, 0, 1, 1],
            doc_offsets: vec![0, 3, 3, 4],
            vocab_size: 2,
            num_docs: 3,
            term_to_id: [("cat".to_string(), 0), ("dog".to_string(), 1)].into_iter().collect(),
            id_to_term: vec!["cat".into(), "dog".into()],
            sources: vec!["a.txt".into(), "b.txt".into(), "c.txt".into()],
        }
    }

    #[test]
    fn slices_documents_by_offset() {
        let c = tiny();
        assert_eq!(c.document(0), Some(&[0, 0, 1][..]));
        assert_eq!(c.document(1), Some(&[][..]));
        assert_eq!(c.document(2), Some(&[1][..]));
        assert_eq!(c.document(3), None);
        assert_eq!(c.doc_len(1), Some(0));
        assert_eq!(c.documents().count(), 3);
        assert_eq!(c.total_tokens(), 4);
    }

    #[test]
    fn malformed_offsets_do_not_panic() {
        let mut c = tiny();
        c.doc_offsets = vec![0, 3, 9, 2];
        let lens: Vec<usize> = c.documents().map(<[TermId]>::len).collect();
        assert_eq!(lens, vec![3, 0, 0]);
        assert_eq!(c.document(1), None);
    }

    #[test]
    fn decode_restores_terms() {
        let c = tiny();
        assert_eq!(c.decode(0), Some(vec!["cat", "cat", "dog"]));
        assert_eq!(c.decode(1), Some(vec![]));
    }

    #[test]
    fn embeddings_cover_vocabulary() {
        let c = tiny();
        let e = c.term_embeddings();
        assert_eq!(e.len(), c.vocab_size);
        assert_eq!(e["cat"], hash32("cat"));
    }
}
