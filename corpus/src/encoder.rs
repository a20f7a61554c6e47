use crate::tokenizer::tokenize;
use crate::vocab::Vocabulary;
use crate::TermId;

/// Flattened id sequences plus per-document boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDocs {
    pub flat_docs: Vec<TermId>,
    pub doc_offsets: Vec<usize>,
}

/// Encode documents, in order, against `vocab`.
///
/// Each document is tokenized in sequence mode and mapped through the vocabulary;
/// unknown tokens are dropped. `doc_offsets` gets the running length after every
/// document, so an empty document shows up as a zero-width slice.
pub fn encode_documents<I, S>(texts: I, vocab: &Vocabulary) -> EncodedDocs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let texts = texts.into_iter();
    let mut doc_offsets = Vec::with_capacity(texts.size_hint().0 + 1);
    doc_offsets.push(0);
    let mut flat_docs = Vec::new();

    for text in texts {
        let tokens = tokenize(text.as_ref());
        flat_docs.extend(vocab.encode(&tokens));
        doc_offsets.push(flat_docs.len());
    }

    EncodedDocs { flat_docs, doc_offsets }
}
