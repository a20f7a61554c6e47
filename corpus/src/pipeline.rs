use crate::config::CorpusOptions;
use crate::encoder::{encode_documents, EncodedDocs};
use crate::error::Result;
use crate::hash::hash32;
use crate::index::CorpusData;
use crate::source::{load_documents, Document};
use crate::vocab::Vocabulary;
use std::collections::BTreeMap;
use std::path::Path;

/// Folder-to-corpus pipeline. Tokenization, vocabulary building and encoding are
/// shared by both outputs: the flattened corpus and the term embedding listing.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: CorpusOptions,
}

impl Pipeline {
    pub fn new(options: CorpusOptions) -> Self { Self { options } }

    pub fn options(&self) -> &CorpusOptions { &self.options }

    pub fn load(&self, folder: &Path) -> Result<Vec<Document>> {
        load_documents(folder, &self.options)
    }

    /// Read every document under `folder` and build the flattened corpus.
    pub fn build(&self, folder: &Path) -> Result<CorpusData> {
        let docs = self.load(folder)?;
        Ok(Self::assemble(docs))
    }

    /// Deterministic embedding for every term found under `folder`.
    pub fn embeddings(&self, folder: &Path) -> Result<BTreeMap<String, u32>> {
        let docs = self.load(folder)?;
        let vocab = Vocabulary::from_texts(docs.iter().map(|d| d.text.as_str()));
        tracing::info!(num_docs = docs.len(), vocab_size = vocab.len(), "computed term embeddings");
        Ok(vocab.iter().map(|(_, term)| (term.to_string(), hash32(term))).collect())
    }

    /// Build the corpus from documents already in memory.
    pub fn assemble(docs: Vec<Document>) -> CorpusData {
        let vocab = Vocabulary::from_texts(docs.iter().map(|d| d.text.as_str()));
        let EncodedDocs { flat_docs, doc_offsets } = encode_documents(docs.iter().map(|d| d.text.as_str()), &vocab);

        for (doc, w) in docs.iter().zip(doc_offsets.windows(2)) {
            tracing::debug!(path = %doc.path.display(), tokens = w[1] - w[0], "encoded document");
        }

        let num_docs = docs.len();
        let vocab_size = vocab.len();
        let (term_to_id, id_to_term) = vocab.into_parts();
        let sources = docs.into_iter().map(|d| d.path).collect();
        tracing::info!(num_docs, vocab_size, total_tokens = flat_docs.len(), "built corpus");

        CorpusData { flat_docs, doc_offsets, vocab_size, num_docs, term_to_id, id_to_term, sources }
    }
}

/// Build a corpus from the `.txt` files in `folder` with default options.
pub fn preprocess_corpus<P: AsRef<Path>>(folder: P) -> Result<CorpusData> {
    Pipeline::default().build(folder.as_ref())
}
