pub mod config;
pub mod encoder;
pub mod error;
pub mod hash;
pub mod index;
pub mod pipeline;
pub mod source;
pub mod tokenizer;
pub mod vocab;

pub use config::CorpusOptions;
pub use error::{CorpusError, Result};
pub use hash::hash32;
pub use index::{CorpusData, DocId, TermId};
pub use pipeline::{preprocess_corpus, Pipeline};
pub use source::Document;
pub use vocab::Vocabulary;
