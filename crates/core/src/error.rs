/// Errors raised while building the concept index.
///
/// Index construction is the one fallible step in this crate: a corpus
/// defect must fail loudly at load time, never silently during a search.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("duplicate concept: code {code} appears twice in system {system}")]
    DuplicateConcept { system: String, code: String },
}

pub type IndexResult<T> = std::result::Result<T, IndexError>;
