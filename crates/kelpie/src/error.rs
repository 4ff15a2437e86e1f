#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pointer event for a node missing from the snapshot: {id}")]
    UnknownNode { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
