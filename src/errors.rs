use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("no node with the requested value exists in this subtree")]
    NodeNotFound,

    #[error("child index {index} is out of range for {len} direct children")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
