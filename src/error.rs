use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitcalError>;

#[derive(Error, Debug)]
pub enum GitcalError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Home directory could not be resolved")]
    NoHomeDir,
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for GitcalError {
    fn from(err: gix::open::Error) -> Self {
        GitcalError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitcalError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitcalError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitcalError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitcalError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GitcalError {
    fn from(err: gix::object::commit::Error) -> Self {
        GitcalError::Commit(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitcalError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitcalError::ObjectFind(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitcalError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitcalError::ObjectDecode(Box::new(err))
    }
}
