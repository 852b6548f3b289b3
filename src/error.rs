use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Branch '{0}' not found")]
    BranchNotFound(String),
    #[error("Invalid week format: {0}. Must be YY.WW (example: 23.05).")]
    InvalidWeekCode(String),
    #[error("{0}")]
    Config(String),
    #[error("Rendering error: {0}")]
    Render(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("History walk error: {0}")]
    Walk(#[from] Box<gix::revision::walk::Error>),
    #[error("History walk error: {0}")]
    WalkStep(#[from] Box<gix::revision::walk::iter::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for PlotError {
    fn from(err: gix::open::Error) -> Self {
        PlotError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for PlotError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        PlotError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for PlotError {
    fn from(err: gix::object::commit::Error) -> Self {
        PlotError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for PlotError {
    fn from(err: gix::objs::decode::Error) -> Self {
        PlotError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::revision::walk::Error> for PlotError {
    fn from(err: gix::revision::walk::Error) -> Self {
        PlotError::Walk(Box::new(err))
    }
}

impl From<gix::revision::walk::iter::Error> for PlotError {
    fn from(err: gix::revision::walk::iter::Error) -> Self {
        PlotError::WalkStep(Box::new(err))
    }
}
