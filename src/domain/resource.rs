/// Outcome of a repository call as seen by the screen.
///
/// Failures never travel past the repository as errors; they arrive here as
/// [`Resource::Error`] with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            Resource::Error(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Success(_) => None,
            Resource::Error(message) => Some(message),
        }
    }
}
