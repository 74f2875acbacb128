use crate::fetch::FetchError;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Fetch(FetchError),
    Json(serde_json::Error),
    Format(fmt::Error),
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<fmt::Error> for Error {
    fn from(e: fmt::Error) -> Self {
        Self::Format(e)
    }
}

impl Error {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        1
    }

    /// Extra lines shown to the user under the error message.
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Fetch(_) => Some(
                "This might be because:\n  \
                 • The restaurant website has changed\n  \
                 • The menu is not available right now\n  \
                 • There is a problem with your internet connection",
            ),
            Self::Json(_) | Self::Format(_) => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
            Self::Format(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
