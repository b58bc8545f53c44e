use serde::{Deserialize, Serialize};

/// What a view renders for one fetched resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> FetchState<T> {
    pub fn loading() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }

    pub fn idle() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: Some(error.to_string()),
        }
    }
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::loading()
    }
}
