//! DataState: the per-instance slot of a decorated view

/// Holds the latest fetched result of one mounted view, if any.
///
/// A mounted view starts `Absent` unless a default state seeds it, and moves to
/// `Ready` once a fetch resolves. It never returns to `Absent`: refetches keep
/// the previous result visible until a new one replaces it.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum DataState<R> {
    /// No result yet; the loading view is shown
    #[default]
    Absent,
    /// The latest result, from seeding or from a completed fetch
    Ready(R),
}

impl<R> DataState<R> {
    /// Returns true if no result is available yet
    pub fn is_absent(&self) -> bool {
        matches!(self, DataState::Absent)
    }

    /// Returns true if a result is available
    pub fn is_ready(&self) -> bool {
        matches!(self, DataState::Ready(_))
    }

    /// Returns the result if available, None otherwise
    pub fn data(&self) -> Option<&R> {
        match self {
            DataState::Ready(data) => Some(data),
            DataState::Absent => None,
        }
    }

    /// Consumes the state, returning the result if available
    pub fn into_data(self) -> Option<R> {
        match self {
            DataState::Ready(data) => Some(data),
            DataState::Absent => None,
        }
    }

    /// Maps a DataState<R> to DataState<U> by applying a function to the result if ready.
    pub fn map<U, F>(self, op: F) -> DataState<U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            DataState::Ready(data) => DataState::Ready(op(data)),
            DataState::Absent => DataState::Absent,
        }
    }
}

impl<R> From<Option<R>> for DataState<R> {
    fn from(value: Option<R>) -> Self {
        match value {
            Some(data) => DataState::Ready(data),
            None => DataState::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let state: DataState<u32> = DataState::default();
        assert!(state.is_absent());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(DataState::from(Some(3)), DataState::Ready(3));
        assert_eq!(DataState::<u32>::from(None), DataState::Absent);
    }

    #[test]
    fn test_map_keeps_absent() {
        let ready = DataState::Ready(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(ready.into_data(), Some(3));

        let absent = DataState::<Vec<u32>>::Absent.map(|v| v.len());
        assert!(absent.is_absent());
    }
}
