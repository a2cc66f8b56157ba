use tracing::warn;

/// Identifies one fetch. Only the most recently issued ticket may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Remote value with loading/error state and a last-request-wins guard
#[derive(Debug, Clone, PartialEq)]
pub struct LatestResource<T> {
    latest: u64,
    loading: bool,
    value: Option<T>,
    error: Option<String>,
    /// Version passed to the last `begin_for`
    requested: Option<u64>,
}

impl<T> Default for LatestResource<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            loading: false,
            value: None,
            error: None,
            requested: None,
        }
    }
}

impl<T> LatestResource<T> {
    /// Start a fetch, superseding anything still in flight
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestId(self.latest)
    }

    /// Start a fetch for `version` unless one was already started for it
    pub fn begin_for(&mut self, version: u64) -> Option<RequestId> {
        if self.requested == Some(version) {
            return None;
        }
        self.requested = Some(version);
        Some(self.begin())
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Apply a finished fetch. Returns false when the result was stale and dropped.
    pub fn complete<E: std::fmt::Display>(&mut self, id: RequestId, result: Result<T, E>) -> bool {
        if !self.is_current(id) {
            warn!(
                "Discarding stale response #{} (latest is #{})",
                id.0, self.latest
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(e) => {
                self.value = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut resource = LatestResource::<&str>::default();
        let first = resource.begin();
        let second = resource.begin();

        assert!(resource.complete::<String>(second, Ok("second")));
        assert!(!resource.complete::<String>(first, Ok("first")));
        assert_eq!(resource.value(), Some(&"second"));
        assert!(!resource.is_loading());
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut resource = LatestResource::<u32>::default();
        let first = resource.begin();
        let _second = resource.begin();

        assert!(!resource.complete::<String>(first, Ok(1)));
        assert!(resource.is_loading());
        assert_eq!(resource.value(), None);
    }

    #[test]
    fn test_error_clears_value() {
        let mut resource = LatestResource::<u32>::default();
        let id = resource.begin();
        resource.complete::<String>(id, Ok(5));

        let id = resource.begin();
        resource.complete(id, Err("boom"));
        assert_eq!(resource.value(), None);
        assert_eq!(resource.error(), Some("boom"));

        let id = resource.begin();
        assert_eq!(resource.error(), None);
        resource.complete::<String>(id, Ok(6));
        assert_eq!(resource.value(), Some(&6));
    }

    #[test]
    fn test_begin_for_starts_once_per_version() {
        let mut resource = LatestResource::<u32>::default();
        let first = resource.begin_for(0).unwrap();
        assert_eq!(resource.begin_for(0), None);
        assert!(resource.is_current(first));

        let second = resource.begin_for(1).unwrap();
        assert!(!resource.is_current(first));
        assert!(resource.complete::<String>(second, Ok(3)));
        assert_eq!(resource.begin_for(1), None);
    }
}
