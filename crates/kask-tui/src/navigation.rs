//! Current-selection state for the dashboard.
//!
//! [`Navigator`] holds one index into the ordered list of active kegs and
//! moves it circularly.

/// Circular cursor over a non-empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    /// Create a navigator positioned on the first entry.
    ///
    /// Returns `None` for an empty list, which has nothing to select.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    /// Index of the selected entry.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of entries being navigated.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a navigator is never built over an empty list.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Move to the next entry, wrapping to the first.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Move to the previous entry, wrapping to the last.
    pub fn retreat(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_navigator() {
        assert!(Navigator::new(0).is_none());
    }

    #[test]
    fn test_starts_at_zero() {
        let nav = Navigator::new(3).unwrap();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.len(), 3);
    }

    #[test]
    fn test_advance_wraps() {
        let mut nav = Navigator::new(3).unwrap();
        assert_eq!(nav.advance(), 1);
        assert_eq!(nav.advance(), 2);
        assert_eq!(nav.advance(), 0);
    }

    #[test]
    fn test_retreat_wraps() {
        let mut nav = Navigator::new(3).unwrap();
        assert_eq!(nav.retreat(), 2);
        assert_eq!(nav.retreat(), 1);
    }

    #[test]
    fn test_advancing_len_times_is_identity() {
        for len in 1..=12 {
            for start in 0..len {
                let mut nav = Navigator::new(len).unwrap();
                for _ in 0..start {
                    nav.advance();
                }
                for _ in 0..len {
                    nav.advance();
                }
                assert_eq!(nav.current(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_retreat_undoes_advance() {
        for len in 1..=12 {
            let mut nav = Navigator::new(len).unwrap();
            for i in 0..len {
                assert_eq!(nav.current(), i);
                nav.advance();
                nav.retreat();
                assert_eq!(nav.current(), i, "len={len}");
                nav.advance();
            }
        }
    }

    #[test]
    fn test_single_entry_stays_put() {
        let mut nav = Navigator::new(1).unwrap();
        assert_eq!(nav.advance(), 0);
        assert_eq!(nav.retreat(), 0);
    }
}
