//! What a startup fetch found at the taproom.

use kask_core::KegOnTap;

/// Result of [`crate::KaskClient::fetch_taproom`].
#[derive(Debug)]
pub enum Taproom {
    /// At least one keg is pouring, in tap order
    Open(Vec<KegOnTap>),
    /// The API lists no taps at all
    NoTaps,
    /// Taps exist but none has an active keg
    NoKegs,
}

impl Taproom {
    /// Message printed instead of starting the dashboard, if any.
    pub fn closed_notice(&self) -> Option<&'static str> {
        match self {
            Taproom::Open(_) => None,
            Taproom::NoTaps => Some("No Taps! ☹️"),
            Taproom::NoKegs => Some("No Kegs! ☹️"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_notices() {
        assert_eq!(Taproom::NoTaps.closed_notice(), Some("No Taps! ☹️"));
        assert_eq!(Taproom::NoKegs.closed_notice(), Some("No Kegs! ☹️"));
        assert_eq!(Taproom::Open(vec![KegOnTap::default()]).closed_notice(), None);
    }
}
