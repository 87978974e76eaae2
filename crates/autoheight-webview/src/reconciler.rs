//! Reconciles measurement messages into the current height.

use tracing::debug;

use crate::message::MessageEvent;

/// Why a measurement was dropped. Neither case is reported to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("unreadable measurement")]
    Unreadable,
    #[error("redundant measurement")]
    Redundant,
}

/// An accepted height change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightChange {
    pub previous: u32,
    pub current: u32,
}

/// Holds the last accepted height. The only writer is [`accept`].
///
/// [`accept`]: HeightReconciler::accept
#[derive(Debug, Clone)]
pub struct HeightReconciler {
    height: u32,
}

impl HeightReconciler {
    pub fn new(initial: u32) -> Self {
        Self { height: initial }
    }

    /// The last accepted height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Apply a message. The height only changes on `Ok`.
    pub fn accept(&mut self, event: &MessageEvent) -> Result<HeightChange, Rejection> {
        let Some(height) = event.height() else {
            debug!(body_len = event.data.len(), "measurement dropped: unreadable");
            return Err(Rejection::Unreadable);
        };

        if height == self.height {
            return Err(Rejection::Redundant);
        }

        let change = HeightChange {
            previous: self.height,
            current: height,
        };
        self.height = height;
        debug!(previous = change.previous, current = change.current, "height accepted");
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_height() {
        assert_eq!(HeightReconciler::new(100).height(), 100);
    }

    #[test]
    fn accepts_distinct_height() {
        let mut r = HeightReconciler::new(100);
        let change = r.accept(&MessageEvent::new("250")).unwrap();
        assert_eq!(
            change,
            HeightChange {
                previous: 100,
                current: 250
            }
        );
        assert_eq!(r.height(), 250);
    }

    #[test]
    fn equal_height_is_redundant() {
        let mut r = HeightReconciler::new(100);
        assert_eq!(r.accept(&MessageEvent::new("100")), Err(Rejection::Redundant));
        assert_eq!(r.height(), 100);
    }

    #[test]
    fn garbage_is_unreadable() {
        let mut r = HeightReconciler::new(100);
        assert_eq!(r.accept(&MessageEvent::new("abc")), Err(Rejection::Unreadable));
        assert_eq!(r.accept(&MessageEvent::new("-5")), Err(Rejection::Unreadable));
        assert_eq!(r.height(), 100);
    }

    #[test]
    fn same_message_twice_changes_once() {
        let mut r = HeightReconciler::new(100);
        assert!(r.accept(&MessageEvent::new("300")).is_ok());
        assert_eq!(r.accept(&MessageEvent::new("300")), Err(Rejection::Redundant));
        assert_eq!(r.height(), 300);
    }

    #[test]
    fn zero_is_a_valid_height() {
        let mut r = HeightReconciler::new(100);
        assert!(r.accept(&MessageEvent::new("0")).is_ok());
        assert_eq!(r.height(), 0);
    }

    #[test]
    fn rejection_display() {
        assert_eq!(Rejection::Unreadable.to_string(), "unreadable measurement");
        assert_eq!(Rejection::Redundant.to_string(), "redundant measurement");
    }
}
