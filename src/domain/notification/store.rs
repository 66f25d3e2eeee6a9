use super::types::NotificationId;
use std::collections::HashSet;

/// The set of notification ids currently rendered in the list.
///
/// Invariant: an id is tracked here iff its entry node exists in the list
/// container. Owned by the widget for the page session; cleared at unmount.
#[derive(Debug, Default)]
pub struct DisplayedSet {
    ids: HashSet<NotificationId>,
}

impl DisplayedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.ids.contains(id)
    }

    /// Tracks `id` as displayed. Returns whether it was newly added.
    pub fn track(&mut self, id: NotificationId) -> bool {
        self.ids.insert(id)
    }

    /// Stops tracking `id`. Returns whether it was present.
    pub fn untrack(&mut self, id: &NotificationId) -> bool {
        self.ids.remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_is_idempotent() {
        let mut set = DisplayedSet::new();
        assert!(set.track(NotificationId::from(1)));
        assert!(!set.track(NotificationId::from(1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_untrack_removes() {
        let mut set = DisplayedSet::new();
        set.track(NotificationId::from("a"));
        assert!(set.untrack(&NotificationId::from("a")));
        assert!(!set.untrack(&NotificationId::from("a")));
        assert!(set.is_empty());
    }

    #[test]
    fn test_numeric_and_text_ids_are_distinct() {
        let mut set = DisplayedSet::new();
        set.track(NotificationId::from(1));
        assert!(!set.contains(&NotificationId::from("1")));
    }

    #[test]
    fn test_clear() {
        let mut set = DisplayedSet::new();
        set.track(NotificationId::from(1));
        set.track(NotificationId::from(2));
        set.clear();
        assert!(set.is_empty());
    }
}
