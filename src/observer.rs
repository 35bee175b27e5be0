use std::rc::Rc;

// =============================================================================
// Observer pattern: one-to-many notification of state changes
// =============================================================================

/// Capability every dependent of a [`Subject`] provides.
pub trait Observer {
    fn update(&self);
}

/// Maintains a list of observers and notifies them on demand.
///
/// The subject holds shared handles; observer lifetimes are managed by
/// whoever created them. Removal is by identity (same allocation), not
/// by value.
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Subject {
            observers: Vec::new(),
        }
    }

    /// Appends without a duplicate check: registering the same handle
    /// twice yields two notifications per broadcast.
    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Drops every entry that shares an allocation with `observer`.
    /// Handles not in the list are left untouched.
    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    /// Calls `update()` on each registered observer, in registration
    /// order. A no-op on an empty list.
    pub fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update();
        }
    }

    /// Stand-in for the subject's real state-changing work. Always
    /// concludes by notifying, so observers see every state change.
    pub fn do_something(&self) {
        // ... state change happens here ...
        self.notify_observers();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

/// Textbook observer: announces each notification on stdout.
pub struct ConcreteObserver;

impl Observer for ConcreteObserver {
    fn update(&self) {
        println!("Observer notified");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingObserver {
        label: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for RecordingObserver {
        fn update(&self) {
            self.log.borrow_mut().push(self.label);
        }
    }

    fn recording(
        label: &'static str,
        log: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Rc<dyn Observer> {
        Rc::new(RecordingObserver {
            label,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.add_observer(recording("first", &log));
        subject.add_observer(recording("second", &log));
        subject.add_observer(recording("third", &log));

        subject.notify_observers();
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_each_observer_notified_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.add_observer(recording("a", &log));
        subject.add_observer(recording("b", &log));

        subject.notify_observers();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_removed_observer_not_notified() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        let kept = recording("kept", &log);
        let dropped = recording("dropped", &log);
        subject.add_observer(Rc::clone(&kept));
        subject.add_observer(Rc::clone(&dropped));

        subject.remove_observer(&dropped);
        subject.notify_observers();
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_remove_unknown_observer_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.add_observer(recording("a", &log));
        assert_eq!(subject.observer_count(), 1);

        let stranger = recording("stranger", &log);
        subject.remove_observer(&stranger);
        assert_eq!(subject.observer_count(), 1);

        subject.notify_observers();
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn test_remove_drops_all_duplicate_registrations() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        let twice = recording("twice", &log);
        subject.add_observer(Rc::clone(&twice));
        subject.add_observer(recording("once", &log));
        subject.add_observer(Rc::clone(&twice));
        assert_eq!(subject.observer_count(), 3);

        subject.remove_observer(&twice);
        assert_eq!(subject.observer_count(), 1);

        subject.notify_observers();
        assert_eq!(*log.borrow(), vec!["once"]);
    }

    #[test]
    fn test_notify_empty_list_is_noop() {
        let subject = Subject::new();
        subject.notify_observers();
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_do_something_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.add_observer(recording("watcher", &log));

        subject.do_something();
        assert_eq!(*log.borrow(), vec!["watcher"]);
    }
}
