// Observer pattern: a news agency broadcasts every headline to its
// current subscribers, in the order they signed up.

use std::rc::Rc;

// =============================================================================
// Subject and observer interfaces
// =============================================================================

pub trait Observer {
    fn update(&self, message: &str);
}

/// Maintains an ordered registry of observers and the latest headline.
/// Registration identity is the `Rc` allocation, not the observer's value:
/// attaching the same handle twice means two notifications per headline.
pub struct NewsAgency {
    observers: Vec<Rc<dyn Observer>>,
    latest_news: String,
}

impl NewsAgency {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            latest_news: String::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes every occurrence of `observer` (compared by `Rc::ptr_eq`).
    /// Detaching a handle that was never attached leaves the registry as is.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn set_news(&mut self, news: impl Into<String>) {
        self.latest_news = news.into();
        self.notify();
    }

    /// Synchronous, in attachment order. A panicking observer aborts the
    /// remaining notifications; there is no isolation between observers.
    pub fn notify(&self) {
        for observer in &self.observers {
            observer.update(&self.latest_news);
        }
    }

    pub fn latest_news(&self) -> &str {
        &self.latest_news
    }
}

// =============================================================================
// Concrete observer
// =============================================================================

pub struct Subscriber {
    name: String,
}

impl Subscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for Subscriber {
    fn update(&self, message: &str) {
        println!("{} received update: {}", self.name, message);
    }
}

fn main() {
    let mut agency = NewsAgency::new();

    let alice: Rc<dyn Observer> = Rc::new(Subscriber::new("Alice"));
    let bob: Rc<dyn Observer> = Rc::new(Subscriber::new("Bob"));

    agency.attach(alice.clone());
    agency.attach(bob.clone());

    agency.set_news("Breaking News: Observer Pattern Implemented!");

    agency.detach(&bob);

    agency.set_news("Update: Observer Pattern is Awesome!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        name: &'static str,
        inbox: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn new(name: &'static str) -> Rc<Self> {
            Rc::new(Self {
                name,
                inbox: RefCell::new(Vec::new()),
            })
        }

        fn received(&self) -> Vec<String> {
            self.inbox.borrow().clone()
        }
    }

    impl Observer for Recorder {
        fn update(&self, message: &str) {
            self.inbox
                .borrow_mut()
                .push(format!("{}:{}", self.name, message));
        }
    }

    #[test]
    fn test_notifies_in_attachment_order() {
        let mut agency = NewsAgency::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        struct Tagged {
            tag: &'static str,
            order: Rc<RefCell<Vec<&'static str>>>,
        }
        impl Observer for Tagged {
            fn update(&self, _message: &str) {
                self.order.borrow_mut().push(self.tag);
            }
        }

        agency.attach(Rc::new(Tagged {
            tag: "a",
            order: order.clone(),
        }));
        agency.attach(Rc::new(Tagged {
            tag: "b",
            order: order.clone(),
        }));
        agency.set_news("x");

        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_detached_observer_stops_receiving() {
        let mut agency = NewsAgency::new();
        let alice = Recorder::new("alice");
        let bob = Recorder::new("bob");
        let alice_dyn: Rc<dyn Observer> = alice.clone();
        let bob_dyn: Rc<dyn Observer> = bob.clone();

        agency.attach(alice_dyn);
        agency.attach(bob_dyn.clone());
        agency.set_news("x");
        agency.detach(&bob_dyn);
        agency.set_news("y");

        assert_eq!(alice.received(), vec!["alice:x", "alice:y"]);
        assert_eq!(bob.received(), vec!["bob:x"]);
    }

    #[test]
    fn test_duplicate_attach_delivers_twice() {
        let mut agency = NewsAgency::new();
        let alice = Recorder::new("alice");
        let alice_dyn: Rc<dyn Observer> = alice.clone();

        agency.attach(alice_dyn.clone());
        agency.attach(alice_dyn);
        agency.set_news("z");

        assert_eq!(alice.received(), vec!["alice:z", "alice:z"]);
    }

    #[test]
    fn test_detach_removes_all_occurrences() {
        let mut agency = NewsAgency::new();
        let alice = Recorder::new("alice");
        let alice_dyn: Rc<dyn Observer> = alice.clone();

        agency.attach(alice_dyn.clone());
        agency.attach(alice_dyn.clone());
        agency.detach(&alice_dyn);
        agency.set_news("x");

        assert!(alice.received().is_empty());
    }

    #[test]
    fn test_detach_absent_observer_is_noop() {
        let mut agency = NewsAgency::new();
        let alice = Recorder::new("alice");
        let stranger: Rc<dyn Observer> = Recorder::new("stranger");
        agency.attach(alice.clone());

        agency.detach(&stranger);
        agency.set_news("still here");

        assert_eq!(alice.received(), vec!["alice:still here"]);
        assert_eq!(agency.latest_news(), "still here");
    }

    #[test]
    fn test_distinct_observers_with_equal_state_keep_identity() {
        // Identity is the allocation: two "alice" recorders are two
        // registrations, and detaching one leaves the other in place.
        let mut agency = NewsAgency::new();
        let first = Recorder::new("alice");
        let second = Recorder::new("alice");
        let first_dyn: Rc<dyn Observer> = first.clone();

        agency.attach(first_dyn.clone());
        agency.attach(second.clone());
        agency.detach(&first_dyn);
        agency.set_news("x");

        assert!(first.received().is_empty());
        assert_eq!(second.received(), vec!["alice:x"]);
    }
}
