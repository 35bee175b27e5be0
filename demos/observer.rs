//! Pattern: Observer
//! Example: A subject broadcasting to registered observers
//!
//! Run with: cargo run --example observer

use behavioral_patterns::observer::{ConcreteObserver, Observer, Subject};
use std::rc::Rc;

struct NamedObserver {
    name: &'static str,
}

impl Observer for NamedObserver {
    fn update(&self) {
        println!("{} received an update", self.name);
    }
}

fn main() {
    println!("=== Registering Observers ===\n");

    let alarm: Rc<dyn Observer> = Rc::new(NamedObserver { name: "alarm" });
    let logger: Rc<dyn Observer> = Rc::new(NamedObserver { name: "logger" });
    let generic: Rc<dyn Observer> = Rc::new(ConcreteObserver);

    let mut subject = Subject::new();
    subject.add_observer(Rc::clone(&alarm));
    subject.add_observer(Rc::clone(&logger));
    subject.add_observer(Rc::clone(&generic));
    println!("Registered {} observers", subject.observer_count());

    println!("\n=== State Change Broadcast ===");
    // do_something() always ends by notifying every observer,
    // in registration order.
    subject.do_something();

    println!("\n=== After Removing One Observer ===");
    subject.remove_observer(&logger);
    println!("{} observers remain", subject.observer_count());
    subject.notify_observers();

    println!("\n=== Removing an Unknown Observer ===");
    let stranger: Rc<dyn Observer> = Rc::new(NamedObserver { name: "stranger" });
    subject.remove_observer(&stranger);
    println!(
        "Still {} observers (removal of a non-member is a no-op)",
        subject.observer_count()
    );

    println!("\n=== Key Points ===");
    println!("1. The subject holds shared handles, not owned observers");
    println!("2. Notification order is registration order");
    println!("3. Removal is by identity (same allocation), not by value");
    println!("4. Notifying an empty list is a safe no-op");
}
