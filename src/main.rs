//! Combined walk-through of all four patterns.
//!
//! Run with: cargo run

use behavioral_patterns::{
    ConcreteCommand, ConcreteObserver, ConcreteStrategyA, ConcreteStrategyB, Context, Invoker,
    Observer, Receiver, SequenceIterator, Subject,
};
use colored::Colorize;
use std::rc::Rc;

fn main() {
    println!("{}", "=== Observer Pattern ===".bold().cyan());
    let observer: Rc<dyn Observer> = Rc::new(ConcreteObserver);
    let mut subject = Subject::new();
    subject.add_observer(Rc::clone(&observer));
    subject.do_something();

    println!("\n{}", "=== Strategy Pattern ===".bold().cyan());
    let mut context = Context::new(Box::new(ConcreteStrategyA));
    context.execute_strategy();
    context.set_strategy(Box::new(ConcreteStrategyB));
    context.execute_strategy();

    println!("\n{}", "=== Command Pattern ===".bold().cyan());
    let receiver = Receiver;
    let command = ConcreteCommand::new(receiver);
    let mut invoker = Invoker::new();
    invoker.set_command(Rc::new(command));
    invoker.execute_command();

    println!("\n{}", "=== Iterator Pattern ===".bold().cyan());
    let elements = vec![1, 2, 3, 4, 5];
    let mut iterator = SequenceIterator::new(elements);
    while iterator.has_next() {
        if let Some(element) = iterator.next() {
            println!("Element: {element}");
        }
    }
}
