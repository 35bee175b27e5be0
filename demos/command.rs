//! Pattern: Command
//! Example: Decoupling a trigger from the action it fires
//!
//! Run with: cargo run --example command

use behavioral_patterns::command::{Command, ConcreteCommand, Invoker, Receiver};
use std::rc::Rc;

struct AnnouncingCommand {
    what: &'static str,
}

impl Command for AnnouncingCommand {
    fn execute(&self) {
        println!("Announcing: {}", self.what);
    }
}

fn main() {
    println!("=== Empty Invoker ===\n");

    let mut invoker = Invoker::new();
    println!("has_command: {}", invoker.has_command());
    // No command set: triggering is a defined no-op, not an error.
    invoker.execute_command();
    println!("(no output above — execute_command was a no-op)");

    println!("\n=== Receiver Bound Into a Command ===");
    let receiver = Receiver;
    let command = ConcreteCommand::new(receiver);
    invoker.set_command(Rc::new(command));
    println!("has_command: {}", invoker.has_command());
    invoker.execute_command();

    println!("\n=== Replacing the Command ===");
    invoker.set_command(Rc::new(AnnouncingCommand {
        what: "the old command is gone",
    }));
    invoker.execute_command();

    println!("\n=== Key Points ===");
    println!("1. The invoker knows nothing about the receiver");
    println!("2. Triggering with no command set is a safe no-op");
    println!("3. set_command overwrites the previous command");
}
