//! Pattern: Strategy
//! Example: Swapping an algorithm at runtime
//!
//! Run with: cargo run --example strategy

use behavioral_patterns::strategy::{ConcreteStrategyA, ConcreteStrategyB, Context, Strategy};

struct ShoutingStrategy {
    message: &'static str,
}

impl Strategy for ShoutingStrategy {
    fn execute(&self) {
        println!("{}!", self.message.to_uppercase());
    }
}

fn main() {
    println!("=== Initial Strategy ===\n");

    // The context is constructed with a strategy; the slot is never
    // empty.
    let mut context = Context::new(Box::new(ConcreteStrategyA));
    context.execute_strategy();

    println!("\n=== Swapping Strategies ===");
    context.set_strategy(Box::new(ConcreteStrategyB));
    context.execute_strategy();

    // Any type implementing the trait slots in, including ones the
    // context has never heard of.
    context.set_strategy(Box::new(ShoutingStrategy {
        message: "custom strategies work too",
    }));
    context.execute_strategy();

    println!("\n=== Swapping Back ===");
    context.set_strategy(Box::new(ConcreteStrategyA));
    context.execute_strategy();

    println!("\n=== Key Points ===");
    println!("1. execute_strategy() is pure delegation");
    println!("2. Swapping the strategy is the only way to change behavior");
    println!("3. The context never inspects the strategy it holds");
}
