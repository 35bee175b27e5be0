//! Pattern: Iterator
//! Example: Explicit cursor traversal with has_next/next
//!
//! Run with: cargo run --example iterator

use behavioral_patterns::SequenceIterator;

fn main() {
    println!("=== Cursor Traversal ===\n");

    let mut iterator = SequenceIterator::new(vec![1, 2, 3, 4, 5]);
    while iterator.has_next() {
        if let Some(element) = iterator.next() {
            println!("Element: {element}");
        }
    }

    println!("\n=== Past the End ===");
    println!("has_next: {}", iterator.has_next());
    println!("next:     {:?}", iterator.next());
    println!("(exhaustion yields None, never a panic)");

    println!("\n=== Tracking Progress ===");
    let mut words = SequenceIterator::new(vec!["alpha", "beta", "gamma"]);
    println!("len: {}, remaining: {}", words.len(), words.remaining());
    words.next();
    println!("after one step, remaining: {}", words.remaining());

    println!("\n=== Bridging Into for Loops ===");
    // IntoIterator hands over the unvisited tail, so the explicit
    // cursor composes with std adapters.
    for word in words {
        println!("for-loop saw: {word}");
    }

    let doubled: Vec<i32> = SequenceIterator::new(vec![10, 20, 30])
        .into_iter()
        .map(|n| n * 2)
        .collect();
    println!("doubled via map: {doubled:?}");

    println!("\n=== Key Points ===");
    println!("1. has_next() is a pure query; next() advances the cursor");
    println!("2. Traversal order is exactly the input order");
    println!("3. Single-pass: there is no reset");
    println!("4. IntoIterator bridges into the std iterator ecosystem");
}
