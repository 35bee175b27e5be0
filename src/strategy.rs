// =============================================================================
// Strategy pattern: interchangeable algorithms behind one interface
// =============================================================================

/// An algorithm the [`Context`] can delegate to.
pub trait Strategy {
    fn execute(&self);
}

/// Owns exactly one strategy at a time and forwards execution to it.
/// Swapping the strategy is the only way to change its behavior.
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Context { strategy }
    }

    /// Replaces the held strategy; visible on the next
    /// [`execute_strategy`](Context::execute_strategy) call.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    /// Pure delegation, no behavior of its own.
    pub fn execute_strategy(&self) {
        self.strategy.execute();
    }
}

pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn execute(&self) {
        println!("Executing strategy A");
    }
}

pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn execute(&self) {
        println!("Executing strategy B");
    }
}
