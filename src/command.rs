use std::rc::Rc;

// =============================================================================
// Command pattern: an action and its receiver, boxed up as an object
// =============================================================================

/// A unit of work the [`Invoker`] can trigger without knowing what it
/// does or who carries it out.
pub trait Command {
    fn execute(&self);
}

/// Performs the actual effect. Stateless and idempotent.
pub struct Receiver;

impl Receiver {
    pub fn perform_action(&self) {
        println!("Action performed");
    }
}

/// Binds one [`Receiver`] at construction and forwards to it
/// unconditionally.
pub struct ConcreteCommand {
    receiver: Receiver,
}

impl ConcreteCommand {
    pub fn new(receiver: Receiver) -> Self {
        ConcreteCommand { receiver }
    }
}

impl Command for ConcreteCommand {
    fn execute(&self) {
        self.receiver.perform_action();
    }
}

/// Triggers the currently stored command, if any. The invoker knows
/// nothing about the receiver behind the command.
pub struct Invoker {
    command: Option<Rc<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Invoker { command: None }
    }

    /// Stores `command`, overwriting any previous one.
    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.command = Some(command);
    }

    /// Executes the stored command. With no command set this is a
    /// silent no-op, not an error.
    pub fn execute_command(&self) {
        if let Some(command) = &self.command {
            command.execute();
        }
    }

    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new()
    }
}
