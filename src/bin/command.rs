// Command pattern: a remote control holds one action at a time and can
// replay it or apply its inverse, without knowing what the action does.

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Command interface and receiver
// =============================================================================

pub trait Command {
    fn execute(&self);
    /// Must be the logical inverse of `execute`, so that execute-then-undo
    /// restores the receiver to its prior state.
    fn undo(&self);
}

/// The receiver: a two-state device mutated by commands.
pub struct Light {
    on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn turn_on(&mut self) {
        self.on = true;
        println!("Light is ON");
    }

    pub fn turn_off(&mut self) {
        self.on = false;
        println!("Light is OFF");
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

// =============================================================================
// Concrete commands
// =============================================================================

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.borrow_mut().turn_on();
    }

    fn undo(&self) {
        self.light.borrow_mut().turn_off();
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.borrow_mut().turn_off();
    }

    fn undo(&self) {
        self.light.borrow_mut().turn_on();
    }
}

// =============================================================================
// Invoker
// =============================================================================

/// Holds at most one command. There is no history stack: undo reverts the
/// currently assigned command only.
pub struct RemoteControl {
    command: Option<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self { command: None }
    }

    /// Replaces the held command. The previous one is released, not executed.
    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.command = Some(command);
    }

    /// No-op when no command is assigned.
    pub fn press_button(&self) {
        if let Some(command) = &self.command {
            command.execute();
        }
    }

    /// No-op when no command is assigned.
    pub fn press_undo(&self) {
        if let Some(command) = &self.command {
            command.undo();
        }
    }
}

fn main() {
    let living_room_light = Rc::new(RefCell::new(Light::new()));

    let light_on = Rc::new(LightOnCommand::new(living_room_light.clone()));
    let light_off = Rc::new(LightOffCommand::new(living_room_light.clone()));

    let mut remote = RemoteControl::new();

    remote.set_command(light_on);
    remote.press_button(); // Light is ON
    remote.press_undo(); // Light is OFF

    remote.set_command(light_off);
    remote.press_button(); // Light is OFF
    remote.press_undo(); // Light is ON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_then_undo_round_trips() {
        let light = Rc::new(RefCell::new(Light::new()));
        let mut remote = RemoteControl::new();
        remote.set_command(Rc::new(LightOnCommand::new(light.clone())));

        assert!(!light.borrow().is_on());
        remote.press_button();
        assert!(light.borrow().is_on());
        remote.press_undo();
        assert!(!light.borrow().is_on());
    }

    #[test]
    fn test_empty_invoker_is_noop() {
        let light = Rc::new(RefCell::new(Light::new()));
        let remote = RemoteControl::new();

        remote.press_button();
        remote.press_undo();

        assert!(!light.borrow().is_on());
    }

    #[test]
    fn test_repeated_execute_is_idempotent() {
        let light = Rc::new(RefCell::new(Light::new()));
        let mut remote = RemoteControl::new();
        remote.set_command(Rc::new(LightOnCommand::new(light.clone())));

        remote.press_button();
        remote.press_button();
        assert!(light.borrow().is_on());
    }

    #[test]
    fn test_set_command_replaces_without_executing() {
        let light = Rc::new(RefCell::new(Light::new()));
        let mut remote = RemoteControl::new();

        remote.set_command(Rc::new(LightOnCommand::new(light.clone())));
        remote.set_command(Rc::new(LightOffCommand::new(light.clone())));
        assert!(!light.borrow().is_on());

        // Undo now belongs to the replacement command.
        remote.press_undo();
        assert!(light.borrow().is_on());
    }
}
