//! Host input mapping
//!
//! The game only understands two signals. Every pointer activation or key
//! press starts a run; the up arrow additionally asks for a jump.

/// A raw event from the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Click or tap anywhere
    PointerActivated,
    /// Key press, carrying the DOM `KeyboardEvent.key` value
    KeyPressed(String),
}

/// What the simulation is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Start,
    /// Also starts the run when idle
    Jump,
}

/// DOM key name that triggers a jump
pub const JUMP_KEY: &str = "ArrowUp";

/// Signal raised by a host event
pub fn signal_for(event: &HostEvent) -> Signal {
    match event {
        HostEvent::KeyPressed(key) if key == JUMP_KEY => Signal::Jump,
        HostEvent::KeyPressed(_) | HostEvent::PointerActivated => Signal::Start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_key_starts() {
        assert_eq!(signal_for(&HostEvent::KeyPressed(" ".into())), Signal::Start);
        assert_eq!(signal_for(&HostEvent::KeyPressed("a".into())), Signal::Start);
        assert_eq!(signal_for(&HostEvent::PointerActivated), Signal::Start);
    }

    #[test]
    fn test_up_arrow_jumps() {
        assert_eq!(signal_for(&HostEvent::KeyPressed("ArrowUp".into())), Signal::Jump);
        assert_eq!(signal_for(&HostEvent::KeyPressed("ArrowDown".into())), Signal::Start);
    }
}
