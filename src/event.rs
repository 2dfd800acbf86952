use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::error::Result;

/// Identifier a host assigns to an attached game controller.
pub type DeviceId = u32;

/// Buttons of a standard game controller layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftShoulder,
    RightShoulder,
}

/// Raw input delivered to the dialog, before it is mapped to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A keyboard event.
    Key(KeyEvent),
    /// A button press on an attached controller.
    Button {
        device: DeviceId,
        button: ControllerButton,
    },
    /// A controller was plugged in.
    DeviceAdded { device: DeviceId, name: String },
    /// A controller was unplugged.
    DeviceRemoved { device: DeviceId },
    /// The drawing surface changed size.
    Resize(u16, u16),
    /// The host application asked to quit.
    Quit,
}

/// A source of raw input for the dialog loop.
pub trait EventSource {
    /// Wait up to `timeout` for the next input. `Ok(None)` means nothing arrived.
    fn poll(&mut self, timeout: Duration) -> Result<Option<RawInput>>;
}

/// Blocking reader over the crossterm terminal event stream.
///
/// Mouse, focus and paste events are skipped.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> Result<Option<RawInput>> {
        loop {
            if !event::poll(timeout)? {
                return Ok(None);
            }
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(Some(RawInput::Key(key))),
                CrosstermEvent::Resize(w, h) => return Ok(Some(RawInput::Resize(w, h))),
                _ => continue,
            }
        }
    }
}

/// In-memory input queue, for embedding hosts that pump their own events
/// and for driving the dialog in tests.
///
/// Once drained the source reports [`RawInput::Quit`], so a loop fed by a
/// closed queue always terminates.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<RawInput>,
}

impl ScriptedEvents {
    pub fn new(inputs: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn push(&mut self, input: RawInput) {
        self.queue.push_back(input);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _timeout: Duration) -> Result<Option<RawInput>> {
        Ok(Some(self.queue.pop_front().unwrap_or(RawInput::Quit)))
    }
}
