//! Room Lifecycle Module
//!
//! A small four-state lifecycle for one escape room: it accumulates the
//! play-session timer and drives the exit door's visibility. The host owns
//! the door object and the state transitions; this module only holds the
//! clock and translates the state into door visibility each tick.

/// Lifecycle of one room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomState {
    /// Players have not started yet; nothing advances.
    #[default]
    Waiting,
    /// The session is live; the timer runs.
    Playing,
    /// The puzzle is solved; the exit door opens (hidden).
    Complete,
    /// The room is shut; the exit door is shown.
    Closed,
}

/// Host-side control over the exit door's visibility.
pub trait DoorControl {
    fn set_visible(&mut self, visible: bool);
}

/// Room clock and door driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomController {
    state: RoomState,
    time_elapsed: f32,
}

impl RoomController {
    /// A room in [`RoomState::Waiting`] with a zeroed clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RoomState {
        self.state
    }

    /// Host-driven state transition.
    pub fn set_state(&mut self, state: RoomState) {
        self.state = state;
    }

    /// Seconds accumulated while [`RoomState::Playing`].
    pub fn time_elapsed(&self) -> f32 {
        self.time_elapsed
    }

    /// Restart the play clock.
    pub fn reset_clock(&mut self) {
        self.time_elapsed = 0.0;
    }

    /// Advance one frame: run the clock while playing, and push the door
    /// visibility implied by the current state.
    pub fn tick(&mut self, dt: f32, door: &mut dyn DoorControl) {
        match self.state {
            RoomState::Waiting => {}
            RoomState::Playing => self.time_elapsed += dt,
            RoomState::Complete => door.set_visible(false),
            RoomState::Closed => door.set_visible(true),
        }
    }
}
