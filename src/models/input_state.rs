use super::constants::MAX_INPUT_DIGITS;

/// Mode of the command panel below the sector map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Normal,
    Weapons,
    WeaponsPhasers,
    WeaponsTorpedoes,
    Shields,
    NavigationX,
    NavigationY,
    Sensors,
    Computer,
}

impl InputState {
    /// Leaf states route keys to the numeric buffer instead of mode dispatch.
    pub fn awaits_numeric_input(&self) -> bool {
        !matches!(
            self,
            InputState::Normal
                | InputState::Weapons
                | InputState::NavigationX
                | InputState::NavigationY
        )
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            InputState::Normal => {
                "(N)avigation   (W)eapons   (S)hields  (L)ong-Range Sensors  Ship's (C)omputer"
            }
            InputState::Shields => "Set energy for shields: ",
            InputState::Weapons => "(P)hasers or Photon (T)orpedoes",
            InputState::WeaponsPhasers => "Phaser energy: ",
            InputState::WeaponsTorpedoes => "Direction: ",
            InputState::NavigationX => "Destination Quadrant X:",
            InputState::NavigationY => "Destination Quadrant Y:",
            InputState::Sensors | InputState::Computer => "",
        }
    }
}

/// Per-quadrant command panel: current mode plus partially typed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPanel {
    state: InputState,
    buffer: String,
    destination_x: Option<i32>,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn awaiting_input(&self) -> bool {
        self.state.awaits_numeric_input()
    }

    /// Switch mode. The numeric buffer always starts empty.
    pub fn set_state(&mut self, state: InputState) {
        self.state = state;
        self.buffer.clear();
        if state == InputState::Normal {
            self.destination_x = None;
        }
    }

    /// Append a digit. Non-digits and input past the length limit are ignored.
    pub fn push_digit(&mut self, c: char) -> bool {
        if c.is_ascii_digit() && self.buffer.len() < MAX_INPUT_DIGITS {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Parsed buffer contents, or None when nothing has been typed.
    pub fn value(&self) -> Option<i32> {
        self.buffer.parse().ok()
    }

    pub fn destination_x(&self) -> Option<i32> {
        self.destination_x
    }

    pub fn set_destination_x(&mut self, x: i32) {
        self.destination_x = Some(x);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
