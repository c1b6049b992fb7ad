use thiserror::Error;

/// Faults that end the session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Quadrant {x}, {y} is outside the galaxy")]
    QuadrantOutOfRange { x: i32, y: i32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "Console is only {width} by {height} characters, should be at least {min_width} by {min_height}"
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("Input source disconnected")]
    InputDisconnected,

    /// A refused player command. Logged to the active quadrant, never fatal.
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Conditions the player can recover from. These never abort the turn loop;
/// their text is logged to the active quadrant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Shields must be lowered before navigating")]
    ShieldsRaised,

    #[error("You do not have enough energy for that trip")]
    InsufficientEnergy { required: i32, available: i32 },

    #[error("Torpedo course must be 1-9, excluding 5")]
    InvalidCourse(i32),

    #[error("Not enough photon torpedoes")]
    TorpedoesExpended,

    #[error("Phasers are not operational")]
    PhasersInoperative,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_errors_read_as_log_lines() {
        let err = CommandError::InsufficientEnergy {
            required: 700,
            available: 20,
        };
        assert_eq!(err.to_string(), "You do not have enough energy for that trip");
        assert_eq!(
            CommandError::ShieldsRaised.to_string(),
            "Shields must be lowered before navigating"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn command_errors_wrap_transparently() {
        let err: GameError = CommandError::TorpedoesExpended.into();
        assert_eq!(err.to_string(), "Not enough photon torpedoes");
    }
}
