/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A store action in textual form, as accepted by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoTo(String),
    Arrive,
    OpenDoors,
    CloseDoors,
    Reset,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionParseError {
    #[error("empty action")]
    Empty,
    #[error("'goto' needs a floor id")]
    MissingFloor,
    #[error("unknown action '{0}'")]
    Unknown(String),
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Accepts `goto:<id>`, `goto <id>`, `arrive`, `open`, `close` and `reset`.
    fn from_str(s: &str) -> Result<Action, ActionParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ActionParseError::Empty);
        }

        let (verb, argument) = match s
            .char_indices()
            .find(|(_, c)| *c == ':' || c.is_whitespace())
        {
            Some((i, c)) => (&s[..i], s[i + c.len_utf8()..].trim()),
            None => (s, ""),
        };

        match verb.to_lowercase().as_str() {
            "goto" => {
                if argument.is_empty() {
                    Err(ActionParseError::MissingFloor)
                } else {
                    Ok(Action::GoTo(argument.to_string()))
                }
            }
            "arrive" if argument.is_empty() => Ok(Action::Arrive),
            "open" if argument.is_empty() => Ok(Action::OpenDoors),
            "close" if argument.is_empty() => Ok(Action::CloseDoors),
            "reset" if argument.is_empty() => Ok(Action::Reset),
            _ => Err(ActionParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::GoTo(floor_id) => write!(f, "goto:{}", floor_id),
            Action::Arrive => write!(f, "arrive"),
            Action::OpenDoors => write!(f, "open"),
            Action::CloseDoors => write!(f, "close"),
            Action::Reset => write!(f, "reset"),
        }
    }
}
