use crate::{CreateError, Excluded, Name, ReadError};

pub trait SessionService {
    fn get_session(&self) -> Result<Session, ReadError>;
    fn set_session(&self, session: Session) -> Result<(), CreateError>;
}

pub trait SessionRepository {
    fn read_session(&self) -> Result<Session, ReadError>;
    fn write_session(&self, session: &Session) -> Result<(), CreateError>;
}

/// State carried from one user action to the next.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    /// Exercises offered for logging, as computed by the last pending request.
    pub pending: Vec<Name>,
    /// Exercises assigned in the current plan distribution cycle.
    pub excluded: Excluded,
}

impl Session {
    /// Removes a logged exercise from the offered exercises.
    pub fn complete(&mut self, exercise: &Name) {
        if let Some(idx) = self.pending.iter().position(|e| e == exercise) {
            self.pending.remove(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_session_complete() {
        let mut session = Session {
            pending: vec![
                Name::new("Squat").unwrap(),
                Name::new("Lunge").unwrap(),
                Name::new("Squat").unwrap(),
            ],
            excluded: Excluded::new(),
        };
        session.complete(&Name::new("Squat").unwrap());
        assert_eq!(
            session.pending,
            vec![Name::new("Lunge").unwrap(), Name::new("Squat").unwrap()]
        );
        session.complete(&Name::new("Row").unwrap());
        assert_eq!(session.pending.len(), 2);
    }
}
