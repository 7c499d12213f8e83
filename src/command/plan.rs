use crate::*;

/// Commands resolved from tokens, ready to run.
///
/// Construction validates every token up front, so an unrecognized token
/// fails before any database work begins. Duplicates are kept and run as
/// many times as they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan(Vec<Command>);

impl<S: AsRef<str>> TryFrom<&[S]> for Plan {
    type Error = Error;
    fn try_from(tokens: &[S]) -> Result<Self, Self::Error> {
        tokens
            .iter()
            .map(|token| Command::try_from(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Plan {
    pub fn commands(&self) -> &[Command] {
        &self.0
    }
    /// Runs each command to completion, left to right.
    /// The first fatal error halts the queue; completed work is not undone.
    pub async fn run<E>(&self, db: &E, resources: &Resources) -> Result<Vec<Outcome>, Error>
    where
        E: Execute,
    {
        let mut outcomes = Vec::new();
        for command in self.0.iter() {
            log::debug!("running {}", command);
            outcomes.extend(command.run(db, resources).await?);
        }
        Ok(outcomes)
    }
}
