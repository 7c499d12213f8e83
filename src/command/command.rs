use crate::*;

/// A recognized command token.
///
/// Each expands to one action per [`View`], in [`View::all`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create every view.
    Setup,
    /// Drop every view.
    Clean,
}

impl TryFrom<&str> for Command {
    type Error = Error;
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        match token {
            "setup" => Ok(Self::Setup),
            "clean" => Ok(Self::Clean),
            _ => Err(Error::InvalidCommand(token.to_string())),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Clean => write!(f, "clean"),
        }
    }
}

impl Command {
    /// Runs this command over every view, stopping at the first fatal error.
    /// Returns one outcome per view, in [`View::all`] order.
    pub async fn run<E>(&self, db: &E, resources: &Resources) -> Result<Vec<Outcome>, Error>
    where
        E: Execute,
    {
        let mut outcomes = Vec::with_capacity(View::all().len());
        for view in View::all() {
            let outcome = match self {
                Self::Setup => {
                    log::info!("creating {} view", view);
                    let sql = resources.creates(view)?;
                    db.create(&sql).await?
                }
                Self::Clean => {
                    log::info!("ensuring removal of {} view", view);
                    db.delete(resources.drops(view)).await?
                }
            };
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}
