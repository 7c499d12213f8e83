/// What happened to one view statement that did not fail fatally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Executed and committed.
    Applied,
    /// Rejected on create; the user is warned.
    Tolerated(String),
    /// Rejected on delete; kept out of the user's sight.
    Ignored(String),
}

impl Outcome {
    pub fn report(&self) {
        match self {
            Self::Applied => {}
            Self::Tolerated(e) => log::warn!("{}", e),
            Self::Ignored(e) => log::debug!("ignored: {}", e),
        }
    }
    pub fn is_tolerated(&self) -> bool {
        matches!(self, Self::Tolerated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture;

    #[test]
    fn only_tolerated_reaches_the_user() {
        capture::start();
        Outcome::Applied.report();
        Outcome::Ignored("view does not exist".into()).report();
        assert!(capture::visible().is_empty());
        Outcome::Tolerated("relation already exists".into()).report();
        assert_eq!(
            capture::visible(),
            vec![(log::Level::Warn, "relation already exists".to_string())]
        );
    }
}
