use super::*;

/// Database failures, tagged by how the executor treats them.
///
/// - `Statement` — the server rejected the statement (duplicate object,
///   missing relation, object does not exist). Recoverable.
/// - `Connection` — the session could not be opened or was lost. Fatal.
/// - `Other` — any other driver failure. Fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    Statement(String),
    Connection(String),
    Other(String),
}

impl DbError {
    /// Every failure while opening a session is a connection failure,
    /// including server-side rejections such as bad credentials.
    pub fn connecting(e: PgErr) -> Self {
        Self::Connection(e.to_string())
    }
    /// Classifies an error reported by the server.
    /// `FATAL` and `PANIC` end the session, so they are connection losses
    /// (e.g. `admin_shutdown`), not rejected statements.
    pub fn server(severity: &str, message: &str) -> Self {
        let text = format!("{}: {}", severity, message);
        match severity {
            "FATAL" | "PANIC" => Self::Connection(text),
            _ => Self::Statement(text),
        }
    }
}

impl From<PgErr> for DbError {
    fn from(e: PgErr) -> Self {
        match e.as_db_error() {
            Some(db) => Self::server(db.severity(), db.message()),
            None if e.is_closed() => Self::Connection(e.to_string()),
            None => Self::Other(e.to_string()),
        }
    }
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Statement(s) => write!(f, "statement error: {}", s),
            Self::Connection(s) => write!(f, "connection error: {}", s),
            Self::Other(s) => write!(f, "database error: {}", s),
        }
    }
}

impl std::error::Error for DbError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_statements_recover() {
        let e = DbError::server("ERROR", "relation \"articles_ok_logs\" already exists");
        assert!(matches!(e, DbError::Statement(_)));
    }

    #[test]
    fn session_ending_errors_are_fatal() {
        let e = DbError::server("FATAL", "terminating connection due to administrator command");
        assert_eq!(
            e,
            DbError::Connection(
                "FATAL: terminating connection due to administrator command".into()
            )
        );
        assert!(matches!(
            DbError::server("PANIC", "could not write to file"),
            DbError::Connection(_)
        ));
    }

    #[test]
    fn display_tags() {
        let e = DbError::Statement("ERROR: relation \"x\" already exists".into());
        assert_eq!(
            e.to_string(),
            "statement error: ERROR: relation \"x\" already exists"
        );
    }
}
