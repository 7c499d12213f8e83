use super::*;
use crate::Error;
use std::path::PathBuf;

/// Directory of static `CREATE VIEW` statements, one file per view.
///
/// Text is read fresh on every call and passed through verbatim.
#[derive(Debug, Clone)]
pub struct Resources(PathBuf);

impl Default for Resources {
    fn default() -> Self {
        Self(PathBuf::from("sql"))
    }
}

impl From<PathBuf> for Resources {
    fn from(dir: PathBuf) -> Self {
        Self(dir)
    }
}

impl Resources {
    pub fn path(&self, view: View) -> PathBuf {
        self.0.join(view.resource())
    }
    /// Reads the creation SQL for a view.
    pub fn creates(&self, view: View) -> Result<String, Error> {
        let path = self.path(view);
        log::debug!("reading {}", path.display());
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ResourceNotFound(path),
            _ => Error::Resource(path, e),
        })
    }
    /// Deletion SQL for a view. Always available.
    pub fn drops(&self, view: View) -> &'static str {
        view.drops()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("logviews-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_resource() {
        let resources = Resources::from(scratch("missing"));
        match resources.creates(View::ArticlesOkLogs) {
            Err(Error::ResourceNotFound(path)) => {
                assert!(path.ends_with("create_view_articles_ok_logs.sql"))
            }
            other => panic!("expected ResourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn verbatim_text() {
        let dir = scratch("verbatim");
        let text = "CREATE VIEW author_article_views AS SELECT 1;\n";
        std::fs::write(dir.join("create_view_author_article_views.sql"), text).unwrap();
        let resources = Resources::from(dir);
        assert_eq!(resources.creates(View::AuthorArticleViews).unwrap(), text);
    }

    #[test]
    fn bundled_resources_exist() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sql");
        let resources = Resources::from(dir);
        for view in View::all() {
            let sql = resources.creates(view).unwrap();
            assert!(sql.contains(&format!("CREATE VIEW {}", view.name())));
        }
    }
}
