//! Member roster loading.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use yaamod_aliya::{Congregation, Person};

/// Reads a JSON array of member records and links them into a congregation.
pub fn load_roster(path: &Path) -> Result<Congregation> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;
    let persons: Vec<Person> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse roster JSON: {}", path.display()))?;
    let congregation = Congregation::new(persons).context("inconsistent roster")?;
    info!(path = %path.display(), members = congregation.len(), "roster loaded");
    Ok(congregation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaamod_aliya::{HereditaryStatus, PersonId};

    fn write_roster(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("members.json");
        std::fs::write(&path, contents).expect("write roster");
        (dir, path)
    }

    #[test]
    fn loads_linked_members() {
        let (_dir, path) = write_roster(
            r#"[
                {"id": 1, "formal_name": "Avraham", "gender": "male",
                 "date_of_death": "2010-06-27"},
                {"id": 2, "formal_name": "Yitzchak", "last_name": "Cohen", "gender": "male",
                 "hereditary_status": "cohen", "father": 1,
                 "date_of_birth": "1975-03-02", "last_aliya_date": "2024-01-06"}
            ]"#,
        );
        let congregation = load_roster(&path).unwrap();
        assert_eq!(congregation.len(), 2);

        let son = congregation.get(PersonId::new(2)).unwrap();
        assert_eq!(son.hereditary_status(), HereditaryStatus::Cohen);
        assert_eq!(
            congregation.children(PersonId::new(1)).unwrap(),
            vec![PersonId::new(2)]
        );
    }

    #[test]
    fn dangling_parent_is_an_error() {
        let (_dir, path) =
            write_roster(r#"[{"id": 2, "formal_name": "Yitzchak", "gender": "male", "father": 1}]"#);
        let err = load_roster(&path).unwrap_err();
        assert!(format!("{err:#}").contains("inconsistent roster"));
    }

    #[test]
    fn unknown_field_is_an_error() {
        let (_dir, path) =
            write_roster(r#"[{"id": 2, "formal_name": "Yitzchak", "gender": "male", "age": 40}]"#);
        let err = load_roster(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse roster JSON"));
    }
}
