//! Repository pattern for the package store.

use crate::db::error::DbError;
use chrono::{DateTime, Utc};
use mir_core::types::{FlashcardPackage, PackageMetadata, Question, StudyProgress};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Package summary for listings (questions left in the store).
#[derive(Debug, Clone, serde::Serialize)]
pub struct PackageSummary {
    pub id: String,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
    pub total_questions: usize,
    pub file_name: String,
}

/// Repository for package operations.
pub trait PackageRepository {
    fn save_package(&self, pkg: &FlashcardPackage) -> Result<()>;
    fn get_package(&self, id: &str) -> Result<Option<FlashcardPackage>>;
    fn get_package_summaries(&self) -> Result<Vec<PackageSummary>>;
    fn delete_package(&self, id: &str) -> Result<bool>;
    fn package_count(&self) -> Result<usize>;
}

/// Repository for study-progress operations.
pub trait ProgressRepository {
    fn get_progress(&self, package_id: &str) -> Result<Option<StudyProgress>>;
    fn save_progress(&self, progress: &StudyProgress) -> Result<()>;
    fn delete_progress(&self, package_id: &str) -> Result<()>;
}

/// SQLite implementation of the repositories.
///
/// Constructed explicitly and injected into the application state; no
/// module-level connection exists anywhere.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        Ok(())
    }
}

impl PackageRepository for SqliteRepository {
    fn save_package(&self, pkg: &FlashcardPackage) -> Result<()> {
        let questions_json = serde_json::to_string(&pkg.questions)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO packages (id, nombre, created_at, total_questions, questions, file_size, page_count, file_name)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                pkg.id,
                pkg.nombre,
                pkg.created_at.to_rfc3339(),
                pkg.total_questions,
                questions_json,
                pkg.metadata.file_size,
                pkg.metadata.page_count,
                pkg.metadata.file_name,
            ],
        )?;
        Ok(())
    }

    fn get_package(&self, id: &str) -> Result<Option<FlashcardPackage>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, nombre, created_at, total_questions, questions, file_size, page_count, file_name
                 FROM packages WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, usize>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, u64>(5)?,
                        row.get::<_, u32>(6)?,
                        row.get::<_, String>(7)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, nombre, created_at, total_questions, questions_json, file_size, page_count, file_name)) = row
        else {
            return Ok(None);
        };

        let questions: Vec<Question> = serde_json::from_str(&questions_json)?;

        Ok(Some(FlashcardPackage {
            id,
            nombre,
            created_at: parse_timestamp(&created_at),
            total_questions,
            questions,
            metadata: PackageMetadata {
                file_size,
                page_count,
                file_name,
            },
        }))
    }

    fn get_package_summaries(&self) -> Result<Vec<PackageSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, nombre, created_at, total_questions, file_name
             FROM packages ORDER BY created_at DESC",
        )?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(PackageSummary {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    created_at: parse_timestamp(&row.get::<_, String>(2)?),
                    total_questions: row.get(3)?,
                    file_name: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    fn delete_package(&self, id: &str) -> Result<bool> {
        self.conn.execute(
            "DELETE FROM study_progress WHERE package_id = ?1",
            params![id],
        )?;
        let deleted = self
            .conn
            .execute("DELETE FROM packages WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    fn package_count(&self) -> Result<usize> {
        self.conn
            .query_row("SELECT COUNT(*) FROM packages", [], |row| row.get(0))
            .map_err(Into::into)
    }
}

impl ProgressRepository for SqliteRepository {
    fn get_progress(&self, package_id: &str) -> Result<Option<StudyProgress>> {
        let row = self
            .conn
            .query_row(
                "SELECT package_id, current_index, answer_revealed, correct_answers, incorrect_answers, last_studied
                 FROM study_progress WHERE package_id = ?1",
                params![package_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, usize>(1)?,
                        row.get::<_, bool>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((package_id, current_index, answer_revealed, correct_json, incorrect_json, last_studied)) = row
        else {
            return Ok(None);
        };

        Ok(Some(StudyProgress {
            package_id,
            current_index,
            answer_revealed,
            correct_answers: serde_json::from_str(&correct_json)?,
            incorrect_answers: serde_json::from_str(&incorrect_json)?,
            last_studied: parse_timestamp(&last_studied),
        }))
    }

    fn save_progress(&self, progress: &StudyProgress) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO study_progress (package_id, current_index, answer_revealed, correct_answers, incorrect_answers, last_studied)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                progress.package_id,
                progress.current_index,
                progress.answer_revealed,
                serde_json::to_string(&progress.correct_answers)?,
                serde_json::to_string(&progress.incorrect_answers)?,
                progress.last_studied.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn delete_progress(&self, package_id: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM study_progress WHERE package_id = ?1",
            params![package_id],
        )?;
        Ok(())
    }
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mir_core::types::Alternative;

    fn sample_package(id: &str) -> FlashcardPackage {
        FlashcardPackage {
            id: id.to_string(),
            nombre: "simulacro".to_string(),
            created_at: Utc::now(),
            total_questions: 1,
            questions: vec![Question {
                numero: 1,
                pregunta: "What is X?".to_string(),
                alternativas: (1..=4)
                    .map(|n| Alternative {
                        numero: n,
                        texto: format!("alt {}", n),
                        comentario: None,
                    })
                    .collect(),
                respuesta_original: 1,
                comentario: None,
            }],
            metadata: PackageMetadata {
                file_size: 2048,
                page_count: 2,
                file_name: "simulacro.pdf".to_string(),
            },
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let pkg = sample_package("p1");
        repo.save_package(&pkg).unwrap();

        let loaded = repo.get_package("p1").unwrap().unwrap();
        assert_eq!(loaded.id, pkg.id);
        assert_eq!(loaded.nombre, pkg.nombre);
        assert_eq!(loaded.questions, pkg.questions);
        assert_eq!(loaded.metadata, pkg.metadata);
    }

    #[test]
    fn missing_package_is_none() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert!(repo.get_package("nope").unwrap().is_none());
    }

    #[test]
    fn summaries_are_newest_first() {
        let repo = SqliteRepository::open_in_memory().unwrap();

        let mut old = sample_package("old");
        old.created_at = Utc::now() - chrono::Duration::hours(1);
        repo.save_package(&old).unwrap();
        repo.save_package(&sample_package("new")).unwrap();

        let summaries = repo.get_package_summaries().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "new");
        assert_eq!(summaries[1].id, "old");
    }

    #[test]
    fn delete_removes_package_and_progress() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_package(&sample_package("p1")).unwrap();
        repo.save_progress(&StudyProgress::new("p1")).unwrap();

        assert!(repo.delete_package("p1").unwrap());
        assert!(repo.get_package("p1").unwrap().is_none());
        assert!(repo.get_progress("p1").unwrap().is_none());
        assert!(!repo.delete_package("p1").unwrap());
    }

    #[test]
    fn progress_round_trip() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let mut progress = StudyProgress::new("p1");
        progress.current_index = 4;
        progress.answer_revealed = true;
        progress.mark(2, true);
        progress.mark(3, false);
        repo.save_progress(&progress).unwrap();

        let loaded = repo.get_progress("p1").unwrap().unwrap();
        assert_eq!(loaded.current_index, 4);
        assert!(loaded.answer_revealed);
        assert_eq!(loaded.correct_answers, vec![2]);
        assert_eq!(loaded.incorrect_answers, vec![3]);
    }

    #[test]
    fn package_count_tracks_saves() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.package_count().unwrap(), 0);
        repo.save_package(&sample_package("a")).unwrap();
        repo.save_package(&sample_package("b")).unwrap();
        assert_eq!(repo.package_count().unwrap(), 2);
    }
}
