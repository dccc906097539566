//! SQLite-Implementierung des FlashcardRepository

use crate::models::FlashcardRecord;
use crate::repository::{DbResult, FlashcardRepository};
use crate::sqlite::{jetzt, pool::SqliteDb};

impl FlashcardRepository for SqliteDb {
    async fn upsert(&self, term: &str, definition: &str) -> DbResult<FlashcardRecord> {
        let (_, now_str) = jetzt();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO flashcards (term, definition, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(term) DO UPDATE SET definition = excluded.definition,
                                             updated_at = excluded.updated_at",
        )
        .bind(term)
        .bind(definition)
        .bind(&now_str)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(FlashcardRecord {
            term: term.to_string(),
            definition: definition.to_string(),
        })
    }

    async fn get_by_term(&self, term: &str) -> DbResult<Option<FlashcardRecord>> {
        let row = sqlx::query("SELECT term, definition FROM flashcards WHERE term = ?")
            .bind(term)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_karte(&r)).transpose()
    }

    async fn terms(&self) -> DbResult<Vec<String>> {
        let terms: Vec<String> = sqlx::query_scalar("SELECT term FROM flashcards ORDER BY term")
            .fetch_all(&self.pool)
            .await?;
        Ok(terms)
    }

    async fn list_cards(&self) -> DbResult<Vec<FlashcardRecord>> {
        let rows = sqlx::query("SELECT term, definition FROM flashcards ORDER BY term")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_karte).collect()
    }

    async fn count(&self) -> DbResult<i64> {
        let anzahl: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flashcards")
            .fetch_one(&self.pool)
            .await?;
        Ok(anzahl)
    }

    async fn delete_all(&self) -> DbResult<u64> {
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query("DELETE FROM flashcards")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok(affected)
    }
}

fn row_to_karte(row: &sqlx::sqlite::SqliteRow) -> DbResult<FlashcardRecord> {
    use sqlx::Row as _;

    Ok(FlashcardRecord {
        term: row.try_get("term")?,
        definition: row.try_get("definition")?,
    })
}
