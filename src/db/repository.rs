//! Database repository for all registry operations.
//!
//! Uses prepared statements; the ID number for a new member is derived inside
//! the INSERT itself so sequencing and insertion are a single atomic statement.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{CreateMemberRequest, CreatedMember, Member, Stats};

/// Database repository for members, scans, and stats.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
    id_prefix: String,
}

const MEMBER_COLUMNS: &str = "id, id_number, full_name, rank, responsibility, phone_number, \
     photo_url, left_flag_url, center_logo_url, right_flag_url, created_at";

impl Repository {
    pub fn new(pool: SqlitePool, id_prefix: String) -> Self {
        Self { pool, id_prefix }
    }

    // ==================== MEMBER OPERATIONS ====================

    /// Create a new member with a generated ID number.
    ///
    /// The ID number is `<prefix>-NNNN`, zero-padded, derived from the next
    /// surrogate key. Deriving it via a subselect in the same INSERT statement
    /// means two concurrent registrations can never compute the same sequence
    /// number. Gaps after deletion are acceptable; numbers are never reused.
    pub async fn create_member(
        &self,
        request: &CreateMemberRequest,
    ) -> Result<CreatedMember, AppError> {
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query(
            r#"
            INSERT INTO members (
                id_number, full_name, rank, responsibility, phone_number,
                photo_url, left_flag_url, center_logo_url, right_flag_url, created_at
            )
            VALUES (
                printf('%s-%04d', ?, (SELECT COALESCE(MAX(id), 0) + 1 FROM members)),
                ?, ?, ?, ?, ?, ?, ?, ?, ?
            )
            RETURNING id, id_number
            "#,
        )
        .bind(&self.id_prefix)
        .bind(&request.full_name)
        .bind(&request.rank)
        .bind(&request.responsibility)
        .bind(&request.phone_number)
        .bind(&request.photo_url)
        .bind(&request.left_flag_url)
        .bind(&request.center_logo_url)
        .bind(&request.right_flag_url)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;

        Ok(CreatedMember {
            id: row.get("id"),
            id_number: row.get("id_number"),
        })
    }

    /// Get a member by their external ID number.
    pub async fn get_member_by_id_number(
        &self,
        id_number: &str,
    ) -> Result<Option<Member>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id_number = ?"
        ))
        .bind(id_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    /// List all members, sorted by name (case-insensitive).
    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY full_name COLLATE NOCASE ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    /// Substring search across ID number, name, and phone number.
    pub async fn search_members(&self, query: &str) -> Result<Vec<Member>, AppError> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query(&format!(
            r#"SELECT {MEMBER_COLUMNS} FROM members
               WHERE id_number LIKE ? ESCAPE '\'
                  OR full_name LIKE ? ESCAPE '\'
                  OR phone_number LIKE ? ESCAPE '\'"#
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    // ==================== SCAN OPERATIONS ====================

    /// Record a verification scan against a member.
    ///
    /// Resolves the ID number first; an unknown ID number leaves the scans
    /// table untouched.
    pub async fn record_scan(
        &self,
        id_number: &str,
        scanner_info: Option<&str>,
    ) -> Result<(), AppError> {
        let row = sqlx::query("SELECT id FROM members WHERE id_number = ?")
            .bind(id_number)
            .fetch_optional(&self.pool)
            .await?;

        let member_id: i64 = match row {
            Some(row) => row.get("id"),
            None => return Err(AppError::NotFound("Member not found".to_string())),
        };

        let now = Utc::now().to_rfc3339();
        sqlx::query("INSERT INTO scans (member_id, scan_time, scanner_info) VALUES (?, ?, ?)")
            .bind(member_id)
            .bind(&now)
            .bind(scanner_info)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ==================== STATS ====================

    /// Row counts over the two tables.
    pub async fn get_stats(&self) -> Result<Stats, AppError> {
        let members_row = sqlx::query("SELECT COUNT(*) AS count FROM members")
            .fetch_one(&self.pool)
            .await?;
        let scans_row = sqlx::query("SELECT COUNT(*) AS count FROM scans")
            .fetch_one(&self.pool)
            .await?;

        Ok(Stats {
            total_members: members_row.get("count"),
            total_scans: scans_row.get("count"),
        })
    }
}

// Helper functions

fn member_from_row(row: &sqlx::sqlite::SqliteRow) -> Member {
    Member {
        id: row.get("id"),
        id_number: row.get("id_number"),
        full_name: row.get("full_name"),
        rank: row.get("rank"),
        responsibility: row.get("responsibility"),
        phone_number: row.get("phone_number"),
        photo_url: row.get("photo_url"),
        left_flag_url: row.get("left_flag_url"),
        center_logo_url: row.get("center_logo_url"),
        right_flag_url: row.get("right_flag_url"),
        created_at: row.get("created_at"),
    }
}

/// Escape LIKE wildcards so the query string is matched literally.
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
