// src/db/drafts.rs
use crate::errors::ServerError;
use crate::storage::UploadedImage;
use rusqlite::{params, Connection};

/// Images for the admin's in-progress listing, in upload order.
pub fn load_draft_images(conn: &Connection, user_id: &str) -> Result<Vec<UploadedImage>, ServerError> {
    let mut stmt =
        conn.prepare("select path, url from draft_images where user_id = ? order by position")?;

    let rows = stmt.query_map(params![user_id], |row| {
        Ok(UploadedImage {
            path: row.get(0)?,
            url: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace the draft with `images`.
pub fn save_draft_images(
    conn: &mut Connection,
    user_id: &str,
    images: &[UploadedImage],
) -> Result<(), ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin draft save failed: {e}")))?;

    tx.execute("delete from draft_images where user_id = ?", params![user_id])
        .map_err(|e| ServerError::DbError(format!("clear draft failed: {e}")))?;

    for (position, image) in images.iter().enumerate() {
        tx.execute(
            "insert into draft_images (user_id, position, path, url) values (?, ?, ?, ?)",
            params![user_id, position as i64, image.path, image.url],
        )
        .map_err(|e| ServerError::DbError(format!("insert draft image failed: {e}")))?;
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit draft failed: {e}")))
}

pub fn clear_draft_images(conn: &Connection, user_id: &str) -> Result<(), ServerError> {
    conn.execute("delete from draft_images where user_id = ?", params![user_id])
        .map_err(|e| ServerError::DbError(format!("clear draft failed: {e}")))?;
    Ok(())
}
