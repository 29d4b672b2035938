// src/request.rs
use crate::errors::ServerError;
use crate::storage::ImageFile;
use astra::Request;
use multipart::server::Multipart;
use std::io::{Cursor, Read};

/// Read the whole body, refusing anything over `limit` bytes.
pub fn read_body(req: Request, limit: u64) -> Result<Vec<u8>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    if buf.len() as u64 > limit {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

pub fn header<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Every part named `field` that carries a filename, in body order.
/// Parts with an empty filename (nothing picked in the file input) are skipped.
pub fn multipart_files(content_type: &str, body: Vec<u8>, field: &str) -> Result<Vec<ImageFile>, ServerError> {
    let parsed: mime::Mime = content_type
        .parse()
        .map_err(|_| ServerError::BadRequest("invalid content type".into()))?;

    if parsed.type_() != mime::MULTIPART || parsed.subtype() != mime::FORM_DATA {
        return Err(ServerError::BadRequest("expected multipart/form-data".into()));
    }

    let boundary = parsed
        .get_param(mime::BOUNDARY)
        .ok_or_else(|| ServerError::BadRequest("multipart boundary missing".into()))?
        .as_str()
        .to_string();

    let mut form = Multipart::with_body(Cursor::new(body), boundary);
    let mut files = Vec::new();

    while let Some(mut entry) = form
        .read_entry()
        .map_err(|e| ServerError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if &*entry.headers.name != field {
            continue;
        }
        let Some(name) = entry.headers.filename.clone().filter(|n| !n.is_empty()) else {
            continue;
        };

        let mut bytes = Vec::new();
        entry
            .data
            .read_to_end(&mut bytes)
            .map_err(|e| ServerError::BadRequest(format!("could not read {name}: {e}")))?;

        files.push(ImageFile {
            name,
            content_type: entry.headers.content_type.as_ref().map(|m| m.to_string()),
            bytes,
        });
    }

    Ok(files)
}
