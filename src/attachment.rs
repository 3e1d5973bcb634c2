//! Attachment encoding
//!
//! Uploaded files are embedded in the item record as a self-describing data URL
//! (`data:<mime>;base64,<payload>`). Nothing is stored outside the planner blob.

use crate::constants::{APP_DIR_NAME, ERROR_ATTACHMENT_TOO_LARGE, FALLBACK_MIME_TYPE};
use crate::entities::Attachment;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::{Path, PathBuf};

/// Errors raised while reading, encoding or exporting attachments.
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("{} {} ({} bytes given)", ERROR_ATTACHMENT_TOO_LARGE, size_label(.limit), .size)]
    Oversized { size: u64, limit: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path has no file name: {}", .0.display())]
    MissingFileName(PathBuf),

    #[error("Attachment is not a base64 data URL")]
    InvalidDataUrl,

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type AttachmentResult<T> = Result<T, AttachmentError>;

/// Reject files strictly larger than `limit` bytes
pub fn check_size(size: u64, limit: u64) -> AttachmentResult<()> {
    if size > limit {
        return Err(AttachmentError::Oversized { size, limit });
    }
    Ok(())
}

/// MIME type guessed from the file extension
pub fn mime_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string())
}

/// Build a data URL for `bytes`
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Split a data URL into its MIME type and decoded payload
pub fn decode_data_url(url: &str) -> AttachmentResult<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:").ok_or(AttachmentError::InvalidDataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(AttachmentError::InvalidDataUrl)?;
    let mime = meta.strip_suffix(";base64").ok_or(AttachmentError::InvalidDataUrl)?;
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|_| AttachmentError::InvalidDataUrl)?;
    let mime = if mime.is_empty() { FALLBACK_MIME_TYPE } else { mime };
    Ok((mime.to_string(), bytes))
}

/// Encode in-memory file content, enforcing the size limit first
pub fn encode_bytes(file_name: &str, bytes: &[u8], limit: u64) -> AttachmentResult<Attachment> {
    check_size(bytes.len() as u64, limit)?;
    Ok(Attachment {
        file_name: file_name.to_string(),
        file_url: to_data_url(&mime_for(file_name), bytes),
    })
}

/// Read a file from disk and encode it. The size is checked against the file
/// metadata before any content is read.
pub async fn encode_file(path: &Path, limit: u64) -> AttachmentResult<Attachment> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| AttachmentError::MissingFileName(path.to_path_buf()))?;

    let read_err = |source: std::io::Error| AttachmentError::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(read_err)?;
    check_size(metadata.len(), limit)?;

    let bytes = tokio::fs::read(path).await.map_err(read_err)?;
    let attachment = encode_bytes(&file_name, &bytes, limit)?;
    log::info!(
        "Attachment: encoded '{}' ({} bytes) as {}",
        file_name,
        bytes.len(),
        mime_for(&file_name)
    );
    Ok(attachment)
}

/// Default directory attachments are saved to
pub fn default_download_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("downloads")))
}

/// Decode an attachment and write it into `dir`. An existing file is never
/// overwritten; a numbered name is picked instead.
pub fn save_to_dir(attachment: &Attachment, dir: &Path) -> AttachmentResult<PathBuf> {
    let (_, bytes) = decode_data_url(&attachment.file_url)?;

    // Only keep the final component so a stored name cannot escape `dir`.
    let safe_name = Path::new(&attachment.file_name)
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| AttachmentError::MissingFileName(PathBuf::from(&attachment.file_name)))?;

    let write_err = |path: &Path, source: std::io::Error| AttachmentError::Write {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(|e| write_err(dir, e))?;

    let mut target = dir.join(&safe_name);
    let stem = Path::new(&safe_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = Path::new(&safe_name)
        .extension()
        .map(|e| e.to_string_lossy().to_string());
    let mut counter = 1;
    while target.exists() {
        let candidate = match &extension {
            Some(ext) => format!("{} ({}).{}", stem, counter, ext),
            None => format!("{} ({})", stem, counter),
        };
        target = dir.join(candidate);
        counter += 1;
    }

    std::fs::write(&target, bytes).map_err(|e| write_err(&target, e))?;
    log::info!("Attachment: saved '{}' to {}", attachment.file_name, target.display());
    Ok(target)
}

fn size_label(limit: &u64) -> String {
    format_size(*limit)
}

/// Human-readable size ("5MB", "512KB", "42 bytes")
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= MIB {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}
