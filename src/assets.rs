use std::path::Path;
use std::sync::Arc;

/// URI under which the avatar bytes are registered with egui's image loaders.
pub const AVATAR_URI: &str = "bytes://avatar.png";

/// Read the optional footer avatar. A missing or unreadable file is not an
/// error; the footer simply renders without a picture.
pub fn load_avatar(path: &Path) -> Option<Arc<[u8]>> {
    match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => {
            log::info!("Loaded avatar from {} ({} bytes)", path.display(), bytes.len());
            Some(Arc::from(bytes))
        }
        Ok(_) => {
            log::warn!("Avatar file {} is empty", path.display());
            None
        }
        Err(e) => {
            log::warn!("No avatar at {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_none() {
        assert!(load_avatar(Path::new("definitely/not/here.png")).is_none());
    }

    #[test]
    fn existing_file_is_read() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"\x89PNG fake").unwrap();
        let bytes = load_avatar(f.path()).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
