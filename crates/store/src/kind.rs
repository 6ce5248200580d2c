//! Asset kind derivation from file extensions.

/// Image file extensions recognised by the importer.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "tiff", "bmp", "gif"];

/// Structured-data file extensions.
pub const DATA_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml"];

/// Video file extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "avi", "mkv"];

/// Audio file extensions.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "flac"];

/// Kind name for anything not covered above.
pub const KIND_UNKNOWN: &str = "unknown";

/// Derive an asset kind from a file name (case-insensitive).
pub fn derive_kind(file_name: &str) -> &'static str {
    let ext = match file_name.rfind('.') {
        Some(pos) if pos > 0 => file_name[pos + 1..].to_lowercase(),
        _ => return KIND_UNKNOWN,
    };

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        "image"
    } else if DATA_EXTENSIONS.contains(&ext.as_str()) {
        "data"
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        "video"
    } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        "audio"
    } else {
        KIND_UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_case_insensitive() {
        assert_eq!(derive_kind("wall.PNG"), "image");
        assert_eq!(derive_kind("photo.Jpg"), "image");
    }

    #[test]
    fn other_kinds() {
        assert_eq!(derive_kind("level.json"), "data");
        assert_eq!(derive_kind("intro.mp4"), "video");
        assert_eq!(derive_kind("theme.ogg"), "audio");
    }

    #[test]
    fn unknown_and_extensionless() {
        assert_eq!(derive_kind("readme.txt"), KIND_UNKNOWN);
        assert_eq!(derive_kind("Makefile"), KIND_UNKNOWN);
        assert_eq!(derive_kind(".hidden"), KIND_UNKNOWN);
    }
}
