//! Input document loading and validation.

mod loader;

pub use loader::{InputError, SourceText};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_trims_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("book.txt");
        std::fs::write(&path, "\n\n  Witaj świecie  \n").unwrap();

        let text = SourceText::load(&path).unwrap();

        assert_eq!(text.as_str(), "Witaj świecie");
    }

    #[test]
    fn test_load_missing_file() {
        let result = SourceText::load(&PathBuf::from("/nonexistent/book.txt"));

        assert!(matches!(result.unwrap_err(), InputError::NotFound(_)));
    }

    #[test]
    fn test_load_whitespace_only_is_empty() {
        let temp_dir = TempDir::new().unwrap();

        for (i, content) in ["", " ", "\n\t\r\n  "].iter().enumerate() {
            let path = temp_dir.path().join(format!("blank_{i}.txt"));
            std::fs::write(&path, content).unwrap();

            let result = SourceText::load(&path);
            assert!(matches!(result.unwrap_err(), InputError::Empty(_)));
        }
    }

    #[test]
    fn test_load_invalid_utf8_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let result = SourceText::load(&path);

        assert!(matches!(result.unwrap_err(), InputError::Io { .. }));
    }

    #[test]
    fn test_char_count_counts_characters() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("book.txt");
        std::fs::write(&path, "Zażółć").unwrap();

        let text = SourceText::load(&path).unwrap();

        assert_eq!(text.char_count(), 6);
        assert!(text.as_str().len() > 6);
    }
}
