use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Gzip,
}

pub fn resolve_path(path: &Path, format: OutputFormat) -> PathBuf {
    match format {
        OutputFormat::Plain => path.to_path_buf(),
        OutputFormat::Gzip => {
            if path.to_string_lossy().ends_with(".gz") {
                path.to_path_buf()
            } else {
                let mut name = path.as_os_str().to_owned();
                name.push(".gz");
                PathBuf::from(name)
            }
        }
    }
}

pub fn write_wordlist<W: Write, S: AsRef<str>>(words: &[S], writer: &mut W) -> Result<()> {
    for word in words {
        writer.write_all(word.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn save_wordlist<S: AsRef<str>>(
    words: &[S],
    path: &Path,
    format: OutputFormat,
) -> Result<PathBuf> {
    let target = resolve_path(path, format);

    let file = File::create(&target)
        .with_context(|| format!("Failed to create {}", target.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Plain => {
            write_wordlist(words, &mut writer)
                .with_context(|| format!("Failed to write {}", target.display()))?;
        }
        OutputFormat::Gzip => {
            let mut encoder = GzEncoder::new(&mut writer, Compression::default());
            write_wordlist(words, &mut encoder)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            encoder
                .finish()
                .with_context(|| format!("Failed to finish gzip stream for {}", target.display()))?;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", target.display()))?;

    info!("Wrote {} words to {}", words.len(), target.display());

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::fs;
    use std::io::Read;

    #[test]
    fn test_resolve_path_plain() {
        let path = Path::new("out/list.txt");
        assert_eq!(resolve_path(path, OutputFormat::Plain), PathBuf::from("out/list.txt"));
    }

    #[test]
    fn test_resolve_path_gzip_appends_extension() {
        let path = Path::new("list.txt");
        assert_eq!(resolve_path(path, OutputFormat::Gzip), PathBuf::from("list.txt.gz"));
    }

    #[test]
    fn test_resolve_path_gzip_keeps_extension() {
        let path = Path::new("list.gz");
        assert_eq!(resolve_path(path, OutputFormat::Gzip), PathBuf::from("list.gz"));
    }

    #[test]
    fn test_write_wordlist_format() {
        let mut buffer = Vec::new();
        write_wordlist(&["alice", "Rex1", "café"], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "alice\nRex1\ncafé\n");
    }

    #[test]
    fn test_write_wordlist_empty() {
        let mut buffer = Vec::new();
        write_wordlist::<_, &str>(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_save_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");

        let written = save_wordlist(&["one", "two"], &path, OutputFormat::Plain).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&written).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_save_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");

        let written = save_wordlist(&["one", "two", "three"], &path, OutputFormat::Gzip).unwrap();
        assert_eq!(written, dir.path().join("wordlist.txt.gz"));

        let mut decoder = GzDecoder::new(File::open(&written).unwrap());
        let mut contents = String::new();
        decoder.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_save_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("wordlist.txt");

        let err = save_wordlist(&["one"], &path, OutputFormat::Plain).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }
}
