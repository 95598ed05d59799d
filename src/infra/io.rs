use anyhow::{Context, Result};
use memchr::memmem;
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

pub enum FileBytes {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl AsRef<[u8]> for FileBytes {
    fn as_ref(&self) -> &[u8] {
        match self {
            FileBytes::Mapped(mmap) => &mmap[..],
            FileBytes::Buffered(buf) => buf.as_slice(),
        }
    }
}

/// Raw file bytes, memory-mapped above 1 MiB.
pub fn read_file_smart<P: AsRef<Path>>(path: P) -> Result<FileBytes> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() > MMAP_THRESHOLD {
        let file =
            File::open(path).with_context(|| format!("Failed to open file {}", path.display()))?;

        // Safety: read-only map of an existing regular file
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map {}", path.display()))?;

        Ok(FileBytes::Mapped(mmap))
    } else {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;

        Ok(FileBytes::Buffered(content))
    }
}

/// Cheap pre-filter: does the raw file contain `needle` anywhere?
/// No UTF-8 decoding and no parsing.
pub fn file_contains<P: AsRef<Path>>(path: P, needle: &str) -> Result<bool> {
    let bytes = read_file_smart(path)?;
    Ok(memmem::find(bytes.as_ref(), needle.as_bytes()).is_some())
}

/// Atomic write via a same-directory temp file and rename.
///
/// The temp file must live next to `path` so the rename stays on one
/// filesystem; if the directory refuses it the write fails.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    // Preserve original permissions
    #[cfg(unix)]
    let perms = fs::metadata(path)
        .map(|m| m.permissions())
        .unwrap_or_else(|_| std::os::unix::fs::PermissionsExt::from_mode(0o644));
    #[cfg(not(unix))]
    let perms = fs::metadata(path).map(|m| m.permissions()).ok();

    let tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;

    let mut file = tmp.as_file();
    file.write_all(data)
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    file.sync_all()?;

    #[cfg(unix)]
    fs::set_permissions(tmp.path(), perms).context("set temp permissions")?;
    #[cfg(not(unix))]
    if let Some(perms) = perms {
        fs::set_permissions(tmp.path(), perms).context("set temp permissions")?;
    }

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}
