use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Derive the output path for `input`.
///
/// The last extension is replaced by `{suffix}.{ext}`, keeping the original
/// extension or using `fallback_extension` when the input has none. The
/// result lands next to the input unless `output_dir` is given.
pub fn output_path(
    input: &Path,
    suffix: &str,
    fallback_extension: &str,
    output_dir: Option<&Path>,
) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("document"));
    let extension = input
        .extension()
        .unwrap_or_else(|| OsStr::new(fallback_extension));

    let mut name = OsString::from(stem);
    name.push(suffix);
    name.push(".");
    name.push(extension);

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
