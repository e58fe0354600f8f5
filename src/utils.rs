//! File-level helpers around the converter: `.xs` / `.xml` naming,
//! whole-file conversion and conversion of stale targets only.

use std::{
    ffi::OsStr,
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    abbrev::AbbreviationTable,
    config::Options,
    converter::Converter,
    error::Result,
};

/// Shorthand file extension
pub const XS_EXT: &str = "xs";

/// XML file extension
pub const XML_EXT: &str = "xml";

/// Result of [`update_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Target was (re)generated
    Converted(PathBuf),
    /// Target is newer than the source and was left alone
    UpToDate(PathBuf),
}

impl Update {
    pub fn path(&self) -> &Path {
        match self {
            Self::Converted(path) | Self::UpToDate(path) => path,
        }
    }
}

/// Does the file name end in `.xs`, in any letter case?
pub fn has_xs_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .and_then(OsStr::to_str)
        .is_some_and(ends_with_xs)
}

fn ends_with_xs(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(&format!(".{XS_EXT}"))
}

/// XML file name for a shorthand file name: `.xs` is replaced, any other
/// name gets `.xml` appended
pub fn xml_file_name(xs_file_name: &str) -> String {
    let stem = if ends_with_xs(xs_file_name) {
        xs_file_name
            .get(..xs_file_name.len() - XS_EXT.len() - 1)
            .unwrap_or(xs_file_name)
    } else {
        xs_file_name
    };
    format!("{stem}.{XML_EXT}")
}

/// Sibling XML path for a shorthand file
pub fn xml_path_for(xs_path: impl AsRef<Path>) -> PathBuf {
    let xs_path = xs_path.as_ref();
    let name = xs_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    xs_path.with_file_name(xml_file_name(&name))
}

/// Convert `xs_path` into `xml_path`, overwriting it.
///
/// The XML is produced in memory first; `xml_path` is only written when the
/// whole conversion succeeds. The source is decoded as strict UTF-8: a file
/// in any other encoding fails with [`ErrorKind::Io`](crate::ErrorKind::Io).
#[instrument(skip_all, fields(xs = %xs_path.as_ref().display()))]
pub fn convert_file(
    xs_path: impl AsRef<Path>,
    xml_path: impl AsRef<Path>,
    options: &Options,
    abbreviations: &AbbreviationTable,
) -> Result<PathBuf> {
    let xs_path = xs_path.as_ref();
    let xml_path = xml_path.as_ref();

    let reader = BufReader::new(File::open(xs_path)?);
    let mut xml = Vec::new();
    Converter::new(options, abbreviations).convert(reader, &mut xml)?;
    fs::write(xml_path, xml)?;

    info!("{} -> {}", xs_path.display(), xml_path.display());
    Ok(xml_path.to_path_buf())
}

/// Convert `xs_path` unless `xml_path` exists and was modified after it
#[instrument(skip_all, fields(xs = %xs_path.as_ref().display()))]
pub fn update_file(
    xs_path: impl AsRef<Path>,
    xml_path: impl AsRef<Path>,
    options: &Options,
    abbreviations: &AbbreviationTable,
) -> Result<Update> {
    let xs_path = xs_path.as_ref();
    let xml_path = xml_path.as_ref();

    if is_up_to_date(xs_path, xml_path) {
        debug!("{} is up to date", xml_path.display());
        return Ok(Update::UpToDate(xml_path.to_path_buf()));
    }
    convert_file(xs_path, xml_path, options, abbreviations).map(Update::Converted)
}

fn is_up_to_date(xs_path: &Path, xml_path: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|meta| meta.modified()).ok();
    match (modified(xs_path), modified(xml_path)) {
        (Some(source), Some(target)) => source < target,
        _ => false,
    }
}

/// Read a `key=value` abbreviations file into `abbreviations`
#[instrument(skip(abbreviations))]
pub fn load_abbreviations(path: &Path, abbreviations: &mut AbbreviationTable) -> Result<usize> {
    let file = File::open(path)?;
    let loaded = abbreviations.load(BufReader::new(file))?;
    debug!(loaded, "abbreviations loaded");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_xs_extension() {
        assert!(has_xs_extension("file.xs"));
        assert!(has_xs_extension("file.XS"));
        assert!(has_xs_extension("file.xS"));
        assert!(!has_xs_extension("file.xml"));
        assert!(!has_xs_extension("xs"));
        assert!(!has_xs_extension("file.xsd"));
        assert!(has_xs_extension(".xs"));
        assert!(has_xs_extension("dir/.XS"));
    }

    #[test]
    fn test_xml_file_name() {
        assert_eq!(xml_file_name("doc.xs"), "doc.xml");
        assert_eq!(xml_file_name("doc.XS"), "doc.xml");
        assert_eq!(xml_file_name("doc.txt"), "doc.txt.xml");
        assert_eq!(xml_file_name("doc"), "doc.xml");
        assert_eq!(xml_file_name(".xs"), ".xml");
    }

    #[test]
    fn test_xml_path_for_is_sibling() {
        assert_eq!(
            xml_path_for(Path::new("dir/sub/doc.xs")),
            PathBuf::from("dir/sub/doc.xml")
        );
        assert_eq!(xml_path_for(Path::new("dir/.xs")), PathBuf::from("dir/.xml"));
    }
}
