//! Pipeline specifications
//!
//! A pipespec (`pipespec.xml`) names the grammar checker pipelines of a
//! language. `.zcheck` archives are zip files bundling the pipespec with the
//! files its pipelines load.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::{debug, info};
use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Name of the pipespec inside a `.zcheck` archive
pub const PIPESPEC_XML: &str = "pipespec.xml";

/// Extension of grammar checker archives
pub const ZCHECK_EXTENSION: &str = "zcheck";

const DEV_SUFFIX: &str = "-dev";

/// Errors reading or packaging a pipespec
#[derive(Debug, Error)]
pub enum PipespecError {
    /// The file could not be read or written
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The pipespec or archive
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// The pipespec is not well-formed XML
    #[error("invalid pipespec {}: {source}", .path.display())]
    Xml {
        /// The pipespec or archive
        path: PathBuf,
        /// What the XML parser said
        source: roxmltree::Error,
    },

    /// The archive is not a usable zip file
    #[error("invalid archive {}: {source}", .path.display())]
    Zip {
        /// The archive
        path: PathBuf,
        /// What the zip reader said
        source: zip::result::ZipError,
    },

    /// The root element has no `default-pipe` attribute
    #[error("no default-pipe in {}", .0.display())]
    NoDefaultPipe(PathBuf),

    /// The requested variant names no pipeline
    #[error(
        "Error in section Variant of the yaml file.\nThere is no pipeline named {variant} in {}\nAvailable pipelines are\n{}",
        .spec.display(),
        .available.join("\n")
    )]
    VariantNotFound {
        /// The requested variant, after `-dev` removal
        variant: String,
        /// The pipespec or archive
        spec: PathBuf,
        /// Pipeline names the spec does have
        available: Vec<String>,
    },
}

impl PipespecError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn zip(path: &Path, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The pipelines a pipespec offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipespec {
    /// Pipeline used when no variant is asked for
    pub default_pipe: String,
    /// Names of all pipelines, in document order
    pub pipelines: Vec<String>,
}

/// Whether `path` is a `.zcheck` archive
#[must_use]
pub fn is_archive(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == ZCHECK_EXTENSION)
}

/// Read the pipespec XML, from inside the archive for `.zcheck` files
fn read_xml(path: &Path) -> Result<String, PipespecError> {
    if !is_archive(path) {
        return fs::read_to_string(path).map_err(|e| PipespecError::io(path, e));
    }

    let file = File::open(path).map_err(|e| PipespecError::io(path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| PipespecError::zip(path, e))?;
    let mut entry = archive.by_name(PIPESPEC_XML).map_err(|e| PipespecError::zip(path, e))?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|e| PipespecError::io(path, e))?;
    Ok(xml)
}

fn parse_xml<'a>(path: &Path, xml: &'a str) -> Result<Document<'a>, PipespecError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options).map_err(|source| PipespecError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the default pipe and pipeline names of a pipespec or archive
pub fn read_pipespec(path: &Path) -> Result<Pipespec, PipespecError> {
    let xml = read_xml(path)?;
    let document = parse_xml(path, &xml)?;

    let default_pipe = document
        .root_element()
        .attribute("default-pipe")
        .ok_or_else(|| PipespecError::NoDefaultPipe(path.to_path_buf()))?
        .to_string();
    let pipelines = document
        .descendants()
        .filter(|n| n.has_tag_name("pipeline"))
        .filter_map(|n| n.attribute("name"))
        .map(ToString::to_string)
        .collect();

    Ok(Pipespec {
        default_pipe,
        pipelines,
    })
}

/// Pick the pipeline to run
///
/// Without a request the default pipe is used. Archives never contain
/// development pipelines, so a trailing `-dev` is dropped for them.
pub fn resolve_variant(spec: &Path, requested: Option<&str>) -> Result<String, PipespecError> {
    let pipespec = read_pipespec(spec)?;

    let Some(requested) = requested else {
        debug!("using default pipe {} of {}", pipespec.default_pipe, spec.display());
        return Ok(pipespec.default_pipe);
    };

    let variant = if is_archive(spec) {
        requested.strip_suffix(DEV_SUFFIX).unwrap_or(requested)
    } else {
        requested
    };

    if pipespec.pipelines.iter().any(|p| p == variant) {
        Ok(variant.to_string())
    } else {
        Err(PipespecError::VariantNotFound {
            variant: variant.to_string(),
            spec: spec.to_path_buf(),
            available: pipespec.pipelines,
        })
    }
}

/// Development pipelines load files straight from the source tree
fn is_dev_pipeline(pipeline: Node<'_, '_>) -> bool {
    pipeline
        .descendants()
        .filter_map(|n| n.attribute("n"))
        .any(|n| n.contains("./"))
}

/// Remove byte ranges from `xml`; ranges must be sorted and disjoint
fn cut(xml: &str, ranges: &[Range<usize>]) -> String {
    let mut kept = String::with_capacity(xml.len());
    let mut position = 0;
    for range in ranges {
        kept.push_str(&xml[position..range.start]);
        position = range.end;
    }
    kept.push_str(&xml[position..]);
    kept
}

/// Build a `.zcheck` archive from a pipespec
///
/// Development pipelines are left out. Every file named by an `n`
/// attribute of the remaining pipelines is stored under that name, read
/// relative to the pipespec's directory. Returns the stored file names.
pub fn build_archive(pipespec: &Path, archive: &Path) -> Result<Vec<String>, PipespecError> {
    let xml = fs::read_to_string(pipespec).map_err(|e| PipespecError::io(pipespec, e))?;
    let document = parse_xml(pipespec, &xml)?;

    let dev_pipelines: Vec<Node<'_, '_>> = document
        .descendants()
        .filter(|n| n.has_tag_name("pipeline") && is_dev_pipeline(*n))
        .collect();
    for pipeline in &dev_pipelines {
        debug!("leaving out development pipeline {}", pipeline.attribute("name").unwrap_or("?"));
    }

    let removed: Vec<Range<usize>> = dev_pipelines.iter().map(Node::range).collect();
    let files: BTreeSet<&str> = document
        .descendants()
        .filter(|n| !removed.iter().any(|r| r.contains(&n.range().start)))
        .filter_map(|n| n.attribute("n"))
        .collect();

    let base = pipespec.parent().unwrap_or_else(|| Path::new(""));
    let file = File::create(archive).map_err(|e| PipespecError::io(archive, e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer
        .start_file(PIPESPEC_XML, options)
        .map_err(|e| PipespecError::zip(archive, e))?;
    writer
        .write_all(cut(&xml, &removed).as_bytes())
        .map_err(|e| PipespecError::io(archive, e))?;

    for name in &files {
        let source = base.join(name);
        let content = fs::read(&source).map_err(|e| PipespecError::io(&source, e))?;
        writer
            .start_file(*name, options)
            .map_err(|e| PipespecError::zip(archive, e))?;
        writer.write_all(&content).map_err(|e| PipespecError::io(archive, e))?;
    }

    writer.finish().map_err(|e| PipespecError::zip(archive, e))?;
    info!("Wrote {} with {} file(s)", archive.display(), files.len() + 1);

    Ok(files.into_iter().map(ToString::to_string).collect())
}
