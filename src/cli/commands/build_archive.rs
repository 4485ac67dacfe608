//! Build a grammar checker archive

use std::path::Path;

use log::debug;

use gtgramtools::Error;
use gtgramtools::adapters::pipespec;

/// Package `pipespec` and the files it loads into `archive`
pub fn build_archive(pipespec: &Path, archive: &Path) -> anyhow::Result<u8> {
    let files = pipespec::build_archive(pipespec, archive).map_err(Error::from)?;
    for file in &files {
        debug!("archived {file}");
    }
    Ok(0)
}
