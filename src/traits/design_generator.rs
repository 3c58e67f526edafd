use std::fs;
use std::path::Path;

use log::{ debug, info };

use crate::errors::{ ProbeError, ProbeResult };
use crate::models::artifact::GeneratedArtifact;
use crate::models::chain::ChainSpec;

/// Trait for emitting a synthetic design sized by a chain length
pub trait DesignGenerator {
    /// Render the complete design text for `chain`
    ///
    /// Must be a pure function of `chain`: equal inputs give byte-identical text.
    fn render(&self, chain: &ChainSpec) -> String;

    /// Render an N-stage design and write it to `path`, replacing any existing file
    fn generate(&self, path: &Path, length: usize) -> ProbeResult<GeneratedArtifact> {
        let chain = ChainSpec::new(length)?;
        let text = self.render(&chain);

        debug!("Rendered {} bytes for chain length {}", text.len(), chain.length());
        fs::write(path, &text).map_err(|e| ProbeError::io(path, e))?;
        info!("Wrote {}-stage design to {}", length, path.display());

        Ok(GeneratedArtifact {
            path: path.to_path_buf(),
            chain_length: length,
            line_count: text.lines().count(),
        })
    }
}
