//! Manifest rendering and persistence

use std::fs;
use std::path::{Path, PathBuf};

use super::MANIFEST_FILENAME;
use crate::error::{Result, ThemeweldError};

/// Folds resolved import paths into the manifest file
pub struct Emitter<'a> {
    output_dir: &'a Path,
    disclaimer: &'a str,
}

impl<'a> Emitter<'a> {
    pub fn new(output_dir: &'a Path, disclaimer: &'a str) -> Self {
        Self {
            output_dir,
            disclaimer,
        }
    }

    /// Render one `import '<path>';` line per resolved path, prefixed by the
    /// disclaimer, and write the result to the fixed manifest filename inside
    /// the output directory, overwriting any prior content. The output
    /// directory is created if absent; only the last path segment is created,
    /// a missing parent is fatal.
    pub fn write_manifest(&self, imports: &[String]) -> Result<PathBuf> {
        let mut contents = String::from(self.disclaimer);
        for import in imports {
            contents.push_str(&format!("import '{}';\n", import));
        }

        if !self.output_dir.exists() {
            fs::create_dir(self.output_dir).map_err(|e| {
                ThemeweldError::OutputDirCreateFailed {
                    path: self.output_dir.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        let manifest_path = self.output_dir.join(MANIFEST_FILENAME);
        fs::write(&manifest_path, &contents).map_err(|e| {
            ThemeweldError::ManifestWriteFailed {
                path: manifest_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(manifest_path)
    }
}
