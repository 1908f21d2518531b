//! External capabilities the fetcher delegates to.
//!
//! Everything that touches the network, the compiler, or destroys files goes
//! through the [`Tools`] trait so the pipeline can be exercised against a
//! recording fake. [`SystemTools`] is the real thing: libgit2 for clones,
//! std fs for removal and copying, the platform C compiler for objects.

use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::Path;
use std::process::Command;

pub trait Tools {
    /// Delete a file or directory tree. Missing paths are not an error.
    fn remove(&self, path: &Path) -> Result<()>;

    /// Full clone of the repository's default branch into `dest`.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// Copy a file or directory tree, creating parent directories.
    fn copy(&self, src: &Path, dest: &Path) -> Result<()>;

    /// Compile a single C source file to an object file (no link step).
    fn compile_object(&self, source: &Path, object: &Path) -> Result<()>;
}

pub struct SystemTools;

impl Tools for SystemTools {
    fn remove(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        if path.is_dir() {
            fs::remove_dir_all(path)
                .with_context(|| format!("Failed to remove directory {}", path.display()))
        } else {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove file {}", path.display()))
        }
    }

    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        Repository::clone(url, dest)
            .map(|_| ())
            .with_context(|| format!("Failed to clone {}", url))
    }

    fn copy(&self, src: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        if src.is_dir() {
            copy_dir_all(src, dest)
        } else {
            fs::copy(src, dest).map(|_| ()).with_context(|| {
                format!("Failed to copy {} to {}", src.display(), dest.display())
            })
        }
    }

    fn compile_object(&self, source: &Path, object: &Path) -> Result<()> {
        let compiler = std::env::var("CC").unwrap_or_else(|_| "cc".to_string());

        let status = Command::new(&compiler)
            .arg("-c")
            .arg(source)
            .arg("-o")
            .arg(object)
            .status()
            .with_context(|| format!("Failed to run compiler '{}'", compiler))?;

        if !status.success() {
            return Err(anyhow::anyhow!(
                "Compiler exited with {} for {}",
                status,
                source.display()
            ));
        }
        Ok(())
    }
}

// Simple recursive copy
fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        if ty.is_dir() {
            copy_dir_all(&entry.path(), &dst.join(entry.file_name()))?;
        } else {
            fs::copy(entry.path(), dst.join(entry.file_name()))?;
        }
    }
    Ok(())
}
