//! PPTX package assembly.
//!
//! Drives a ZIP writer over the full package: the static skeleton first,
//! then the per-slide entries in presentation order, then the three
//! document-wide parts that tie everything together.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use deck_core::{Error, Presentation, Result};
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::parts::{self, SlideId};
use crate::template;

/// Writes a `Presentation` out as a .pptx package.
pub struct PptxWriter {
    static_parts: Vec<(String, Vec<u8>)>,
}

impl PptxWriter {
    /// Writer over the bundled package skeleton.
    pub fn new() -> Self {
        Self {
            static_parts: template::STATIC_PARTS
                .iter()
                .map(|(path, content)| (path.to_string(), content.as_bytes().to_vec()))
                .collect(),
        }
    }

    /// Writer over a caller-supplied skeleton (archive path -> content).
    pub fn with_static_parts(static_parts: Vec<(String, Vec<u8>)>) -> Self {
        Self { static_parts }
    }

    /// Assemble the package into a file at `path`.
    ///
    /// The first failed write aborts the whole operation; a partially
    /// written file is the caller's to discard.
    pub fn save_to(&self, presentation: &Presentation, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(presentation, BufWriter::new(file))?;
        log::debug!(
            "wrote {} slides to {}",
            presentation.slides().len(),
            path.display()
        );
        Ok(())
    }

    /// Assemble the package into any `Write + Seek` sink.
    ///
    /// Entry order is fixed and nothing time-dependent is written, so the
    /// same presentation always assembles to the same bytes.
    pub fn write_to<W: Write + Seek>(&self, presentation: &Presentation, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default();

        for (path, content) in &self.static_parts {
            add_entry(&mut zip, path, content, options)?;
        }

        let mut ids = Vec::with_capacity(presentation.slides().len());
        for (index, slide) in presentation.slides().iter().enumerate() {
            let id = SlideId::new(index + 1)?;

            add_entry(&mut zip, &id.media_path(), &slide.image, options)?;
            add_entry(
                &mut zip,
                &id.rels_path(),
                parts::slide_rels_xml(id).as_bytes(),
                options,
            )?;
            add_entry(
                &mut zip,
                &id.slide_path(),
                parts::slide_xml(id, &slide.title, &slide.placement).as_bytes(),
                options,
            )?;

            ids.push(id);
        }

        add_entry(
            &mut zip,
            "[Content_Types].xml",
            parts::content_types_xml(&ids).as_bytes(),
            options,
        )?;
        add_entry(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_rels_xml(&ids).as_bytes(),
            options,
        )?;
        add_entry(
            &mut zip,
            "ppt/presentation.xml",
            parts::presentation_xml(&ids, presentation.canvas()).as_bytes(),
            options,
        )?;

        let mut inner = zip
            .finish()
            .map_err(|e| Error::Zip(format!("Failed to finish archive: {}", e)))?;
        inner.flush()?;

        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one archive entry in full.
fn add_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &str,
    content: &[u8],
    options: FileOptions,
) -> Result<()> {
    zip.start_file(path, options)
        .map_err(|e| Error::Zip(format!("Failed to create archive entry '{}': {}", path, e)))?;
    zip.write_all(content)?;
    Ok(())
}
