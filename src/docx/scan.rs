//! Whole-part scanning for drawings and hyperlinks.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Drawing, Hyperlink};
use crate::options::DecodeOptions;
use crate::xml::{Decode, TokenStream};

use super::text::decode_hyperlink;

/// Drawings and hyperlinks found in one document part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentScan {
    /// Every `w:drawing`, in document order
    pub drawings: Vec<Drawing>,
    /// Every `w:hyperlink`, in document order
    pub hyperlinks: Vec<Hyperlink>,
}

impl DocumentScan {
    /// Relationship ids of all embedded images, in document order.
    pub fn image_references(&self) -> Vec<&str> {
        self.drawings
            .iter()
            .flat_map(|d| d.image_references())
            .collect()
    }

    /// Relationship ids of all external hyperlinks, in document order.
    pub fn hyperlink_references(&self) -> Vec<&str> {
        self.hyperlinks
            .iter()
            .filter_map(|h| h.id.as_deref())
            .collect()
    }
}

/// Scan a part such as `word/document.xml` for drawings and hyperlinks.
///
/// Drawings inside a hyperlink are reported in `drawings` for every run of
/// the link, even though the hyperlink record keeps only its first run.
///
/// # Example
///
/// ```
/// let xml = r#"<w:body><w:p><w:hyperlink r:id="rId5"><w:r><w:t>site</w:t></w:r></w:hyperlink></w:p></w:body>"#;
/// let scan = docxdraw::docx::scan_document(xml)?;
/// assert_eq!(scan.hyperlink_references(), vec!["rId5"]);
/// # Ok::<(), docxdraw::Error>(())
/// ```
pub fn scan_document(xml: &str) -> Result<DocumentScan> {
    scan_document_with_options(xml, &DecodeOptions::default())
}

/// Scan a part with decode options.
pub fn scan_document_with_options(xml: &str, options: &DecodeOptions) -> Result<DocumentScan> {
    let mut scan = DocumentScan::default();
    let mut stream = TokenStream::with_options(xml, options);

    while let Some(start) = stream.next_start()? {
        match start.local_name() {
            "drawing" => scan.drawings.push(Drawing::decode(&mut stream, &start)?),
            "hyperlink" => {
                let link = decode_hyperlink(&mut stream, &start, Some(&mut scan.drawings))?;
                scan.hyperlinks.push(link);
            }
            // Descend into everything else
            _ => {}
        }
    }

    log::debug!(
        "scanned {} drawings and {} hyperlinks",
        scan.drawings.len(),
        scan.hyperlinks.len()
    );
    Ok(scan)
}
