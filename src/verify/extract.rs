//! Placeholder text derivation.
//!
//! Real OCR/PDF extraction is an external collaborator responsibility; the
//! engine accepts caller-supplied extracted text. When none is supplied it
//! falls back to this filename-derived stand-in.

/// Derive stand-in document text from a filename.
pub fn placeholder_text(filename: &str) -> String {
    format!("Certificate from {filename} issued to student for completion of course.")
}
