//! Intake boundary gate.
//!
//! Enforces the caller-side contract ahead of the core: payload size cap
//! and a small content-type allow-list. Content is sniffed with `infer`
//! first; when the bytes carry no recognizable magic the filename
//! extension is consulted through `mime_guess`. Rejections are
//! `VerifyError::InvalidInput` and never reach the engine.

use std::path::Path;
use tracing::debug;

use crate::error::{Result, VerifyError};
use crate::verify::config::IntakeConfig;

/// Size and content-type gate for incoming payloads.
#[derive(Debug, Clone, Default)]
pub struct IntakeGate {
    config: IntakeConfig,
}

impl IntakeGate {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    /// Admit or reject a payload before verification.
    pub fn admit(&self, bytes: &[u8], filename: &str) -> Result<()> {
        if bytes.len() as u64 > self.config.max_payload_bytes {
            return Err(VerifyError::InvalidInput(format!(
                "payload of {} bytes exceeds the {} byte limit",
                bytes.len(),
                self.config.max_payload_bytes
            )));
        }

        match sniff_mime(bytes, filename) {
            Some(mime) if self.is_allowed(&mime) => {
                debug!(mime = %mime, "payload admitted");
                Ok(())
            }
            Some(mime) => Err(VerifyError::InvalidInput(format!(
                "unsupported content type: {mime}"
            ))),
            None => Err(VerifyError::InvalidInput(format!(
                "unrecognized content type for {filename}"
            ))),
        }
    }

    fn is_allowed(&self, mime: &str) -> bool {
        let mime = mime.to_lowercase();
        self.config
            .allowed_mime_types
            .iter()
            .any(|allowed| allowed == &mime)
    }
}

/// Detect the payload MIME type: content magic first, extension fallback.
fn sniff_mime(bytes: &[u8], filename: &str) -> Option<String> {
    if let Some(kind) = infer::get(bytes) {
        return Some(kind.mime_type().to_string());
    }
    let extension = Path::new(filename).extension()?.to_str()?;
    mime_guess::from_ext(extension)
        .first()
        .map(|mime| mime.essence_str().to_string())
}
