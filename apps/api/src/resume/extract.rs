//! In-memory PDF text extraction for uploaded resumes.

use crate::errors::AppError;

pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Checks the upload looks like a PDF of acceptable size.
pub fn validate_pdf_upload(file_name: &str, data: &[u8]) -> Result<(), AppError> {
    let is_pdf_name = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if !is_pdf_name || !data.starts_with(PDF_MAGIC) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF resumes are accepted".to_string(),
        ));
    }
    if data.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation(
            "File too large. Maximum size is 10MB".to_string(),
        ));
    }
    Ok(())
}

/// Extracts the text layer of a PDF. Runs on the blocking pool; parsing is CPU-bound.
pub async fn extract_pdf_text(data: bytes::Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Validation(format!("Could not read text from PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &[u8] = include_bytes!("../../fixtures/resume.pdf");

    #[test]
    fn test_accepts_pdf() {
        assert!(validate_pdf_upload("resume.PDF", b"%PDF-1.7\n...").is_ok());
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(matches!(
            validate_pdf_upload("resume.docx", b"%PDF-1.7"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        assert!(validate_pdf_upload("resume.pdf", b"PK\x03\x04").is_err());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let mut data = PDF_MAGIC.to_vec();
        data.resize(MAX_RESUME_BYTES + 1, b' ');
        let err = validate_pdf_upload("resume.pdf", &data).unwrap_err();
        assert!(err.to_string().contains("10MB"));
    }

    #[test]
    fn test_sample_resume_passes_validation() {
        assert!(validate_pdf_upload("resume.pdf", SAMPLE_RESUME).is_ok());
    }

    #[tokio::test]
    async fn test_extracts_text_layer() {
        let text = extract_pdf_text(bytes::Bytes::from_static(SAMPLE_RESUME))
            .await
            .unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Rust Engineer"));
    }
}
