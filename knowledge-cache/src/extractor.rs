use async_trait::async_trait;
use bytes::Bytes;
use common::error::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Turns a fetched body into plain text. An empty string means nothing usable was found.
    async fn extract(&self, body: Bytes) -> Result<String, AppError>;
}

/// Extracts PDFs through their text layer and passes UTF-8 bodies through as-is.
#[derive(Clone, Copy, Default)]
pub struct ContentTextExtractor;

#[async_trait]
impl TextExtractor for ContentTextExtractor {
    async fn extract(&self, body: Bytes) -> Result<String, AppError> {
        if body.starts_with(PDF_MAGIC) {
            return extract_pdf_text(body).await;
        }

        match std::str::from_utf8(&body) {
            Ok(text) => Ok(normalize_text(text)),
            Err(_) => Ok(String::new()),
        }
    }
}

/// Runs `pdf-extract` off the async executor.
async fn extract_pdf_text(body: Bytes) -> Result<String, AppError> {
    let extraction = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&body))
        .await?
        .map_err(|err| AppError::Processing(format!("Failed to extract text from PDF: {err}")))?;

    Ok(normalize_text(&extraction))
}

/// Drops carriage returns, trailing spaces and runs of blank lines.
fn normalize_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut blank_run = 0usize;

    for line in text.replace('\r', "").lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            blank_run = blank_run.saturating_add(1);
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        output.push_str(line);
        output.push('\n');
    }

    output.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a one-page PDF that draws `word` in Helvetica, with a valid xref table.
    fn single_word_pdf(word: &str) -> Vec<u8> {
        let content = format!("BT /F1 24 Tf 72 720 Td ({word}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (index, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    #[tokio::test]
    async fn test_pdf_text_layer_is_extracted() {
        let extractor = ContentTextExtractor;

        let text = extractor
            .extract(Bytes::from(single_word_pdf("Eigenvalues")))
            .await
            .expect("extract");

        assert!(text.contains("Eigenvalues"), "unexpected text: {text:?}");
        assert_eq!(text, text.trim());
    }

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let extractor = ContentTextExtractor;

        let text = extractor
            .extract(Bytes::from_static(b"  Lecture 1\r\n\r\n\r\n\r\nVectors  \n"))
            .await
            .expect("extract");

        assert_eq!(text, "Lecture 1\n\nVectors");
    }

    #[tokio::test]
    async fn test_binary_that_is_not_pdf_yields_empty_text() {
        let extractor = ContentTextExtractor;

        let text = extractor
            .extract(Bytes::from_static(&[0xff, 0xfe, 0x00, 0x9f]))
            .await
            .expect("extract");

        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_only_body_is_empty() {
        let extractor = ContentTextExtractor;

        let text = extractor
            .extract(Bytes::from_static(b" \n\t\n "))
            .await
            .expect("extract");

        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_an_error() {
        let extractor = ContentTextExtractor;

        let result = extractor
            .extract(Bytes::from_static(b"%PDF-1.7\nthis is not a real pdf"))
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_collapses_blank_runs() {
        assert_eq!(normalize_text("a\n\n\n\nb\n"), "a\n\nb");
        assert_eq!(normalize_text(""), "");
    }
}
