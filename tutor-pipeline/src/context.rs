/// A document whose text made it into the tutor context.
#[derive(Debug, Clone)]
pub struct ContextDocument {
    pub title: String,
    pub url: String,
    pub text: String,
}

/// Returns at most `max_chars` characters of `text`, never splitting a UTF-8 sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text.get(..byte_index).unwrap_or(text),
        None => text,
    }
}

/// Renders one labeled block per document, each body cut to `max_chars_per_document`.
pub fn build_context(documents: &[ContextDocument], max_chars_per_document: usize) -> String {
    documents
        .iter()
        .map(|doc| {
            format!(
                "Document: {}\nURL: {}\nContent:\n{}\n",
                doc.title,
                doc.url,
                truncate_chars(&doc.text, max_chars_per_document)
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, text: &str) -> ContextDocument {
        ContextDocument {
            title: title.into(),
            url: format!("https://example.edu/{title}.pdf"),
            text: text.into(),
        }
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 5), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_long_document_is_cut_to_limit() {
        let body = "z".repeat(10_000);
        let context = build_context(&[doc("calculus", &body)], 8_000);

        let body_chars = context.chars().filter(|c| *c == 'z').count();
        assert_eq!(body_chars, 8_000);
    }

    #[test]
    fn test_blocks_carry_title_and_url_in_order() {
        let context = build_context(&[doc("first", "one"), doc("second", "two")], 8_000);

        let first = context.find("Document: first").expect("first block");
        let second = context.find("Document: second").expect("second block");
        assert!(first < second);
        assert!(context.contains("URL: https://example.edu/first.pdf"));
        assert!(context.contains("Content:\ntwo"));
    }

    #[test]
    fn test_empty_input_builds_empty_context() {
        assert!(build_context(&[], 8_000).is_empty());
    }
}
