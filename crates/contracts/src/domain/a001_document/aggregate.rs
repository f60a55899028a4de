use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an uploaded document.
///
/// Minted by the backend on upload; the client treats it as an opaque
/// string and never fabricates one.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File category as reported by the backend parser.
///
/// The backend emits lowercase tags; anything it starts emitting that this
/// client does not know yet must still deserialize, hence `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Txt,
    Html,
    Xml,
    Md,
    Rtf,
    Youtube,
    #[serde(other)]
    Other,
}

impl FileType {
    pub fn as_str(&self) -> &str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Txt => "txt",
            FileType::Html => "html",
            FileType::Xml => "xml",
            FileType::Md => "md",
            FileType::Rtf => "rtf",
            FileType::Youtube => "youtube",
            FileType::Other => "other",
        }
    }

    /// Uppercase badge text for the document list.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Only PDFs get the paginated binary preview; everything else is
    /// shown as extracted text.
    pub fn is_pdf(&self) -> bool {
        matches!(self, FileType::Pdf)
    }

    /// `accept` attribute for the upload input: the extensions the backend
    /// parser understands.
    pub fn accept_attr() -> &'static str {
        ".pdf,.docx,.txt,.html,.htm,.xml,.md,.rtf"
    }
}

/// A document known to the backend. Identity is `doc_id`; `filename` and
/// `filetype` are display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: DocumentId,
    pub filename: String,
    pub filetype: FileType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filetype_known_tags() {
        let doc: Document = serde_json::from_str(
            r#"{"doc_id":"abc-1","filename":"report.pdf","filetype":"pdf"}"#,
        )
        .unwrap();
        assert_eq!(doc.filetype, FileType::Pdf);
        assert!(doc.filetype.is_pdf());
        assert_eq!(doc.filetype.label(), "PDF");
    }

    #[test]
    fn test_filetype_unknown_tag_falls_back() {
        // The backend may grow new parsers; the client must not choke.
        let doc: Document = serde_json::from_str(
            r#"{"doc_id":"abc-2","filename":"notes.epub","filetype":"epub"}"#,
        )
        .unwrap();
        assert_eq!(doc.filetype, FileType::Other);
        assert!(!doc.filetype.is_pdf());
    }

    #[test]
    fn test_document_id_transparent() {
        let id: DocumentId = serde_json::from_str(r#""550e8400-e29b-41d4-a716-446655440000""#).unwrap();
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""550e8400-e29b-41d4-a716-446655440000""#);
    }
}
