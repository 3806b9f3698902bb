use std::{fs, path::Path};

use scraper::Html;
use walkdir::WalkDir;

use crate::{
    constants::{LOG_EVERY, PAGE_FILE_EXTENSION, PAGE_FILE_PREFIX},
    error::Result,
    inverted_index::{DocID, Document},
    tokenizer::Tokenizer,
};

/// Pulls the numeric id out of a `page_<n>.html` file name.
pub fn page_id(path: &Path) -> Option<DocID> {
    if path.extension()? != PAGE_FILE_EXTENSION {
        return None;
    }

    path.file_stem()?
        .to_str()?
        .strip_prefix(PAGE_FILE_PREFIX)?
        .parse()
        .ok()
}

/// Visible text of an HTML page, lowercased, text nodes separated by spaces.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Reads every crawled page under `data_path`, ordered by page id.
pub fn load_corpus(data_path: &Path, tokenizer: &Tokenizer) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(data_path)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let Some(doc_id) = page_id(entry.path()) else {
            tracing::debug!(path = %entry.path().display(), "Skipping non-page file");
            continue;
        };

        let html = fs::read_to_string(entry.path())?;
        let tokens = tokenizer.tokenize(&extract_text(&html));

        documents.push(Document::new(doc_id, tokens));

        if documents.len() % LOG_EVERY == 0 {
            tracing::info!("Processed {} documents", documents.len());
        }
    }

    documents.sort_by_key(|document| document.id);

    tracing::info!(documents = documents.len(), path = %data_path.display(), "Loaded corpus");

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn page_id_from_file_name() {
        assert_eq!(page_id(&PathBuf::from("pages/page_17.html")), Some(17));
        assert_eq!(page_id(&PathBuf::from("page_3.html")), Some(3));
        assert_eq!(page_id(&PathBuf::from("pages/index.txt")), None);
        assert_eq!(page_id(&PathBuf::from("pages/page_x.html")), None);
        assert_eq!(page_id(&PathBuf::from("pages/page_4.htm")), None);
    }

    #[test]
    fn extracts_visible_text() {
        let text = extract_text(
            "<html><head><title>Кошки</title></head><body><p>Кот <b>сидит</b></p></body></html>",
        );

        assert_eq!(text, "кошки кот сидит");
    }

    #[test]
    fn loads_pages_from_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("page_2.html"), "<p>Собака сидит</p>").expect("Failed to write");
        fs::write(dir.path().join("page_1.html"), "<p>Кот, кот!</p>").expect("Failed to write");
        fs::write(dir.path().join("index.txt"), "1: https://a\n").expect("Failed to write");

        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let documents = load_corpus(dir.path(), &tokenizer).expect("Failed to load corpus");

        assert_eq!(
            documents,
            vec![
                Document::new(1, vec!["кот".into(), "кот".into()]),
                Document::new(2, vec!["собака".into(), "сидит".into()]),
            ]
        );
    }
}
