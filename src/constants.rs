pub const TEMP_FILE_SUFFIX: &str = "tmp";

pub const INDEX_KEY_DELIMITER: &str = ":";
pub const POSTINGS_DELIMITER: &str = " ";

pub const PAGE_FILE_PREFIX: &str = "page_";
pub const PAGE_FILE_EXTENSION: &str = "html";

pub const DEFAULT_PAGES_DIR: &str = "downloaded_pages";
pub const DEFAULT_DOC_MAP_FILE: &str = "downloaded_pages/index.txt";
pub const DEFAULT_LEMMAS_FILE: &str = "lemmas.txt";
pub const DEFAULT_TOKENS_FILE: &str = "tokens.txt";
pub const DEFAULT_INDEX_FILE: &str = "inverted_index.txt";

pub const EXIT_COMMAND: &str = "exit";

/// How often the corpus loader reports progress.
pub const LOG_EVERY: usize = 100;
