//! Token extraction from input files.

use regex::Regex;

use super::pattern::PatternResolver;

/// Contents of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Nothing to read (directories, placeholders).
    Null,
    /// Fully buffered bytes.
    Buffer(Vec<u8>),
    /// Incrementally readable source. Not supported.
    Stream,
}

/// A file handed to the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: String,
    pub contents: FileContents,
}

impl InputFile {
    pub fn buffer(path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Buffer(contents.into()),
        }
    }

    pub fn null(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Null,
        }
    }

    pub fn stream(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Stream,
        }
    }
}

/// Error raised for a single input file. Does not abort the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub file_path: String,
    pub message: String,
}

/// Why an input file contributed no tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoContent,
    NoPattern,
}

/// Running result of extraction across all input files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenAccumulator {
    /// Tokens in accumulation order: each file's tokens are placed
    /// before everything accumulated so far.
    pub tokens: Vec<String>,
    /// Files that resolved a pattern and had content to scan.
    pub files_processed: usize,
    pub skipped: Vec<(String, SkipReason)>,
    pub errors: Vec<InputError>,
}

impl TokenAccumulator {
    /// Consume one file and return the updated accumulator.
    pub fn accept(mut self, file: &InputFile, resolver: &PatternResolver) -> Self {
        let content = match &file.contents {
            FileContents::Stream => {
                self.errors.push(InputError {
                    file_path: file.path.clone(),
                    message: "Streaming not supported".to_string(),
                });
                return self;
            }
            FileContents::Null => {
                self.skipped.push((file.path.clone(), SkipReason::NoContent));
                return self;
            }
            FileContents::Buffer(bytes) if bytes.is_empty() => {
                self.skipped.push((file.path.clone(), SkipReason::NoContent));
                return self;
            }
            FileContents::Buffer(bytes) => String::from_utf8_lossy(bytes),
        };

        let Some(pattern) = resolver.resolve(&file.path) else {
            self.skipped.push((file.path.clone(), SkipReason::NoPattern));
            return self;
        };

        let mut tokens = extract_tokens(&content, pattern);
        tokens.append(&mut self.tokens);
        self.tokens = tokens;
        self.files_processed += 1;
        self
    }

    pub fn has_processed_files(&self) -> bool {
        self.files_processed > 0
    }
}

/// Fold all input files into a single accumulator.
pub fn collect_tokens<'a, I>(files: I, resolver: &PatternResolver) -> TokenAccumulator
where
    I: IntoIterator<Item = &'a InputFile>,
{
    files
        .into_iter()
        .fold(TokenAccumulator::default(), |acc, file| {
            acc.accept(file, resolver)
        })
}

/// Apply `pattern` globally and return capture group 1 of every match, in
/// encounter order. Duplicates are kept.
pub fn extract_tokens(content: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
