use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::locale::canonicalize_tag;
use crate::rules::TextRule;
use crate::{LanguageTable, Messages};

/// Load one language's messages from a JSON file
///
/// The file holds a flat JSON object:
/// ```json
/// {
///     "@metadata": { ... },
///     "greeting": "Привіт",
///     "farewell": "До побачення"
/// }
/// ```
/// Keys starting with `@` are metadata and skipped. Values that are not
/// strings are skipped with a warning rather than failing the whole file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - Root is not an object
pub fn load_messages_from_file(path: &Path) -> LoadResult<Messages> {
    // Read the file
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("'{}': {}", path.display(), e)))?;

    // Parse JSON
    let json: Value = serde_json::from_str(&content)
        .map_err(|e| LoadError::Parse(format!("'{}': {}", path.display(), e)))?;

    // Ensure it's an object
    let obj = json.as_object().ok_or_else(|| {
        LoadError::Shape(format!("'{}': root must be an object", path.display()))
    })?;

    let mut messages = Messages::new();
    for (key, value) in obj {
        // Skip metadata
        if key.starts_with('@') {
            continue;
        }

        if let Some(text) = value.as_str() {
            messages.with_message(key, text);
        } else {
            eprintln!("Warning: Message '{}' is not a string, skipping", key);
        }
    }

    Ok(messages)
}

/// Load a language table from a directory of JSON files
///
/// Scans the directory for `*.json` files; each filename without its
/// extension is the language tag, canonicalized on insertion. For example
/// `en.json` becomes `"en"` and `uk-ua.json` becomes `"uk-UA"`.
///
/// # Arguments
/// * `dir` - Directory path containing per-language JSON files
///
/// # Errors
/// - Directory not found
/// - File read/parse errors
pub fn load_table_from_dir(dir: &Path) -> LoadResult<LanguageTable> {
    if !dir.exists() {
        return Err(LoadError::Io(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(LoadError::Io(format!(
            "Path is not a directory: {}",
            dir.display()
        )));
    }

    let mut table = LanguageTable::new();

    let entries = fs::read_dir(dir)
        .map_err(|e| LoadError::Io(format!("'{}': {}", dir.display(), e)))?;

    for entry in entries {
        let entry = entry.map_err(|e| LoadError::Io(format!("Error reading directory entry: {}", e)))?;

        let path = entry.path();

        // Only process JSON files
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        // Filename without extension is the language tag
        let tag = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| LoadError::Io(format!("Invalid filename: {}", path.display())))?;

        let messages = load_messages_from_file(&path)?;

        table.insert(canonicalize_tag(tag), messages);
    }

    if table.is_empty() {
        eprintln!("Warning: No JSON files found in directory {}", dir.display());
    }

    Ok(table)
}

/// Load a language table from a single nested JSON file
///
/// The file holds one object per language tag:
/// ```json
/// {
///     "en": {"greeting": "Hello"},
///     "uk": {"greeting": "Привіт"}
/// }
/// ```
/// Tags are canonicalized on insertion. Inside each language object the
/// same rules apply as for a per-language file: `@`-prefixed keys are
/// metadata, non-string values are skipped with a warning.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - Root is not an object, or a language entry is not an object
pub fn load_table_from_file(path: &Path) -> LoadResult<LanguageTable> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("'{}': {}", path.display(), e)))?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|e| LoadError::Parse(format!("'{}': {}", path.display(), e)))?;

    let obj = json.as_object().ok_or_else(|| {
        LoadError::Shape(format!("'{}': root must be an object", path.display()))
    })?;

    let mut table = LanguageTable::new();
    for (tag, entry) in obj {
        let entry = entry.as_object().ok_or_else(|| {
            LoadError::Shape(format!(
                "'{}': entry for language '{}' must be an object",
                path.display(),
                tag
            ))
        })?;

        let mut messages = Messages::new();
        for (key, value) in entry {
            if key.starts_with('@') {
                continue;
            }
            if let Some(text) = value.as_str() {
                messages.with_message(key, text);
            } else {
                eprintln!("Warning: Message '{}' is not a string, skipping", key);
            }
        }
        table.insert(canonicalize_tag(tag), messages);
    }

    Ok(table)
}

/// Load a rule list from a JSON file
///
/// The file holds an array of rule records:
/// ```json
/// [
///     {"class": "menu-item", "source": "Steak", "destination": "Стейк"}
/// ]
/// ```
/// Rule order in the file is preserved; it decides which rule wins when
/// several match the same element.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON or records missing a field
pub fn load_rules_from_file(path: &Path) -> LoadResult<Vec<TextRule>> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("'{}': {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| LoadError::Parse(format!("'{}': {}", path.display(), e)))
}
