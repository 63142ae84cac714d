//! This module saves task lists to a local file, and loads them back

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{Result, TaskError};
use crate::list::TaskList;


/// How tasks are written to the backing file.
///
/// Loading accepts both formats, whatever the configured one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// One displayed task per line (e.g. `[D][ ] submit report (by: Aug 30 2025 6pm)`).
    /// This is human-readable, but minutes are lost.
    Lines,
    /// A JSON document that keeps every field.
    Json,
}

impl Default for SaveFormat {
    fn default() -> Self {
        SaveFormat::Lines
    }
}


/// A task list that is stored in a local file
#[derive(Clone, Debug, PartialEq)]
pub struct Storage {
    backing_file: PathBuf,
    format: SaveFormat,
}

impl Storage {
    pub fn new(path: &Path, format: SaveFormat) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            format,
        }
    }

    /// Get the path to the backing file
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    pub fn format(&self) -> SaveFormat {
        self.format
    }

    /// Overwrite the backing file with the content of `list`. The file is created if needed.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        let path = &self.backing_file;
        let file = File::create(path).map_err(|err| TaskError::io(path, err))?;
        let mut writer = BufWriter::new(file);

        match self.format {
            SaveFormat::Lines => {
                for task in list.iter() {
                    writeln!(writer, "{}", codec::build_from(task)).map_err(|err| TaskError::io(path, err))?;
                }
            },
            SaveFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, list).map_err(|err| {
                    if err.is_io() {
                        TaskError::io(path, io::Error::from(err))
                    } else {
                        TaskError::from(err)
                    }
                })?;
                writeln!(writer).map_err(|err| TaskError::io(path, err))?;
            },
        }

        writer.flush().map_err(|err| TaskError::io(path, err))?;
        log::info!("Saved {} tasks to {:?}", list.len(), path);
        Ok(())
    }

    /// Read the tasks from the backing file.
    ///
    /// A missing file is an empty list. Malformed lines (including lines that are not valid UTF-8) are skipped.
    pub fn load(&self) -> Result<TaskList> {
        let path = &self.backing_file;
        let content = match std::fs::read(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No file at {:?} yet. Starting with an empty list", path);
                return Ok(TaskList::new());
            },
            Err(err) => return Err(TaskError::io(path, err)),
            Ok(content) => content,
        };

        // A JSON document cannot be mistaken for saved lines, that never start with a valid JSON value
        let list = match serde_json::from_slice::<TaskList>(&content) {
            Ok(list) => {
                if self.format == SaveFormat::Lines {
                    log::warn!("{:?} is a JSON document. It will be saved as lines from now on", path);
                }
                list
            },
            Err(err) => {
                if self.format == SaveFormat::Json {
                    log::info!("{:?} is not a JSON document ({}). Reading it as lines", path, err);
                }
                parse_lines(&content)
            },
        };
        log::info!("Loaded {} tasks from {:?}", list.len(), path);
        Ok(list)
    }

    /// Same as [`Storage::load`], but an unreadable file gives an empty list instead of an error
    pub fn load_or_default(&self) -> TaskList {
        match self.load() {
            Ok(list) => list,
            Err(err) => {
                log::warn!("Unable to load tasks: {}. Using an empty list", err);
                TaskList::new()
            }
        }
    }
}

fn parse_lines(content: &[u8]) -> TaskList {
    let mut list = TaskList::new();
    let mut skipped = 0;

    for raw_line in content.split(|byte| *byte == b'\n') {
        let line = match std::str::from_utf8(raw_line) {
            Ok(line) => line.trim(),
            Err(err) => {
                log::debug!("Skipping line {:?}: {}", String::from_utf8_lossy(raw_line), err);
                skipped += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        match codec::parse(line) {
            Some(task) => { list.push(task); },
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("{} malformed lines have been skipped", skipped);
    }
    list
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_skips_blank_and_malformed_lines() {
        let content = "\n   \n[T][X] task 1\ngarbage\n\n[T][ ] task 2\r\n[T] bad\n   \n";
        let list = parse_lines(content.as_bytes());

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().description(), "task 1");
        assert_eq!(list.get(0).unwrap().is_done(), true);
        assert_eq!(list.get(1).unwrap().description(), "task 2");
    }

    #[test]
    fn test_parse_lines_skips_invalid_utf8() {
        let content = b"[T][X] task 1\n[T][ ] caf\xc3 au lait\n[T][ ] bad \xff\xfe byte\r\n[T][ ] caf\xc3\xa9\n";
        let list = parse_lines(content);

        let descriptions: Vec<&str> = list.iter().map(|t| t.description()).collect();
        assert_eq!(descriptions, vec!["task 1", "caf\u{e9}"]);
    }

    #[test]
    fn serde_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(&dir.path().join("tasks.json"), SaveFormat::Json);

        let mut list = TaskList::new();
        list.add_plain("shopping".to_string());
        list.add_deadline("submit report".to_string(), "2025-08-30 18:30").unwrap();
        list.mark(1);

        storage.save(&list).unwrap();

        let retrieved_list = storage.load().unwrap();
        assert_eq!(list, retrieved_list);
    }
}
