use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Error;

const INDENT: &[u8] = b"    ";

/// Pretty JSON with 4-space indentation. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, Error> {
    let mut buf = Vec::new();
    {
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut ser)?;
    }

    Ok(String::from_utf8(buf)?)
}

/// Serializes `value` in memory, then replaces `path` in one rename.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let json = to_pretty_json(value)?;
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(&tmp, bytes).map_err(|e| Error::io(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(path, e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "output.json".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tell::{Tell, TellBook};
    use crate::model::trinket::{Trinket, TrinketTable};

    #[test]
    fn four_space_indent_and_literal_unicode() {
        let book = TellBook::from(vec![Tell::new("Good luck", "好运")]);
        let json = to_pretty_json(&book).unwrap();

        let expected = "{\n    \"tells\": [\n        {\n            \"en\": \"Good luck\",\n            \"ch\": \"好运\"\n        }\n    ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn placeholders_are_null() {
        let mut table = TrinketTable::with_capacity(2);
        table.trinkets[1] = Some(Trinket {
            id: "2".into(),
            name: "Pebble".into(),
            description: "Just a pebble".into(),
        });
        let json = to_pretty_json(&table).unwrap();

        let expected = "{\n    \"trinkets\": [\n        null,\n        {\n            \"id\": \"2\",\n            \"name\": \"Pebble\",\n            \"des\": \"Just a pebble\"\n        }\n    ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_list_stays_inline() {
        let json = to_pretty_json(&TellBook::default()).unwrap();
        assert_eq!(json, "{\n    \"tells\": []\n}");
    }

    #[test]
    fn writes_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("nested").join("out.json");

        write_json(&dst, &TellBook::from(vec![Tell::new("a", "b")])).unwrap();
        write_json(&dst, &TellBook::default()).unwrap();

        let written = fs::read_to_string(&dst).unwrap();
        assert_eq!(written, "{\n    \"tells\": []\n}");
        assert!(!tmp_path(&dst).exists());
    }
}
