use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;
use crate::model::tell::{Tell, TellBook};

/// Tell shown when `tells.json` cannot be used.
pub fn fallback() -> Tell {
    Tell::new("error", "文件读取错误")
}

/// Loads a tells document; any failure degrades to the single fallback tell.
pub fn load_tells(path: &Path) -> Vec<Tell> {
    match try_load(path) {
        Ok(tells) if !tells.is_empty() => tells,
        Ok(_) => {
            error!("{}: no tells", path.display());
            vec![fallback()]
        }
        Err(e) => {
            error!("Error reading file from disk: {e}");
            vec![fallback()]
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<Tell>, Error> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let book: TellBook = serde_json::from_str(&data)?;
    Ok(book.tells)
}

/// Uniformly random tell, `None` only for an empty slice.
pub fn pick<'a, R: Rng + ?Sized>(tells: &'a [Tell], rng: &mut R) -> Option<&'a Tell> {
    tells.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let tells = load_tells(&dir.path().join("tells.json"));
        assert_eq!(tells, vec![fallback()]);
    }

    #[test]
    fn invalid_json_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tells.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_tells(&path), vec![fallback()]);
    }

    #[test]
    fn empty_book_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tells.json");
        fs::write(&path, r#"{"tells": []}"#).unwrap();
        assert_eq!(load_tells(&path), vec![fallback()]);
    }

    #[test]
    fn loads_and_picks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tells.json");
        fs::write(
            &path,
            r#"{"tells": [{"en": "Good luck", "ch": "好运"}, {"en": "Beware", "ch": "小心"}]}"#,
        )
        .unwrap();

        let tells = load_tells(&path);
        assert_eq!(tells.len(), 2);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let t = pick(&tells, &mut rng).unwrap();
            assert!(tells.contains(t));
        }
    }

    #[test]
    fn pick_from_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick(&[], &mut rng).is_none());
    }
}
