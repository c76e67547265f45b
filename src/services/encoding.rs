use std::fs;
use std::path::Path;
use std::str::FromStr;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use crate::error::Error;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// How input bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEncoding {
    #[default]
    Utf8,
    Auto,
    Label(&'static Encoding),
}

impl FromStr for InputEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(InputEncoding::Auto);
        }
        match Encoding::for_label(s.as_bytes()) {
            Some(enc) if enc == UTF_8 => Ok(InputEncoding::Utf8),
            Some(enc) => Ok(InputEncoding::Label(enc)),
            None => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

/// Reads a whole text file, dropping a leading UTF-8 BOM.
///
/// Undecodable bytes are an error in every mode; nothing is silently
/// replaced with U+FFFD.
pub fn read_text(path: &Path, encoding: InputEncoding) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    decode(path, &bytes, encoding)
}

fn decode(path: &Path, bytes: &[u8], encoding: InputEncoding) -> Result<String, Error> {
    let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);

    let enc = match encoding {
        InputEncoding::Utf8 => UTF_8,
        InputEncoding::Label(enc) => enc,
        InputEncoding::Auto => {
            let enc = guess(bytes);
            debug!("{}: detected {}", path.display(), enc.name());
            enc
        }
    };

    let (text, had_errors) = enc.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(Error::Decode {
            path: path.to_path_buf(),
            encoding: enc.name().to_string(),
        });
    }

    Ok(text.into_owned())
}

fn guess(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
