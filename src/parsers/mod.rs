pub mod tells;
pub mod trinkets;

/// Splits on `\n`, `\r\n` and lone `\r`. A final terminator does not start
/// an extra empty line.
pub(crate) fn lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                out.push(&rest[..pos]);
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                out.push(rest);
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::lines;

    #[test]
    fn every_line_ending() {
        assert_eq!(lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(lines("a\r\r\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_terminator_adds_nothing() {
        assert_eq!(lines("a\r"), vec!["a"]);
        assert_eq!(lines("a\n\n"), vec!["a", ""]);
        assert!(lines("").is_empty());
    }
}
