use crate::error::Error;
use crate::model::tell::Tell;

/// Pairs alternating source/target lines into tells.
///
/// Every line counts, blank ones included: a blank line is an empty phrase,
/// not a separator. Both sides are trimmed.
pub fn parse(text: &str) -> Result<Vec<Tell>, Error> {
    let lines = super::lines(text);

    if lines.len() % 2 != 0 {
        return Err(Error::UnpairedLine { line: lines.len() });
    }

    let tells = lines
        .chunks_exact(2)
        .map(|pair| Tell::new(pair[0].trim(), pair[1].trim()))
        .collect();

    Ok(tells)
}
