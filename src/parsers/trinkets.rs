use crate::error::Error;
use crate::model::trinket::{
    DuplicatePolicy, Overwritten, Trinket, TrinketTable, MAX_CAPACITY,
};

/// Extracts the first three quoted fields of a line as id, name and description.
///
/// Splitting on `"` puts quoted content at the odd segments, so
/// `"5","Lucky Coin","Grants +1 luck"` yields segments 1, 3 and 5.
/// Anything after the third field is ignored.
pub fn parse_line(line: &str, line_number: usize) -> Result<Trinket, Error> {
    let segments: Vec<&str> = line.split('"').collect();

    if segments.len() < 6 {
        return Err(Error::MissingField {
            line: line_number,
            found: (segments.len() - 1) / 2,
        });
    }

    Ok(Trinket {
        id: segments[1].trim().to_string(),
        name: segments[3].trim().to_string(),
        description: segments[5].trim().to_string(),
    })
}

pub fn parse(
    text: &str,
    capacity: usize,
    policy: DuplicatePolicy,
) -> Result<TrinketTable, Error> {
    parse_with_overwrites(text, capacity, policy).map(|(table, _)| table)
}

/// Like [`parse`], also returning every record a later duplicate id replaced.
/// With [`DuplicatePolicy::Reject`] the list is always empty.
pub fn parse_with_overwrites(
    text: &str,
    capacity: usize,
    policy: DuplicatePolicy,
) -> Result<(TrinketTable, Vec<Overwritten>), Error> {
    if capacity > MAX_CAPACITY {
        return Err(Error::CapacityTooLarge {
            capacity,
            max: MAX_CAPACITY,
        });
    }

    let mut table = TrinketTable::with_capacity(capacity);
    let mut overwritten = Vec::new();

    for (i, line) in super::lines(text).into_iter().enumerate() {
        let ln = i + 1;

        if line.trim().is_empty() {
            continue;
        }

        let trinket = parse_line(line, ln)?;
        let id: usize = trinket.id.parse().map_err(|_| Error::InvalidId {
            line: ln,
            id: trinket.id.clone(),
        })?;

        if id == 0 || id > capacity {
            return Err(Error::IdOutOfRange {
                line: ln,
                id,
                capacity,
            });
        }

        let slot = &mut table.trinkets[id - 1];
        if slot.is_some() && policy == DuplicatePolicy::Reject {
            return Err(Error::DuplicateId { line: ln, id });
        }

        if let Some(previous) = slot.replace(trinket) {
            warn!(
                "line {}: id {} overwrites earlier trinket '{}'",
                ln, id, previous.name
            );
            overwritten.push(Overwritten {
                line: ln,
                id,
                previous,
            });
        }
    }

    Ok((table, overwritten))
}
