//! Consistency checks over parsed tells and trinkets. Checks never fail a
//! conversion; they only report.
use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::tell::Tell;
use crate::model::trinket::{Overwritten, TrinketTable};

mod hash;
mod normalize;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QaIssue {
    pub location: String,
    pub code: String,
    pub message: String,
}

impl QaIssue {
    fn new(location: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            location: location.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

pub fn run_tells(tells: &[Tell]) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();
    let han = Regex::new(r"\p{Han}").expect("static regex");

    // fingerprint -> 1-based index of first occurrence
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (i, t) in tells.iter().enumerate() {
        let n = i + 1;
        let location = format!("tell #{n}");

        if t.en.is_empty() {
            issues.push(QaIssue::new(&location, "EMPTY_SOURCE", "source phrase is empty"));
        }

        if t.ch.is_empty() {
            issues.push(QaIssue::new(&location, "EMPTY_TARGET", "target phrase is empty"));
            continue;
        }

        if t.ch == t.en {
            issues.push(QaIssue::new(
                &location,
                "SAME_AS_SOURCE",
                "target is identical to source",
            ));
        } else if !han.is_match(&t.ch) {
            issues.push(QaIssue::new(
                &location,
                "TARGET_WITHOUT_HAN",
                format!("target '{}' contains no Chinese characters", t.ch),
            ));
        }

        if t.en.is_empty() {
            continue;
        }

        let fp = hash::fingerprint(&t.en);
        if let Some(first) = seen.get(&fp) {
            issues.push(QaIssue::new(
                &location,
                "DUPLICATE_SOURCE",
                format!("source repeats tell #{first}"),
            ));
        } else {
            seen.insert(fp, n);
        }
    }

    issues
}

/// `overwritten` lists the records later duplicate ids replaced, as returned
/// by `parsers::trinkets::parse_with_overwrites`.
pub fn run_trinkets(table: &TrinketTable, overwritten: &[Overwritten]) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();

    for o in overwritten {
        issues.push(QaIssue::new(
            &format!("trinket #{}", o.id),
            "DUPLICATE_ID",
            format!("line {} replaced earlier trinket '{}'", o.line, o.previous.name),
        ));
    }

    for (i, slot) in table.trinkets.iter().enumerate() {
        let location = format!("trinket #{}", i + 1);

        let Some(t) = slot else {
            issues.push(QaIssue::new(&location, "EMPTY_SLOT", "no line provided this id"));
            continue;
        };

        if t.name.is_empty() {
            issues.push(QaIssue::new(&location, "EMPTY_NAME", "name is empty"));
        }
        if t.description.is_empty() {
            issues.push(QaIssue::new(
                &location,
                "EMPTY_DESCRIPTION",
                "description is empty",
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trinket::Trinket;

    fn codes(issues: &[QaIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn clean_tells_have_no_issues() {
        let tells = vec![Tell::new("Good luck", "好运"), Tell::new("Beware", "小心")];
        assert!(run_tells(&tells).is_empty());
    }

    #[test]
    fn flags_empty_and_untranslated() {
        let tells = vec![
            Tell::new("", "好运"),
            Tell::new("Beware", ""),
            Tell::new("OK", "OK"),
            Tell::new("Hello", "hello there"),
        ];
        let issues = run_tells(&tells);

        assert_eq!(
            codes(&issues),
            vec![
                "EMPTY_SOURCE",
                "EMPTY_TARGET",
                "SAME_AS_SOURCE",
                "TARGET_WITHOUT_HAN"
            ]
        );
        assert_eq!(issues[1].location, "tell #2");
    }

    #[test]
    fn flags_repeated_source() {
        let tells = vec![
            Tell::new("Good luck", "好运"),
            Tell::new("Beware", "小心"),
            Tell::new("  good   LUCK ", "祝你好运"),
        ];
        let issues = run_tells(&tells);

        assert_eq!(codes(&issues), vec!["DUPLICATE_SOURCE"]);
        assert_eq!(issues[0].location, "tell #3");
        assert_eq!(issues[0].message, "source repeats tell #1");
    }

    #[test]
    fn trinket_checks() {
        let mut table = TrinketTable::with_capacity(3);
        table.trinkets[0] = Some(Trinket {
            id: "1".into(),
            name: "Coin".into(),
            description: "".into(),
        });
        table.trinkets[2] = Some(Trinket {
            id: "3".into(),
            name: "".into(),
            description: "Shiny".into(),
        });
        let issues = run_trinkets(&table, &[]);

        assert_eq!(
            codes(&issues),
            vec!["EMPTY_DESCRIPTION", "EMPTY_SLOT", "EMPTY_NAME"]
        );
        assert_eq!(issues[1].location, "trinket #2");
    }

    #[test]
    fn replaced_trinkets_are_reported() {
        let old = Trinket {
            id: "1".into(),
            name: "Old Coin".into(),
            description: "a".into(),
        };
        let mut table = TrinketTable::with_capacity(1);
        table.trinkets[0] = Some(Trinket {
            name: "New Coin".into(),
            ..old.clone()
        });
        let overwritten = vec![Overwritten {
            line: 4,
            id: 1,
            previous: old,
        }];

        let issues = run_trinkets(&table, &overwritten);

        assert_eq!(codes(&issues), vec!["DUPLICATE_ID"]);
        assert_eq!(issues[0].location, "trinket #1");
        assert_eq!(issues[0].message, "line 4 replaced earlier trinket 'Old Coin'");
    }
}
