//! Case loading.
//!
//! Two input formats are supported. The plain-text format is a case count
//! `t` followed by `t` blocks of `n m` and `n` integers, `-1` marking a
//! free position. JSON case files hold an array of objects like
//! `{"domain": 3, "values": [0, null, 2]}`, `null` marking a free
//! position.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// One test case: the value domain size `m` and the sequence, `None`
/// marking a free position.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub domain: u32,
    pub values: Vec<Option<u32>>,
}

impl Case {
    /// Check the bounds the solver relies on.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() || self.values.len() % 2 == 0 {
            bail!(
                "sequence length must be odd and positive, got {}",
                self.values.len()
            );
        }
        if self.domain == 0 {
            bail!("domain size must be positive");
        }
        let free = self.values.iter().filter(|value| value.is_none()).count();
        if free + 1 >= modp::MAX_DEGREE {
            bail!(
                "at most {} free positions are supported",
                modp::MAX_DEGREE - 2
            );
        }
        for &value in self.values.iter().flatten() {
            if value >= self.domain {
                bail!("value {value} outside the domain [0, {})", self.domain);
            }
        }
        Ok(())
    }
}

/// Parse the plain-text format.
pub fn parse_plain(input: &str) -> Result<Vec<Case>> {
    let mut tokens = input.split_whitespace();
    let mut next = |what: &str| -> Result<i64> {
        tokens
            .next()
            .with_context(|| format!("unexpected end of input reading {what}"))?
            .parse()
            .with_context(|| format!("invalid {what}"))
    };

    let count = next("case count")?;
    let mut cases = Vec::new();
    for _ in 0..count {
        let n = next("sequence length")?;
        let m = next("domain size")?;
        if n <= 0 || m <= 0 {
            bail!("sequence length and domain size must be positive");
        }
        let values = (0..n)
            .map(|_| {
                Ok(match next("sequence entry")? {
                    -1 => None,
                    value if (0..m).contains(&value) => Some(value as u32),
                    value => bail!("sequence entry {value} outside [0, {m})"),
                })
            })
            .collect::<Result<_>>()?;
        let case = Case {
            domain: m as u32,
            values,
        };
        case.validate()?;
        cases.push(case);
    }
    Ok(cases)
}

/// Load cases from `path`: `.json` files hold the JSON format, anything
/// else the plain-text format.
pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if path.extension().map_or(false, |ext| ext == "json") {
        let cases: Vec<Case> = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        for case in &cases {
            case.validate()?;
        }
        Ok(cases)
    } else {
        parse_plain(&contents)
    }
}
