use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Ligand selection cannot be empty.")]
    EmptySelection,

    #[error("Invalid atom index '{0}'. Expected a non-negative integer.")]
    InvalidIndex(String),

    #[error("Invalid range '{start}-{end}'. The start must not exceed the end.")]
    ReversedRange { start: usize, end: usize },

    #[error("Empty component in ligand selection '{0}'.")]
    EmptyComponent(String),
}

/// Ligand atoms given as comma-separated indices and inclusive ranges, e.g. `0-2,5`.
///
/// Indices are kept sorted and unique; range checks against the system happen in
/// the factory once the system is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LigandSelection(Vec<usize>);

impl LigandSelection {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

fn parse_index(s: &str) -> Result<usize, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidIndex(s.trim().to_string()))
}

impl FromStr for LigandSelection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::EmptySelection);
        }

        let mut indices = Vec::new();
        for component in s.split(',') {
            let component = component.trim();
            if component.is_empty() {
                return Err(ParseError::EmptyComponent(s.to_string()));
            }
            match component.split_once('-') {
                Some((start, end)) => {
                    let (start, end) = (parse_index(start)?, parse_index(end)?);
                    if start > end {
                        return Err(ParseError::ReversedRange { start, end });
                    }
                    indices.extend(start..=end);
                }
                None => indices.push(parse_index(component)?),
            }
        }
        indices.sort_unstable();
        indices.dedup();
        Ok(Self(indices))
    }
}

impl fmt::Display for LigandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut iter = self.0.iter().copied().peekable();
        while let Some(start) = iter.next() {
            let mut end = start;
            while iter.peek() == Some(&(end + 1)) {
                end += 1;
                iter.next();
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            if start == end {
                write!(f, "{start}")?;
            } else {
                write!(f, "{start}-{end}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_indices_and_ranges() {
        let selection: LigandSelection = "0-2,5".parse().unwrap();
        assert_eq!(selection.indices(), &[0, 1, 2, 5]);
    }

    #[test]
    fn sorts_and_deduplicates_overlapping_components() {
        let selection: LigandSelection = "7, 3-5 ,4,3".parse().unwrap();
        assert_eq!(selection.indices(), &[3, 4, 5, 7]);
    }

    #[test]
    fn single_element_range_is_accepted() {
        let selection: LigandSelection = "4-4".parse().unwrap();
        assert_eq!(selection.indices(), &[4]);
    }

    #[test]
    fn rejects_malformed_selections() {
        assert_eq!("".parse::<LigandSelection>(), Err(ParseError::EmptySelection));
        assert_eq!(
            "1,,2".parse::<LigandSelection>(),
            Err(ParseError::EmptyComponent("1,,2".to_string()))
        );
        assert_eq!(
            "a-3".parse::<LigandSelection>(),
            Err(ParseError::InvalidIndex("a".to_string()))
        );
        assert_eq!(
            "-1".parse::<LigandSelection>(),
            Err(ParseError::InvalidIndex("".to_string()))
        );
        assert_eq!(
            "5-2".parse::<LigandSelection>(),
            Err(ParseError::ReversedRange { start: 5, end: 2 })
        );
    }

    #[test]
    fn display_compresses_consecutive_runs() {
        let selection: LigandSelection = "9,0,1,2,5,6".parse().unwrap();
        assert_eq!(selection.to_string(), "0-2,5-6,9");
    }
}
