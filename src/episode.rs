use crate::config::ConfigError;
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

pub type EpisodeNumber = u32;

/// Inclusive range of episode numbers that are absent from the source material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludedRange {
    start: EpisodeNumber,
    end: EpisodeNumber,
}

impl ExcludedRange {
    pub fn new(start: EpisodeNumber, end: EpisodeNumber) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidRange {
            value: format!("{start}-{end}"),
            reason: reason.to_string(),
        };

        if start == 0 {
            return Err(invalid("episode numbers start at 1"));
        }
        if start > end {
            return Err(invalid("start is greater than end"));
        }
        // The counter has to be able to step past the end of every range
        if end == EpisodeNumber::MAX {
            return Err(invalid("end is out of range"));
        }

        Ok(Self { start, end })
    }

    pub const fn contains(&self, number: EpisodeNumber) -> bool {
        self.start <= number && number <= self.end
    }
}

impl FromStr for ExcludedRange {
    type Err = ConfigError;

    /// Parses `N` or `N-M`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidRange {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let Some((_, start, end)) = regex_captures!(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$", value)
        else {
            return Err(invalid("expected N or N-M"));
        };

        let start: EpisodeNumber = start.parse().map_err(|_| invalid("number too large"))?;
        let end: EpisodeNumber = if end.is_empty() {
            start
        } else {
            end.parse().map_err(|_| invalid("number too large"))?
        };

        Self::new(start, end).map_err(|e| match e {
            ConfigError::InvalidRange { reason, .. } => invalid(&reason),
            other => other,
        })
    }
}

impl fmt::Display for ExcludedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Set of missing-episode ranges. A number is excluded if any range holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    ranges: Vec<ExcludedRange>,
}

impl Exclusions {
    pub const fn new(ranges: Vec<ExcludedRange>) -> Self {
        Self { ranges }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the first number at or after `number` that no range excludes.
    ///
    /// Terminates because every range ends below `EpisodeNumber::MAX` and each
    /// step moves strictly past the end of a containing range.
    pub fn next_allowed(&self, mut number: EpisodeNumber) -> EpisodeNumber {
        while let Some(range) = self.ranges.iter().find(|r| r.contains(number)) {
            number = range.end + 1;
        }
        number
    }
}

impl fmt::Display for Exclusions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}
