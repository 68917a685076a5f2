//! Playback speed presets.
//!
//! The session never sleeps on its own; the host reads
//! [`Speed::interval`] and calls [`Pathfinder::step`](crate::Pathfinder::step)
//! once per tick.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pathgrid_core::Error;
use serde::{Deserialize, Serialize};

/// Delay between two search steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    #[serde(rename = "5x")]
    Times5,
    #[serde(rename = "3x")]
    Times3,
    #[serde(rename = "2x")]
    Times2,
    #[default]
    #[serde(rename = "1x")]
    Times1,
    #[serde(rename = "1/2x")]
    Half,
    #[serde(rename = "1/3x")]
    Third,
    #[serde(rename = "1/5x")]
    Fifth,
}

impl Speed {
    /// Fastest first.
    pub const ALL: [Speed; 7] = [
        Speed::Times5,
        Speed::Times3,
        Speed::Times2,
        Speed::Times1,
        Speed::Half,
        Speed::Third,
        Speed::Fifth,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Speed::Times5 => "5x",
            Speed::Times3 => "3x",
            Speed::Times2 => "2x",
            Speed::Times1 => "1x",
            Speed::Half => "1/2x",
            Speed::Third => "1/3x",
            Speed::Fifth => "1/5x",
        }
    }

    pub const fn interval(self) -> Duration {
        let ms = match self {
            Speed::Times5 => 12,
            Speed::Times3 => 20,
            Speed::Times2 => 30,
            Speed::Times1 => 60,
            Speed::Half => 120,
            Speed::Third => 180,
            Speed::Fifth => 300,
        };
        Duration::from_millis(ms)
    }

    /// The next faster preset, saturating at `5x`.
    pub fn faster(self) -> Speed {
        let i = self.position();
        Speed::ALL[i.saturating_sub(1)]
    }

    /// The next slower preset, saturating at `1/5x`.
    pub fn slower(self) -> Speed {
        let i = self.position();
        Speed::ALL[(i + 1).min(Speed::ALL.len() - 1)]
    }

    fn position(self) -> usize {
        Speed::ALL.iter().position(|&s| s == self).unwrap_or(3)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Speed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Speed::ALL
            .into_iter()
            .find(|speed| speed.label() == s)
            .ok_or_else(|| Error::UnknownSpeed(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_fastest_first() {
        let ms: Vec<u128> = Speed::ALL.iter().map(|s| s.interval().as_millis()).collect();
        assert_eq!(ms, vec![12, 20, 30, 60, 120, 180, 300]);
        assert_eq!(Speed::default(), Speed::Times1);
    }

    #[test]
    fn labels_parse_back() {
        for speed in Speed::ALL {
            assert_eq!(speed.label().parse::<Speed>(), Ok(speed));
        }
        assert_eq!(
            "10x".parse::<Speed>(),
            Err(Error::UnknownSpeed("10x".into()))
        );
    }

    #[test]
    fn faster_and_slower_saturate() {
        assert_eq!(Speed::Times1.faster(), Speed::Times2);
        assert_eq!(Speed::Times1.slower(), Speed::Half);
        assert_eq!(Speed::Times5.faster(), Speed::Times5);
        assert_eq!(Speed::Fifth.slower(), Speed::Fifth);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Speed::Half).unwrap(), "\"1/2x\"");
        let s: Speed = serde_json::from_str("\"3x\"").unwrap();
        assert_eq!(s, Speed::Times3);
    }
}
