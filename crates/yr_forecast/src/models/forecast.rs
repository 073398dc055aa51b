use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

// parsed form of a yr.no varsel.xml document
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDocument {
    pub location_name: String,
    pub intervals: Vec<TimeInterval>,
    pub related_links: Vec<Link>,
    pub attribution: Credit,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Kept verbatim from the feed, e.g. `2014-06-07T16:00:00`
    pub from: String,
    pub to: String,
    pub symbol: WeatherSymbol,
    /// Degrees celsius
    pub temperature: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSymbol {
    pub number: i64,
    pub variation: String,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub text: String,
    pub url: String,
}

impl ForecastDocument {
    /// The interval covering "now", which is the first one the feed lists.
    ///
    /// Returns [`Error::EmptyForecast`] when the document holds no intervals.
    pub fn current(&self) -> Result<&TimeInterval, Error> {
        self.intervals.first().ok_or(Error::EmptyForecast)
    }

    pub fn describe(&self) -> Result<String, Error> {
        let current = self.current()?;
        Ok(format!(
            "Current weather for {}: {}, {} degrees C",
            self.location_name, current.symbol.name, current.temperature
        ))
    }

    pub fn credits(&self) -> &Credit {
        &self.attribution
    }
}

impl TimeInterval {
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}: {} deg.", self.from, self.to, self.temperature)
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.url)
    }
}
