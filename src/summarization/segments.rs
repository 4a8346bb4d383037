use crate::database::FeedbackFilter;
use crate::database::entities::Sentiment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service name that matches feedback of every service type
pub const OVERALL_SERVICE: &str = "Overall";

/// Location label stored for summaries spanning every location
pub const ALL_LOCATIONS: &str = "All";

/// Sentiment slice a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryType {
    Overall,
    Positive,
    Negative,
}

impl SummaryType {
    pub const ALL: [SummaryType; 3] = [
        SummaryType::Overall,
        SummaryType::Positive,
        SummaryType::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::Overall => "Overall",
            SummaryType::Positive => "Positive",
            SummaryType::Negative => "Negative",
        }
    }

    /// Lowercase form used inside prompts and placeholders
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            SummaryType::Overall => "overall",
            SummaryType::Positive => "positive",
            SummaryType::Negative => "negative",
        }
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        match self {
            SummaryType::Overall => None,
            SummaryType::Positive => Some(Sentiment::Positive),
            SummaryType::Negative => Some(Sentiment::Negative),
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overall" => Ok(SummaryType::Overall),
            "positive" => Ok(SummaryType::Positive),
            "negative" => Ok(SummaryType::Negative),
            _ => Err(format!(
                "Unknown summary type: {}. Available: Overall, Positive, Negative",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    All,
    Named(String),
}

impl Location {
    /// Value stored in the summaries table
    pub fn label(&self) -> &str {
        match self {
            Location::All => ALL_LOCATIONS,
            Location::Named(name) => name.as_str(),
        }
    }

    /// Location to filter feedback by, `None` for the all-locations pass
    pub fn name(&self) -> Option<&str> {
        match self {
            Location::All => None,
            Location::Named(name) => Some(name.as_str()),
        }
    }
}

/// One (service, summary type, location) combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub service: String,
    pub summary_type: SummaryType,
    pub location: Location,
}

impl Segment {
    pub fn new(service: impl Into<String>, summary_type: SummaryType, location: Location) -> Self {
        Self {
            service: service.into(),
            summary_type,
            location,
        }
    }

    /// Feedback filter selecting the reviews this segment summarizes
    pub fn filter(&self) -> FeedbackFilter {
        FeedbackFilter {
            service_type: (self.service != OVERALL_SERVICE).then(|| self.service.clone()),
            sentiment: self.summary_type.sentiment(),
            issue_location: self.location.name().map(String::from),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.service,
            self.summary_type,
            self.location.label()
        )
    }
}

/// Expand services × summary types × locations into run order.
///
/// Every (service, summary type) pair is first emitted for all locations;
/// then, per service and per summary type, once for each discovered location.
pub fn enumerate_segments(
    services: &[String],
    summary_types: &[SummaryType],
    locations: &[String],
) -> Vec<Segment> {
    let mut segments =
        Vec::with_capacity(services.len() * summary_types.len() * (locations.len() + 1));

    for service in services {
        for summary_type in summary_types {
            segments.push(Segment::new(service.as_str(), *summary_type, Location::All));
        }
    }

    for service in services {
        for summary_type in summary_types {
            for location in locations {
                segments.push(Segment::new(
                    service.as_str(),
                    *summary_type,
                    Location::Named(location.clone()),
                ));
            }
        }
    }

    segments
}
