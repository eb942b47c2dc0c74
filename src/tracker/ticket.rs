use jiff::civil::Date;
use std::cmp::Ordering;
use std::fmt;

/// An issue as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub summary: String,
    pub status: String,
    pub resolved: bool,
}

impl Ticket {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            status: "Open".to_string(),
            resolved: false,
        }
    }

    pub fn resolved(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self.resolved = true;
        self
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary.trim();
        if summary.ends_with('.') {
            write!(f, "{} - {}", self.id, summary)
        } else {
            write!(f, "{} - {}.", self.id, summary)
        }
    }
}

/// A ticket id mentioned in a commit message, e.g. `DATACMNS-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketReference {
    pub id: String,
}

impl TicketReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Project prefix and numeric part, `DATACMNS-12` being `("DATACMNS", 12)`.
    fn sort_key(&self) -> (&str, u64) {
        match self.id.rsplit_once('-') {
            Some((prefix, number)) => (prefix, number.parse().unwrap_or(u64::MAX)),
            None => (self.id.as_str(), u64::MAX),
        }
    }
}

impl Ord for TicketReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for TicketReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TicketReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Rendered list of tickets fixed in one module iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    version: String,
    date: Date,
    tickets: Vec<Ticket>,
}

impl Changelog {
    pub fn new(version: impl Into<String>, date: Date, tickets: Vec<Ticket>) -> Self {
        Self {
            version: version.into(),
            date,
            tickets,
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Prefix of the header line identifying this version regardless of date.
    /// Ends at the opening parenthesis so `1.0.RC1` never matches `1.0.RC10`.
    pub fn marker(&self) -> String {
        format!("Changes in version {} (", self.version)
    }

    pub fn header(&self) -> String {
        format!("{}{})", self.marker(), self.date)
    }
}

impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        writeln!(f, "{header}")?;
        write!(f, "{}", "-".repeat(header.chars().count()))?;
        for ticket in &self.tickets {
            write!(f, "\n* {ticket}")?;
        }
        Ok(())
    }
}
