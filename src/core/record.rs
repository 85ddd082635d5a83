use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const ID_SEPARATOR: char = '|';
const ID_PARTS: usize = 3;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DNSRecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    PTR,
    NAPTR,
    SRV,
    TXT,
    SPF,
}

impl DNSRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DNSRecordType::A => "A",
            DNSRecordType::AAAA => "AAAA",
            DNSRecordType::CNAME => "CNAME",
            DNSRecordType::MX => "MX",
            DNSRecordType::NS => "NS",
            DNSRecordType::PTR => "PTR",
            DNSRecordType::NAPTR => "NAPTR",
            DNSRecordType::SRV => "SRV",
            DNSRecordType::TXT => "TXT",
            DNSRecordType::SPF => "SPF",
        }
    }
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DNSRecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(DNSRecordType::A),
            "AAAA" => Ok(DNSRecordType::AAAA),
            "CNAME" => Ok(DNSRecordType::CNAME),
            "MX" => Ok(DNSRecordType::MX),
            "NS" => Ok(DNSRecordType::NS),
            "PTR" => Ok(DNSRecordType::PTR),
            "NAPTR" => Ok(DNSRecordType::NAPTR),
            "SRV" => Ok(DNSRecordType::SRV),
            "TXT" => Ok(DNSRecordType::TXT),
            "SPF" => Ok(DNSRecordType::SPF),
            _ => Err(Error::InvalidInput(format!("Unknown record type: {s}"))),
        }
    }
}

/// A record as reported by the provider. Only `record`, `record_type` and
/// `value` take part in identity; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSRecord {
    pub record: String,
    pub record_type: DNSRecordType,
    pub value: String,
    pub comment: String,
    pub account_id: String,
    pub zone: String,
    pub editable: bool,
}

impl DNSRecord {
    /// Whether this record is the entity addressed by `input`.
    ///
    /// Values also match when they differ only by a single trailing dot,
    /// since the provider canonicalizes some values (CNAME targets in
    /// particular) by appending one.
    pub fn matches(&self, input: &DNSRecordInput) -> bool {
        self.record == input.record
            && self.record_type == input.record_type
            && values_match(&self.value, &input.value)
    }
}

fn values_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (a.strip_suffix('.'), b.strip_suffix('.')) {
        (Some(trimmed), None) => trimmed == b,
        (None, Some(trimmed)) => a == trimmed,
        _ => false,
    }
}

/// The identity triple used to add, remove or look up a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DNSRecordInput {
    pub record: String,
    pub record_type: DNSRecordType,
    pub value: String,
    /// Only sent on add.
    pub comment: Option<String>,
}

impl DNSRecordInput {
    pub fn new(
        record: impl Into<String>,
        record_type: DNSRecordType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record: record.into(),
            record_type,
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Stable resource id in the form `TYPE|record|value`.
    pub fn to_id(&self) -> String {
        format!(
            "{}{ID_SEPARATOR}{}{ID_SEPARATOR}{}",
            self.record_type, self.record, self.value
        )
    }

    pub fn from_id(id: &str) -> Result<Self, Error> {
        // The value is last and may itself contain the separator (TXT).
        let parts: Vec<&str> = id.splitn(ID_PARTS, ID_SEPARATOR).collect();
        if parts.len() != ID_PARTS {
            return Err(Error::InvalidInput(format!(
                "could not determine record from id: {id}"
            )));
        }
        let record_type = parts[0].parse()?;
        Ok(Self::new(parts[1], record_type, parts[2]))
    }
}
