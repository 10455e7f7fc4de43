use crate::config::NamePolicy;
use crate::domain::participant::Participant;
use crate::error::{Result, SettleError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRecord {
    group: String,
    participant: String,
    #[serde(default)]
    name: Option<String>,
}

/// One roster row. `group_name`, when present, is the group's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub group: String,
    pub participant: Participant,
    pub group_name: Option<String>,
}

/// Reads `group,participant[,name]` rows that define each group's roster.
pub struct RosterReader<R: Read> {
    reader: csv::Reader<R>,
    names: NamePolicy,
}

impl<R: Read> RosterReader<R> {
    pub fn new(source: R, names: NamePolicy) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader, names }
    }

    pub fn members(self) -> impl Iterator<Item = Result<RosterEntry>> {
        let names = self.names;
        self.reader
            .into_deserialize::<RosterRecord>()
            .map(move |result| {
                let record = result.map_err(SettleError::from)?;
                let participant = names.participant(&record.participant)?;
                Ok(RosterEntry {
                    group: record.group,
                    participant,
                    group_name: record.name.filter(|n| !n.is_empty()),
                })
            })
    }
}
