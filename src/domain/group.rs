use super::expense::SharedExpense;
use super::participant::Participant;
use std::collections::HashMap;

/// A settlement context: a roster plus the expenses shared inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub id: String,
    /// Display name; the id unless one was given.
    pub name: String,
    pub participants: Vec<Participant>,
    pub expenses: Vec<SharedExpense>,
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a participant to the roster unless already present.
    pub fn add_participant(&mut self, participant: Participant) {
        if !self.participants.contains(&participant) {
            self.participants.push(participant);
        }
    }

    /// Fills an empty roster from the expenses: payer first, then involved,
    /// in order of first appearance.
    pub fn infer_roster(&mut self) {
        if !self.participants.is_empty() {
            return;
        }
        let names: Vec<Participant> = self
            .expenses
            .iter()
            .flat_map(|e| std::iter::once(&e.payer).chain(e.involved.iter()))
            .cloned()
            .collect();
        for name in names {
            self.add_participant(name);
        }
    }
}

/// Collects groups in first-seen order while records stream in.
#[derive(Debug, Default)]
pub struct GroupBook {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl GroupBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn group_mut(&mut self, id: &str) -> &mut Group {
        let idx = match self.index.get(id) {
            Some(&idx) => idx,
            None => {
                self.groups.push(Group::new(id));
                self.index.insert(id.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }

    pub fn add_participant(&mut self, group: &str, participant: Participant) {
        self.group_mut(group).add_participant(participant);
    }

    pub fn set_name(&mut self, group: &str, name: impl Into<String>) {
        self.group_mut(group).name = name.into();
    }

    pub fn add_expense(&mut self, group: &str, expense: SharedExpense) {
        self.group_mut(group).expenses.push(expense);
    }

    /// Finishes the book. Groups without an explicit roster get one inferred.
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
            .into_iter()
            .map(|mut g| {
                g.infer_roster();
                g
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_infer_roster_keeps_first_appearance_order() {
        let mut group = Group::new("trip");
        group
            .expenses
            .push(SharedExpense::new("1", dec!(10), "C", ["A", "C"]));
        group
            .expenses
            .push(SharedExpense::new("2", dec!(10), "B", ["A", "D"]));
        group.infer_roster();

        let names: Vec<&str> = group.participants.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_explicit_roster_is_not_overwritten() {
        let mut book = GroupBook::new();
        book.add_participant("flat", Participant::from("Z"));
        book.add_expense("flat", SharedExpense::new("1", dec!(10), "A", ["A"]));
        book.add_expense("trip", SharedExpense::new("2", dec!(10), "B", ["B"]));

        let groups = book.into_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, "flat");
        assert_eq!(groups[0].participants, vec![Participant::from("Z")]);
        assert_eq!(groups[1].participants, vec![Participant::from("B")]);
    }

    #[test]
    fn test_name_defaults_to_id() {
        let mut book = GroupBook::new();
        book.add_expense("trip", SharedExpense::new("1", dec!(10), "A", ["A"]));
        book.add_expense("flat", SharedExpense::new("2", dec!(10), "B", ["B"]));
        book.set_name("flat", "Flat 3B");

        let groups = book.into_groups();
        assert_eq!(groups[0].name, "trip");
        assert_eq!(groups[1].id, "flat");
        assert_eq!(groups[1].name, "Flat 3B");
        assert_eq!(Group::new("g").with_name("Game night").name, "Game night");
    }

    #[test]
    fn test_duplicate_roster_entries_collapse() {
        let mut group = Group::new("g");
        group.add_participant("A".into());
        group.add_participant("A".into());
        assert_eq!(group.participants.len(), 1);
    }
}
