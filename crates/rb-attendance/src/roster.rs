//! Students and the section roster.
//!
//! Ids are assigned once and never reused, so a deleted student's ledger
//! entries can stay behind without ever attaching to someone new.

use rb_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Identifier of a student within one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    /// Return the raw id value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable id, unique within the register.
    pub id: StudentId,
    /// Display name; mutable via [`Roster::rename`].
    pub name: String,
}

/// The students of one section, in enrollment order.
///
/// Serializes as a plain array of [`Student`] records; the id counter is
/// re-derived on load so ids are never reassigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Student>", into = "Vec<Student>")]
pub struct Roster {
    students: Vec<Student>,
    next_id: u32,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student, returning the freshly assigned id.
    ///
    /// The name is stored trimmed; a blank name is rejected and no student
    /// is created.
    pub fn add(&mut self, name: &str) -> Result<StudentId> {
        let trimmed = name.trim();
        rb_core::ensure!(!trimmed.is_empty(), "student name must not be blank");
        self.next_id += 1;
        let id = StudentId(self.next_id);
        self.students.push(Student {
            id,
            name: trimmed.to_owned(),
        });
        Ok(id)
    }

    /// Remove the student with the given id.
    ///
    /// Returns `true` if a student was removed.  Ledger entries are left
    /// untouched; a removed student simply stops appearing in stats and
    /// export output.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        self.students.len() < before
    }

    /// Rename a student.
    ///
    /// The new name is trimmed and must not be blank; the id must be on the
    /// roster.
    pub fn rename(&mut self, id: StudentId, name: &str) -> Result<()> {
        let trimmed = name.trim();
        rb_core::ensure!(!trimmed.is_empty(), "student name must not be blank");
        match self.students.iter_mut().find(|s| s.id == id) {
            Some(student) => {
                student.name = trimmed.to_owned();
                Ok(())
            }
            None => Err(Error::InvalidArgument(format!(
                "no student with id {id} on the roster"
            ))),
        }
    }

    /// Look up a student by id.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Return `true` if the id is on the roster.
    pub fn contains(&self, id: StudentId) -> bool {
        self.get(id).is_some()
    }

    /// All students in enrollment order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Iterate over the students in enrollment order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Return `true` if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl From<Vec<Student>> for Roster {
    fn from(students: Vec<Student>) -> Self {
        let next_id = students.iter().map(|s| s.id.0).max().unwrap_or(0);
        Self { students, next_id }
    }
}

impl From<Roster> for Vec<Student> {
    fn from(roster: Roster) -> Self {
        roster.students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_fresh_ids_in_order() {
        let mut roster = Roster::new();
        let a = roster.add("Ana Reyes").unwrap();
        let b = roster.add("Ben Santos").unwrap();
        assert_ne!(a, b);
        let names: Vec<_> = roster.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ana Reyes", "Ben Santos"]);
    }

    #[test]
    fn blank_name_rejected() {
        let mut roster = Roster::new();
        assert!(roster.add("").is_err());
        assert!(roster.add("   ").is_err());
        assert!(roster.add("\t\n").is_err());
        assert!(roster.is_empty());
    }

    #[test]
    fn name_is_trimmed() {
        let mut roster = Roster::new();
        let id = roster.add("  Carla Lim  ").unwrap();
        assert_eq!(roster.get(id).unwrap().name, "Carla Lim");
    }

    #[test]
    fn remove_keeps_others() {
        let mut roster = Roster::new();
        let a = roster.add("Ana Reyes").unwrap();
        let b = roster.add("Ben Santos").unwrap();
        assert!(roster.remove(a));
        assert!(!roster.remove(a));
        assert!(roster.contains(b));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn ids_never_reused() {
        let mut roster = Roster::new();
        let a = roster.add("Ana Reyes").unwrap();
        roster.remove(a);
        let b = roster.add("Ben Santos").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rename_validates() {
        let mut roster = Roster::new();
        let id = roster.add("Ana Reyes").unwrap();
        roster.rename(id, " Ana R. Reyes ").unwrap();
        assert_eq!(roster.get(id).unwrap().name, "Ana R. Reyes");
        assert!(roster.rename(id, "  ").is_err());
        assert!(roster.rename(StudentId::from_raw(999), "Ghost").is_err());
    }

    #[test]
    fn load_continues_id_sequence() {
        let roster: Roster = serde_json::from_str(
            r#"[ { "id": 3, "name": "Ana Reyes" }, { "id": 7, "name": "Ben Santos" } ]"#,
        )
        .unwrap();
        let mut roster = roster;
        let id = roster.add("Carla Lim").unwrap();
        assert_eq!(id.raw(), 8);
    }
}
