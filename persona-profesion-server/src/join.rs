//! Join engine - resolves stored assignments against upstream records
//!
//! A [`Lookup`] indexes each upstream collection by its natural ID once per
//! read. Assignments whose person, profession, or status cannot be resolved
//! are dropped silently, so every view maps to exactly one stored row.

use std::collections::HashMap;

use crate::models::{
    Assignment, CompositeView, Keyed, Person, Profession, Snapshot, Status, SummaryView,
};

/// ID-indexed view over a [`Snapshot`]
pub struct Lookup<'a> {
    persons: HashMap<&'a str, &'a Person>,
    professions: HashMap<&'a str, &'a Profession>,
    statuses: HashMap<&'a str, &'a Status>,
}

/// The three records an assignment points at
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub person: &'a Person,
    pub profession: &'a Profession,
    pub status: &'a Status,
}

impl<'a> Lookup<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            persons: index(&snapshot.persons),
            professions: index(&snapshot.professions),
            statuses: index(&snapshot.statuses),
        }
    }

    /// Resolve all three references, or `None` if any one dangles.
    pub fn resolve(&self, assignment: &Assignment) -> Option<Resolved<'a>> {
        Some(Resolved {
            person: self.persons.get(assignment.person_id.as_str()).copied()?,
            profession: self
                .professions
                .get(assignment.profession_id.as_str())
                .copied()?,
            status: self.statuses.get(assignment.status_id.as_str()).copied()?,
        })
    }

    /// Pair every resolvable assignment with its records, keeping store order.
    pub fn join<'r>(
        &'r self,
        rows: &'r [Assignment],
    ) -> impl Iterator<Item = (&'r Assignment, Resolved<'a>)> + 'r {
        rows.iter()
            .filter_map(move |row| self.resolve(row).map(|resolved| (row, resolved)))
    }
}

/// Later duplicates replace earlier ones.
fn index<T: Keyed>(items: &[T]) -> HashMap<&str, &T> {
    items.iter().map(|item| (item.key(), item)).collect()
}

/// Full-object mode, used when listing every assignment.
pub fn compose_full(snapshot: &Snapshot, rows: &[Assignment]) -> Vec<CompositeView> {
    let lookup = Lookup::new(snapshot);
    let views: Vec<CompositeView> = lookup
        .join(rows)
        .map(|(row, r)| CompositeView {
            person: r.person.clone(),
            profession: r.profession.clone(),
            assigned_on: row.assigned_on,
            status: r.status.clone(),
        })
        .collect();

    log_dropped(rows.len(), views.len());
    views
}

/// Summary mode, used when listing one person's assignments.
pub fn compose_summary(snapshot: &Snapshot, rows: &[Assignment]) -> Vec<SummaryView> {
    let lookup = Lookup::new(snapshot);
    let views: Vec<SummaryView> = lookup
        .join(rows)
        .map(|(row, r)| SummaryView {
            person_id: row.person_id.clone(),
            person_name: r.person.full_name(),
            profession_id: row.profession_id.clone(),
            profession_name: r.profession.display_name().to_owned(),
            assigned_on: row.assigned_on,
            status_id: row.status_id.clone(),
            status_name: r.status.display_name().to_owned(),
        })
        .collect();

    log_dropped(rows.len(), views.len());
    views
}

fn log_dropped(stored: usize, emitted: usize) {
    if emitted < stored {
        tracing::debug!(
            stored,
            emitted,
            dropped = stored - emitted,
            "assignments with unresolved references skipped"
        );
    }
}
