//! Generic editing operations over an ordered list of entries
//!
//! Experience and education lists share these operations. Every function is
//! total: out-of-range indices and missing drop destinations degrade to
//! no-ops. The returned `bool` reports whether the list changed.

use super::model::{EducationEntry, EducationField, ExperienceEntry, ExperienceField};

/// A record that lives in an ordered resume list
pub trait Entry: Clone + Default {
    /// Typed field selector for this record
    type Field: Copy;

    /// A new entry with every field empty
    fn blank() -> Self {
        Self::default()
    }

    fn field(&self, field: Self::Field) -> &str;

    fn field_mut(&mut self, field: Self::Field) -> &mut String;
}

impl Entry for ExperienceEntry {
    type Field = ExperienceField;

    fn field(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Title => &self.title,
            ExperienceField::Company => &self.company,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
            ExperienceField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Title => &mut self.title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        }
    }
}

impl Entry for EducationEntry {
    type Field = EducationField;

    fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Field => &self.field,
            EducationField::School => &self.school,
            EducationField::GraduationYear => &self.graduation_year,
        }
    }

    fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::Field => &mut self.field,
            EducationField::School => &mut self.school,
            EducationField::GraduationYear => &mut self.graduation_year,
        }
    }
}

/// Push a blank entry onto the end of the list
pub fn append<E: Entry>(list: &mut Vec<E>) -> bool {
    list.push(E::blank());
    true
}

/// Delete the entry at `index`, if there is one
pub fn remove<E: Entry>(list: &mut Vec<E>, index: usize) -> bool {
    if index >= list.len() {
        return false;
    }
    list.remove(index);
    true
}

/// Move the entry at `from` to position `to`, shifting the entries between
/// them by one place.
///
/// `to == None` is a cancelled drag and leaves the list alone. A destination
/// past the end is clamped to the last position.
pub fn reorder<E: Entry>(list: &mut Vec<E>, from: usize, to: Option<usize>) -> bool {
    let Some(to) = to else {
        return false;
    };
    if from >= list.len() {
        return false;
    }
    let to = to.min(list.len() - 1);
    if from == to {
        return false;
    }
    let item = list.remove(from);
    list.insert(to, item);
    true
}

/// Replace one field of the entry at `index`
pub fn set_field<E: Entry>(list: &mut [E], index: usize, field: E::Field, value: &str) -> bool {
    let Some(entry) = list.get_mut(index) else {
        return false;
    };
    let slot = entry.field_mut(field);
    if slot == value {
        return false;
    }
    *slot = value.to_string();
    true
}
