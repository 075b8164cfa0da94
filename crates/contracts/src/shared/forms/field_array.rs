//! Ordered, bounded collections of sub-records with per-row edit state.
//!
//! The edit flag lives on the row itself, keyed by a stable row id, so
//! there is no parallel flag array that can drift out of lockstep with
//! the data.

use uuid::Uuid;

/// One element of a field array. `editing` defaults to true on creation
/// and flips to false on a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub id: Uuid,
    pub value: T,
    pub editing: bool,
}

impl<T> Row<T> {
    fn editable(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            editing: true,
        }
    }

    fn saved(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            editing: false,
        }
    }
}

/// Result of an [`FieldArray::add`] attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    /// Silent no-op: the collection is at its maximum length.
    AtCapacity,
    /// An existing row failed validation; no row was appended.
    Invalid { index: usize, message: String },
}

/// Ordered collection of homogeneous sub-records with bounded length.
#[derive(Debug, Clone)]
pub struct FieldArray<T> {
    rows: Vec<Row<T>>,
    min: usize,
    max: usize,
}

impl<T: Default + Clone> FieldArray<T> {
    /// Start with `min` default rows, each in edit mode.
    pub fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Self {
            rows: (0..min).map(|_| Row::editable(T::default())).collect(),
            min,
            max,
        }
    }

    /// Load persisted values; loaded rows start in view mode.
    pub fn from_values(values: Vec<T>, min: usize, max: usize) -> Self {
        let mut array = Self {
            rows: values.into_iter().map(Row::saved).collect(),
            min,
            max,
        };
        while array.rows.len() < min {
            array.rows.push(Row::editable(T::default()));
        }
        array
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row<T>> {
        self.rows.get(index)
    }

    /// Mutate one row's value in place (input binding path).
    pub fn update_value(&mut self, index: usize, f: impl FnOnce(&mut T)) {
        if let Some(row) = self.rows.get_mut(index) {
            f(&mut row.value);
        }
    }

    pub fn values(&self) -> Vec<T> {
        self.rows.iter().map(|r| r.value.clone()).collect()
    }

    /// Edit flags in row order. Always the same length as the data by
    /// construction; exposed so callers (and tests) can assert it.
    pub fn edit_flags(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.editing).collect()
    }

    pub fn can_add(&self) -> bool {
        self.rows.len() < self.max
    }

    /// Removal is disabled, not an error, at the minimum length.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > self.min
    }

    /// Append a default editable row. No-op at capacity. Existing rows
    /// are validated as a group first so a new blank row cannot be added
    /// on top of invalid ones.
    pub fn add(&mut self, validate: impl Fn(&T) -> Result<(), String>) -> AddOutcome {
        if !self.can_add() {
            return AddOutcome::AtCapacity;
        }
        for (index, row) in self.rows.iter().enumerate() {
            if let Err(message) = validate(&row.value) {
                return AddOutcome::Invalid { index, message };
            }
        }
        self.rows.push(Row::editable(T::default()));
        AddOutcome::Added
    }

    /// Validate one row; on success it leaves edit mode.
    pub fn save(
        &mut self,
        index: usize,
        validate: impl Fn(&T) -> Result<(), String>,
    ) -> Result<(), String> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| format!("no row at index {}", index))?;
        validate(&row.value)?;
        row.editing = false;
        Ok(())
    }

    /// Re-enter edit mode. Never gated on validity.
    pub fn edit(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.editing = true;
        }
    }

    /// Remove a row. Returns false (and leaves the collection untouched)
    /// at the minimum length or for an out-of-range index.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Dish {
        name: String,
    }

    fn named(name: &str) -> impl Fn(&mut Dish) + '_ {
        move |d: &mut Dish| d.name = name.to_string()
    }

    fn require_name(d: &Dish) -> Result<(), String> {
        if d.name.trim().is_empty() {
            Err("Name is required".into())
        } else {
            Ok(())
        }
    }

    fn always_ok(_: &Dish) -> Result<(), String> {
        Ok(())
    }

    #[test]
    fn starts_at_minimum_in_edit_mode() {
        let array: FieldArray<Dish> = FieldArray::new(1, 6);
        assert_eq!(array.len(), 1);
        assert_eq!(array.edit_flags(), vec![true]);
    }

    #[test]
    fn add_is_noop_at_capacity() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 3);
        array.update_value(0, named("Dal"));
        assert_eq!(array.add(always_ok), AddOutcome::Added);
        assert_eq!(array.add(always_ok), AddOutcome::Added);
        assert_eq!(array.add(always_ok), AddOutcome::AtCapacity);
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn add_rejects_when_existing_row_invalid() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 6);
        let outcome = array.add(require_name);
        assert_eq!(
            outcome,
            AddOutcome::Invalid {
                index: 0,
                message: "Name is required".into()
            }
        );
        assert_eq!(array.len(), 1);

        array.update_value(0, named("Dal"));
        assert_eq!(array.add(require_name), AddOutcome::Added);
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn save_flips_flag_only_on_success() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 6);
        assert!(array.save(0, require_name).is_err());
        assert_eq!(array.edit_flags(), vec![true]);

        array.update_value(0, named("Dal"));
        assert!(array.save(0, require_name).is_ok());
        assert_eq!(array.edit_flags(), vec![false]);
    }

    #[test]
    fn edit_is_unconditional() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 6);
        array.update_value(0, named("Dal"));
        array.save(0, require_name).unwrap();
        array.edit(0);
        assert_eq!(array.edit_flags(), vec![true]);
    }

    #[test]
    fn remove_disabled_at_minimum() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 6);
        assert!(!array.can_remove());
        assert!(!array.remove(0));
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn flags_stay_in_lockstep_through_interleaved_ops() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 6);
        array.update_value(0, named("Dal"));
        array.save(0, require_name).unwrap();

        array.add(always_ok);
        array.update_value(1, named("Naan"));
        array.add(always_ok);
        array.update_value(2, named("Raita"));
        array.save(2, require_name).unwrap();
        assert!(array.remove(1));
        array.add(always_ok);
        array.edit(0);
        assert!(array.remove(2));

        assert_eq!(array.values().len(), array.edit_flags().len());
        // Surviving rows kept their own flags: Dal re-opened, Raita saved.
        assert_eq!(array.edit_flags(), vec![true, false]);
        assert_eq!(
            array.values(),
            vec![Dish { name: "Dal".into() }, Dish { name: "Raita".into() }]
        );
    }

    #[test]
    fn loaded_rows_start_in_view_mode() {
        let array = FieldArray::from_values(
            vec![Dish { name: "Dal".into() }, Dish { name: "Naan".into() }],
            1,
            6,
        );
        assert_eq!(array.edit_flags(), vec![false, false]);
    }

    #[test]
    fn stable_ids_survive_removal() {
        let mut array: FieldArray<Dish> = FieldArray::new(1, 6);
        array.add(always_ok);
        array.add(always_ok);
        let last_id = array.get(2).unwrap().id;
        array.remove(1);
        assert_eq!(array.get(1).unwrap().id, last_id);
    }

    // Nested managers: a branch row owns its own compliance array, so
    // removing the branch discards the nested state with it.
    #[derive(Debug, Clone, PartialEq)]
    struct BranchRow {
        name: String,
        compliance: FieldArray<Dish>,
    }

    impl Default for BranchRow {
        fn default() -> Self {
            Self {
                name: String::new(),
                compliance: FieldArray::new(1, 3),
            }
        }
    }

    impl PartialEq for FieldArray<Dish> {
        fn eq(&self, other: &Self) -> bool {
            self.values() == other.values() && self.edit_flags() == other.edit_flags()
        }
    }

    #[test]
    fn nested_arrays_are_created_and_discarded_with_their_row() {
        let mut branches: FieldArray<BranchRow> = FieldArray::new(1, 3);
        branches.add(|_| Ok(()));
        assert_eq!(branches.len(), 2);
        assert_eq!(branches.get(1).unwrap().value.compliance.len(), 1);

        branches.update_value(1, |b| {
            b.compliance.add(always_ok);
            b.compliance.add(always_ok);
        });
        assert_eq!(branches.get(1).unwrap().value.compliance.len(), 3);
        // Other branch's nested manager is untouched.
        assert_eq!(branches.get(0).unwrap().value.compliance.len(), 1);

        branches.remove(1);
        assert_eq!(branches.len(), 1);
        assert_eq!(branches.get(0).unwrap().value.compliance.len(), 1);
    }
}
