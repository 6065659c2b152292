//! Ordering of template steps on load.
//!
//! Steps are returned sorted by `step_order` ascending. Duplicate positions
//! are allowed and keep their insertion order, so the secondary key is the
//! row id.

use crate::types::{DbId, StepOrder};

/// Sort key for a loaded step: `(step_order, id)`.
pub fn sort_key(step_order: StepOrder, id: DbId) -> (StepOrder, DbId) {
    (step_order, id)
}

/// Sort `steps` in place by `(step_order, id)`.
pub fn sort_steps<T>(steps: &mut [T], key: impl Fn(&T) -> (StepOrder, DbId)) {
    steps.sort_by_key(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: DbId,
        order: StepOrder,
    }

    fn row(id: DbId, order: StepOrder) -> Row {
        Row { id, order }
    }

    #[test]
    fn sorts_by_step_order() {
        let mut rows = vec![row(1, 3), row(2, 1), row(3, 2)];
        sort_steps(&mut rows, |r| sort_key(r.order, r.id));
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn duplicates_keep_insertion_order() {
        let mut rows = vec![row(5, 1), row(3, 1), row(4, 0)];
        sort_steps(&mut rows, |r| sort_key(r.order, r.id));
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 5]);
    }

    #[test]
    fn negative_positions_sort_first() {
        let mut rows = vec![row(1, 0), row(2, -4)];
        sort_steps(&mut rows, |r| sort_key(r.order, r.id));
        assert_eq!(rows[0], row(2, -4));
    }
}
