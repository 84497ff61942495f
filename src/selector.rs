use rand::seq::SliceRandom;
use std::num::IntErrorKind;

use crate::error::SelectionError;
use crate::store::{ScenarioRecord, ScenarioStore};

/// Choose a scenario: the one at `requested` (1-based) or a uniformly random one
pub fn pick<'a>(
    store: &'a ScenarioStore,
    requested: Option<&str>,
) -> Result<&'a ScenarioRecord, SelectionError> {
    let Some(input) = requested else {
        let mut rng = rand::thread_rng();
        return store
            .records()
            .choose(&mut rng)
            .ok_or_else(|| out_of_range("1", store));
    };

    let index = parse_index(input)?;
    if index < 1 {
        return Err(out_of_range(input, store));
    }

    usize::try_from(index)
        .ok()
        .and_then(|id| store.get(id))
        .ok_or_else(|| out_of_range(input, store))
}

/// Parse a user-supplied scenario number.
///
/// Integers too large for `i64` still count as numbers, and are reported as out of range.
pub fn parse_index(input: &str) -> Result<i64, SelectionError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(SelectionError::NotANumber(input.to_string())),
        },
    }
}

fn out_of_range(input: &str, store: &ScenarioStore) -> SelectionError {
    SelectionError::OutOfRange {
        requested: input.trim().to_string(),
        max: store.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_store;
    use std::collections::HashSet;

    #[test]
    fn every_valid_index_returns_matching_id() {
        let store = sample_store(&["A", "B", "C", "D", "E", "F", "G"]);
        for i in 1..=store.len() {
            let record = pick(&store, Some(i.to_string().as_str())).unwrap();
            assert_eq!(record.id as usize, i);
        }
    }

    #[test]
    fn indices_outside_bounds_are_out_of_range() {
        let store = sample_store(&["A", "B", "C"]);
        for input in ["0", "4", "-1", "-300", "1000", "99999999999999999999999"] {
            match pick(&store, Some(input)) {
                Err(SelectionError::OutOfRange { max, .. }) => assert_eq!(max, 3),
                other => panic!("{input}: expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn non_numeric_input_is_not_a_number() {
        let store = sample_store(&["A", "B", "C"]);
        for input in ["abc", "1.5", "", "two", "0x1", "3a"] {
            assert_eq!(
                pick(&store, Some(input)),
                Err(SelectionError::NotANumber(input.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_and_sign_are_accepted() {
        let store = sample_store(&["A", "B", "C"]);
        assert_eq!(pick(&store, Some(" 2 ")).unwrap().name, "B");
        assert_eq!(pick(&store, Some("+3")).unwrap().name, "C");
    }

    #[test]
    fn random_pick_covers_every_record() {
        let store = sample_store(&["A", "B", "C", "D", "E"]);
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            seen.insert(pick(&store, None).unwrap().id);
        }
        assert_eq!(seen.len(), store.len());
    }
}
