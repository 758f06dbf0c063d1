use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Classification of one keyed reconciliation between rendered keys and new
/// data.
///
/// `enter` and `update` hold indices into the incoming data and are listed in
/// data order. `exit` holds the previous keys that no longer appear, in their
/// previous order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedJoin {
    pub enter: Vec<usize>,
    pub update: Vec<usize>,
    pub exit: Vec<String>,
}

impl KeyedJoin {
    #[must_use]
    pub fn counts(&self) -> JoinCounts {
        JoinCounts {
            entered: self.enter.len(),
            updated: self.update.len(),
            exited: self.exit.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinCounts {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Splits `next` into entering and persisting items against `previous_keys`,
/// and collects the previous keys that leave.
///
/// Keys in `next` are expected to be unique; a repeated key is classified by
/// its first occurrence only.
pub fn plan_join<'a, T>(
    previous_keys: impl IntoIterator<Item = &'a str>,
    next: &[T],
    key: impl Fn(&T) -> &str,
) -> KeyedJoin {
    let previous: Vec<&str> = previous_keys.into_iter().collect();
    let previous_set: HashSet<&str> = previous.iter().copied().collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(next.len());

    let mut join = KeyedJoin::default();
    for (index, item) in next.iter().enumerate() {
        let item_key = key(item);
        if !seen.insert(item_key) {
            continue;
        }
        if previous_set.contains(item_key) {
            join.update.push(index);
        } else {
            join.enter.push(index);
        }
    }

    join.exit = previous
        .into_iter()
        .filter(|previous_key| !seen.contains(previous_key))
        .map(str::to_owned)
        .collect();
    join
}

#[cfg(test)]
mod tests {
    use super::plan_join;

    #[test]
    fn classifies_enter_update_exit() {
        let next = ["b", "c", "d"];
        let join = plan_join(["a", "b", "c"], &next, |item| *item);
        assert_eq!(join.enter, vec![2]);
        assert_eq!(join.update, vec![0, 1]);
        assert_eq!(join.exit, vec!["a".to_owned()]);
    }

    #[test]
    fn first_pass_enters_everything() {
        let next = ["x", "y"];
        let join = plan_join(std::iter::empty(), &next, |item| *item);
        assert_eq!(join.enter, vec![0, 1]);
        assert!(join.update.is_empty());
        assert!(join.exit.is_empty());
    }
}
