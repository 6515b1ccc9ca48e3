use log::debug;

use super::error::AddressError;
use super::index::OptionIndex;
use super::model::{OptionEntry, OptionGroup, SelectOption, creation_prompt, slugify};

/// Result of appending a new option to the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedOption {
    pub option: SelectOption,
    /// Address of the option after the append.
    pub index: OptionIndex,
    /// Label of the owning group when the option was created inside one.
    pub group_label: Option<String>,
}

/// Owned, queryable store of the options and groups backing one select
/// widget instance.
///
/// Entries keep the order they were supplied in. Groups and their nested
/// options are stamped with back-references to the group's top-level position
/// at construction; the only later mutation is the creation append, whose new
/// option receives a freshly computed address.
///
/// Option values should be unique across the whole collection, groups
/// included. Duplicates are tolerated rather than rejected: lookups return
/// the first match and selection membership is by value, so duplicate values
/// are an unsupported configuration, not an error.
pub struct OptionCollection {
    entries: Vec<OptionEntry>,
    creation_enabled: bool,
}

impl OptionCollection {
    /// Build a collection, taking ownership of the entry sequence so callers
    /// cannot alias-mutate it afterwards, and stamp group back-references.
    pub fn new(mut entries: Vec<OptionEntry>, creation_enabled: bool) -> Self {
        for (position, entry) in entries.iter_mut().enumerate() {
            if let OptionEntry::Group(group) = entry {
                group.position = Some(position);
                for option in &mut group.options {
                    option.group_index = Some(position);
                }
            }
        }
        Self {
            entries,
            creation_enabled,
        }
    }

    /// Wrap an already-filtered sequence for navigation and lookup.
    ///
    /// Back-references are deliberately not restamped: a synthetic creation
    /// prompt inside a filtered group must keep pointing at the group's
    /// position in the unfiltered collection.
    pub(crate) fn filtered_view(entries: Vec<OptionEntry>) -> Self {
        Self {
            entries,
            creation_enabled: false,
        }
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// True iff the top-level sequence has zero entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Address of the first option, or `None` for an empty collection.
    pub fn first_index(&self) -> Option<OptionIndex> {
        self.first_option_at_or_after(0)
    }

    /// Resolve an address to its option. The address must be structurally
    /// valid for this collection: correct arity and in-range components.
    /// Violations fail loudly so integration bugs surface early.
    pub fn get(&self, index: OptionIndex) -> Result<&SelectOption, AddressError> {
        match index {
            OptionIndex::Flat(position) => match self.entries.get(position) {
                None => Err(AddressError::OutOfRange {
                    index,
                    len: self.entries.len(),
                }),
                Some(OptionEntry::Group(group)) => Err(AddressError::ExpectedOption {
                    position,
                    label: group.label.clone(),
                }),
                Some(OptionEntry::Option(option)) => Ok(option),
            },
            OptionIndex::Grouped(position, option) => {
                let entry = self.entries.get(position).ok_or(AddressError::OutOfRange {
                    index,
                    len: self.entries.len(),
                })?;
                let OptionEntry::Group(group) = entry else {
                    return Err(AddressError::ExpectedGroup { position, option });
                };
                group.options.get(option).ok_or(AddressError::OutOfRange {
                    index,
                    len: group.options.len(),
                })
            }
        }
    }

    /// First structural match for the option's value, scanning the top-level
    /// sequence in order and group contents nested-first.
    ///
    /// A miss is not an error: it falls back to the address of the last
    /// option in the collection, since callers treat "not found" as "clamp to
    /// end". `None` is returned only when the collection holds no options at
    /// all.
    pub fn find_option_index(&self, option: &SelectOption) -> Option<OptionIndex> {
        for (position, entry) in self.entries.iter().enumerate() {
            match entry {
                OptionEntry::Group(group) => {
                    if let Some(nested) = group
                        .options
                        .iter()
                        .position(|candidate| candidate.value == option.value)
                    {
                        return Some(OptionIndex::Grouped(position, nested));
                    }
                }
                OptionEntry::Option(candidate) => {
                    if candidate.value == option.value {
                        return Some(OptionIndex::Flat(position));
                    }
                }
            }
        }
        self.last_index()
    }

    /// Address one step after `current`, clamped to the last option.
    ///
    /// `None` input yields [`first_index`](Self::first_index). Stepping past
    /// a group boundary enters the adjacent entry: a group is entered at its
    /// first option. Groups without options are stepped over.
    pub fn next_index(&self, current: Option<OptionIndex>) -> Option<OptionIndex> {
        let Some(index) = current else {
            return self.first_index();
        };
        match index {
            OptionIndex::Flat(position) => self
                .first_option_at_or_after(position + 1)
                .or(Some(index)),
            OptionIndex::Grouped(position, option) => {
                if let Some(OptionEntry::Group(group)) = self.entries.get(position)
                    && option + 1 < group.options.len()
                {
                    return Some(OptionIndex::Grouped(position, option + 1));
                }
                self.first_option_at_or_after(position + 1).or(Some(index))
            }
        }
    }

    /// Address one step before `current`, clamped to the first option.
    /// Symmetric to [`next_index`](Self::next_index): a group is entered at
    /// its last option when stepping backwards into it.
    pub fn previous_index(&self, current: Option<OptionIndex>) -> Option<OptionIndex> {
        let Some(index) = current else {
            return self.first_index();
        };
        match index {
            OptionIndex::Flat(position) => {
                if position == 0 {
                    return Some(index);
                }
                self.last_option_at_or_before(position - 1).or(Some(index))
            }
            OptionIndex::Grouped(position, option) => {
                if option > 0 {
                    return Some(OptionIndex::Grouped(position, option - 1));
                }
                if position == 0 {
                    return Some(index);
                }
                self.last_option_at_or_before(position - 1).or(Some(index))
            }
        }
    }

    /// Produce the subsequence of entries whose names contain `text`
    /// case-insensitively. The stored sequence is never mutated.
    ///
    /// An absent or empty filter returns the full sequence. A group keeps
    /// only its surviving options; with zero survivors the group is dropped
    /// entirely, unless creation mode is enabled, in which case it survives
    /// holding a single synthetic creation prompt tagged with the group's
    /// position. When the entire result is empty and creation mode is
    /// enabled, the result is one synthetic top-level creation prompt.
    pub fn filter(&self, text: Option<&str>) -> Vec<OptionEntry> {
        let Some(text) = text.filter(|text| !text.is_empty()) else {
            return self.entries.clone();
        };
        let needle = text.to_lowercase();

        let mut filtered = Vec::new();
        for entry in &self.entries {
            match entry {
                OptionEntry::Option(option) => {
                    if option.name.to_lowercase().contains(&needle) {
                        filtered.push(entry.clone());
                    }
                }
                OptionEntry::Group(group) => {
                    let surviving: Vec<SelectOption> = group
                        .options
                        .iter()
                        .filter(|option| option.name.to_lowercase().contains(&needle))
                        .cloned()
                        .collect();
                    if !surviving.is_empty() {
                        filtered.push(OptionEntry::Group(OptionGroup {
                            label: group.label.clone(),
                            options: surviving,
                            position: group.position,
                        }));
                    } else if self.creation_enabled {
                        filtered.push(OptionEntry::Group(OptionGroup {
                            label: group.label.clone(),
                            options: vec![prompt_option(text, group.position)],
                            position: group.position,
                        }));
                    }
                }
            }
        }

        if filtered.is_empty() && self.creation_enabled {
            filtered.push(OptionEntry::Option(prompt_option(text, None)));
        }
        filtered
    }

    /// Build an option named `name` with a slug-cased value and append it,
    /// either at the top level or into the group at `group` (its top-level
    /// position).
    pub fn create_option(
        &mut self,
        name: &str,
        group: Option<usize>,
    ) -> Result<CreatedOption, AddressError> {
        let option = SelectOption {
            name: name.to_string(),
            value: slugify(name),
            group_index: group,
        };
        self.append_option(option, group)
    }

    /// Append an externally built option (e.g. returned by an asynchronous
    /// creation handler) and return its post-append address.
    pub fn append_option(
        &mut self,
        mut option: SelectOption,
        group: Option<usize>,
    ) -> Result<CreatedOption, AddressError> {
        option.group_index = group;
        match group {
            Some(position) => {
                let len = self.entries.len();
                let entry =
                    self.entries
                        .get_mut(position)
                        .ok_or(AddressError::OutOfRange {
                            index: OptionIndex::Grouped(position, 0),
                            len,
                        })?;
                let OptionEntry::Group(target) = entry else {
                    return Err(AddressError::ExpectedGroup {
                        position,
                        option: 0,
                    });
                };
                target.options.push(option.clone());
                debug!(
                    "created option '{}' in group '{}'",
                    option.value, target.label
                );
                Ok(CreatedOption {
                    option,
                    index: OptionIndex::Grouped(position, target.options.len() - 1),
                    group_label: Some(target.label.clone()),
                })
            }
            None => {
                self.entries.push(OptionEntry::Option(option.clone()));
                debug!("created top-level option '{}'", option.value);
                Ok(CreatedOption {
                    option,
                    index: OptionIndex::Flat(self.entries.len() - 1),
                    group_label: None,
                })
            }
        }
    }

    /// First option whose value equals `value`, in scan order, or `None`.
    pub fn find_by_value(&self, value: &str) -> Option<&SelectOption> {
        for entry in &self.entries {
            match entry {
                OptionEntry::Group(group) => {
                    if let Some(option) =
                        group.options.iter().find(|option| option.value == value)
                    {
                        return Some(option);
                    }
                }
                OptionEntry::Option(option) => {
                    if option.value == value {
                        return Some(option);
                    }
                }
            }
        }
        None
    }

    /// All options whose values appear in `values`, preserving the scan
    /// order: top level interleaved by position, group contents in sequence.
    pub fn find_by_values(&self, values: &[String]) -> Vec<SelectOption> {
        let mut found = Vec::new();
        for entry in &self.entries {
            match entry {
                OptionEntry::Group(group) => {
                    found.extend(
                        group
                            .options
                            .iter()
                            .filter(|option| values.contains(&option.value))
                            .cloned(),
                    );
                }
                OptionEntry::Option(option) => {
                    if values.contains(&option.value) {
                        found.push(option.clone());
                    }
                }
            }
        }
        found
    }

    /// Address of the last option in the collection.
    fn last_index(&self) -> Option<OptionIndex> {
        self.last_option_at_or_before(self.entries.len().checked_sub(1)?)
    }

    /// Scan forward from top-level position `from` for the first reachable
    /// option address.
    fn first_option_at_or_after(&self, from: usize) -> Option<OptionIndex> {
        for position in from..self.entries.len() {
            match &self.entries[position] {
                OptionEntry::Option(_) => return Some(OptionIndex::Flat(position)),
                OptionEntry::Group(group) if !group.options.is_empty() => {
                    return Some(OptionIndex::Grouped(position, 0));
                }
                OptionEntry::Group(_) => {}
            }
        }
        None
    }

    /// Scan backward from top-level position `from` for the last reachable
    /// option address.
    fn last_option_at_or_before(&self, from: usize) -> Option<OptionIndex> {
        for position in (0..=from.min(self.entries.len().saturating_sub(1))).rev() {
            match &self.entries[position] {
                OptionEntry::Option(_) => return Some(OptionIndex::Flat(position)),
                OptionEntry::Group(group) if !group.options.is_empty() => {
                    return Some(OptionIndex::Grouped(position, group.options.len() - 1));
                }
                OptionEntry::Group(_) => {}
            }
        }
        None
    }
}

fn prompt_option(text: &str, group_index: Option<usize>) -> SelectOption {
    SelectOption {
        name: creation_prompt(text),
        value: slugify(text),
        group_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, value: &str) -> SelectOption {
        SelectOption::new(name, value)
    }

    /// Options at positions 0, 1, 3; groups at positions 2, 4, 5.
    fn grouped_entries() -> Vec<OptionEntry> {
        vec![
            OptionEntry::Option(option("Option 1", "option-1")),
            OptionEntry::Option(option("Option 2", "option-2")),
            OptionEntry::Group(OptionGroup::new(
                "Group 1",
                vec![
                    option("Option 3", "option-3"),
                    option("Option 4", "option-4"),
                    option("Option 5", "option-5"),
                ],
            )),
            OptionEntry::Option(option("Option 6", "option-6")),
            OptionEntry::Group(OptionGroup::new(
                "Group 2",
                vec![
                    option("Option 7", "option-7"),
                    option("Option 8", "option-8"),
                    option("Option 9", "option-9"),
                ],
            )),
            OptionEntry::Group(OptionGroup::new(
                "Group 3",
                vec![option("Option last", "option-last")],
            )),
        ]
    }

    fn flat_entries() -> Vec<OptionEntry> {
        vec![
            OptionEntry::Option(option("Option 1", "option-1")),
            OptionEntry::Option(option("Option 2", "option-2")),
            OptionEntry::Option(option("Option 3", "option-3")),
        ]
    }

    fn grouped() -> OptionCollection {
        OptionCollection::new(grouped_entries(), false)
    }

    fn grouped_with_creation() -> OptionCollection {
        OptionCollection::new(grouped_entries(), true)
    }

    fn flat_with_creation() -> OptionCollection {
        OptionCollection::new(flat_entries(), true)
    }

    #[test]
    fn construction_stamps_group_back_references() {
        let collection = grouped();
        for position in [2usize, 4, 5] {
            let group = collection.entries()[position].as_group().expect("group");
            assert_eq!(group.position, Some(position));
            for nested in &group.options {
                assert_eq!(nested.group_index, Some(position));
            }
        }
    }

    #[test]
    fn is_empty_reflects_entry_count() {
        assert!(OptionCollection::new(Vec::new(), false).is_empty());
        assert!(!grouped().is_empty());
    }

    #[test]
    fn first_index_is_none_for_empty_collection() {
        assert_eq!(OptionCollection::new(Vec::new(), false).first_index(), None);
    }

    #[test]
    fn first_index_is_flat_when_first_entry_is_an_option() {
        assert_eq!(grouped().first_index(), Some(OptionIndex::Flat(0)));
    }

    #[test]
    fn first_index_enters_a_leading_group() {
        let entries: Vec<OptionEntry> = grouped_entries().split_off(2);
        let collection = OptionCollection::new(entries, false);
        assert_eq!(collection.first_index(), Some(OptionIndex::Grouped(0, 0)));
    }

    #[test]
    fn get_resolves_flat_and_grouped_addresses() {
        let collection = grouped();
        assert_eq!(
            collection.get(OptionIndex::Flat(3)).unwrap().value,
            "option-6"
        );
        assert_eq!(
            collection.get(OptionIndex::Grouped(4, 1)).unwrap().value,
            "option-8"
        );
    }

    #[test]
    fn get_rejects_out_of_range_addresses() {
        let collection = grouped();
        assert!(matches!(
            collection.get(OptionIndex::Flat(17)),
            Err(AddressError::OutOfRange { .. })
        ));
        assert!(matches!(
            collection.get(OptionIndex::Grouped(2, 9)),
            Err(AddressError::OutOfRange { .. })
        ));
    }

    #[test]
    fn get_rejects_addresses_with_wrong_arity() {
        let collection = grouped();
        assert!(matches!(
            collection.get(OptionIndex::Flat(2)),
            Err(AddressError::ExpectedOption { .. })
        ));
        assert!(matches!(
            collection.get(OptionIndex::Grouped(0, 0)),
            Err(AddressError::ExpectedGroup { .. })
        ));
    }

    #[test]
    fn finds_a_top_level_option_index() {
        let collection = grouped();
        let found = collection.find_option_index(&option("Option 2", "option-2"));
        assert_eq!(found, Some(OptionIndex::Flat(1)));
    }

    #[test]
    fn finds_a_grouped_option_index() {
        let collection = grouped();
        let found = collection.find_option_index(&option("Option 8", "option-8"));
        assert_eq!(found, Some(OptionIndex::Grouped(4, 1)));
    }

    #[test]
    fn find_miss_clamps_to_the_last_option() {
        let collection = grouped();
        let found = collection.find_option_index(&option("Nope", "nope"));
        assert_eq!(found, Some(OptionIndex::Grouped(5, 0)));
    }

    #[test]
    fn next_index_starts_at_first_when_unset() {
        assert_eq!(grouped().next_index(None), Some(OptionIndex::Flat(0)));
    }

    #[test]
    fn next_index_advances_between_top_level_options() {
        let collection = grouped();
        assert_eq!(
            collection.next_index(Some(OptionIndex::Flat(0))),
            Some(OptionIndex::Flat(1))
        );
    }

    #[test]
    fn next_index_enters_a_group_at_its_first_option() {
        let collection = grouped();
        assert_eq!(
            collection.next_index(Some(OptionIndex::Flat(1))),
            Some(OptionIndex::Grouped(2, 0))
        );
    }

    #[test]
    fn next_index_advances_within_a_group() {
        let collection = grouped();
        assert_eq!(
            collection.next_index(Some(OptionIndex::Grouped(2, 0))),
            Some(OptionIndex::Grouped(2, 1))
        );
    }

    #[test]
    fn next_index_exits_an_exhausted_group() {
        let collection = grouped();
        assert_eq!(
            collection.next_index(Some(OptionIndex::Grouped(2, 2))),
            Some(OptionIndex::Flat(3))
        );
    }

    #[test]
    fn next_index_crosses_between_adjacent_groups() {
        let collection = grouped();
        assert_eq!(
            collection.next_index(Some(OptionIndex::Grouped(4, 2))),
            Some(OptionIndex::Grouped(5, 0))
        );
    }

    #[test]
    fn next_index_clamps_at_the_last_address() {
        let collection = grouped();
        assert_eq!(
            collection.next_index(Some(OptionIndex::Grouped(5, 0))),
            Some(OptionIndex::Grouped(5, 0))
        );

        let flat = OptionCollection::new(flat_entries(), false);
        assert_eq!(
            flat.next_index(Some(OptionIndex::Flat(2))),
            Some(OptionIndex::Flat(2))
        );
    }

    #[test]
    fn previous_index_starts_at_first_when_unset() {
        assert_eq!(grouped().previous_index(None), Some(OptionIndex::Flat(0)));
    }

    #[test]
    fn previous_index_steps_back_between_top_level_options() {
        let collection = grouped();
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Flat(1))),
            Some(OptionIndex::Flat(0))
        );
    }

    #[test]
    fn previous_index_enters_a_group_at_its_last_option() {
        let collection = grouped();
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Flat(3))),
            Some(OptionIndex::Grouped(2, 2))
        );
    }

    #[test]
    fn previous_index_steps_back_within_a_group() {
        let collection = grouped();
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Grouped(2, 2))),
            Some(OptionIndex::Grouped(2, 1))
        );
    }

    #[test]
    fn previous_index_exits_a_group_to_the_prior_option() {
        let collection = grouped();
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Grouped(2, 0))),
            Some(OptionIndex::Flat(1))
        );
    }

    #[test]
    fn previous_index_crosses_between_adjacent_groups() {
        let collection = grouped();
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Grouped(5, 0))),
            Some(OptionIndex::Grouped(4, 2))
        );
    }

    #[test]
    fn previous_index_clamps_at_the_first_address() {
        let collection = grouped();
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Flat(0))),
            Some(OptionIndex::Flat(0))
        );
    }

    #[test]
    fn navigation_steps_over_empty_groups() {
        let entries = vec![
            OptionEntry::Option(option("Option 1", "option-1")),
            OptionEntry::Group(OptionGroup::new("Empty", Vec::new())),
            OptionEntry::Option(option("Option 2", "option-2")),
        ];
        let collection = OptionCollection::new(entries, false);
        assert_eq!(
            collection.next_index(Some(OptionIndex::Flat(0))),
            Some(OptionIndex::Flat(2))
        );
        assert_eq!(
            collection.previous_index(Some(OptionIndex::Flat(2))),
            Some(OptionIndex::Flat(0))
        );
    }

    #[test]
    fn next_and_previous_are_local_inverses() {
        let collection = grouped();
        let mut index = collection.first_index();
        loop {
            let next = collection.next_index(index);
            if next == index {
                break; // reached the clamp boundary
            }
            assert_eq!(collection.previous_index(next), index);
            index = next;
        }
    }

    #[test]
    fn repeated_next_reaches_a_fixed_point() {
        let collection = grouped();
        let mut index = collection.first_index();
        for _ in 0..32 {
            index = collection.next_index(index);
        }
        assert_eq!(index, Some(OptionIndex::Grouped(5, 0)));
        assert_eq!(collection.next_index(index), index);
    }

    #[test]
    fn filter_without_text_returns_all_entries() {
        let collection = grouped();
        assert_eq!(collection.filter(None), collection.entries());
        assert_eq!(collection.filter(Some("")), collection.entries());
    }

    #[test]
    fn filter_matches_top_level_options_case_insensitively() {
        let collection = grouped();
        let filtered = collection.filter(Some("option 1"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].as_option().unwrap().value, "option-1");
    }

    #[test]
    fn filter_keeps_groups_with_surviving_options() {
        let collection = grouped();
        let filtered = collection.filter(Some("Option 8"));
        assert_eq!(filtered.len(), 1);
        let group = filtered[0].as_group().expect("group survives");
        assert_eq!(group.label, "Group 2");
        assert_eq!(group.options.len(), 1);
        assert_eq!(group.options[0].value, "option-8");
    }

    #[test]
    fn filter_drops_empty_groups_when_creation_is_disabled() {
        let collection = grouped();
        assert!(collection.filter(Some("Option 123")).is_empty());
    }

    #[test]
    fn filter_never_mutates_the_stored_sequence() {
        let collection = grouped();
        let before = collection.entries().to_vec();
        let _ = collection.filter(Some("Option 8"));
        assert_eq!(collection.entries(), before.as_slice());
    }

    #[test]
    fn filter_offers_creation_prompt_per_empty_group() {
        let collection = grouped_with_creation();
        let filtered = collection.filter(Some("Option 123"));

        assert_eq!(filtered.len(), 3);
        for (entry, position) in filtered.iter().zip([2usize, 4, 5]) {
            let group = entry.as_group().expect("group kept for prompt");
            assert_eq!(group.position, Some(position));
            assert_eq!(group.options.len(), 1);
            let prompt = &group.options[0];
            assert_eq!(prompt.name, "Create Option 123");
            assert_eq!(prompt.value, "option-123");
            assert_eq!(prompt.group_index, Some(position));
        }
    }

    #[test]
    fn filter_offers_top_level_creation_prompt_when_nothing_survives() {
        let collection = flat_with_creation();
        let filtered = collection.filter(Some("Option 123"));
        assert_eq!(filtered.len(), 1);
        let prompt = filtered[0].as_option().expect("top-level prompt");
        assert_eq!(prompt.name, "Create Option 123");
        assert_eq!(prompt.value, "option-123");
        assert_eq!(prompt.group_index, None);
    }

    #[test]
    fn creates_a_top_level_option_with_a_slug_value() {
        let mut collection = OptionCollection::new(Vec::new(), true);
        let created = collection.create_option("New Tag", None).unwrap();
        assert_eq!(created.option.value, "new-tag");
        assert_eq!(created.index, OptionIndex::Flat(0));
        assert_eq!(created.group_label, None);
        assert_eq!(
            collection.entries().last().unwrap().as_option().unwrap(),
            &created.option
        );
    }

    #[test]
    fn creates_an_option_inside_a_group() {
        let mut collection = grouped();
        let created = collection.create_option("Create Option", Some(2)).unwrap();
        assert_eq!(created.index, OptionIndex::Grouped(2, 3));
        assert_eq!(created.group_label.as_deref(), Some("Group 1"));
        assert_eq!(created.option.group_index, Some(2));

        let group = collection.entries()[2].as_group().unwrap();
        assert_eq!(group.options.last().unwrap(), &created.option);
    }

    #[test]
    fn create_rejects_a_group_target_that_is_not_a_group() {
        let mut collection = grouped();
        assert!(matches!(
            collection.create_option("Nope", Some(0)),
            Err(AddressError::ExpectedGroup { .. })
        ));
        assert!(matches!(
            collection.create_option("Nope", Some(42)),
            Err(AddressError::OutOfRange { .. })
        ));
    }

    #[test]
    fn finds_a_single_option_by_value() {
        let collection = grouped();
        let found = collection.find_by_value("option-8").expect("present");
        assert_eq!(found.name, "Option 8");
        assert!(collection.find_by_value("missing").is_none());
    }

    #[test]
    fn finds_many_options_by_value_in_scan_order() {
        let collection = grouped();
        let values = vec![
            "option-2".to_string(),
            "option-5".to_string(),
            "option-last".to_string(),
        ];
        let found = collection.find_by_values(&values);
        let found_values: Vec<&str> = found.iter().map(|option| option.value.as_str()).collect();
        assert_eq!(found_values, ["option-2", "option-5", "option-last"]);
    }

    #[test]
    fn duplicate_values_resolve_to_the_first_match() {
        let entries = vec![
            OptionEntry::Option(option("First", "dup")),
            OptionEntry::Group(OptionGroup::new("G", vec![option("Second", "dup")])),
        ];
        let collection = OptionCollection::new(entries, false);
        assert_eq!(collection.find_by_value("dup").unwrap().name, "First");
        assert_eq!(
            collection.find_option_index(&option("Second", "dup")),
            Some(OptionIndex::Flat(0))
        );
    }
}
