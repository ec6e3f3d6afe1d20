#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the derived view layer.

use std::sync::Arc;

use proptest::prelude::*;

use coffre_store::{
    filter_by_text, sort_by_key, AppState, Archive, ArchiveStatus, EntriesState,
    Entry, Group, GroupsState, SortMode,
};
use coffre_views::{ArchiveViews, EntryViews, GroupViews};

// ── Strategies ─────────────────────────────────────────────────────

fn sort_mode_strategy() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::TitleAsc),
        Just(SortMode::TitleDesc),
        Just(SortMode::UsernameAsc),
        Just(SortMode::UsernameDesc),
    ]
}

fn archives_state_strategy() -> impl Strategy<Value = AppState> {
    proptest::collection::vec(
        proptest::option::of("2026-0[1-9]-[0-2][0-9]T[0-2][0-9]:00:00Z"),
        0..12,
    )
    .prop_map(|stamps| {
        let archives = stamps
            .into_iter()
            .enumerate()
            .map(|(index, last_accessed_at)| {
                let id = format!("a{index}");
                (
                    id.clone(),
                    Arc::new(Archive {
                        id,
                        name: format!("Archive {index}"),
                        status: ArchiveStatus::Locked,
                        last_accessed_at,
                    }),
                )
            })
            .collect();
        AppState {
            archives: Arc::new(archives),
            ..AppState::default()
        }
    })
}

fn entries_state_strategy() -> impl Strategy<Value = AppState> {
    (
        proptest::collection::vec(("[A-Za-z ]{0,10}", proptest::option::of("[a-z]{1,6}")), 0..12),
        "[a-z]{0,3}",
        sort_mode_strategy(),
    )
        .prop_map(|(records, filter, sort_mode)| {
            let by_id: coffre_store::EntryMap = records
                .into_iter()
                .enumerate()
                .map(|(index, (title, username))| {
                    let id = format!("e{index}");
                    (
                        id.clone(),
                        Arc::new(Entry {
                            id,
                            title,
                            username,
                            url: None,
                            notes: None,
                            password: None,
                        }),
                    )
                })
                .collect();
            let shown_ids: Vec<String> = by_id.keys().cloned().collect();
            AppState {
                entries: EntriesState {
                    by_id: Arc::new(by_id),
                    shown_ids: Arc::new(shown_ids),
                    filter,
                    sort_mode,
                    current_entry: None,
                },
                ..AppState::default()
            }
        })
}

/// A well-formed group forest: node `j` is either a root or a child of an
/// earlier node, so the result is always acyclic with unique parents.
fn groups_state_strategy() -> impl Strategy<Value = AppState> {
    (
        proptest::collection::vec(("[A-Za-z]{0,8}", any::<bool>(), any::<u16>(), any::<bool>()), 1..12),
        sort_mode_strategy(),
    )
        .prop_map(|(seeds, sort_mode)| {
            let count = seeds.len();
            let mut children: Vec<Vec<String>> = vec![Vec::new(); count];
            let mut is_root = vec![true; count];
            for (j, (_, _, parent_seed, has_parent)) in seeds.iter().enumerate() {
                if j > 0 && *has_parent {
                    let parent = usize::from(*parent_seed) % j;
                    children[parent].push(format!("g{j}"));
                    is_root[j] = false;
                }
            }
            let by_id: coffre_store::GroupMap = seeds
                .iter()
                .enumerate()
                .map(|(j, (title, is_trash, _, _))| {
                    let id = format!("g{j}");
                    (
                        id.clone(),
                        Arc::new(Group {
                            id,
                            title: title.clone(),
                            groups: children[j].clone(),
                            is_new: false,
                            is_trash: *is_trash,
                        }),
                    )
                })
                .collect();
            let shown_ids: Vec<String> = is_root
                .iter()
                .enumerate()
                .filter(|&(_, root)| *root)
                .map(|(j, _)| format!("g{j}"))
                .collect();
            AppState {
                groups: GroupsState {
                    by_id: Arc::new(by_id),
                    shown_ids: Arc::new(shown_ids),
                    sort_mode,
                    current_group: None,
                },
                ..AppState::default()
            }
        })
}

fn multiset(ids: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.into_iter().collect();
    ids.sort();
    ids
}

// ── Properties ─────────────────────────────────────────────────────

proptest! {
    /// An id that is not a key of the archive map never resolves.
    #[test]
    fn unknown_current_archive_is_none(
        state in archives_state_strategy(),
        unknown in "x[a-z]{1,6}",
    ) {
        let mut state = state;
        state.current_archive = Some(unknown);
        let mut views = ArchiveViews::new();
        prop_assert!(views.current_archive(&state).is_none());
    }

    /// Sorted archives permute the input and order it most-recent-first.
    #[test]
    fn sorted_archives_is_an_ordered_permutation(
        state in archives_state_strategy(),
    ) {
        let mut views = ArchiveViews::new();
        let sorted = views.sorted_archives(&state);
        prop_assert_eq!(
            multiset(state.archives.keys().cloned()),
            multiset(sorted.iter().map(|a| a.id.clone()))
        );
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].last_accessed_at >= pair[1].last_accessed_at);
        }
    }

    /// The entry list equals the collaborator composition the UI contract
    /// promises: filtered when a filter is set, sorted otherwise.
    #[test]
    fn entry_list_matches_the_collaborator_contract(
        state in entries_state_strategy(),
    ) {
        let mut views = EntryViews::new();
        let visible = views.visible_entries(&state).unwrap();
        let listed = views.entries(&state).unwrap();

        let expected = if state.entries.filter.is_empty() {
            sort_by_key(&visible, state.entries.sort_mode)
        } else {
            filter_by_text(&visible, &state.entries.filter)
        };
        let expected_ids: Vec<String> = expected.iter().map(|e| e.id.clone()).collect();
        let listed_ids: Vec<String> = listed.iter().map(|e| e.id.clone()).collect();
        prop_assert_eq!(listed_ids, expected_ids);
    }

    /// No trash-flagged root ever precedes a non-trash root.
    #[test]
    fn trash_roots_never_precede_other_roots(
        state in groups_state_strategy(),
    ) {
        let mut views = GroupViews::new();
        let listed = views.groups(&state).unwrap();
        let first_trash = listed.iter().position(|g| g.is_trash);
        let last_plain = listed.iter().rposition(|g| !g.is_trash);
        if let (Some(first_trash), Some(last_plain)) = (first_trash, last_plain) {
            prop_assert!(first_trash > last_plain);
        }
    }

    /// Trash roots keep their original relative order, unsorted.
    #[test]
    fn trash_roots_keep_snapshot_order(
        state in groups_state_strategy(),
    ) {
        let mut views = GroupViews::new();
        let all = views.all_groups(&state).unwrap();
        let listed = views.groups(&state).unwrap();
        let before: Vec<String> = all
            .iter()
            .filter(|g| g.is_trash)
            .map(|g| g.id.clone())
            .collect();
        let after: Vec<String> = listed
            .iter()
            .filter(|g| g.is_trash)
            .map(|g| g.id.clone())
            .collect();
        prop_assert_eq!(before, after);
    }

    /// An unchanged snapshot is always served from cache.
    #[test]
    fn unchanged_snapshots_hit_the_cache(
        state in groups_state_strategy(),
    ) {
        let mut views = GroupViews::new();
        let first = views.groups(&state).unwrap();
        let second = views.groups(&state).unwrap();
        prop_assert!(Arc::ptr_eq(&first, &second));
    }
}
