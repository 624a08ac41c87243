//! Comprehensive tests for replica selection.
//!
//! # Test Strategy
//!
//! 1. **Pinned scenarios**: the 256-replica SHA-256 and SHAKE-128 fixtures
//! 2. **Partition invariants**: chosen + remaining == input, disjoint
//! 3. **Policy defaults**: calculate_k drives choose when k is omitted
//! 4. **Validation**: empty sets, duplicates, out-of-range k

use corelib::digest::{Sha256, Shake128};
use corelib::ReplicaId;
use placement::{calculate_k, choose, choose_default, choose_with, FixedRedundancy, Selection};
use proptest::prelude::*;
use sha2::Digest;

/// Two-byte big-endian replica identifiers 0..n.
fn numbered_replicas(n: u16) -> Vec<ReplicaId> {
    (0..n).map(|i| ReplicaId::from(i.to_be_bytes())).collect()
}

/// Content identifier shared by the pinned scenarios.
fn lorem_content() -> Vec<u8> {
    sha2::Sha256::digest(b"Lorem ipsum dolor sit amet, something something darkside.").to_vec()
}

fn hex_ids(selection: &[ReplicaId]) -> Vec<String> {
    selection.iter().map(|r| r.to_string()).collect()
}

// ============================================================================
// Pinned Scenarios
// ============================================================================

#[test]
fn test_sha256_scenario_256_replicas() {
    // 256 replicas, default digest, default redundancy: exactly these 12
    // identifiers, in this order, with the other 244 as fallback.
    let replicas = numbered_replicas(256);
    let content = lorem_content();

    let k = calculate_k(&replicas).unwrap();
    assert_eq!(k, 12);

    let selection = choose_default(&content, &replicas).unwrap();
    assert_eq!(
        hex_ids(&selection.chosen),
        [
            "004c", "006d", "0047", "004e", "00ee", "008b", "00be", "0016", "0064", "00e2",
            "0055", "002f",
        ]
    );
    assert_eq!(selection.remaining.len(), 244);
    // Fallback order is part of the contract; spot-check both ends.
    assert_eq!(hex_ids(&selection.remaining[..4]), ["004b", "002a", "0030", "004d"]);
    assert_eq!(hex_ids(&selection.remaining[242..]), ["0000", "0091"]);
}

#[test]
fn test_shake128_scenario_256_replicas() {
    // Same content and replicas under a 20-byte truncated XOF digest:
    // a different, equally pinned chosen list.
    let replicas = numbered_replicas(256);
    let content = lorem_content();

    let selection = choose(&content, &replicas, 12, &Shake128::new(20)).unwrap();
    assert_eq!(
        hex_ids(&selection.chosen),
        [
            "00cc", "00f3", "006a", "00e2", "007b", "0097", "008f", "00f4", "002f", "0094",
            "00ab", "006e",
        ]
    );
    assert_eq!(selection.remaining.len(), 244);
}

// ============================================================================
// Partition Invariants
// ============================================================================

#[test]
fn test_chosen_and_remaining_partition_the_input() {
    let replicas = numbered_replicas(64);
    let selection = choose_default(b"some content", &replicas).unwrap();

    let mut reunited: Vec<ReplicaId> = selection
        .chosen
        .iter()
        .chain(selection.remaining.iter())
        .cloned()
        .collect();
    reunited.sort();

    let mut input = replicas;
    input.sort();
    assert_eq!(reunited, input);
}

#[test]
fn test_chosen_and_remaining_are_disjoint() {
    let replicas = numbered_replicas(64);
    let selection = choose_default(b"some content", &replicas).unwrap();
    for replica in &selection.chosen {
        assert!(!selection.remaining.contains(replica));
    }
}

// ============================================================================
// Policies
// ============================================================================

#[test]
fn test_fixed_policy_drives_choose() {
    let replicas = numbered_replicas(10);
    let selection = choose_with(b"content", &replicas, &FixedRedundancy::new(3), &Sha256).unwrap();
    assert_eq!(selection.chosen.len(), 3);
    assert_eq!(selection.remaining.len(), 7);
}

#[test]
fn test_single_replica_set() {
    let replicas = numbered_replicas(1);
    assert_eq!(calculate_k(&replicas).unwrap(), 1);
    let selection = choose_default(b"content", &replicas).unwrap();
    assert_eq!(selection.chosen.len(), 1);
    assert!(selection.remaining.is_empty());
}

// ============================================================================
// Aliases (usage pattern, not a core feature)
// ============================================================================

#[test]
fn test_aliases_raise_selection_probability() {
    // A replica that registers aliases is selected more often. Aliases are
    // plain identifiers minted by the caller; the algorithm cannot tell
    // them apart from primaries.
    let mut replicas: Vec<ReplicaId> = (0u16..8).map(|i| ReplicaId::from(i.to_be_bytes())).collect();
    for alias in 0u16..8 {
        let mut bytes = b"big-node/".to_vec();
        bytes.extend_from_slice(&alias.to_be_bytes());
        replicas.push(ReplicaId::from(bytes));
    }

    let mut alias_wins = 0;
    for content in 0u32..512 {
        let selection = choose(&content.to_be_bytes(), &replicas, 1, &Sha256).unwrap();
        if selection.chosen[0].as_bytes().starts_with(b"big-node/") {
            alias_wins += 1;
        }
    }
    // 8 of 16 identifiers belong to the big node, so about half the
    // contents should land on it. Wide margin; the digest is not seeded.
    assert!(
        alias_wins > 154 && alias_wins < 358,
        "alias wins: {alias_wins}/512"
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_split_sizes(n in 1u16..96, k_seed in any::<u16>(), content in proptest::collection::vec(any::<u8>(), 0..48)) {
        let replicas = numbered_replicas(n);
        let k = (k_seed as usize % n as usize) + 1;
        let selection = choose(&content, &replicas, k, &Sha256).unwrap();
        prop_assert_eq!(selection.chosen.len(), k);
        prop_assert_eq!(selection.remaining.len(), n as usize - k);
    }

    #[test]
    fn prop_choose_is_deterministic(n in 1u16..64, content in proptest::collection::vec(any::<u8>(), 0..48)) {
        let replicas = numbered_replicas(n);
        let a = choose_default(&content, &replicas).unwrap();
        let b = choose_default(&content, &replicas).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_calculate_k_in_bounds(n in 1u16..512) {
        let replicas = numbered_replicas(n);
        let k = calculate_k(&replicas).unwrap();
        prop_assert!(k >= 1);
        prop_assert!(k <= n as usize);
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_selection_round_trips_through_serde() {
    let replicas = numbered_replicas(8);
    let selection = choose_default(b"content", &replicas).unwrap();
    let json = serde_json::to_string(&selection).unwrap();
    let back: Selection = serde_json::from_str(&json).unwrap();
    assert_eq!(selection, back);
}
