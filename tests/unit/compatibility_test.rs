//! Tests for the compatibility table and first-match lookup

use chrono::NaiveDate;
use lifeflow::core::models::{BloodType, Donor};
use lifeflow::core::services::{can_donate, compatible_donor_types, find_best_match};

use BloodType::{ANeg, APos, AbNeg, AbPos, BNeg, BPos, ONeg, OPos};

fn donor(id: &str, blood_type: BloodType) -> Donor {
    Donor {
        id: id.to_string(),
        name: format!("Donor {id}"),
        age: 30,
        blood_type,
        contact: "9870000101".to_string(),
        email: None,
        last_donation: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

fn sorted(types: &[BloodType]) -> Vec<BloodType> {
    let mut v = types.to_vec();
    v.sort();
    v
}

// =============================================================================
// TABLE
// =============================================================================

#[test]
fn test_table_matches_reference_data() {
    let cases: [(BloodType, &[BloodType]); 8] = [
        (ONeg, &[ONeg]),
        (OPos, &[OPos, ONeg]),
        (ANeg, &[ANeg, ONeg]),
        (APos, &[APos, ANeg, OPos, ONeg]),
        (BNeg, &[BNeg, ONeg]),
        (BPos, &[BPos, BNeg, OPos, ONeg]),
        (AbNeg, &[AbNeg, ANeg, BNeg, ONeg]),
        (AbPos, &[AbPos, AbNeg, APos, ANeg, BPos, BNeg, OPos, ONeg]),
    ];

    for (recipient, expected) in cases {
        assert_eq!(
            sorted(compatible_donor_types(recipient)),
            sorted(expected),
            "wrong donor set for {recipient}"
        );
    }
}

#[test]
fn test_ab_pos_is_universal_recipient() {
    assert_eq!(compatible_donor_types(AbPos).len(), 8);
    let max = BloodType::ALL
        .into_iter()
        .map(|t| compatible_donor_types(t).len())
        .max()
        .unwrap();
    assert_eq!(max, 8);
}

#[test]
fn test_o_neg_accepts_only_o_neg() {
    assert_eq!(compatible_donor_types(ONeg), &[ONeg]);
    let min = BloodType::ALL
        .into_iter()
        .map(|t| compatible_donor_types(t).len())
        .min()
        .unwrap();
    assert_eq!(min, 1);
}

#[test]
fn test_o_neg_can_give_to_everyone() {
    for recipient in BloodType::ALL {
        assert!(can_donate(ONeg, recipient), "O- should give to {recipient}");
    }
}

#[test]
fn test_every_type_can_give_to_itself() {
    for t in BloodType::ALL {
        assert!(can_donate(t, t));
    }
}

#[test]
fn test_incompatible_pairs() {
    assert!(!can_donate(APos, ONeg));
    assert!(!can_donate(BPos, APos));
    assert!(!can_donate(AbNeg, OPos));
    assert!(!can_donate(OPos, ANeg));
}

// =============================================================================
// FIRST MATCH
// =============================================================================

#[test]
fn test_empty_list_has_no_match() {
    for t in BloodType::ALL {
        assert!(find_best_match(&[], t).is_none());
    }
}

#[test]
fn test_single_compatible_donor_is_returned() {
    let donors = vec![donor("1", APos), donor("2", BNeg), donor("3", AbPos)];
    let found = find_best_match(&donors, BPos).unwrap();
    assert_eq!(found.id, "2");
}

#[test]
fn test_earliest_compatible_donor_wins() {
    // O+ comes first even though O- is the "better" universal donor
    let donors = vec![donor("a", BPos), donor("b", OPos), donor("c", ONeg)];
    assert_eq!(find_best_match(&donors, APos).unwrap().id, "b");

    let reordered = vec![donor("c", ONeg), donor("b", OPos)];
    assert_eq!(find_best_match(&reordered, APos).unwrap().id, "c");
}

#[test]
fn test_no_compatible_donor() {
    let donors = vec![donor("1", APos), donor("2", AbNeg)];
    assert!(find_best_match(&donors, ONeg).is_none());
}
