//! Compatibility resolver - which donor types may give to which recipients
//!
//! Pure lookup over fixed transfusion reference data: O- is the universal
//! donor, AB+ the universal recipient.

use crate::core::models::{BloodType, Donor};

use BloodType::{ANeg, APos, AbNeg, AbPos, BNeg, BPos, ONeg, OPos};

const FOR_O_NEG: &[BloodType] = &[ONeg];
const FOR_O_POS: &[BloodType] = &[OPos, ONeg];
const FOR_A_NEG: &[BloodType] = &[ANeg, ONeg];
const FOR_A_POS: &[BloodType] = &[APos, ANeg, OPos, ONeg];
const FOR_B_NEG: &[BloodType] = &[BNeg, ONeg];
const FOR_B_POS: &[BloodType] = &[BPos, BNeg, OPos, ONeg];
const FOR_AB_NEG: &[BloodType] = &[AbNeg, ANeg, BNeg, ONeg];
const FOR_AB_POS: &[BloodType] = &[AbPos, AbNeg, APos, ANeg, BPos, BNeg, OPos, ONeg];

/// Donor types allowed to give to a recipient of `recipient` type, in table order
#[must_use]
pub const fn compatible_donor_types(recipient: BloodType) -> &'static [BloodType] {
    match recipient {
        ONeg => FOR_O_NEG,
        OPos => FOR_O_POS,
        ANeg => FOR_A_NEG,
        APos => FOR_A_POS,
        BNeg => FOR_B_NEG,
        BPos => FOR_B_POS,
        AbNeg => FOR_AB_NEG,
        AbPos => FOR_AB_POS,
    }
}

/// Whether a `donor` type may give to a `recipient` type
#[must_use]
pub fn can_donate(donor: BloodType, recipient: BloodType) -> bool {
    compatible_donor_types(recipient).contains(&donor)
}

/// First donor, in the order given, who can give to `recipient`
///
/// There is no ranking: whoever comes first wins. Directory order is newest
/// first, so the most recently registered compatible donor is returned.
#[must_use]
pub fn find_best_match(donors: &[Donor], recipient: BloodType) -> Option<&Donor> {
    let compatible = compatible_donor_types(recipient);
    donors.iter().find(|d| compatible.contains(&d.blood_type))
}
