/*
    Hemicycle

    Copyright 2024 The Hemicycle Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    src/layout/leveling.rs

    Tagging of leveling (compensatory) seats.
*/

use crate::{
    party::{Party, Seat, SeatSlot},
    HemiHashMap,
    LayoutError,
};

/// Tag each seat as a leveling seat or a district seat.
///
/// `slots` must be in party-grouped order, as produced by [crate::party::expand_seats]. While
/// scanning, a counter runs per party and restarts whenever the party code changes; a seat is a
/// leveling seat if the counter is below the party's leveling count. The first
/// `party.leveling` seats of each party group are therefore the leveling seats.
///
/// Every seat must belong to a party in `parties`. A seat with an unknown party code fails
/// with [LayoutError::PartyLookup].
pub fn annotate(slots: &[SeatSlot], parties: &[Party]) -> Result<Vec<Seat>, LayoutError> {
    // The first entry for a code wins.
    let mut lookup: HemiHashMap<&str, &Party> = HemiHashMap::new();
    for party in parties {
        lookup.entry(party.code.as_str()).or_insert(party);
    }

    let mut current = parties.first().map(|p| p.code.as_str());
    let mut counter: u32 = 0;
    let mut seats = Vec::with_capacity(slots.len());

    for slot in slots {
        let party = lookup
            .get(slot.party.as_str())
            .ok_or_else(|| LayoutError::PartyLookup(slot.party.clone()))?;

        if current != Some(party.code.as_str()) {
            current = Some(party.code.as_str());
            counter = 0;
        }

        seats.push(Seat {
            index: slot.index,
            party: slot.party.clone(),
            leveling: counter < party.leveling,
        });

        counter += 1;
    }

    log::debug!(
        "annotate(): {} of {} seats are leveling seats",
        seats.iter().filter(|s| s.leveling).count(),
        seats.len()
    );

    Ok(seats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::expand_seats;

    fn flags(seats: &[Seat]) -> Vec<bool> {
        seats.iter().map(|s| s.leveling).collect()
    }

    #[test]
    fn test_first_seats_are_leveling() {
        let parties = [Party::new("A", 5, 2), Party::new("B", 3, 1)];
        let seats = annotate(&expand_seats(&parties), &parties).unwrap();

        assert_eq!(
            flags(&seats),
            [true, true, false, false, false, true, false, false]
        );
        assert!(seats[..5].iter().all(|s| s.party == "A"));
        assert!(seats[5..].iter().all(|s| s.party == "B"));
    }

    #[test]
    fn test_counter_restarts_per_group() {
        // A party appearing in two separate groups restarts its count in the second group.
        let parties = [Party::new("A", 2, 1), Party::new("B", 1, 0)];
        let slots = [
            SeatSlot { index: 0, party: "A".into() },
            SeatSlot { index: 1, party: "B".into() },
            SeatSlot { index: 2, party: "A".into() },
            SeatSlot { index: 3, party: "A".into() },
        ];
        let seats = annotate(&slots, &parties).unwrap();
        assert_eq!(flags(&seats), [true, false, true, false]);
    }

    #[test]
    fn test_leveling_exceeds_seats() {
        let parties = [Party::new("A", 2, 4)];
        let seats = annotate(&expand_seats(&parties), &parties).unwrap();
        assert_eq!(flags(&seats), [true, true]);
    }

    #[test]
    fn test_identity_preserved() {
        let parties = [Party::new("A", 3, 1), Party::new("B", 2, 2)];
        let slots = expand_seats(&parties);
        let seats = annotate(&slots, &parties).unwrap();
        for (slot, seat) in slots.iter().zip(&seats) {
            assert_eq!(slot.index, seat.index);
            assert_eq!(slot.party, seat.party);
        }
    }

    #[test]
    fn test_unknown_party() {
        let parties = [Party::new("A", 1, 0)];
        let slots = [
            SeatSlot { index: 0, party: "A".into() },
            SeatSlot { index: 1, party: "X".into() },
        ];
        assert_eq!(annotate(&slots, &parties), Err(LayoutError::PartyLookup("X".into())));
    }

    #[test]
    fn test_empty() {
        assert!(annotate(&[], &[]).unwrap().is_empty());
    }
}
