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

    src/layout/sections.rs

    Division of the total seat count into angular sections.
*/

use std::{collections::VecDeque, f64::consts::PI};

use crate::LayoutError;

/// A [Section] is one angular wedge of the chart and the number of seats allocated to it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Section {
    pub index: usize,
    pub seats: u32,
    /// Start angle of the wedge in radians.
    pub start_rad: f64,
    /// End angle of the wedge in radians.
    pub end_rad: f64,
}

impl Section {
    #[inline]
    pub fn span(&self) -> f64 {
        self.end_rad - self.start_rad
    }
}

/// Split `total_seats` across `desired_sections` equal wedges of the upper semicircle.
///
/// No more sections than seats are created. Seats are divided evenly, and any remainder is
/// handed out one seat at a time starting from the sections closest to the center of the chart
/// and moving outward, alternating between the left and right halves.
pub fn allocate(total_seats: i32, desired_sections: i32) -> Result<Vec<Section>, LayoutError> {
    if desired_sections <= 0 {
        return Err(LayoutError::InvalidConfiguration(format!(
            "sections must be positive, got {}",
            desired_sections
        )));
    }
    if total_seats < 0 {
        return Err(LayoutError::InvalidConfiguration(format!(
            "total seats must not be negative, got {}",
            total_seats
        )));
    }
    if total_seats == 0 {
        return Ok(Vec::new());
    }

    let final_sections = desired_sections.min(total_seats) as usize;
    let total = total_seats as u32;
    let rad_step = PI / final_sections as f64;
    let base_seats = total / final_sections as u32;

    let mut sections: Vec<Section> = (0..final_sections)
        .map(|i| Section {
            index: i,
            seats: base_seats,
            start_rad: i as f64 * rad_step,
            end_rad: (i + 1) as f64 * rad_step,
        })
        .collect();

    let mut leftover = total % final_sections as u32;
    if leftover == 0 {
        return Ok(sections);
    }

    // Both queues are ordered closest-to-center first.
    let mut left: VecDeque<usize> = (0..final_sections / 2).rev().collect();
    let mut right: VecDeque<usize> = (final_sections / 2..final_sections).collect();

    while leftover > 0 {
        let next = if left.len() >= right.len() {
            left.pop_front()
        }
        else {
            right.pop_front()
        };

        // The remainder is always smaller than the section count, so the queues cannot run dry.
        let Some(idx) = next
        else {
            log::error!("allocate(): ran out of sections with {} seats left over", leftover);
            break;
        };

        sections[idx].seats += 1;
        leftover -= 1;
    }

    log::trace!(
        "allocate(): {} seats over {} sections: {:?}",
        total_seats,
        final_sections,
        sections.iter().map(|s| s.seats).collect::<Vec<_>>()
    );

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat_counts(sections: &[Section]) -> Vec<u32> {
        sections.iter().map(|s| s.seats).collect()
    }

    #[test]
    fn test_allocate_storting() {
        let sections = allocate(169, 2).unwrap();
        assert_eq!(seat_counts(&sections), [85, 84]);
        assert_eq!(sections.iter().map(|s| s.seats).sum::<u32>(), 169);
    }

    #[test]
    fn test_allocate_center_first() {
        let sections = allocate(10, 4).unwrap();
        assert_eq!(seat_counts(&sections), [2, 3, 3, 2]);
    }

    #[test]
    fn test_allocate_alternates_outward() {
        // 5 sections, 4 leftover: left=[1,0], right=[2,3,4]
        // right (3 > 2) -> 2, left (2 >= 2) -> 1, right (2 > 1) -> 3, left (1 >= 1) -> 0
        let sections = allocate(9, 5).unwrap();
        assert_eq!(seat_counts(&sections), [2, 2, 2, 2, 1]);

        // 7 sections, 3 leftover: left=[2,1,0], right=[3,4,5,6] -> 3, then 2, then 4
        let sections = allocate(10, 7).unwrap();
        assert_eq!(seat_counts(&sections), [1, 1, 2, 2, 2, 1, 1]);
    }

    #[test]
    fn test_allocate_even() {
        let sections = allocate(12, 3).unwrap();
        assert_eq!(seat_counts(&sections), [4, 4, 4]);
    }

    #[test]
    fn test_allocate_fewer_seats_than_sections() {
        let sections = allocate(3, 8).unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(seat_counts(&sections), [1, 1, 1]);
    }

    #[test]
    fn test_allocate_angles() {
        let sections = allocate(100, 4).unwrap();
        assert_eq!(sections[0].start_rad, 0.0);
        assert!((sections[3].end_rad - PI).abs() < 1e-12);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end_rad, pair[1].start_rad);
            assert!((pair[0].span() - PI / 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_allocate_zero_seats() {
        assert!(allocate(0, 2).unwrap().is_empty());
    }

    #[test]
    fn test_allocate_invalid() {
        assert!(matches!(allocate(10, 0), Err(LayoutError::InvalidConfiguration(_))));
        assert!(matches!(allocate(-1, 2), Err(LayoutError::InvalidConfiguration(_))));
    }
}
