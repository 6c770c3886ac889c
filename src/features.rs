// src/features.rs
//! Fixed-width position summaries handed to external evaluators.
use serde::{Deserialize, Serialize};

use crate::board::{Grid, PieceCounts};
use crate::location::Location;
use crate::square::Player;

/// Seven features describing a position from one side's point of view.
///
/// Piece counts are absolute (player one / player two); the edge count and
/// average rows are relative to the `own` side the summary was made for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateFeatures {
    pub p1_men: u8,
    pub p2_men: u8,
    pub p1_kings: u8,
    pub p2_kings: u8,
    pub own_edge_pieces: u8,
    pub own_avg_row: u8,
    pub opp_avg_row: u8,
}

impl StateFeatures {
    pub fn piece_counts(&self) -> PieceCounts {
        PieceCounts {
            p1_men: self.p1_men,
            p2_men: self.p2_men,
            p1_kings: self.p1_kings,
            p2_kings: self.p2_kings,
        }
    }

    pub fn as_tuple(&self) -> (u8, u8, u8, u8, u8, u8, u8) {
        (self.p1_men, self.p2_men, self.p1_kings, self.p2_kings,
         self.own_edge_pieces, self.own_avg_row, self.opp_avg_row)
    }
}

/// Summarizes one grid for `own`.
pub fn summarize(grid: &Grid, own: Player) -> StateFeatures {
    let counts = PieceCounts::from_grid(grid);
    let mut edges = 0u8;
    let mut own_rows = 0u32;
    let mut opp_rows = 0u32;

    for (row, squares) in grid.iter().enumerate() {
        for (col, square) in squares.iter().enumerate() {
            let Some(owner) = square.owner() else { continue };
            let loc = Location::new(row as u8, col as u8);
            if owner == own {
                if loc.is_edge() { edges += 1; }
                own_rows += row as u32;
            } else {
                opp_rows += row as u32;
            }
        }
    }

    StateFeatures {
        p1_men: counts.p1_men,
        p2_men: counts.p2_men,
        p1_kings: counts.p1_kings,
        p2_kings: counts.p2_kings,
        own_edge_pieces: edges,
        own_avg_row: average_row(own_rows, counts.total(own)),
        opp_avg_row: average_row(opp_rows, counts.total(own.opponent())),
    }
}

/// Batch form of [`summarize`], one entry per grid.
pub fn summarize_states(grids: &[Grid], own: Player) -> Vec<StateFeatures> {
    grids.iter().map(|grid| summarize(grid, own)).collect()
}

// Truncating mean; 0 for a side with no pieces.
fn average_row(row_sum: u32, pieces: u8) -> u8 {
    if pieces == 0 { 0 } else { (row_sum / pieces as u32) as u8 }
}
