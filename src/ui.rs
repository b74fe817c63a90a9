#![cfg(feature = "std")]
//! Terminal rendering and coordinate parsing for the CLI front end.

use crate::combatant::Combatant;
use crate::game::Match;
use crate::vessel::Direction;

/// Format (row, col) the way players type it: column letter, 1-based row.
pub fn coord_label(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a coordinate like `B4` into 0-based (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// `v`/`V` means vertical, anything else horizontal.
pub fn parse_direction(token: &str) -> Direction {
    match token.chars().next() {
        Some('v') | Some('V') => Direction::Vertical,
        _ => Direction::Horizontal,
    }
}

fn print_header(n: usize) {
    print!("   ");
    for c in 0..n {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
}

/// Print a combatant's own grid: `S` intact segment, `X` struck segment,
/// `o` miss, `.` open water.
pub fn print_own_board(combatant: &Combatant) {
    let n = combatant.grid_size();
    let live = combatant.live_mask();
    let layout = combatant.layout_mask();
    let hits = combatant.hit_mask();
    print_header(n);
    for r in 0..n {
        print!("{:2} ", r + 1);
        for c in 0..n {
            let struck = hits.get(r, c).unwrap_or(false);
            let ch = if struck && layout.get(r, c).unwrap_or(false) {
                'X'
            } else if struck {
                'o'
            } else if live.get(r, c).unwrap_or(false) {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print a rival's grid as the shooter sees it: only the shots fired and
/// whether they found a vessel.
pub fn print_tracking_board(rival: &Combatant) {
    let n = rival.grid_size();
    let layout = rival.layout_mask();
    let hits = rival.hit_mask();
    print_header(n);
    for r in 0..n {
        print!("{:2} ", r + 1);
        for c in 0..n {
            let struck = hits.get(r, c).unwrap_or(false);
            let ch = if struck && layout.get(r, c).unwrap_or(false) {
                'X'
            } else if struck {
                'o'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Opponent tracking board on top, the player's own board below.
pub fn print_match_view(game: &Match) {
    println!("Opponent waters:");
    print_tracking_board(game.opponent().combatant());
    println!("\nYour waters:");
    print_own_board(game.player());
}
