//! Terminal-oriented ASCII board renderer.
//!
//! Row 0 is printed first. Light pieces are lower case, dark pieces upper
//! case, empty squares `.`; unassigned kind codes show as `?`.

use crate::game_state::chess_rules::BOARD_N;
use crate::game_state::{chess_types::*, game_state::State};

pub fn render_game_state(state: &State) -> String {
    let mut out = String::new();
    let header: String = (0..BOARD_N)
        .map(|col| char::from(b'a' + col as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    out.push_str("  ");
    out.push_str(&header);
    out.push('\n');

    for row in 0..BOARD_N {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');
        for col in 0..BOARD_N {
            out.push(piece_char(state.piece_at(square_at(row, col))));
            if col + 1 < BOARD_N {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "to move: {:?}, ply: {}",
        state.side_to_move, state.ply
    ));
    out
}

fn piece_char(code: PieceCode) -> char {
    if code.is_empty() {
        return '.';
    }
    match (code.kind(), code.color()) {
        (Some(kind), Color::Light) => kind.symbol(),
        (Some(kind), Color::Dark) => kind.symbol().to_ascii_uppercase(),
        (None, _) => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::State;

    #[test]
    fn renders_start_position() {
        let rendered = render_game_state(&State::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "  a b c d e f");
        assert_eq!(lines[1], "0 R B N K B R");
        assert_eq!(lines[2], "1 P P P P P P");
        assert_eq!(lines[3], "2 . . . . . .");
        assert_eq!(lines[5], "4 p p p p p p");
        assert_eq!(lines[6], "5 r b n k b r");
        assert_eq!(lines[7], "to move: Light, ply: 0");
    }
}
