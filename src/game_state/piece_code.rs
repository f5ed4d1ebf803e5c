//! Packed one-byte piece encoding.
//!
//! Layout (low to high bits): kind (0..2), has-moved flag (3), side (4),
//! power id (5..7). Code `0` is the empty square. Codes are plain values:
//! every mutator returns a modified copy.

use crate::game_state::chess_types::{Color, PieceKind};

pub const KIND_MASK: u8 = 0b0000_0111;
pub const MOVED_MASK: u8 = 0b0000_1000;
pub const SIDE_MASK: u8 = 0b0001_0000;
pub const POWER_MASK: u8 = 0b1110_0000;
pub const POWER_SHIFT: u8 = 5;

/// Largest power id that fits in the three power bits.
pub const MAX_POWER: u8 = 7;

const _: () = assert!(KIND_MASK & MOVED_MASK == 0, "kind and has_moved overlap");
const _: () = assert!(KIND_MASK & SIDE_MASK == 0, "kind and side overlap");
const _: () = assert!(KIND_MASK & POWER_MASK == 0, "kind and power overlap");
const _: () = assert!(MOVED_MASK & SIDE_MASK == 0, "has_moved and side overlap");
const _: () = assert!(MOVED_MASK & POWER_MASK == 0, "has_moved and power overlap");
const _: () = assert!(SIDE_MASK & POWER_MASK == 0, "side and power overlap");

/// Encoded occupant of a single square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PieceCode(u8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);

    #[inline]
    pub const fn new(kind: PieceKind, color: Color, has_moved: bool, power: u8) -> Self {
        let kind_bits = kind.code() & KIND_MASK;
        let moved_bits = if has_moved { MOVED_MASK } else { 0 };
        let side_bits = match color {
            Color::Light => 0,
            Color::Dark => SIDE_MASK,
        };
        let power_bits = (power & MAX_POWER) << POWER_SHIFT;
        Self(kind_bits | moved_bits | side_bits | power_bits)
    }

    /// Fresh, unmoved piece without a power.
    #[inline]
    pub const fn fresh(kind: PieceKind, color: Color) -> Self {
        Self::new(kind, color, false, 0)
    }

    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Raw kind bits; `0` is empty, `7` is an unassigned kind.
    #[inline]
    pub const fn kind_code(self) -> u8 {
        self.0 & KIND_MASK
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.kind_code())
    }

    /// Owning side. Meaningless for the empty code, which decodes as light.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & SIDE_MASK == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.0 & MOVED_MASK != 0
    }

    #[inline]
    pub const fn power(self) -> u8 {
        (self.0 & POWER_MASK) >> POWER_SHIFT
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.kind_code() == 0
    }

    /// True for an occupied square owned by `color`.
    #[inline]
    pub const fn is_side(self, color: Color) -> bool {
        !self.is_empty() && self.color().index() == color.index()
    }

    /// True for an occupied square owned by the opponent of `color`.
    #[inline]
    pub const fn is_enemy_of(self, color: Color) -> bool {
        self.is_side(color.opposite())
    }

    #[inline]
    pub const fn is_kind(self, kind: PieceKind) -> bool {
        self.kind_code() == kind.code()
    }

    #[inline]
    pub const fn with_moved(self) -> Self {
        Self(self.0 | MOVED_MASK)
    }

    #[inline]
    pub const fn without_moved(self) -> Self {
        Self(self.0 & !MOVED_MASK)
    }

    #[inline]
    pub const fn with_side(self, color: Color) -> Self {
        match color {
            Color::Light => Self(self.0 & !SIDE_MASK),
            Color::Dark => Self(self.0 | SIDE_MASK),
        }
    }

    #[inline]
    pub const fn with_power(self, power: u8) -> Self {
        Self((self.0 & !POWER_MASK) | ((power & MAX_POWER) << POWER_SHIFT))
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceCode, MAX_POWER};
    use crate::game_state::chess_types::{Color, PieceKind, ALL_PIECE_KINDS};

    #[test]
    fn fields_decode_independently() {
        for kind in ALL_PIECE_KINDS {
            for color in [Color::Light, Color::Dark] {
                for moved in [false, true] {
                    for power in 0..=MAX_POWER {
                        let code = PieceCode::new(kind, color, moved, power);
                        assert_eq!(code.kind(), Some(kind));
                        assert_eq!(code.color(), color);
                        assert_eq!(code.has_moved(), moved);
                        assert_eq!(code.power(), power);
                        assert!(!code.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn empty_code_belongs_to_nobody() {
        assert!(PieceCode::EMPTY.is_empty());
        assert_eq!(PieceCode::EMPTY.kind(), None);
        assert!(!PieceCode::EMPTY.is_side(Color::Light));
        assert!(!PieceCode::EMPTY.is_side(Color::Dark));
        assert!(!PieceCode::EMPTY.is_enemy_of(Color::Light));
    }

    #[test]
    fn mutators_touch_only_their_field() {
        let rook = PieceCode::new(PieceKind::Rook, Color::Light, false, 3);

        let moved = rook.with_moved();
        assert!(moved.has_moved());
        assert_eq!(moved.without_moved(), rook);

        let dark = rook.with_side(Color::Dark);
        assert_eq!(dark.color(), Color::Dark);
        assert_eq!(dark.kind(), Some(PieceKind::Rook));
        assert_eq!(dark.power(), 3);
        assert_eq!(dark.with_side(Color::Light), rook);

        let powered = rook.with_power(6);
        assert_eq!(powered.power(), 6);
        assert_eq!(powered.kind(), Some(PieceKind::Rook));
        assert!(!powered.has_moved());
    }

    #[test]
    fn power_is_truncated_to_three_bits() {
        let pawn = PieceCode::fresh(PieceKind::Pawn, Color::Dark).with_power(0b1111_1010);
        assert_eq!(pawn.power(), 0b010);
        assert_eq!(pawn.kind(), Some(PieceKind::Pawn));
        assert_eq!(pawn.color(), Color::Dark);
    }

    #[test]
    fn unassigned_kind_bits_decode_to_none() {
        let code = PieceCode::from_raw(0b0000_0111);
        assert!(!code.is_empty());
        assert_eq!(code.kind(), None);
    }
}
