//! Cards and their render snapshot.
//!
//! A `Card` is owned by exactly one session. Matching never deletes a card:
//! the `matched` flag marks it removed from play so observers can animate
//! it out themselves.

use serde::{Deserialize, Serialize};

/// Opaque card identifier, unique for the lifetime of its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in a session deck.
///
/// Invariant: `matched` implies `face_up`. Only the session mutates cards,
/// so the fields are read through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    value: u32,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, value: u32) -> Self {
        Self {
            id,
            value,
            face_up: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Face value, shared with exactly one other card in the deck.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can a tap on this card change anything?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn conceal(&mut self) {
        debug_assert!(!self.matched, "matched cards stay face-up");
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }

    /// Render view of this card. The value is only disclosed while face-up.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            id: self.id,
            value: self.face_up.then_some(self.value),
            face_up: self.face_up,
            matched: self.matched,
        }
    }
}

/// One entry of a session snapshot, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `Some` only when the card is face-up.
    pub value: Option<u32>,
    pub face_up: bool,
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(CardId::from(5), id);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_new_card_is_concealed() {
        let card = Card::new(CardId::new(1), 3);
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert!(card.is_selectable());
        assert_eq!(card.view().value, None);
    }

    #[test]
    fn test_reveal_discloses_value() {
        let mut card = Card::new(CardId::new(1), 3);
        card.reveal();

        let view = card.view();
        assert!(view.face_up);
        assert_eq!(view.value, Some(3));
        assert!(!card.is_selectable());

        card.conceal();
        assert_eq!(card.view().value, None);
    }

    #[test]
    fn test_matched_implies_face_up() {
        let mut card = Card::new(CardId::new(1), 3);
        card.mark_matched();

        assert!(card.is_matched());
        assert!(card.is_face_up());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_view_serialization() {
        let mut card = Card::new(CardId::new(10), 2);
        let hidden = serde_json::to_value(card.view()).unwrap();
        assert_eq!(hidden["value"], serde_json::Value::Null);

        card.reveal();
        let json = serde_json::to_string(&card.view()).unwrap();
        let back: CardView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card.view());
    }
}
