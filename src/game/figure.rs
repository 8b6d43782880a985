use super::difficulty::{Difficulty, FigureStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A drawable piece of the hanged person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonPart {
    Head,
    Body,
    Arm(Side),
    Leg(Side),
    Hand(Side),
    Foot(Side),
}

/// A drawable piece of the spider. Leg pairs are numbered front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpiderPart {
    Body,
    Head,
    Leg { pair: u8, side: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Person(PersonPart),
    Spider(SpiderPart),
}

const PERSON_PARTS: [Part; 10] = [
    Part::Person(PersonPart::Head),
    Part::Person(PersonPart::Body),
    Part::Person(PersonPart::Arm(Side::Left)),
    Part::Person(PersonPart::Arm(Side::Right)),
    Part::Person(PersonPart::Leg(Side::Left)),
    Part::Person(PersonPart::Leg(Side::Right)),
    Part::Person(PersonPart::Hand(Side::Left)),
    Part::Person(PersonPart::Hand(Side::Right)),
    Part::Person(PersonPart::Foot(Side::Left)),
    Part::Person(PersonPart::Foot(Side::Right)),
];

const SPIDER_PARTS: [Part; 10] = [
    Part::Spider(SpiderPart::Body),
    Part::Spider(SpiderPart::Head),
    Part::Spider(SpiderPart::Leg { pair: 1, side: Side::Left }),
    Part::Spider(SpiderPart::Leg { pair: 1, side: Side::Right }),
    Part::Spider(SpiderPart::Leg { pair: 2, side: Side::Left }),
    Part::Spider(SpiderPart::Leg { pair: 2, side: Side::Right }),
    Part::Spider(SpiderPart::Leg { pair: 3, side: Side::Left }),
    Part::Spider(SpiderPart::Leg { pair: 3, side: Side::Right }),
    Part::Spider(SpiderPart::Leg { pair: 4, side: Side::Left }),
    Part::Spider(SpiderPart::Leg { pair: 4, side: Side::Right }),
];

/// Number of parts eligible to be drawn, clamped to the budget.
pub fn visible_count(wrong_guesses: usize, difficulty: Difficulty) -> usize {
    wrong_guesses.min(difficulty.budget())
}

/// Parts to draw, in reveal order.
///
/// Always a prefix of the style's table, so a growing count never hides a
/// part that was already shown.
pub fn parts_to_draw(
    wrong_guesses: usize,
    difficulty: Difficulty,
    style: FigureStyle,
) -> &'static [Part] {
    let table: &'static [Part] = match style {
        FigureStyle::Person => &PERSON_PARTS,
        FigureStyle::Spider => &SPIDER_PARTS,
    };
    &table[..visible_count(wrong_guesses, difficulty).min(table.len())]
}
