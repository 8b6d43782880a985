use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line, Points},
        Block, Borders, Widget,
    },
};

use crate::game::{FigureStyle, Part, PersonPart, Side, SpiderPart};

/// Drawing space, in artwork units (200 wide, 250 tall).
/// Coordinates below have y growing downwards and are flipped when painted.
pub const WIDTH: f64 = 200.0;
pub const HEIGHT: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line(f64, f64, f64, f64),
    Circle { x: f64, y: f64, r: f64 },
    Ellipse { x: f64, y: f64, rx: f64, ry: f64 },
}

const GALLOWS: [Stroke; 4] = [
    Stroke::Line(10.0, 230.0, 150.0, 230.0),
    Stroke::Line(50.0, 230.0, 50.0, 20.0),
    Stroke::Line(50.0, 20.0, 130.0, 20.0),
    Stroke::Line(130.0, 20.0, 130.0, 50.0),
];

const WEB_CENTER: (f64, f64) = (100.0, 125.0);

const WEB_SPOKES: [(f64, f64); 10] = [
    (100.0, 10.0),
    (175.0, 25.0),
    (195.0, 85.0),
    (195.0, 165.0),
    (175.0, 225.0),
    (100.0, 240.0),
    (25.0, 225.0),
    (5.0, 165.0),
    (5.0, 85.0),
    (25.0, 25.0),
];

const WEB_RINGS: [[(f64, f64); 10]; 3] = [
    [
        (100.0, 95.0), (120.0, 100.0), (130.0, 110.0), (130.0, 140.0), (120.0, 150.0),
        (100.0, 155.0), (80.0, 150.0), (70.0, 140.0), (70.0, 110.0), (80.0, 100.0),
    ],
    [
        (100.0, 65.0), (135.0, 75.0), (155.0, 95.0), (155.0, 155.0), (135.0, 175.0),
        (100.0, 185.0), (65.0, 175.0), (45.0, 155.0), (45.0, 95.0), (65.0, 75.0),
    ],
    [
        (100.0, 35.0), (165.0, 50.0), (190.0, 85.0), (190.0, 165.0), (165.0, 200.0),
        (100.0, 215.0), (35.0, 200.0), (10.0, 165.0), (10.0, 85.0), (35.0, 50.0),
    ],
];

/// Left-hand spider legs as (hip, knee, foot), front pair first. Right legs
/// mirror them across the web's centre line.
const SPIDER_LEFT_LEGS: [[(f64, f64); 3]; 4] = [
    [(88.0, 110.0), (55.0, 95.0), (30.0, 110.0)],
    [(88.0, 130.0), (50.0, 120.0), (20.0, 125.0)],
    [(88.0, 145.0), (50.0, 155.0), (20.0, 160.0)],
    [(88.0, 160.0), (55.0, 175.0), (30.0, 190.0)],
];

/// The person hangs from x = 130; right limbs mirror the left ones there.
const PERSON_AXIS: f64 = 130.0;
const SPIDER_AXIS: f64 = 100.0;

fn mirror(side: Side, axis: f64, x: f64) -> f64 {
    match side {
        Side::Left => x,
        Side::Right => 2.0 * axis - x,
    }
}

/// Static backdrop drawn regardless of how many guesses were missed.
pub fn scenery(style: FigureStyle) -> Vec<Stroke> {
    match style {
        FigureStyle::Person => GALLOWS.to_vec(),
        FigureStyle::Spider => {
            let (cx, cy) = WEB_CENTER;
            let mut strokes: Vec<Stroke> = WEB_SPOKES
                .iter()
                .map(|&(x, y)| Stroke::Line(cx, cy, x, y))
                .collect();
            for ring in WEB_RINGS.iter() {
                for (i, &(x1, y1)) in ring.iter().enumerate() {
                    let (x2, y2) = ring[(i + 1) % ring.len()];
                    strokes.push(Stroke::Line(x1, y1, x2, y2));
                }
            }
            strokes
        }
    }
}

pub fn strokes(part: Part) -> Vec<Stroke> {
    match part {
        Part::Person(p) => person_strokes(p),
        Part::Spider(p) => spider_strokes(p),
    }
}

fn person_strokes(part: PersonPart) -> Vec<Stroke> {
    let m = |side, x| mirror(side, PERSON_AXIS, x);
    match part {
        PersonPart::Head => vec![Stroke::Circle { x: 130.0, y: 70.0, r: 20.0 }],
        PersonPart::Body => vec![Stroke::Line(130.0, 90.0, 130.0, 150.0)],
        PersonPart::Arm(s) => vec![Stroke::Line(130.0, 110.0, m(s, 100.0), 130.0)],
        PersonPart::Leg(s) => vec![Stroke::Line(130.0, 150.0, m(s, 100.0), 180.0)],
        PersonPart::Hand(s) => vec![Stroke::Circle { x: m(s, 100.0), y: 130.0, r: 4.0 }],
        PersonPart::Foot(s) => vec![Stroke::Line(m(s, 100.0), 180.0, m(s, 90.0), 185.0)],
    }
}

fn spider_strokes(part: SpiderPart) -> Vec<Stroke> {
    match part {
        SpiderPart::Body => vec![Stroke::Ellipse { x: 100.0, y: 135.0, rx: 18.0, ry: 28.0 }],
        SpiderPart::Head => vec![Stroke::Circle { x: 100.0, y: 105.0, r: 15.0 }],
        SpiderPart::Leg { pair, side } => {
            let index = usize::from(pair.clamp(1, 4)) - 1;
            let [hip, knee, foot] = SPIDER_LEFT_LEGS[index];
            let m = |x| mirror(side, SPIDER_AXIS, x);
            vec![
                Stroke::Line(m(hip.0), hip.1, m(knee.0), knee.1),
                Stroke::Line(m(knee.0), knee.1, m(foot.0), foot.1),
            ]
        }
    }
}

fn paint(ctx: &mut Context, stroke: Stroke, color: Color) {
    let flip = |y: f64| HEIGHT - y;
    match stroke {
        Stroke::Line(x1, y1, x2, y2) => ctx.draw(&Line {
            x1,
            y1: flip(y1),
            x2,
            y2: flip(y2),
            color,
        }),
        Stroke::Circle { x, y, r } => ctx.draw(&Circle {
            x,
            y: flip(y),
            radius: r,
            color,
        }),
        Stroke::Ellipse { x, y, rx, ry } => {
            let coords: Vec<(f64, f64)> = (0..72)
                .map(|i| {
                    let t = f64::from(i) * std::f64::consts::TAU / 72.0;
                    (x + rx * t.cos(), flip(y + ry * t.sin()))
                })
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color,
            });
        }
    }
}

/// Canvas widget drawing the scenery plus the revealed parts.
pub struct FigureWidget<'a> {
    pub style: FigureStyle,
    pub parts: &'a [Part],
    pub part_color: Color,
    pub title: String,
}

impl Widget for FigureWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let backdrop = scenery(self.style);
        let parts: Vec<Stroke> = self.parts.iter().flat_map(|p| strokes(*p)).collect();
        let part_color = self.part_color;

        Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .marker(Marker::Braille)
            .x_bounds([0.0, WIDTH])
            .y_bounds([0.0, HEIGHT])
            .paint(move |ctx| {
                for stroke in &backdrop {
                    paint(ctx, *stroke, Color::DarkGray);
                }
                ctx.layer();
                for stroke in &parts {
                    paint(ctx, *stroke, part_color);
                }
            })
            .render(area, buf);
    }
}
