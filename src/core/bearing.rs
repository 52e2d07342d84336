// src/core/bearing.rs
// 16-point compass used by the wind direction column.

/// Compass points in clockwise order, starting at North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compass {
    N, NNE, NE, ENE,
    E, ESE, SE, SSE,
    S, SSW, SW, WSW,
    W, WNW, NW, NNW,
}

const POINTS: usize = 16;

impl Compass {
    pub const ALL: [Compass; POINTS] = [
        Compass::N, Compass::NNE, Compass::NE, Compass::ENE,
        Compass::E, Compass::ESE, Compass::SE, Compass::SSE,
        Compass::S, Compass::SSW, Compass::SW, Compass::WSW,
        Compass::W, Compass::WNW, Compass::NW, Compass::NNW,
    ];

    /// Label as printed on the observation pages.
    pub fn label(self) -> &'static str {
        match self {
            Compass::N   => "北",
            Compass::NNE => "北北東",
            Compass::NE  => "北東",
            Compass::ENE => "東北東",
            Compass::E   => "東",
            Compass::ESE => "東南東",
            Compass::SE  => "南東",
            Compass::SSE => "南南東",
            Compass::S   => "南",
            Compass::SSW => "南南西",
            Compass::SW  => "南西",
            Compass::WSW => "西南西",
            Compass::W   => "西",
            Compass::WNW => "西北西",
            Compass::NW  => "北西",
            Compass::NNW => "北北西",
        }
    }

    /// Position on the rose, 0 = North, clockwise.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Degrees clockwise from North: `360 * index / 16`.
    pub fn degrees(self) -> f64 {
        360.0 * self.index() as f64 / POINTS as f64
    }

    /// Exact label match. Callers trim first.
    pub fn from_label(label: &str) -> Option<Compass> {
        Compass::ALL.iter().copied().find(|c| c.label() == label)
    }
}
