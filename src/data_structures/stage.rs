//! Seasonal colour schemes.

/// RGBA colour.
pub type Colour = [f32; 4];

pub const TREE_PALETTE_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Summer,
    Autumn,
    Winter,
    Night,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Summer, Stage::Autumn, Stage::Winter, Stage::Night];
    pub const COUNT: usize = Self::ALL.len();

    /// Stage for a round-robin selector value; wraps around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn index(self) -> usize {
        match self {
            Stage::Summer => 0,
            Stage::Autumn => 1,
            Stage::Winter => 2,
            Stage::Night => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Ambient background tint.
    pub fn clear_colour(self) -> Colour {
        match self {
            Stage::Summer => [0.498, 0.720, 0.187, 1.0],
            Stage::Autumn => [0.990, 0.703, 0.129, 1.0],
            Stage::Winter => [0.911, 0.918, 0.920, 1.0],
            Stage::Night => [0.050, 0.300, 0.200, 1.0],
        }
    }

    pub fn tree_palette(self) -> &'static [Colour; TREE_PALETTE_LEN] {
        &TREE_PALETTES[self.index()]
    }
}

const TREE_PALETTES: [[Colour; TREE_PALETTE_LEN]; Stage::COUNT] = [
    [
        [0.196, 0.580, 0.110, 1.0],
        [0.352, 0.890, 0.231, 1.0],
        [0.227, 0.400, 0.188, 1.0],
        [0.198, 0.600, 0.406, 1.0],
        [0.205, 0.410, 0.311, 1.0],
        [0.390, 0.560, 0.040, 1.0],
    ],
    [
        [0.560, 0.373, 0.051, 1.0],
        [0.550, 0.459, 0.302, 1.0],
        [0.760, 0.237, 0.106, 1.0],
        [0.540, 0.305, 0.178, 1.0],
        [0.770, 0.000, 0.000, 1.0],
        [0.700, 0.490, 0.392, 1.0],
    ],
    [
        [0.7, 0.7, 0.7, 1.0],
        [0.6, 0.6, 0.6, 1.0],
        [0.5, 0.5, 0.5, 1.0],
        [0.4, 0.4, 0.4, 1.0],
        [0.449, 0.591, 0.680, 1.0],
        [0.230, 0.329, 0.390, 1.0],
    ],
    [
        [0.10, 0.30, 0.05, 1.0],
        [0.20, 0.45, 0.10, 1.0],
        [0.10, 0.20, 0.10, 1.0],
        [0.10, 0.30, 0.20, 1.0],
        [0.10, 0.20, 0.15, 1.0],
        [0.20, 0.25, 0.00, 1.0],
    ],
];
