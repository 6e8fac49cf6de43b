use std::fmt;

/// Edge length of every frame tile, in pixels
pub const FRAME_SIZE: u32 = 64;

/// Character directories under the asset root, in processing order
pub const CHARACTERS: [&str; 3] = ["orc1", "orc2", "orc3"];

/// A named animation sequence, one sprite sheet per character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Walk,
    Attack,
    Death,
    Run,
    Hurt,
}

impl Action {
    /// All actions in processing order
    pub const ALL: [Action; 6] = [
        Action::Idle,
        Action::Walk,
        Action::Attack,
        Action::Death,
        Action::Run,
        Action::Hurt,
    ];

    /// Number of animation frames (sheet columns) for this action
    pub fn frame_count(self) -> u32 {
        match self {
            Action::Idle => 4,
            Action::Walk | Action::Hurt => 6,
            Action::Attack | Action::Death | Action::Run => 8,
        }
    }

    /// Name used for the sheet file stem and the output directory
    pub fn name(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Walk => "walk",
            Action::Attack => "attack",
            Action::Death => "death",
            Action::Run => "run",
            Action::Hurt => "hurt",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Facing direction. Each direction occupies one row of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    West,
    East,
    North,
}

impl Direction {
    /// Number of direction rows in a sprite sheet
    pub const COUNT: u32 = 4;

    /// All directions in sheet row order (top row first)
    pub const ALL: [Direction; Direction::COUNT as usize] = [
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::North,
    ];

    /// Zero-based sheet row holding this direction's frames
    pub fn row(self) -> u32 {
        match self {
            Direction::South => 0,
            Direction::West => 1,
            Direction::East => 2,
            Direction::North => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
            Direction::North => "north",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
