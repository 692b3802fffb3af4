/// All game entity types — plain data plus a little geometry.
///
/// Behaviour (movement, bouncing, collisions) lives in `compute`.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in world units.  `width` and `height` are always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Build a box of the given size whose center is `(cx, cy)`.
    pub fn from_center(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Rect {
            x: cx - width / 2,
            y: cy - height / 2,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn translate(&self, v: Velocity) -> Rect {
        Rect {
            x: self.x + v.dx,
            y: self.y + v.dy,
            ..*self
        }
    }
}

/// Integer displacement per frame.  Doubles as the key for sprite facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Velocity { dx, dy }
    }
}

/// The visible play area.  Positions are valid in `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1100,
            height: 650,
        }
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// One of the eight discrete facings a player sprite can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Facing for a displacement, by per-axis sign.  `None` for a zero move.
    /// Screen coordinates: negative `dy` points up.
    pub fn from_velocity(v: Velocity) -> Option<Direction> {
        match (v.dx.signum(), v.dy.signum()) {
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Stable index into per-direction lookup tables (order of `ALL`).
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSprite {
    Facing(Direction),
    /// Shown after a hazard kill until the player next moves.
    Celebrating,
    /// Shown once on game over.
    Defeated,
}

/// Directional keys held during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the simulation consumes from the input source for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: HeldKeys,
    /// Discrete fire events received since the previous frame.
    pub fires: usize,
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Anything with a box on screen: drawable and, except effects, collidable.
pub trait Entity {
    fn bounds(&self) -> Rect;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub sprite: PlayerSprite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub velocity: Velocity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    pub rect: Rect,
    pub velocity: Velocity,
    pub radius: i32,
}

/// Short-lived explosion marker.  Never collides with anything.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectTimer {
    pub rect: Rect,
    /// Remaining frames to display.
    pub frames_left: u32,
}

impl EffectTimer {
    /// Odd counters show the mirrored image, even counters the plain one.
    pub fn is_mirrored(&self) -> bool {
        self.frames_left % 2 == 1
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Entity for Hazard {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Entity for EffectTimer {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Score ─────────────────────────────────────────────────────────────────────

/// Monotonic kill counter with a cached, ready-to-draw label.
#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    score: u32,
    label: String,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard {
            score: 0,
            label: Self::render_label(0),
        }
    }

    /// Increase the score and regenerate the label before returning.
    pub fn add(&mut self, amount: u32) {
        self.score += amount;
        self.label = Self::render_label(self.score);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn render_label(score: u32) -> String {
        format!("Score: {}", score)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Session parameters fixed at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub viewport: Viewport,
    pub hazard_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            viewport: Viewport::default(),
            hazard_count: 5,
        }
    }
}

/// The entire game state.  Cloneable so `tick` can return a new copy
/// without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub viewport: Viewport,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub hazards: Vec<Hazard>,
    pub effects: Vec<EffectTimer>,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
    /// Completed running frames.
    pub frame: u64,
}
