/// Pure game-logic functions.
///
/// Every public function takes immutable references to the current state
/// and returns a brand-new value.  The only injected side effect is the RNG
/// used once by `init_state` to scatter hazards.

use log::{debug, info};
use rand::Rng;

use crate::entities::{
    Direction, EffectTimer, Entity, FrameInput, GameConfig, GameState, GameStatus, Hazard,
    HeldKeys, Player, PlayerSprite, Projectile, Rect, Scoreboard, Velocity, Viewport,
};

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Per-axis displacement contributed by one held direction key.
pub const PLAYER_STEP: i32 = 5;
pub const PLAYER_SIZE: (i32, i32) = (60, 60);
pub const PLAYER_START: (i32, i32) = (300, 200);

pub const PROJECTILE_SIZE: (i32, i32) = (40, 10);
pub const PROJECTILE_VELOCITY: Velocity = Velocity { dx: 5, dy: 0 };

pub const HAZARD_RADIUS: i32 = 10;
pub const HAZARD_VELOCITY: Velocity = Velocity { dx: 5, dy: 5 };

pub const EFFECT_SIZE: (i32, i32) = (50, 50);
pub const EFFECT_FRAMES: u32 = 20;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Per-axis containment test: `(inside_horizontally, inside_vertically)`.
pub fn check_bound(rect: &Rect, viewport: &Viewport) -> (bool, bool) {
    let horizontal = rect.left() >= 0 && rect.right() <= viewport.width;
    let vertical = rect.top() >= 0 && rect.bottom() <= viewport.height;
    (horizontal, vertical)
}

/// Strict AABB overlap.  Boxes that only share an edge do not collide.
pub fn overlaps(a: &impl Entity, b: &impl Entity) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_player(cx: i32, cy: i32) -> Player {
    Player {
        rect: Rect::from_center(cx, cy, PLAYER_SIZE.0, PLAYER_SIZE.1),
        sprite: PlayerSprite::Facing(Direction::Right),
    }
}

/// Projectile leaving the player's right edge, vertically centered on it.
pub fn spawn_projectile(player: &Player) -> Projectile {
    let (w, h) = PROJECTILE_SIZE;
    Projectile {
        rect: Rect::new(player.rect.right(), player.rect.center_y() - h / 2, w, h),
        velocity: PROJECTILE_VELOCITY,
    }
}

pub fn new_hazard(cx: i32, cy: i32, radius: i32) -> Hazard {
    Hazard {
        rect: Rect::from_center(cx, cy, 2 * radius, 2 * radius),
        velocity: HAZARD_VELOCITY,
        radius,
    }
}

/// Hazard centered anywhere in the viewport, edges included.  The box may
/// start partially outside; the first bounce brings it back.
pub fn spawn_hazard(viewport: &Viewport, rng: &mut impl Rng) -> Hazard {
    let cx = rng.gen_range(0..=viewport.width);
    let cy = rng.gen_range(0..=viewport.height);
    new_hazard(cx, cy, HAZARD_RADIUS)
}

pub fn spawn_effect(hazard: &Hazard) -> EffectTimer {
    let (cx, cy) = hazard.rect.center();
    EffectTimer {
        rect: Rect::from_center(cx, cy, EFFECT_SIZE.0, EFFECT_SIZE.1),
        frames_left: EFFECT_FRAMES,
    }
}

/// Build the initial session state.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let viewport = config.viewport;
    let hazards = (0..config.hazard_count)
        .map(|_| spawn_hazard(&viewport, rng))
        .collect();
    GameState {
        viewport,
        player: new_player(PLAYER_START.0, PLAYER_START.1),
        projectiles: Vec::new(),
        hazards,
        effects: Vec::new(),
        scoreboard: Scoreboard::new(),
        status: GameStatus::Running,
        frame: 0,
    }
}

// ── Per-entity updates ───────────────────────────────────────────────────────

/// Sum of the displacements of every held direction key.
pub fn held_displacement(held: &HeldKeys) -> Velocity {
    let mut v = Velocity::ZERO;
    if held.up {
        v.dy -= PLAYER_STEP;
    }
    if held.down {
        v.dy += PLAYER_STEP;
    }
    if held.left {
        v.dx -= PLAYER_STEP;
    }
    if held.right {
        v.dx += PLAYER_STEP;
    }
    v
}

/// Move the player by the held keys.  A move leaving the viewport on either
/// axis is rejected whole; the sprite only changes on a non-zero move.
pub fn update_player(player: &Player, held: &HeldKeys, viewport: &Viewport) -> Player {
    let step = held_displacement(held);
    let moved = player.rect.translate(step);
    let rect = if check_bound(&moved, viewport) == (true, true) {
        moved
    } else {
        player.rect
    };
    let sprite = match Direction::from_velocity(step) {
        Some(dir) => PlayerSprite::Facing(dir),
        None => player.sprite,
    };
    Player { rect, sprite }
}

/// Advance a projectile.  `None` once it is (or would end up) outside.
pub fn update_projectile(projectile: &Projectile, viewport: &Viewport) -> Option<Projectile> {
    if check_bound(&projectile.rect, viewport) != (true, true) {
        return None;
    }
    let rect = projectile.rect.translate(projectile.velocity);
    if check_bound(&rect, viewport) != (true, true) {
        return None;
    }
    Some(Projectile {
        rect,
        ..projectile.clone()
    })
}

/// Reflect on each out-of-bounds axis, then move by the new velocity.
pub fn update_hazard(hazard: &Hazard, viewport: &Viewport) -> Hazard {
    let (horizontal, vertical) = check_bound(&hazard.rect, viewport);
    let mut velocity = hazard.velocity;
    if !horizontal {
        velocity.dx = -velocity.dx;
    }
    if !vertical {
        velocity.dy = -velocity.dy;
    }
    Hazard {
        rect: hazard.rect.translate(velocity),
        velocity,
        radius: hazard.radius,
    }
}

/// Count an effect down by one frame.  `None` once the counter hits zero.
pub fn update_effect(effect: &EffectTimer) -> Option<EffectTimer> {
    if effect.frames_left <= 1 {
        return None;
    }
    Some(EffectTimer {
        frames_left: effect.frames_left - 1,
        ..effect.clone()
    })
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: fire → player/hazard check → projectile/hazard check → compaction →
/// movement.  Collisions are tested on last frame's positions.  A game-over
/// state is returned unchanged.
pub fn tick(state: &GameState, input: &FrameInput) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let viewport = state.viewport;
    let frame = state.frame + 1;
    let mut player = state.player.clone();

    // ── 1. Fire events ───────────────────────────────────────────────────────
    let mut projectiles = state.projectiles.clone();
    for _ in 0..input.fires {
        projectiles.push(spawn_projectile(&player));
    }

    // ── 2. Player ↔ hazards ──────────────────────────────────────────────────
    if state.hazards.iter().any(|h| overlaps(&player, h)) {
        info!(
            "game over at frame {} with score {}",
            frame,
            state.scoreboard.score()
        );
        player.sprite = PlayerSprite::Defeated;
        return GameState {
            player,
            projectiles,
            status: GameStatus::GameOver,
            frame,
            ..state.clone()
        };
    }

    // ── 3. Projectiles ↔ hazards ─────────────────────────────────────────────
    let mut dead_projectiles = vec![false; projectiles.len()];
    let mut dead_hazards = vec![false; state.hazards.len()];
    let mut effects = state.effects.clone();
    let mut scoreboard = state.scoreboard.clone();

    for (pi, projectile) in projectiles.iter().enumerate() {
        for (hi, hazard) in state.hazards.iter().enumerate() {
            if dead_hazards[hi] || !overlaps(projectile, hazard) {
                continue;
            }
            dead_projectiles[pi] = true;
            dead_hazards[hi] = true;
            effects.push(spawn_effect(hazard));
            scoreboard.add(1);
            player.sprite = PlayerSprite::Celebrating;
            debug!(
                "hazard destroyed at {:?}, score {}",
                hazard.rect.center(),
                scoreboard.score()
            );
            break;
        }
    }

    // ── 4. Compaction ────────────────────────────────────────────────────────
    let projectiles = projectiles
        .into_iter()
        .zip(dead_projectiles)
        .filter(|(_, dead)| !dead)
        .map(|(p, _)| p);
    let hazards = state
        .hazards
        .iter()
        .zip(dead_hazards)
        .filter(|(_, dead)| !dead)
        .map(|(h, _)| h);

    // ── 5. Movement ──────────────────────────────────────────────────────────
    let player = update_player(&player, &input.held, &viewport);
    let projectiles = projectiles
        .filter_map(|p| update_projectile(&p, &viewport))
        .collect();
    let hazards = hazards.map(|h| update_hazard(h, &viewport)).collect();
    let effects = effects.iter().filter_map(update_effect).collect();

    GameState {
        viewport,
        player,
        projectiles,
        hazards,
        effects,
        scoreboard,
        status: GameStatus::Running,
        frame,
    }
}
