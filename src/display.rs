/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects world
/// coordinates onto the terminal grid and translates state into commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{
    EffectTimer, Entity, GameState, GameStatus, PlayerSprite, Viewport,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_PLAYER_HAPPY: Color = Color::Green;
const C_PLAYER_DEFEATED: Color = Color::DarkRed;
const C_PROJECTILE: Color = Color::Cyan;
const C_HAZARD: Color = Color::Red;
const C_EFFECT: Color = Color::Yellow;
const C_SCORE: Color = Color::Blue;
const C_GAME_OVER: Color = Color::Red;

// ── Glyphs ────────────────────────────────────────────────────────────────────

/// Player glyph per facing, indexed by `Direction::index()`.
const PLAYER_GLYPHS: [&str; 8] = ["▶", "◥", "▲", "◤", "◀", "◣", "▼", "◢"];
const PLAYER_HAPPY: &str = "☺";
const PLAYER_DEFEATED: &str = "✖";
const PROJECTILE_GLYPH: &str = "═";
const HAZARD_GLYPH: &str = "●";
/// Plain and mirrored explosion frames.
const EFFECT_GLYPHS: [&str; 2] = ["✶", "✷"];

/// Score label center: fixed x, fixed distance above the bottom edge.
pub const SCORE_LABEL_X: i32 = 100;
pub const SCORE_LABEL_BOTTOM_MARGIN: i32 = 50;
pub const GAME_OVER_TEXT: &str = "Game Over";

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps world coordinates onto a `cols × rows` terminal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projection {
    pub viewport: Viewport,
    pub cols: u16,
    pub rows: u16,
}

impl Projection {
    pub fn new(viewport: Viewport, cols: u16, rows: u16) -> Self {
        Projection {
            viewport,
            cols,
            rows,
        }
    }

    /// Terminal cell for a world point, clamped to the grid.
    pub fn cell(&self, x: i32, y: i32) -> (u16, u16) {
        (
            scale(x, self.viewport.width, self.cols),
            scale(y, self.viewport.height, self.rows),
        )
    }
}

fn scale(v: i32, world: i32, cells: u16) -> u16 {
    if cells == 0 || world <= 0 {
        return 0;
    }
    let c = i64::from(v) * i64::from(cells) / i64::from(world);
    c.clamp(0, i64::from(cells) - 1) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
///
/// Layers, back to front: background, player, projectiles, hazards,
/// effects, score label, and the game-over message when the session ended.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_player(out, state, proj)?;
    for p in &state.projectiles {
        draw_glyph(out, proj, p, PROJECTILE_GLYPH, C_PROJECTILE)?;
    }
    for h in &state.hazards {
        draw_glyph(out, proj, h, HAZARD_GLYPH, C_HAZARD)?;
    }
    for e in &state.effects {
        draw_effect(out, proj, e)?;
    }
    draw_score(out, state, proj)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, proj)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, proj.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_glyph<W: Write>(
    out: &mut W,
    proj: &Projection,
    entity: &impl Entity,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let (cx, cy) = entity.bounds().center();
    let (col, row) = proj.cell(cx, cy);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

pub fn player_glyph(sprite: PlayerSprite) -> &'static str {
    match sprite {
        PlayerSprite::Facing(dir) => PLAYER_GLYPHS[dir.index()],
        PlayerSprite::Celebrating => PLAYER_HAPPY,
        PlayerSprite::Defeated => PLAYER_DEFEATED,
    }
}

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let color = match state.player.sprite {
        PlayerSprite::Facing(_) => C_PLAYER,
        PlayerSprite::Celebrating => C_PLAYER_HAPPY,
        PlayerSprite::Defeated => C_PLAYER_DEFEATED,
    };
    draw_glyph(out, proj, &state.player, player_glyph(state.player.sprite), color)
}

pub fn effect_glyph(effect: &EffectTimer) -> &'static str {
    EFFECT_GLYPHS[usize::from(effect.is_mirrored())]
}

fn draw_effect<W: Write>(
    out: &mut W,
    proj: &Projection,
    effect: &EffectTimer,
) -> std::io::Result<()> {
    draw_glyph(out, proj, effect, effect_glyph(effect), C_EFFECT)
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let label = state.scoreboard.label();
    let (col, row) = proj.cell(
        SCORE_LABEL_X,
        state.viewport.height - SCORE_LABEL_BOTTOM_MARGIN,
    );
    let col = col.saturating_sub(label.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(label))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let vp = state.viewport;
    let (col, row) = proj.cell(vp.width / 2 - 150, vp.height / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(Print(GAME_OVER_TEXT))?;
    Ok(())
}
