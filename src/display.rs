//! Rendering layer.  All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! encounter.  No game logic is performed; this module only translates field
//! coordinates into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use boss_shooter::constants::{
    BOSS_HEIGHT, BOSS_MAX_HEALTH, BOSS_WIDTH, ENEMY_HEIGHT, ENEMY_WIDTH, FIELD_HEIGHT,
    FIELD_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH,
};
use boss_shooter::entities::{
    Actor, Arena, Boss, BossPhase, BossState, EncounterState, EncounterStatus,
};
use boss_shooter::menu::{Menu, MenuOption};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_PLAYER_BLINK: Color = Color::DarkGrey;
const C_ENEMY: Color = Color::Green;
const C_BOSS: Color = Color::Red;
const C_BOSS_SHIELD: Color = Color::Cyan;
const C_LASER: Color = Color::Magenta;
const C_MISSILE: Color = Color::Yellow;
const C_SPIRAL: Color = Color::DarkYellow;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

/// Terminal cells available to one frame.
#[derive(Clone, Copy)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    /// Map a field point to a cell inside the border, if it is on screen.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let cols = self.width.saturating_sub(2) as f32;
        let rows = self.height.saturating_sub(4) as f32;
        let col = 1.0 + (x / FIELD_WIDTH * cols).floor();
        let row = 2.0 + (y / FIELD_HEIGHT * rows).floor();
        let inside = col >= 1.0 && col < 1.0 + cols && row >= 2.0 && row < 2.0 + rows;
        inside.then_some((col as u16, row as u16))
    }

    /// Cell span `(col0, row0, col1, row1)` covered by a field box, clipped.
    fn span(&self, x: f32, y: f32, w: f32, h: f32) -> Option<(u16, u16, u16, u16)> {
        let cols = self.width.saturating_sub(2) as f32;
        let rows = self.height.saturating_sub(4) as f32;
        let c0 = (1.0 + (x / FIELD_WIDTH * cols).floor()).max(1.0);
        let r0 = (2.0 + (y / FIELD_HEIGHT * rows).floor()).max(2.0);
        let c1 = (1.0 + ((x + w) / FIELD_WIDTH * cols).ceil() - 1.0).min(cols);
        let r1 = (2.0 + ((y + h) / FIELD_HEIGHT * rows).ceil() - 1.0).min(rows + 1.0);
        (c0 <= c1 && r0 <= r1).then_some((c0 as u16, r0 as u16, c1 as u16, r1 as u16))
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    screen: Screen,
    state: &EncounterState,
    high_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;
    draw_hud(out, screen, state, high_score)?;

    match &state.arena {
        Arena::Boss(boss) => draw_boss(out, screen, boss)?,
        Arena::Survival(waves) => {
            for enemy in &waves.enemies {
                fill(out, screen, enemy.x, enemy.y, ENEMY_WIDTH, ENEMY_HEIGHT, "▼", C_ENEMY)?;
            }
        }
    }
    for bullet in &state.bullets {
        draw_actor(out, screen, bullet, "║", C_BULLET_PLAYER)?;
    }
    for shot in &state.enemy_bullets {
        draw_actor(out, screen, shot, "↓", C_BULLET_ENEMY)?;
    }
    for explosion in &state.explosions {
        fill(out, screen, explosion.x, explosion.y, ENEMY_WIDTH, ENEMY_HEIGHT, "✶", C_EXPLOSION)?;
    }

    draw_player(out, screen, state)?;
    draw_controls_hint(out, screen)?;

    match state.status {
        EncounterStatus::Playing => {}
        EncounterStatus::Victory => draw_banner(out, screen, "V I C T O R Y", Color::Green, state, high_score)?,
        EncounterStatus::Defeat => draw_banner(out, screen, "GAME  OVER", Color::Red, state, high_score)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Render the title menu with the current selection highlighted.
pub fn render_menu<W: Write>(
    out: &mut W,
    screen: Screen,
    menu: &Menu,
    high_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = screen.width / 2;
    let cy = screen.height / 2;

    let title = "★  SPACE  SHOOTER  ★";
    centred(out, cx, cy.saturating_sub(6), title, Color::Cyan)?;

    let hs_str = format!("High score: {}", high_score);
    centred(out, cx, cy.saturating_sub(4), &hs_str, Color::Yellow)?;

    for (i, option) in MenuOption::ALL.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16 * 2;
        let selected = *option == menu.selected_option();
        let line = format!("{} {}. {}", if selected { "▶" } else { " " }, i + 1, option.label());
        let color = if selected { Color::Yellow } else { Color::White };
        out.queue(cursor::MoveTo(cx.saturating_sub(8), row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(line))?;
    }

    centred(
        out,
        cx,
        cy + 6,
        "↑ ↓ : Select   ENTER : Confirm   Q : Quit",
        C_HINT,
    )?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border & HUD ──────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let w = screen.width as usize;
    let h = screen.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(
    out: &mut W,
    screen: Screen,
    state: &EncounterState,
    high_score: u32,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>6}  Hi:{:>6}",
        state.player.score,
        high_score.max(state.player.score)
    )))?;

    // Boss health bar, centred
    if let Arena::Boss(boss) = &state.arena {
        let filled = (boss.health * 20 / BOSS_MAX_HEALTH) as usize;
        let tag = match (boss.state, boss.phase) {
            (BossState::Shielded, _) => " SHIELD",
            (_, BossPhase::Low) => " WEAK",
            _ => "",
        };
        let bar = format!(
            "BOSS [{}{}]{:>5}{}",
            "█".repeat(filled),
            "░".repeat(20 - filled),
            boss.health,
            tag
        );
        let bx = (screen.width / 2).saturating_sub(bar.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(bx, 0))?;
        out.queue(style::SetForegroundColor(C_BOSS))?;
        out.queue(Print(&bar))?;
    }

    let lives_str = format!("Lives:{}", "♥".repeat(state.player.lives as usize));
    let rx = screen
        .width
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Fill every cell a field box covers with `glyph`.
#[allow(clippy::too_many_arguments)]
fn fill<W: Write>(
    out: &mut W,
    screen: Screen,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = screen.span(x, y, w, h) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let line = glyph.repeat((c1 - c0 + 1) as usize);
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

/// Small actors are drawn as a single glyph at their centre.
fn draw_actor<W: Write>(
    out: &mut W,
    screen: Screen,
    actor: &Actor,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = screen.cell(actor.x + actor.w / 2.0, actor.y + actor.h / 2.0) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_boss<W: Write>(out: &mut W, screen: Screen, boss: &Boss) -> std::io::Result<()> {
    for laser in &boss.lasers {
        fill(out, screen, laser.x, laser.y, laser.w, laser.h, "┃", C_LASER)?;
    }

    if boss.state != BossState::Dead {
        let (glyph, color) = match boss.state {
            BossState::Shielded => ("▒", C_BOSS_SHIELD),
            _ => ("█", C_BOSS),
        };
        fill(out, screen, boss.x, boss.y, BOSS_WIDTH, BOSS_HEIGHT, glyph, color)?;
    }

    for minion in &boss.minions {
        fill(out, screen, minion.x, minion.y, minion.w, minion.h, "▼", C_ENEMY)?;
    }
    for missile in &boss.missiles {
        draw_actor(out, screen, missile, "◆", C_MISSILE)?;
    }
    for bullet in &boss.spiral {
        draw_actor(out, screen, bullet, "●", C_SPIRAL)?;
    }
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    screen: Screen,
    state: &EncounterState,
) -> std::io::Result<()> {
    let p = &state.player;
    // Blink on alternate 4-tick windows while invincible
    let color = if p.invincible && (state.frame / 4) % 2 == 0 {
        C_PLAYER_BLINK
    } else {
        C_PLAYER
    };
    let Some((c0, r0, c1, r1)) = screen.span(p.x, p.y, PLAYER_WIDTH, PLAYER_HEIGHT) else {
        return Ok(());
    };
    let mid = c0 + (c1 - c0) / 2;

    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(mid, r0))?;
    out.queue(Print("▲"))?;
    for row in (r0 + 1)..=r1 {
        out.queue(cursor::MoveTo(mid.saturating_sub(1).max(c0), row))?;
        out.queue(Print("/█\\"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←→↑↓ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── End-of-session overlay ────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    screen: Screen,
    title: &str,
    color: Color,
    state: &EncounterState,
    high_score: u32,
) -> std::io::Result<()> {
    let score = state.player.score;
    let best_line = if score > high_score {
        format!("★ NEW BEST: {:>6} ★", score)
    } else {
        format!("Best Score:  {:>6}", high_score)
    };

    let cx = screen.width / 2;
    let row = (screen.height / 2).saturating_sub(3);

    centred(out, cx, row, "╔════════════════════╗", color)?;
    centred(out, cx, row + 1, &format!("║{:^20}║", title), color)?;
    centred(out, cx, row + 2, "╚════════════════════╝", color)?;
    centred(out, cx, row + 3, &format!("Final Score: {:>6}", score), Color::Yellow)?;
    centred(out, cx, row + 4, &best_line, Color::DarkGrey)?;
    centred(out, cx, row + 5, "R - Menu  Q - Quit", Color::White)?;
    Ok(())
}

fn centred<W: Write>(
    out: &mut W,
    cx: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
