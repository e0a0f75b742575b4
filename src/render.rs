//! Drawing
//!
//! The game never draws pixels itself. Each mode has a render function that
//! walks a read-only `Snapshot` and issues primitive calls to a `Renderer`.
//! Positions are in screen space with y growing upwards.

use std::collections::HashSet;

use glam::Vec2;

use crate::consts::{BLOCK_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::AssetLoadError;
use crate::game::Mode;
use crate::settings::Settings;
use crate::sim::{Cell, LossReason, Session};
use crate::ui::{self, Button};
use crate::{cell_center, cell_origin, world_to_screen};

/// RGBA, each channel 0.0 - 1.0
pub type Color = [f32; 4];

pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const MENU_BLUE: Color = [0.0, 0.0, 0.39, 1.0];
    pub const SELECT_BLUE: Color = [0.0, 0.0, 0.59, 1.0];
    pub const SKY_BLUE: Color = [0.0, 0.0, 0.78, 1.0];
    pub const BRICK: Color = [0.39, 0.39, 0.39, 1.0];
    pub const GOLD: Color = [1.0, 0.84, 0.0, 1.0];
    pub const ENEMY_RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BUTTON: Color = [0.78, 0.78, 0.78, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PAUSE_VEIL: Color = [0.0, 0.0, 0.0, 0.59];
    pub const END_VEIL: Color = [0.0, 0.0, 0.0, 0.78];
}

/// Drawing primitives supplied by the window collaborator
pub trait Renderer {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn polygon(&mut self, points: &[Vec2], color: Color);
    fn text(&mut self, pos: Vec2, text: &str, color: Color);
    /// Blit a named image; fails if the asset is not available
    fn image(&mut self, name: &str, origin: Vec2, size: Vec2) -> Result<(), AssetLoadError>;
}

/// Everything a render pass may look at
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub player_name: &'a str,
    /// Present from the start of a run until the game returns to the menu
    pub session: Option<&'a Session>,
    pub level_count: u32,
    pub high_score: u64,
    /// The finished run set the stored high score
    pub new_high_score: bool,
    pub seconds_left: u64,
    pub loss: Option<LossReason>,
    pub settings: &'a Settings,
}

/// Draw an image, or a flat rectangle if the asset is unavailable
fn image_or_fill(r: &mut dyn Renderer, name: &str, origin: Vec2, size: Vec2, fallback: Color) {
    if let Err(e) = r.image(name, origin, size) {
        log::trace!("{e}, drawing placeholder");
        r.fill_rect(origin, size, fallback);
    }
}

fn backdrop(r: &mut dyn Renderer, color: Color) {
    r.fill_rect(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), color);
}

fn button(r: &mut dyn Renderer, b: &Button) {
    r.fill_rect(b.origin, b.size, colors::BUTTON);
    // Rough centring; glyph metrics belong to the renderer
    let label_x = b.origin.x + (b.size.x - b.label.len() as f32 * 9.0) / 2.0;
    r.text(Vec2::new(label_x, b.origin.y + b.size.y / 2.0 - 7.0), &b.label, colors::BLACK);
}

fn centered(x_offset: f32, y_offset: f32) -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0 + x_offset, SCREEN_HEIGHT / 2.0 + y_offset)
}

pub fn draw_enter_name(s: &Snapshot, r: &mut dyn Renderer) {
    r.text(Vec2::new(400.0, 350.0), "Enter Player Name:", colors::WHITE);
    r.text(Vec2::new(400.0, 300.0), s.player_name, colors::WHITE);
    r.text(Vec2::new(400.0, 270.0), "Press Enter to confirm", colors::WHITE);
}

pub fn draw_main_menu(s: &Snapshot, r: &mut dyn Renderer) {
    backdrop(r, colors::MENU_BLUE);
    r.text(Vec2::new(SCREEN_WIDTH / 2.0 - 100.0, 500.0), "BOUNCE CLASSIC", colors::WHITE);
    if s.high_score > 0 {
        r.text(
            Vec2::new(SCREEN_WIDTH / 2.0 - 80.0, 450.0),
            &format!("Best Score: {}", s.high_score),
            colors::WHITE,
        );
    }
    for b in ui::main_menu_buttons() {
        button(r, &b);
    }
}

pub fn draw_level_select(s: &Snapshot, r: &mut dyn Renderer) {
    backdrop(r, colors::SELECT_BLUE);
    r.text(Vec2::new(SCREEN_WIDTH / 2.0 - 120.0, 550.0), "SELECT LEVEL", colors::WHITE);
    for b in ui::level_buttons(s.level_count) {
        button(r, &b);
    }
    button(r, &ui::level_select_back());
}

fn draw_world(session: &Session, r: &mut dyn Renderer) {
    let cam = session.camera.x;
    let tile = Vec2::splat(BLOCK_SIZE);

    for (row, col, cell) in session.map.occupied() {
        match cell {
            Cell::Solid => {
                let origin = world_to_screen(cell_origin(row, col), cam);
                // Skip tiles fully off screen
                if origin.x + BLOCK_SIZE < 0.0 || origin.x > SCREEN_WIDTH {
                    continue;
                }
                image_or_fill(r, "block", origin, tile, colors::BRICK);
            }
            Cell::Collectible => {
                r.fill_circle(world_to_screen(cell_center(row, col), cam), 10.0, colors::GOLD);
            }
            Cell::Empty => {}
        }
    }

    let enemy = &session.enemy;
    let half = Vec2::splat(enemy.half_size);
    r.fill_rect(
        world_to_screen(enemy.pos - half, cam),
        half * 2.0,
        colors::ENEMY_RED,
    );

    let ball = &session.ball;
    r.fill_circle(world_to_screen(ball.pos, cam), ball.radius, colors::WHITE);
}

fn draw_hud(s: &Snapshot, session: &Session, r: &mut dyn Renderer) {
    let progress = &session.progress;
    let mut lines = vec![
        format!("Score: {}", progress.score),
        format!("Lives: {}", progress.lives),
    ];
    if !s.player_name.is_empty() {
        lines.push(format!("Player: {}", s.player_name));
    }
    lines.push(format!("Level: {}/{}", progress.level, progress.level_count));
    if s.settings.show_timer {
        lines.push(format!("Time Left: {}", s.seconds_left));
    }

    for (i, text) in lines.iter().enumerate() {
        let y = SCREEN_HEIGHT - 30.0 * (i + 1) as f32;
        r.text(Vec2::new(10.0, y), text, colors::WHITE);
    }
}

pub fn draw_playing(s: &Snapshot, r: &mut dyn Renderer) {
    image_or_fill(
        r,
        "background",
        Vec2::ZERO,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        colors::SKY_BLUE,
    );
    if let Some(session) = s.session {
        draw_world(session, r);
        draw_hud(s, session, r);
    }
}

pub fn draw_paused(s: &Snapshot, r: &mut dyn Renderer) {
    draw_playing(s, r);
    backdrop(r, colors::PAUSE_VEIL);
    r.text(centered(-70.0, 20.0), "GAME PAUSED", colors::YELLOW);
    r.text(
        centered(-150.0, -20.0),
        "Press 'R' to resume or 'B' for menu",
        colors::YELLOW,
    );
}

pub fn draw_instructions(_s: &Snapshot, r: &mut dyn Renderer) {
    const LINES: [&str; 7] = [
        "INSTRUCTIONS:",
        "- Use LEFT and RIGHT arrow keys to move",
        "- Press SPACE to jump",
        "- Collect all items (*) to win",
        "- Avoid the red enemy block",
        "- Press 'P' to pause the game",
        "- Press 'B' to return to menu",
    ];
    backdrop(r, colors::MENU_BLUE);
    r.text(Vec2::new(100.0, 550.0), LINES[0], colors::WHITE);
    for (i, text) in LINES[1..].iter().enumerate() {
        r.text(Vec2::new(100.0, 500.0 - i as f32 * 30.0), text, colors::WHITE);
    }
    button(r, &ui::info_back());
}

pub fn draw_settings(s: &Snapshot, r: &mut dyn Renderer) {
    let on_off = |b: bool| if b { "on" } else { "off" };
    backdrop(r, colors::MENU_BLUE);
    r.text(Vec2::new(SCREEN_WIDTH / 2.0 - 100.0, 400.0), "SETTINGS MENU", colors::WHITE);

    let rows = [
        format!(
            "Volume: {}%  (+/-)",
            (s.settings.master_volume * 100.0).round() as u32
        ),
        format!("Sound: {}  (M)", on_off(!s.settings.muted)),
        format!("Timer: {}  (T)", on_off(s.settings.show_timer)),
    ];
    for (i, text) in rows.iter().enumerate() {
        r.text(
            Vec2::new(SCREEN_WIDTH / 2.0 - 150.0, 350.0 - i as f32 * 30.0),
            text,
            colors::WHITE,
        );
    }
    button(r, &ui::info_back());
}

fn final_score(s: &Snapshot) -> String {
    let score = s.session.map_or(0, |session| session.progress.score);
    format!("Final Score: {score}")
}

pub fn draw_game_over(s: &Snapshot, r: &mut dyn Renderer) {
    backdrop(r, colors::END_VEIL);
    r.text(centered(-100.0, 30.0), "GAME OVER", colors::ENEMY_RED);
    r.text(centered(-80.0, -20.0), &final_score(s), colors::ENEMY_RED);
    let reason = match s.loss {
        Some(LossReason::OutOfTime) => "Out of time",
        Some(LossReason::LevelUnavailable) => "Next level could not be loaded",
        Some(LossReason::OutOfLives) | None => "Out of lives",
    };
    r.text(centered(-80.0, -60.0), reason, colors::ENEMY_RED);
    r.text(centered(-150.0, -100.0), "Press 'B' to return to menu", colors::ENEMY_RED);
    button(r, &ui::info_back());
}

pub fn draw_victory(s: &Snapshot, r: &mut dyn Renderer) {
    backdrop(r, colors::END_VEIL);
    r.text(centered(-70.0, 30.0), "YOU WIN!", colors::GREEN);
    r.text(centered(-80.0, -20.0), &final_score(s), colors::GREEN);
    if s.new_high_score {
        r.text(centered(-120.0, -60.0), "NEW HIGH SCORE!", colors::GREEN);
    }
    r.text(centered(-150.0, -100.0), "Press 'B' to return to menu", colors::GREEN);
    button(r, &ui::info_back());
}

pub fn draw_easter_egg(_s: &Snapshot, r: &mut dyn Renderer) {
    backdrop(r, colors::END_VEIL);

    // Five-pointed star
    let center = centered(0.0, 130.0);
    let star: Vec<Vec2> = (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { 60.0 } else { 25.0 };
            let angle = std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
            center + Vec2::from_angle(angle) * radius
        })
        .collect();
    r.polygon(&star, colors::YELLOW);

    r.text(centered(-120.0, 30.0), "EASTER EGG FOUND!", colors::YELLOW);
    r.text(
        centered(-150.0, -20.0),
        "Congratulations, you found the secret!",
        colors::YELLOW,
    );
    r.text(centered(-100.0, -60.0), "Press 'B' to return", colors::YELLOW);
    button(r, &ui::info_back());
}

/// Renderer that keeps only the text, for terminals and tests
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<(Vec2, String)>,
    shapes: usize,
    missing: HashSet<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text drawn since the last call, top of the screen first
    pub fn take_frame(&mut self) -> Vec<String> {
        let mut lines = std::mem::take(&mut self.lines);
        self.shapes = 0;
        lines.sort_by(|(a, _), (b, _)| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));
        lines.into_iter().map(|(_, text)| text).collect()
    }

    /// Shapes drawn since the last `take_frame`
    pub fn shape_count(&self) -> usize {
        self.shapes
    }
}

impl Renderer for TextRenderer {
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Color) {
        self.shapes += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.shapes += 1;
    }

    fn polygon(&mut self, _points: &[Vec2], _color: Color) {
        self.shapes += 1;
    }

    fn text(&mut self, pos: Vec2, text: &str, _color: Color) {
        self.lines.push((pos, text.to_string()));
    }

    fn image(&mut self, name: &str, _origin: Vec2, _size: Vec2) -> Result<(), AssetLoadError> {
        if self.missing.insert(name.to_string()) {
            log::warn!("Image '{name}' unavailable, using flat colour");
        }
        Err(AssetLoadError::Missing(name.to_string()))
    }
}

/// Character view of the visible part of the level, top row first
pub fn ascii_view(session: &Session) -> String {
    let first_col = (session.camera.x / BLOCK_SIZE).floor() as i32;
    let visible_cols = (SCREEN_WIDTH / BLOCK_SIZE) as i32 + 1;
    let ball = crate::world_to_cell(session.ball.pos);
    let enemy = crate::world_to_cell(session.enemy.pos);

    let mut out = String::new();
    for row in 0..session.map.rows() as i32 {
        for col in first_col..(first_col + visible_cols).min(session.map.cols() as i32) {
            let ch = if (row, col) == ball {
                'O'
            } else if (row, col) == enemy {
                'X'
            } else {
                match session.map.cell(row, col) {
                    Cell::Solid => '#',
                    Cell::Collectible => '*',
                    Cell::Empty => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::InMemoryLevels;
    use crate::tuning::Tuning;

    fn snapshot<'a>(
        mode: Mode,
        session: Option<&'a Session>,
        settings: &'a Settings,
    ) -> Snapshot<'a> {
        Snapshot {
            mode,
            player_name: "Ada",
            session,
            level_count: 4,
            high_score: 0,
            new_high_score: false,
            seconds_left: 300,
            loss: None,
            settings,
        }
    }

    fn session() -> Session {
        let levels = InMemoryLevels::new(["#####\n#*@.#\n#####"]);
        Session::new(&levels, 1, &Tuning::default()).unwrap()
    }

    #[test]
    fn test_hud_lines() {
        let settings = Settings::default();
        let session = session();
        let mut r = TextRenderer::new();
        draw_playing(&snapshot(Mode::Playing, Some(&session), &settings), &mut r);
        let frame = r.take_frame();
        assert_eq!(
            frame,
            vec!["Score: 0", "Lives: 3", "Player: Ada", "Level: 1/1", "Time Left: 300"]
        );
    }

    #[test]
    fn test_hidden_timer() {
        let settings = Settings {
            show_timer: false,
            ..Settings::default()
        };
        let session = session();
        let mut r = TextRenderer::new();
        draw_playing(&snapshot(Mode::Playing, Some(&session), &settings), &mut r);
        assert!(!r.take_frame().iter().any(|l| l.starts_with("Time Left")));
    }

    #[test]
    fn test_missing_images_fall_back_to_rects() {
        let settings = Settings::default();
        let session = session();
        let mut r = TextRenderer::new();
        draw_playing(&snapshot(Mode::Playing, Some(&session), &settings), &mut r);
        // Background, 12 bricks, 1 item, enemy, ball
        assert_eq!(r.shape_count(), 16);
    }

    #[test]
    fn test_victory_banner_only_for_new_best() {
        let settings = Settings::default();
        let session = session();
        let mut r = TextRenderer::new();
        let mut s = snapshot(Mode::Victory, Some(&session), &settings);
        draw_victory(&s, &mut r);
        assert!(!r.take_frame().contains(&"NEW HIGH SCORE!".to_string()));

        s.new_high_score = true;
        draw_victory(&s, &mut r);
        assert!(r.take_frame().contains(&"NEW HIGH SCORE!".to_string()));
    }

    #[test]
    fn test_menu_shows_best_score() {
        let settings = Settings::default();
        let mut r = TextRenderer::new();
        let mut s = snapshot(Mode::MainMenu, None, &settings);
        draw_main_menu(&s, &mut r);
        assert!(!r.take_frame().iter().any(|l| l.starts_with("Best Score")));

        s.high_score = 70;
        draw_main_menu(&s, &mut r);
        assert!(r.take_frame().contains(&"Best Score: 70".to_string()));
    }

    #[test]
    fn test_finished_screens_draw_back_button() {
        let settings = Settings::default();
        let session = session();
        for (mode, draw) in [
            (Mode::GameOver, draw_game_over as fn(&Snapshot, &mut dyn Renderer)),
            (Mode::Victory, draw_victory),
            (Mode::EasterEgg, draw_easter_egg),
        ] {
            let mut r = TextRenderer::new();
            draw(&snapshot(mode, Some(&session), &settings), &mut r);
            assert!(r.take_frame().contains(&"Back to Menu".to_string()));
        }
    }

    #[test]
    fn test_ascii_view_marks_ball() {
        let view = ascii_view(&session());
        assert_eq!(view, "#####\n#*O.#\n#####\n");
    }
}
