//! Top-level game state machine
//!
//! One `Mode` is active at a time. Each mode owns a row in a static dispatch
//! table: how it renders, how it reacts to input and whether the simulation
//! ticks while it is active. Only `Playing` ticks; every other mode keeps the
//! scheduler stopped.

use std::path::PathBuf;
use std::time::Duration;

use crate::audio::{AudioManager, NullSink, SoundEffect, SoundSink};
use crate::consts::{MAX_COLS, MAX_NAME_LENGTH};
use crate::highscores::HighScore;
use crate::input::{InputEvent, Key};
use crate::render::{self, Renderer, Snapshot};
use crate::scheduler::Scheduler;
use crate::settings::{Settings, VOLUME_STEP};
use crate::sim::{GameEvent, LevelSource, LossReason, RunEnd, Session, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{self, MenuChoice};

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    EnterName,
    MainMenu,
    LevelSelect,
    Playing,
    Paused,
    Instructions,
    Settings,
    GameOver,
    Victory,
    EasterEgg,
}

/// Whether the host should keep running after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type RenderFn = fn(&Snapshot, &mut dyn Renderer);
type InputFn = fn(&mut Game, &InputEvent) -> Flow;

struct ModeHandlers {
    render: RenderFn,
    input: InputFn,
    ticks: bool,
}

const fn row(render: RenderFn, input: InputFn, ticks: bool) -> ModeHandlers {
    ModeHandlers {
        render,
        input,
        ticks,
    }
}

/// Queued horizontal presses are capped at one map width per tick
const MAX_QUEUED_STEPS: i32 = MAX_COLS as i32;

static ENTER_NAME: ModeHandlers = row(render::draw_enter_name, Game::on_enter_name, false);
static MAIN_MENU: ModeHandlers = row(render::draw_main_menu, Game::on_main_menu, false);
static LEVEL_SELECT: ModeHandlers = row(render::draw_level_select, Game::on_level_select, false);
static PLAYING: ModeHandlers = row(render::draw_playing, Game::on_playing, true);
static PAUSED: ModeHandlers = row(render::draw_paused, Game::on_paused, false);
static INSTRUCTIONS: ModeHandlers = row(render::draw_instructions, Game::on_info_screen, false);
static SETTINGS: ModeHandlers = row(render::draw_settings, Game::on_settings, false);
static GAME_OVER: ModeHandlers = row(render::draw_game_over, Game::on_info_screen, false);
static VICTORY: ModeHandlers = row(render::draw_victory, Game::on_info_screen, false);
static EASTER_EGG: ModeHandlers = row(render::draw_easter_egg, Game::on_info_screen, false);

impl Mode {
    fn handlers(self) -> &'static ModeHandlers {
        match self {
            Mode::EnterName => &ENTER_NAME,
            Mode::MainMenu => &MAIN_MENU,
            Mode::LevelSelect => &LEVEL_SELECT,
            Mode::Playing => &PLAYING,
            Mode::Paused => &PAUSED,
            Mode::Instructions => &INSTRUCTIONS,
            Mode::Settings => &SETTINGS,
            Mode::GameOver => &GAME_OVER,
            Mode::Victory => &VICTORY,
            Mode::EasterEgg => &EASTER_EGG,
        }
    }

    /// Whether the simulation advances in this mode
    pub fn ticks(self) -> bool {
        self.handlers().ticks
    }
}

fn sound_for(event: &GameEvent) -> SoundEffect {
    match event {
        GameEvent::ItemCollected { .. } => SoundEffect::ItemPickup,
        GameEvent::Jumped => SoundEffect::Jump,
        GameEvent::PlayerHit { .. } => SoundEffect::Hit,
        GameEvent::LevelAdvanced { .. } => SoundEffect::LevelClear,
    }
}

/// Assembles a `Game` from its collaborators
pub struct GameBuilder {
    levels: Box<dyn LevelSource>,
    tuning: Tuning,
    high_score: HighScore,
    settings: Settings,
    settings_path: Option<PathBuf>,
    sink: Box<dyn SoundSink>,
}

impl GameBuilder {
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn high_score(mut self, high_score: HighScore) -> Self {
        self.high_score = high_score;
        self
    }

    /// Settings plus where to save them when changed
    pub fn settings(mut self, settings: Settings, path: Option<PathBuf>) -> Self {
        self.settings = settings;
        self.settings_path = path;
        self
    }

    pub fn sound(mut self, sink: Box<dyn SoundSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the game in `EnterName` and start the music loop
    pub fn build(self) -> Game {
        let mut audio = AudioManager::new(self.sink);
        audio.apply_settings(&self.settings);
        audio.play(SoundEffect::Music);
        log::info!("Game ready with {} levels", self.levels.level_count());

        Game {
            mode: Mode::EnterName,
            name: String::new(),
            session: None,
            scheduler: Scheduler::default(),
            pending: TickInput::default(),
            new_high_score: false,
            loss: None,
            levels: self.levels,
            tuning: self.tuning,
            high_score: self.high_score,
            settings: self.settings,
            settings_path: self.settings_path,
            audio,
        }
    }
}

/// The whole application: current mode, player, and the active run
pub struct Game {
    mode: Mode,
    name: String,
    session: Option<Session>,
    tuning: Tuning,
    levels: Box<dyn LevelSource>,
    high_score: HighScore,
    settings: Settings,
    settings_path: Option<PathBuf>,
    audio: AudioManager,
    scheduler: Scheduler,
    /// Input gathered since the last tick, consumed by the next one
    pending: TickInput,
    new_high_score: bool,
    loss: Option<LossReason>,
}

impl Game {
    pub fn builder(levels: Box<dyn LevelSource>) -> GameBuilder {
        GameBuilder {
            levels,
            tuning: Tuning::default(),
            high_score: HighScore::in_memory(),
            settings: Settings::default(),
            settings_path: None,
            sink: Box::new(NullSink),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player_name(&self) -> &str {
        &self.name
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Wall-clock length of one simulation tick
    pub fn tick_period(&self) -> Duration {
        self.scheduler.period()
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        log::info!("{:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.pending = TickInput::default();
        if mode.ticks() {
            self.scheduler.resume();
        } else {
            self.scheduler.pause();
        }
    }

    /// Drop the current run and go back to the main menu
    fn reset(&mut self) {
        self.session = None;
        self.new_high_score = false;
        self.loss = None;
        self.set_mode(Mode::MainMenu);
    }

    fn start_level(&mut self, level: u32) {
        match Session::new(self.levels.as_ref(), level, &self.tuning) {
            Ok(session) => {
                self.session = Some(session);
                self.new_high_score = false;
                self.loss = None;
                self.set_mode(Mode::Playing);
            }
            Err(e) => log::error!("Cannot start level {level}: {e}"),
        }
    }

    /// Route an input event to the active mode
    pub fn handle_input(&mut self, event: &InputEvent) -> Flow {
        (self.mode.handlers().input)(self, event)
    }

    /// Feed elapsed wall-clock time; runs whatever ticks are due.
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: Duration) -> u32 {
        let due = self.scheduler.advance(dt);
        let mut ran = 0;
        for _ in 0..due {
            ran += 1;
            if !self.step() {
                break;
            }
        }
        ran
    }

    /// Run one simulation tick if the active mode ticks.
    /// Returns `true` while the run continues.
    pub fn step(&mut self) -> bool {
        if !self.mode.ticks() {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let input = std::mem::take(&mut self.pending);
        let report = tick(session, &input, &self.tuning, self.levels.as_ref());

        for event in &report.events {
            self.audio.play(sound_for(event));
        }
        match report.end {
            Some(end) => {
                self.finish_run(end);
                false
            }
            None => true,
        }
    }

    fn finish_run(&mut self, end: RunEnd) {
        let score = self.session.as_ref().map_or(0, |s| s.progress.score);
        self.new_high_score = match self.high_score.record(score) {
            Ok(improved) => improved,
            Err(e) => {
                log::warn!("High score not saved: {e}");
                self.high_score.best() == score
            }
        };

        match end {
            RunEnd::Victory => {
                self.audio.play(SoundEffect::Victory);
                self.set_mode(Mode::Victory);
            }
            RunEnd::Defeat(reason) => {
                log::info!("Run lost: {reason:?}");
                self.loss = Some(reason);
                self.audio.play(SoundEffect::GameOver);
                self.set_mode(Mode::GameOver);
            }
        }
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        let elapsed = self.session.as_ref().map_or(0, |s| s.progress.elapsed_ticks);
        Snapshot {
            mode: self.mode,
            player_name: &self.name,
            session: self.session.as_ref(),
            level_count: self.levels.level_count(),
            high_score: self.high_score.best(),
            new_high_score: self.new_high_score,
            seconds_left: self.tuning.seconds_left(elapsed),
            loss: self.loss,
            settings: &self.settings,
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        (self.mode.handlers().render)(&self.snapshot(), renderer);
    }

    // --- Input handlers ---

    fn on_enter_name(&mut self, event: &InputEvent) -> Flow {
        match event {
            InputEvent::KeyDown(Key::Enter) if !self.name.is_empty() => {
                log::info!("Player name set to '{}'", self.name);
                self.set_mode(Mode::MainMenu);
            }
            InputEvent::KeyDown(Key::Backspace) => {
                self.name.pop();
            }
            InputEvent::KeyDown(Key::Char(c))
                if (c.is_ascii_alphanumeric() || *c == ' ')
                    && self.name.len() < MAX_NAME_LENGTH =>
            {
                self.name.push(*c);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_main_menu(&mut self, event: &InputEvent) -> Flow {
        if event.command_char() == Some('e') {
            self.set_mode(Mode::EasterEgg);
            return Flow::Continue;
        }
        match event.click_pos().and_then(ui::main_menu_hit) {
            Some(MenuChoice::StartGame) => self.set_mode(Mode::LevelSelect),
            Some(MenuChoice::Instructions) => self.set_mode(Mode::Instructions),
            Some(MenuChoice::Settings) => self.set_mode(Mode::Settings),
            Some(MenuChoice::Exit) => {
                log::info!("Exit requested");
                return Flow::Exit;
            }
            None => {}
        }
        Flow::Continue
    }

    fn on_level_select(&mut self, event: &InputEvent) -> Flow {
        let count = self.levels.level_count();
        if let Some(c) = event.command_char() {
            match c {
                'b' => self.set_mode(Mode::MainMenu),
                _ => {
                    if let Some(level) = c.to_digit(10).filter(|n| (1..=count).contains(n)) {
                        self.start_level(level);
                    }
                }
            }
        } else if let Some(p) = event.click_pos() {
            if let Some(level) = ui::level_hit(p, count) {
                self.start_level(level);
            } else if ui::level_select_back().contains(p) {
                self.set_mode(Mode::MainMenu);
            }
        }
        Flow::Continue
    }

    fn on_playing(&mut self, event: &InputEvent) -> Flow {
        match event {
            InputEvent::KeyDown(Key::Left) => {
                self.pending.move_steps = (self.pending.move_steps - 1).max(-MAX_QUEUED_STEPS);
            }
            InputEvent::KeyDown(Key::Right) => {
                self.pending.move_steps = (self.pending.move_steps + 1).min(MAX_QUEUED_STEPS);
            }
            InputEvent::KeyDown(Key::Char(' ')) => self.pending.jump = true,
            _ => match event.command_char() {
                Some('p') => self.set_mode(Mode::Paused),
                Some('b') => self.reset(),
                _ => {}
            },
        }
        Flow::Continue
    }

    fn on_paused(&mut self, event: &InputEvent) -> Flow {
        match event.command_char() {
            Some('r') => self.set_mode(Mode::Playing),
            Some('b') => self.reset(),
            _ => {}
        }
        Flow::Continue
    }

    /// Screens that only lead back to the menu, finished runs included
    fn on_info_screen(&mut self, event: &InputEvent) -> Flow {
        let back_clicked = event.click_pos().is_some_and(|p| ui::info_back().contains(p));
        if back_clicked || event.command_char() == Some('b') {
            self.reset();
        }
        Flow::Continue
    }

    fn on_settings(&mut self, event: &InputEvent) -> Flow {
        let changed = match event.command_char() {
            Some('m') => {
                self.settings.toggle_mute();
                true
            }
            Some('t') => {
                self.settings.toggle_timer();
                true
            }
            Some('+') | Some('=') => {
                self.settings.adjust_master_volume(VOLUME_STEP);
                true
            }
            Some('-') => {
                self.settings.adjust_master_volume(-VOLUME_STEP);
                true
            }
            _ => false,
        };

        if changed {
            self.audio.apply_settings(&self.settings);
            if let Some(path) = &self.settings_path {
                if let Err(e) = self.settings.save(path) {
                    log::warn!("Settings not saved: {e}");
                }
            }
            return Flow::Continue;
        }
        self.on_info_screen(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingSink;
    use crate::mouse_to_ui;
    use crate::sim::{InMemoryLevels, MapDirectory};

    const SCENARIO: &str = "#####\n#*@.#\n#####";

    fn key(c: char) -> InputEvent {
        InputEvent::KeyDown(Key::Char(c))
    }

    /// Click at a UI-space point, sent the way the window reports it
    fn click_ui(x: f32, y: f32) -> InputEvent {
        let window = mouse_to_ui(x, y);
        InputEvent::MouseDown {
            x: window.x,
            y: window.y,
        }
    }

    fn game_with(maps: &[&str]) -> Game {
        Game::builder(Box::new(InMemoryLevels::new(maps.iter().copied()))).build()
    }

    fn to_menu(game: &mut Game) {
        game.handle_input(&key('A'));
        game.handle_input(&InputEvent::KeyDown(Key::Enter));
        assert_eq!(game.mode(), Mode::MainMenu);
    }

    fn to_playing(game: &mut Game, level: char) {
        to_menu(game);
        game.handle_input(&click_ui(150.0, 275.0));
        assert_eq!(game.mode(), Mode::LevelSelect);
        game.handle_input(&key(level));
        assert_eq!(game.mode(), Mode::Playing);
    }

    #[test]
    fn test_starts_in_enter_name() {
        let game = game_with(&[SCENARIO]);
        assert_eq!(game.mode(), Mode::EnterName);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_name_entry_rules() {
        let mut game = game_with(&[SCENARIO]);

        // Empty name cannot be confirmed
        game.handle_input(&InputEvent::KeyDown(Key::Enter));
        assert_eq!(game.mode(), Mode::EnterName);

        for c in "Al!ce 9".chars() {
            game.handle_input(&key(c));
        }
        assert_eq!(game.player_name(), "Alce 9");
        game.handle_input(&InputEvent::KeyDown(Key::Backspace));
        assert_eq!(game.player_name(), "Alce ");

        for _ in 0..100 {
            game.handle_input(&key('x'));
        }
        assert_eq!(game.player_name().len(), MAX_NAME_LENGTH);

        game.handle_input(&InputEvent::KeyDown(Key::Enter));
        assert_eq!(game.mode(), Mode::MainMenu);
    }

    #[test]
    fn test_menu_navigation() {
        let mut game = game_with(&[SCENARIO]);
        to_menu(&mut game);

        game.handle_input(&click_ui(150.0, 215.0));
        assert_eq!(game.mode(), Mode::Instructions);
        game.handle_input(&click_ui(500.0, 75.0));
        assert_eq!(game.mode(), Mode::MainMenu);

        game.handle_input(&click_ui(150.0, 155.0));
        assert_eq!(game.mode(), Mode::Settings);
        game.handle_input(&key('b'));
        assert_eq!(game.mode(), Mode::MainMenu);

        game.handle_input(&click_ui(150.0, 275.0));
        assert_eq!(game.mode(), Mode::LevelSelect);
        game.handle_input(&click_ui(20.0, 20.0));
        assert_eq!(game.mode(), Mode::MainMenu);

        assert_eq!(game.handle_input(&click_ui(150.0, 95.0)), Flow::Exit);
    }

    #[test]
    fn test_irrelevant_input_is_ignored() {
        let mut game = game_with(&[SCENARIO]);
        to_menu(&mut game);
        for event in [key('p'), key('r'), key('b'), key(' '), InputEvent::KeyDown(Key::Left)] {
            game.handle_input(&event);
            assert_eq!(game.mode(), Mode::MainMenu);
        }
        // Out-of-range level digits do nothing
        game.handle_input(&click_ui(150.0, 275.0));
        game.handle_input(&key('7'));
        assert_eq!(game.mode(), Mode::LevelSelect);
    }

    #[test]
    fn test_easter_egg_only_from_menu() {
        let mut game = game_with(&[SCENARIO]);
        game.handle_input(&key('e'));
        assert_eq!(game.player_name(), "e");
        game.handle_input(&InputEvent::KeyDown(Key::Enter));

        game.handle_input(&key('E'));
        assert_eq!(game.mode(), Mode::EasterEgg);
        game.handle_input(&key('e'));
        assert_eq!(game.mode(), Mode::EasterEgg);
        game.handle_input(&key('b'));
        assert_eq!(game.mode(), Mode::MainMenu);
    }

    #[test]
    fn test_queued_moves_are_capped() {
        let mut game = game_with(&[SCENARIO]);
        to_playing(&mut game, '1');
        for _ in 0..MAX_QUEUED_STEPS + 50 {
            game.handle_input(&InputEvent::KeyDown(Key::Right));
        }
        assert_eq!(game.pending.move_steps, MAX_QUEUED_STEPS);
        for _ in 0..3 * MAX_QUEUED_STEPS {
            game.handle_input(&InputEvent::KeyDown(Key::Left));
        }
        assert_eq!(game.pending.move_steps, -MAX_QUEUED_STEPS);
    }

    #[test]
    fn test_finished_screen_back_button() {
        let mut game = game_with(&[SCENARIO]);
        to_menu(&mut game);
        game.handle_input(&key('e'));
        assert_eq!(game.mode(), Mode::EasterEgg);
        game.handle_input(&click_ui(450.0, 75.0));
        assert_eq!(game.mode(), Mode::MainMenu);
    }

    #[test]
    fn test_level_click_starts_chosen_level() {
        let mut game = game_with(&[SCENARIO, "#@*#", "@*", "*@"]);
        to_menu(&mut game);
        game.handle_input(&click_ui(150.0, 275.0));
        // Third button: bottom-left of the grid
        game.handle_input(&click_ui(400.0, 270.0));
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.session().map(|s| s.progress.level), Some(3));
    }

    #[test]
    fn test_missing_map_stays_in_level_select() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = Game::builder(Box::new(MapDirectory::new(dir.path()))).build();
        to_menu(&mut game);
        game.handle_input(&click_ui(150.0, 275.0));
        game.handle_input(&key('1'));
        assert_eq!(game.mode(), Mode::LevelSelect);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_ticks_only_while_playing() {
        let mut game = game_with(&[SCENARIO]);
        assert_eq!(game.update(Duration::from_millis(100)), 0);
        assert!(!game.step());

        to_playing(&mut game, '1');
        assert_eq!(game.update(Duration::from_millis(100)), 6);
        assert_eq!(game.session().map(|s| s.progress.elapsed_ticks), Some(6));
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = game_with(&["..........\n.@........\n##########"]);
        to_playing(&mut game, '1');
        game.update(Duration::from_millis(50));

        game.handle_input(&key('p'));
        assert_eq!(game.mode(), Mode::Paused);
        let frozen = game.session().cloned().unwrap();

        // Gameplay input and time are both ignored while paused
        game.handle_input(&InputEvent::KeyDown(Key::Right));
        game.handle_input(&key(' '));
        for _ in 0..100 {
            assert_eq!(game.update(Duration::from_millis(100)), 0);
        }
        let after = game.session().unwrap();
        assert_eq!(after.ball, frozen.ball);
        assert_eq!(after.enemy, frozen.enemy);
        assert_eq!(after.progress, frozen.progress);
        assert_eq!(after.camera, frozen.camera);

        game.handle_input(&key('r'));
        assert_eq!(game.mode(), Mode::Playing);
        assert!(game.step());
        assert_eq!(
            game.session().map(|s| s.progress.elapsed_ticks),
            Some(frozen.progress.elapsed_ticks + 1)
        );
    }

    #[test]
    fn test_back_from_pause_resets_run() {
        let mut game = game_with(&[SCENARIO]);
        to_playing(&mut game, '1');
        game.step();
        game.handle_input(&key('p'));
        game.handle_input(&key('b'));
        assert_eq!(game.mode(), Mode::MainMenu);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_scenario_victory_records_high_score() {
        let sink = RecordingSink::default();
        let mut game = Game::builder(Box::new(InMemoryLevels::new([SCENARIO])))
            .sound(Box::new(sink.clone()))
            .build();
        to_playing(&mut game, '1');

        for _ in 0..3 {
            game.handle_input(&InputEvent::KeyDown(Key::Left));
            game.step();
        }
        assert_eq!(game.mode(), Mode::Victory);
        assert_eq!(game.high_score(), 10);
        assert!(game.snapshot().new_high_score);
        assert_eq!(
            sink.effects(),
            vec![SoundEffect::Music, SoundEffect::ItemPickup, SoundEffect::Victory]
        );

        // Run is kept for the final score until the player backs out
        assert_eq!(game.session().map(|s| s.progress.score), Some(10));
        game.handle_input(&key('b'));
        assert!(game.session().is_none());
        assert!(!game.snapshot().new_high_score);
    }

    #[test]
    fn test_time_budget_forces_game_over() {
        let tuning = Tuning {
            time_budget_ticks: 30,
            ..Tuning::default()
        };
        let mut game = Game::builder(Box::new(InMemoryLevels::new([SCENARIO])))
            .tuning(tuning)
            .build();
        to_playing(&mut game, '1');

        let mut ticks = 0;
        while game.step() {
            ticks += 1;
        }
        assert_eq!(ticks, 29);
        assert_eq!(game.mode(), Mode::GameOver);
        assert_eq!(game.snapshot().loss, Some(LossReason::OutOfTime));
        assert_eq!(game.session().map(|s| s.progress.lives), Some(3));
        // Nothing more happens until the player backs out
        assert_eq!(game.update(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_high_score_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        let mut game = Game::builder(Box::new(InMemoryLevels::new([SCENARIO])))
            .high_score(HighScore::load(&path))
            .build();
        to_playing(&mut game, '1');
        for _ in 0..3 {
            game.handle_input(&InputEvent::KeyDown(Key::Left));
            game.step();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10");
    }

    #[test]
    fn test_settings_screen_adjusts_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut game = Game::builder(Box::new(InMemoryLevels::new([SCENARIO])))
            .settings(Settings::default(), Some(path.clone()))
            .build();
        to_menu(&mut game);
        game.handle_input(&click_ui(150.0, 155.0));

        game.handle_input(&key('m'));
        game.handle_input(&key('t'));
        game.handle_input(&key('-'));
        assert_eq!(game.mode(), Mode::Settings);
        assert!(game.settings().muted);
        assert!(!game.settings().show_timer);

        let saved = Settings::load(&path).unwrap();
        assert_eq!(&saved, game.settings());
    }

    #[test]
    fn test_render_dispatches_by_mode() {
        let mut game = game_with(&[SCENARIO]);
        let mut r = render::TextRenderer::new();
        game.render(&mut r);
        assert!(r.take_frame().contains(&"Enter Player Name:".to_string()));

        to_playing(&mut game, '1');
        game.render(&mut r);
        assert!(r.take_frame().contains(&"Player: A".to_string()));
    }
}
