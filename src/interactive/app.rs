//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameStats, GameStatus, Session, SubmitError, TurnOutcome};
use crate::hint::{HintResponse, HintService, spawn_hint_fetch};
use crate::words::WordSource;
use anyhow::{Result, bail};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    source: WordSource,
    rng: StdRng,
    pub session: Session,
    pub stats: GameStats,
    hint_service: Arc<dyn HintService>,
    hint_tx: Sender<HintResponse>,
    hint_rx: Receiver<HintResponse>,
    next_id: u64,
    anagram_input: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    /// Build the app over a word list and a hint service
    ///
    /// # Errors
    ///
    /// Fails when `words` is empty.
    pub fn new(words: Vec<Word>, hint_service: Arc<dyn HintService>) -> Result<Self> {
        Self::with_rng(words, hint_service, StdRng::from_os_rng())
    }

    fn with_rng(
        words: Vec<Word>,
        hint_service: Arc<dyn HintService>,
        mut rng: StdRng,
    ) -> Result<Self> {
        let mut source = WordSource::new(&mut rng, words);
        let Some(solution) = source.next_word(&mut rng) else {
            bail!("word list is empty");
        };

        let (hint_tx, hint_rx) = mpsc::channel();
        let mut app = Self {
            source,
            rng,
            session: Session::new(solution, 1),
            stats: GameStats::new(),
            hint_service,
            hint_tx,
            hint_rx,
            next_id: 1,
            anagram_input: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Adivinhe a palavra de 5 letras. Errar custa uma penalidade no quadro!",
            MessageStyle::Info,
        );
        app.add_message("TAB sacrifica uma tentativa por uma dica.", MessageStyle::Info);
        Ok(app)
    }

    /// Swap in a fresh session against the next word
    pub fn new_game(&mut self) {
        let Some(solution) = self.source.next_word(&mut self.rng) else {
            // Construction guarantees a non-empty source
            return;
        };

        self.next_id += 1;
        self.session = Session::new(solution, self.next_id);
        self.anagram_input.clear();
        self.messages.clear();
        self.add_message("Novo jogo!", MessageStyle::Info);
        info!(session_id = self.next_id, "new game started");
    }

    /// Apply buffered hint responses to the live session
    ///
    /// Responses for an earlier session carry its old id and are dropped by
    /// the session itself.
    pub fn drain_hint_responses(&mut self) {
        for response in self.hint_rx.try_iter() {
            self.session.resolve_hint(response.session_id, response.result);
        }
    }

    /// One-second logical tick
    pub fn on_tick(&mut self) {
        self.session.tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.status() {
            GameStatus::Playing => self.handle_playing_key(key),
            GameStatus::Won | GameStatus::Lost => self.handle_terminal_key(key),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.session.type_letter(c),
            KeyCode::Backspace => self.session.erase(),
            KeyCode::Left => self.session.cursor_left(),
            KeyCode::Right => self.session.cursor_right(),
            KeyCode::Tab => self.request_hint(),
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    /// Keys once the session is over: anagram typing first, then replay
    fn handle_terminal_key(&mut self, key: KeyEvent) {
        let anagram_active = self
            .session
            .anagram()
            .is_some_and(|anagram| !anagram.revealed());

        if anagram_active {
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.anagram_input.len() < crate::core::WORD_LENGTH {
                        self.anagram_input.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.anagram_input.pop();
                }
                KeyCode::Enter => {
                    let input = self.anagram_input.clone();
                    self.session.anagram_submit(&input);
                    if self.session.anagram().is_some_and(|a| a.solved()) {
                        self.add_message("🎉 Anagrama resolvido!", MessageStyle::Success);
                    } else {
                        self.anagram_input.clear();
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
            _ => {}
        }
    }

    fn submit_guess(&mut self) {
        match self.session.submit_guess(&mut self.rng) {
            Ok(TurnOutcome::Won) => {
                self.stats.record_win(self.session.turn());
                self.add_message(
                    "🎉 Acertou! Pressione 'n' para jogar de novo.",
                    MessageStyle::Success,
                );
            }
            Ok(TurnOutcome::Lost) => {
                self.stats.record_loss();
                self.add_message(
                    "Fim das tentativas. Desembaralhe a palavra antes do tempo acabar!",
                    MessageStyle::Error,
                );
            }
            Ok(TurnOutcome::Penalized) => {
                self.add_message("Errou! Uma penalidade atingiu o quadro.", MessageStyle::Error);
            }
            Err(SubmitError::IncompleteGuess) => {
                self.add_message("Complete as 5 letras antes de enviar.", MessageStyle::Error);
            }
            Err(SubmitError::GameOver) => {}
        }
    }

    fn request_hint(&mut self) {
        match self.session.request_hint(&mut self.rng) {
            Ok(id) => {
                spawn_hint_fetch(
                    Arc::clone(&self.hint_service),
                    self.session.solution().clone(),
                    id,
                    self.hint_tx.clone(),
                );
                self.add_message("Tentativa sacrificada. Buscando dica...", MessageStyle::Info);

                // Sacrificing the final turn ends the game on the spot
                if self.session.status() == GameStatus::Lost {
                    self.stats.record_loss();
                    self.add_message(
                        "Era a última tentativa! Desembaralhe a palavra.",
                        MessageStyle::Error,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// What the player has typed toward the anagram so far
    #[must_use]
    pub fn anagram_input(&self) -> &str {
        &self.anagram_input
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        app.drain_hint_responses();
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::HintError;
    use crate::words::loader::words_from_slice;

    struct FixedHint;

    impl HintService for FixedHint {
        fn hint(&self, _solution: &Word) -> Result<String, HintError> {
            Ok("Uma dica qualquer".to_string())
        }
    }

    fn app(seed: u64) -> App {
        let words = words_from_slice(&["TERMO", "SENHA", "FESTA", "MUNDO"]);
        App::with_rng(words, Arc::new(FixedHint), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let result = App::with_rng(Vec::new(), Arc::new(FixedHint), StdRng::seed_from_u64(1));
        assert!(result.is_err());
    }

    #[test]
    fn typed_letters_land_in_the_buffer() {
        let mut app = app(1);
        for c in ['t', 'e', 'r'] {
            press(&mut app, KeyCode::Char(c));
        }

        assert_eq!(app.session.buffer_chars()[..3], ['T', 'E', 'R']);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.buffer_chars()[2], ' ');
    }

    #[test]
    fn incomplete_enter_reports_and_consumes_nothing() {
        let mut app = app(2);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.turn(), 0);
        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Error))
        );
    }

    #[test]
    fn winning_guess_updates_stats() {
        let mut app = app(3);
        let solution: String = app.session.solution().text().to_string();
        for c in solution.chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.wins(), 1);
        assert_eq!(app.stats.current_streak(), 1);
    }

    #[test]
    fn new_game_swaps_session_and_id() {
        let mut app = app(4);
        let first_id = app.session.id();
        app.new_game();

        assert_ne!(app.session.id(), first_id);
        assert_eq!(app.session.status(), GameStatus::Playing);
        assert_eq!(app.session.turn(), 0);
    }

    #[test]
    fn tab_requests_hint_and_drain_resolves_it() {
        let mut app = app(5);
        for c in "ABETO".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        assert!(app.session.hint_pending());

        // The mock resolves immediately; wait for the worker to deliver
        for _ in 0..100 {
            app.drain_hint_responses();
            if !app.session.hint_pending() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(app.session.hint(), Some("Uma dica qualquer"));
    }

    #[test]
    fn escape_quits() {
        let mut app = app(6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
