//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Hint fetches run synchronously here
//! since the prompt blocks on stdin anyway; the anagram countdown is caught
//! up from wall-clock time after each line of input.

use crate::core::Word;
use crate::game::{GameStats, GameStatus, Session, SubmitError, TurnOutcome};
use crate::hint::HintService;
use crate::output::{print_board, print_keyboard, print_stats, share_text};
use crate::words::WordSource;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

/// Run the simple line-based CLI mode
///
/// # Errors
///
/// Returns an error if the word list is empty or stdin/stdout fail.
pub fn run_simple(words: Vec<Word>, hint_service: &Arc<dyn HintService>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         Evil Termo                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Adivinhe a palavra de 5 letras em 6 tentativas.");
    println!("Cada erro aplica uma penalidade a uma linha já jogada do quadro.");
    println!("Comandos: 'dica' sacrifica uma tentativa, 'sair' encerra o jogo\n");

    let mut rng = StdRng::from_os_rng();
    let mut source = WordSource::new(&mut rng, words);
    let mut stats = GameStats::new();
    let mut next_id: u64 = 0;

    loop {
        let solution = source
            .next_word(&mut rng)
            .ok_or("Word list is empty")?;
        next_id += 1;
        let mut session = Session::new(solution, next_id);

        let quit = play_session(&mut session, &mut rng, hint_service)?;
        if quit {
            println!(
                "\nA palavra era {}. 👋 Até a próxima!\n",
                session.solution().text().bright_yellow().bold()
            );
            return Ok(());
        }

        if session.status() == GameStatus::Won {
            stats.record_win(session.turn());
        } else {
            run_anagram(&mut session)?;
            stats.record_loss();
        }

        println!("\n{}", share_text(&session));
        print_stats(&stats);

        match get_user_input("\nJogar novamente? (s/n)")?
            .to_lowercase()
            .as_str()
        {
            "s" | "sim" | "y" | "yes" => println!("\n🔄 Novo jogo!\n"),
            _ => {
                println!("\n👋 Até a próxima!\n");
                return Ok(());
            }
        }
    }
}

/// Drive one session to its end; returns `true` if the player asked to quit
fn play_session(
    session: &mut Session,
    rng: &mut StdRng,
    hint_service: &Arc<dyn HintService>,
) -> Result<bool, String> {
    while session.status() == GameStatus::Playing {
        print_board(session);
        print_keyboard(session);
        if let Some(hint) = session.hint() {
            println!("  💡 {}\n", hint.bright_cyan());
        }

        let input = get_user_input("Palpite")?;
        match input.to_lowercase().as_str() {
            "sair" | "quit" | "q" => return Ok(true),
            "dica" | "hint" => {
                fetch_hint(session, rng, hint_service);
                continue;
            }
            _ => {}
        }

        if let Err(e) = session.set_guess(&input) {
            println!("{}\n", format!("❌ Palavra inválida: {e}").red());
            continue;
        }

        match session.submit_guess(rng) {
            Ok(TurnOutcome::Won) => {
                print_board(session);
                println!(
                    "{}",
                    format!("🎉 Acertou em {} tentativas!", session.turn())
                        .green()
                        .bold()
                );
            }
            Ok(TurnOutcome::Lost) => {
                print_board(session);
                println!("{}", "❌ Fim das tentativas!".red().bold());
            }
            Ok(TurnOutcome::Penalized) => {
                println!("{}", "⚠️  Errou! Uma penalidade atingiu o quadro.".yellow());
            }
            Err(SubmitError::IncompleteGuess | SubmitError::GameOver) => {}
        }
    }

    Ok(false)
}

/// Sacrifice a turn and fetch the hint on the spot
fn fetch_hint(session: &mut Session, rng: &mut StdRng, hint_service: &Arc<dyn HintService>) {
    match session.request_hint(rng) {
        Ok(id) => {
            println!("{}", "⏳ Uma tentativa foi sacrificada. Buscando dica...".yellow());
            let result = hint_service.hint(session.solution());
            session.resolve_hint(id, result);
        }
        Err(e) => println!("{}\n", format!("❌ {e}").red()),
    }
}

/// Run the timed anagram bonus round after a loss
///
/// Input blocks on stdin, so elapsed wall-clock seconds are converted into
/// countdown ticks after each line. A slow answer can still time out.
fn run_anagram(session: &mut Session) -> Result<(), String> {
    let Some(anagram) = session.anagram() else {
        return Ok(());
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "🎲 DESAFIO BÔNUS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Desembaralhe {} em {} segundos para um prêmio de consolação!",
        anagram.anagram().bright_yellow().bold(),
        anagram.seconds_remaining()
    );

    let start = Instant::now();
    let mut ticked = 0;

    loop {
        let input = get_user_input("Anagrama")?;

        let elapsed = start.elapsed().as_secs();
        while ticked < elapsed {
            session.tick();
            ticked += 1;
        }

        let Some(anagram) = session.anagram() else {
            break;
        };
        if anagram.revealed() {
            println!("{}", "⏰ Tempo esgotado!".red());
            break;
        }

        session.anagram_submit(&input);
        if session.anagram().is_some_and(|a| a.solved()) {
            println!("{}", "🎉 Anagrama resolvido!".green().bold());
            break;
        }
        println!("{}", "Não é isso. Tente de novo.".yellow());
    }

    println!(
        "A palavra era {}.",
        session.solution().text().bright_yellow().bold()
    );
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
