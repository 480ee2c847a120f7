//! Board and keyboard printing for the line-based CLI

use crate::core::{KEYBOARD_ROWS, LetterOutcome, MAX_GUESSES, WORD_LENGTH};
use crate::game::{GameStats, GameStatus, Session};
use colored::{ColoredString, Colorize};

fn paint_cell(letter: char, outcome: LetterOutcome) -> ColoredString {
    let cell = format!(" {letter} ");
    match outcome {
        LetterOutcome::Correct => cell.black().on_green(),
        LetterOutcome::Present => cell.black().on_yellow(),
        LetterOutcome::Absent => cell.white().on_bright_black(),
        LetterOutcome::Invalid => cell.red().bold(),
        LetterOutcome::Empty => cell.bright_black(),
    }
}

/// Print the full board: scored rows, the typing buffer, empty rows
pub fn print_board(session: &Session) {
    println!();
    let mut printed = 0;

    for row in session.rows() {
        let line: String = row
            .display_cells()
            .iter()
            .map(|&(letter, outcome)| paint_cell(letter, outcome).to_string())
            .collect();
        println!("  {line}");
        printed += 1;
    }

    if session.status() == GameStatus::Playing && printed < MAX_GUESSES {
        let buffer = session.buffer_chars();
        let line: String = buffer
            .iter()
            .map(|&c| format!("[{c}]").bright_white().to_string())
            .collect();
        println!("  {line}");
        printed += 1;
    }

    for _ in printed..MAX_GUESSES {
        let line = " · ".repeat(WORD_LENGTH);
        println!("  {}", line.bright_black());
    }
    println!();
}

/// Print the keyboard with best-known letter states
pub fn print_keyboard(session: &Session) {
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .bytes()
            .map(|b| {
                let letter = (b as char).to_string();
                let painted = match session.key_states().get(b) {
                    Some(LetterOutcome::Correct) => letter.green().bold(),
                    Some(LetterOutcome::Present) => letter.yellow().bold(),
                    Some(LetterOutcome::Absent) => letter.bright_black(),
                    _ => letter.normal(),
                };
                format!("{painted} ")
            })
            .collect();
        println!("  {}{line}", " ".repeat(i));
    }
    println!();
}

/// Print the running statistics block
pub fn print_stats(stats: &GameStats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "ESTATÍSTICAS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Jogos:            {}", stats.games_played());
    println!(
        "   Vitórias:         {}",
        format!("{}%", stats.win_percentage()).bright_yellow()
    );
    println!("   Sequência atual:  {}", stats.current_streak());
    println!("   Melhor sequência: {}", stats.max_streak());

    let max = stats.guess_distribution().iter().copied().max().unwrap_or(0);
    if max > 0 {
        println!("\n   {}", "Distribuição:".bright_cyan().bold());
        for (i, &count) in stats.guess_distribution().iter().enumerate() {
            let width = (count as usize * 20) / max as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(width).green(),
                "░".repeat(20 - width).bright_black()
            );
            println!("   {}: {bar} {count}", i + 1);
        }
    }
}
