//! Shareable result text
//!
//! Builds the emoji grid players paste after a game. The grid mirrors what
//! the board actually showed, so penalty-scrambled colors and hint-obscured
//! rows carry over into the share text.

use crate::core::{LetterOutcome, MAX_GUESSES};
use crate::game::{GameStatus, Session};

/// Map an outcome to its share glyph
#[must_use]
pub const fn outcome_glyph(outcome: LetterOutcome) -> char {
    match outcome {
        LetterOutcome::Correct => '🟩',
        LetterOutcome::Present => '🟨',
        LetterOutcome::Absent | LetterOutcome::Empty | LetterOutcome::Invalid => '⬛',
    }
}

/// Build the shareable grid for a finished session
///
/// The title line scores a win by turns consumed and a loss as `X`; each
/// following line is one row of glyphs as the board displayed it.
#[must_use]
pub fn share_text(session: &Session) -> String {
    let score = match session.status() {
        GameStatus::Won => session.turn().to_string(),
        GameStatus::Lost | GameStatus::Playing => "X".to_string(),
    };

    let mut text = format!("Evil Termo {score}/{MAX_GUESSES}\n");
    for row in session.rows() {
        for (_, outcome) in row.display_cells() {
            text.push(outcome_glyph(outcome));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn played_session(solution: &str, guesses: &[&str]) -> Session {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = Session::new(Word::new(solution).unwrap(), 1);
        for guess in guesses {
            s.set_guess(guess).unwrap();
            s.submit_guess(&mut rng).unwrap();
        }
        s
    }

    #[test]
    fn first_guess_win_is_one_green_row() {
        let s = played_session("TERMO", &["TERMO"]);
        assert_eq!(share_text(&s), "Evil Termo 1/6\n🟩🟩🟩🟩🟩\n");
    }

    #[test]
    fn loss_scores_as_x() {
        let s = played_session(
            "TERMO",
            &["FESTA", "MUNDO", "PRAIA", "VINHO", "SABOR", "PEDRA"],
        );
        assert!(share_text(&s).starts_with("Evil Termo X/6\n"));
    }

    #[test]
    fn glyphs_cover_every_outcome() {
        assert_eq!(outcome_glyph(LetterOutcome::Correct), '🟩');
        assert_eq!(outcome_glyph(LetterOutcome::Present), '🟨');
        assert_eq!(outcome_glyph(LetterOutcome::Absent), '⬛');
        assert_eq!(outcome_glyph(LetterOutcome::Invalid), '⬛');
    }

    #[test]
    fn grid_has_one_line_per_row() {
        let s = played_session("TERMO", &["FESTA", "TERMO"]);
        let text = share_text(&s);
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Evil Termo 2/6\n"));
    }
}
