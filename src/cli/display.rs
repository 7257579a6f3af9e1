//! Terminal display and UI rendering
//!
//! Features:
//! - Card front (tile name or yaku name) and back (kanji, reading, score)
//! - Swipe feedback while a transition is pending
//! - Progress line, category toggles and controls
//! - Done card once the deck is cleared

use crate::catalog::{Card, CardFace, Catalog, Category};
use crate::error::Result;
use crate::session::{Engine, Outcome, SessionState, TransitionKind};
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{stdout, Stdout, Write};

const RULE_WIDTH: usize = 50;

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
}

impl Display {
    /// Create display on the alternate screen
    pub fn alternate() -> Result<Self> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Display {
            use_alternate_screen: true,
        })
    }

    /// Create display without alternate screen (simpler mode)
    pub fn simple() -> Self {
        Display {
            use_alternate_screen: false,
        }
    }

    /// Draw one full frame
    pub fn render(&self, engine: &Engine, prompt: Option<&str>) -> Result<()> {
        let mut out = stdout();
        queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        line(
            &mut out,
            0,
            Color::Cyan,
            "Yaku Up! Riichi Mahjong tiles and yaku",
        )?;

        let state = engine.state();
        match engine.current_card() {
            Some(card) => {
                let feedback = engine.pending().map(|p| p.kind);
                show_card(&mut out, card, engine.is_flipped(), feedback)?;
            }
            None => show_done(&mut out)?,
        }

        show_progress(&mut out, state)?;
        show_toggles(&mut out, engine.catalog(), state)?;
        show_controls(&mut out, state)?;

        if let Some(prompt) = prompt {
            line(&mut out, 17, Color::Yellow, prompt)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<()> {
        let mut out = stdout();

        if self.use_alternate_screen {
            execute!(out, LeaveAlternateScreen, cursor::Show)?;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::simple()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

fn line(out: &mut Stdout, row: u16, color: Color, text: &str) -> Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, row),
        SetForegroundColor(color),
        Print(text),
        ResetColor
    )?;
    Ok(())
}

fn rule(out: &mut Stdout, row: u16) -> Result<()> {
    line(out, row, Color::Blue, &"─".repeat(RULE_WIDTH))
}

fn show_card(
    out: &mut Stdout,
    card: &Card,
    flipped: bool,
    feedback: Option<TransitionKind>,
) -> Result<()> {
    rule(out, 2)?;

    if !flipped {
        // Front: tiles show their written form, yaku their name
        let front = match &card.face {
            CardFace::Tile { kanji, .. } => kanji.as_str(),
            CardFace::Combination { .. } => card.name.as_str(),
        };
        queue!(
            out,
            cursor::MoveTo(2, 4),
            SetAttribute(Attribute::Bold),
            Print(front),
            SetAttribute(Attribute::Reset)
        )?;
        line(out, 6, Color::DarkGrey, "  (space to reveal)")?;
    } else {
        match &card.face {
            CardFace::Tile { kanji, romaji } => {
                queue!(
                    out,
                    cursor::MoveTo(2, 3),
                    SetAttribute(Attribute::Bold),
                    Print(&card.name),
                    SetAttribute(Attribute::Reset)
                )?;
                line(out, 4, Color::White, &format!("  {}", kanji))?;
                line(out, 5, Color::Grey, &format!("  \"{}\"", romaji))?;
            }
            CardFace::Combination {
                kanji,
                romaji,
                score,
                description,
            } => {
                queue!(
                    out,
                    cursor::MoveTo(2, 3),
                    SetAttribute(Attribute::Bold),
                    Print(kanji),
                    SetAttribute(Attribute::Reset)
                )?;
                line(out, 4, Color::Grey, &format!("  \"{}\"", romaji))?;
                line(out, 5, Color::Magenta, &format!("  {}", score))?;
                line(out, 6, Color::White, &format!("  {}", description))?;
            }
        }
    }

    match feedback {
        Some(TransitionKind::Advance(Outcome::Correct)) => {
            line(out, 7, Color::Green, "  ✔ Got it")?
        }
        Some(TransitionKind::Advance(Outcome::Incorrect)) => {
            line(out, 7, Color::Red, "  ✘ Again later")?
        }
        Some(TransitionKind::Shuffle) => line(out, 7, Color::Yellow, "  Shuffling...")?,
        None => {}
    }

    rule(out, 8)
}

fn show_done(out: &mut Stdout) -> Result<()> {
    rule(out, 2)?;
    line(out, 4, Color::Green, "  Congrats! 🎉")?;
    line(
        out,
        6,
        Color::White,
        "  Reset progress or enable new sets to keep learning.",
    )?;
    rule(out, 8)
}

fn show_progress(out: &mut Stdout, state: &SessionState) -> Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 9),
        SetForegroundColor(Color::Magenta),
        Print("Progress: "),
        ResetColor,
        Print(format!(
            "{} / {}  |  Remaining: {}",
            state.correct_count(),
            state.total_enabled(),
            state.remaining()
        )),
    )?;
    Ok(())
}

fn show_toggles(out: &mut Stdout, catalog: &Catalog, state: &SessionState) -> Result<()> {
    queue!(out, cursor::MoveTo(0, 11), Print("Sets: "))?;

    for (i, (category, on)) in state.enabled().iter().enumerate() {
        queue!(
            out,
            SetForegroundColor(if on { Color::Green } else { Color::DarkGrey }),
            Print(format!("[{}] {} ", i + 1, toggle_label(catalog, category))),
            ResetColor
        )?;
    }

    line(
        out,
        12,
        Color::DarkGrey,
        "WARNING: Enabling or disabling sets will reset your progress.",
    )
}

/// Sample tile kanji for tile sets, the set label for yaku
fn toggle_label(catalog: &Catalog, category: Category) -> String {
    let sample = category
        .sample_card()
        .and_then(|id| catalog.find(id))
        .and_then(|slot| catalog.get(slot));

    match sample.map(|card| &card.face) {
        Some(CardFace::Tile { kanji, .. }) => format!("{} {}", kanji, category.label()),
        _ => category.label().to_uppercase(),
    }
}

fn show_controls(out: &mut Stdout, state: &SessionState) -> Result<()> {
    let shuffle = if state.is_complete() {
        ""
    } else if state.is_shuffled() {
        "  |  s: 🔁 Unshuffle"
    } else {
        "  |  s: 🔀 Shuffle"
    };

    line(
        out,
        14,
        Color::DarkGrey,
        &format!("r: Reset Progress{}", shuffle),
    )?;
    line(
        out,
        15,
        Color::DarkGrey,
        "space: flip  |  →/l: correct  |  ←/h: again  |  1-6: sets  |  q: quit",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_labels() {
        let catalog = Catalog::riichi();
        assert_eq!(toggle_label(&catalog, Category::Man), "一萬 Characters");
        assert_eq!(toggle_label(&catalog, Category::Dragons), "發 Dragons");
        assert_eq!(toggle_label(&catalog, Category::Yaku), "YAKU");
    }

    #[test]
    fn test_toggle_label_without_sample_card() {
        let catalog = Catalog::from_cards(Vec::new()).unwrap();
        assert_eq!(toggle_label(&catalog, Category::Winds), "WINDS");
    }
}
