use crate::game_engine::{DefeatSummary, VictorySummary};
use crate::io::{Screen, TextStyle};
use crate::models::constants::{Condition, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::errors::GameResult;
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;

const STATUS_COLUMN: u16 = 49;
const PROMPT_ROW: u16 = 14;
const MESSAGE_ROW: u16 = 16;

/// Column that centres `text` on a screen `width` cells wide.
fn centered(width: u16, text: &str) -> u16 {
    (width / 2).saturating_sub(text.chars().count() as u16 / 2)
}

pub struct QuadrantPresenter;

impl QuadrantPresenter {
    pub fn show(galaxy: &Galaxy, paused: bool, screen: &mut dyn Screen) -> GameResult<()> {
        Self::show_map(galaxy, screen)?;
        Self::show_status(galaxy, paused, screen)?;
        Self::show_prompt(galaxy, screen)?;
        Self::show_messages(galaxy, screen)
    }

    /// Sector grid with row 10 at the top and column numbers underneath.
    fn show_map(galaxy: &Galaxy, screen: &mut dyn Screen) -> GameResult<()> {
        let quadrant = galaxy.active_quadrant()?;
        let title = format!(
            "Quadrant : {}, {}",
            quadrant.position.x + 1,
            quadrant.position.y + 1
        );
        screen.emit_str(22 - title.len() as u16 / 2, 0, &title, TextStyle::Bold)?;
        screen.emit_str(3, 1, "=---=---=---=---=---=---=---=---=---=---", TextStyle::Plain)?;
        for row in 0..SECTOR_SIZE as i32 {
            let y = SECTOR_SIZE as i32 - 1 - row;
            let line = format!("{:2}|{}|", y + 1, quadrant.map.render_row(y));
            screen.emit_str(0, row as u16 + 2, &line, TextStyle::Plain)?;
        }
        screen.emit_str(3, 12, "=-1-=-2-=-3-=-4-=-5-=-6-=-7-=-8-=-9-=-10", TextStyle::Plain)?;
        Ok(())
    }

    fn show_status(galaxy: &Galaxy, paused: bool, screen: &mut dyn Screen) -> GameResult<()> {
        let quadrant = galaxy.active_quadrant()?;
        let player = galaxy.player();
        let col = STATUS_COLUMN;

        screen.emit_str(col, 3, &format!("STARDATE:         {}", galaxy.stardate()), TextStyle::Plain)?;
        screen.emit_str(
            col,
            4,
            &format!("SECTOR:           {},{}", player.sector().x + 1, player.sector().y + 1),
            TextStyle::Plain,
        )?;
        let condition = quadrant.condition(player);
        screen.emit_str(col, 5, "CONDITION:        ", TextStyle::Plain)?;
        let style = match condition {
            Condition::Red => TextStyle::Blink,
            Condition::Green | Condition::Docked => TextStyle::Plain,
        };
        screen.emit_str(col + 18, 5, condition.label(), style)?;
        screen.emit_str(col, 6, &format!("SHIELDS:          {}", player.shields()), TextStyle::Plain)?;
        screen.emit_str(col, 7, &format!("ENERGY:           {}", player.energy()), TextStyle::Plain)?;
        screen.emit_str(
            col,
            8,
            &format!("PHOTON TORPEDOES: {}", player.torpedoes()),
            TextStyle::Plain,
        )?;
        screen.emit_str(
            col,
            10,
            &format!("KLINGONS:         {}", galaxy.remaining_hostiles()),
            TextStyle::Plain,
        )?;
        if paused {
            screen.emit_str(col, 12, "PAUSED", TextStyle::Bold)?;
        }
        Ok(())
    }

    /// Command menu or the prompt of the current entry mode, with whatever
    /// has been typed so far and a blinking cursor.
    fn show_prompt(galaxy: &Galaxy, screen: &mut dyn Screen) -> GameResult<()> {
        let panel = &galaxy.active_quadrant()?.panel;
        let prompt = panel.state().prompt();
        if prompt.is_empty() {
            return Ok(());
        }
        screen.emit_str(1, PROMPT_ROW, prompt, TextStyle::Plain)?;
        if panel.awaiting_input() {
            let col = 1 + prompt.len() as u16;
            screen.emit_str(col, PROMPT_ROW, panel.buffer(), TextStyle::Plain)?;
            screen.emit_str(col + panel.buffer().len() as u16, PROMPT_ROW, "_", TextStyle::Blink)?;
        }
        Ok(())
    }

    fn show_messages(galaxy: &Galaxy, screen: &mut dyn Screen) -> GameResult<()> {
        let (_, height) = screen.size();
        let rows = height.saturating_sub(MESSAGE_ROW) as usize;
        let messages = &galaxy.active_quadrant()?.messages;
        // Newest messages win when the log is taller than the screen.
        let skip = messages.len().saturating_sub(rows);
        for (i, message) in messages.iter().skip(skip).enumerate() {
            let line = format!("Stardate {}: {}", message.stardate, message.text);
            screen.emit_str(1, MESSAGE_ROW + i as u16, &line, TextStyle::Plain)?;
        }
        Ok(())
    }
}

pub struct GalaxyMapPresenter;

impl GalaxyMapPresenter {
    /// Every quadrant's hostile/starbase/star counts, `???` where not yet
    /// scanned and `*KBS*` around the current one. North is at the top.
    pub fn show(galaxy: &Galaxy, screen: &mut dyn Screen) -> GameResult<()> {
        let (x, y) = (2u16, 1u16);
        screen.emit_str(x, y - 1, "                     GALAXY MAP", TextStyle::Bold)?;
        let border = format!(" {}", "-".repeat(GALAXY_SIZE * 6 + 1));
        screen.emit_str(x, y, &border, TextStyle::Plain)?;
        for row in 0..GALAXY_SIZE {
            let ly = y + row as u16 + 1;
            screen.emit_str(x, ly, &format!("|{}|", " ".repeat(GALAXY_SIZE * 6 + 1)), TextStyle::Plain)?;
            let qy = (GALAXY_SIZE - 1 - row) as i32;
            for qx in 0..GALAXY_SIZE as i32 {
                let Some(summary) = galaxy.quadrant_summary(QuadrantPosition::new(qx, qy)) else {
                    continue;
                };
                let cell = if summary.is_active {
                    format!(" *{}*", summary.encoded())
                } else if summary.scanned {
                    format!("  {} ", summary.encoded())
                } else {
                    "  ??? ".to_string()
                };
                screen.emit_str(x + qx as u16 * 6 + 1, ly, &cell, TextStyle::Plain)?;
            }
        }
        screen.emit_str(x, y + GALAXY_SIZE as u16 + 1, &border, TextStyle::Plain)?;
        let footer = format!(
            "STARDATE: {}     KLINGONS: {}     STARBASES: {}",
            galaxy.stardate(),
            galaxy.remaining_hostiles(),
            galaxy.remaining_starbases()
        );
        screen.emit_str(2, y + GALAXY_SIZE as u16 + 3, &footer, TextStyle::Plain)?;
        Ok(())
    }
}

pub struct SensorPresenter;

impl SensorPresenter {
    /// 3x3 block of boxes around the ship; `***` marks space outside the
    /// galaxy.
    pub fn show(galaxy: &Galaxy, screen: &mut dyn Screen) -> GameResult<()> {
        let (xloc, yloc) = (25u16, 8u16);
        for (row, cells) in galaxy.neighborhood().iter().enumerate() {
            for (col, summary) in cells.iter().enumerate() {
                let left = xloc + col as u16 * 6 - 6;
                let top = yloc + row as u16 * 4 - 4;
                let contents = match summary {
                    Some(s) => format!("| {} |", s.encoded()),
                    None => "| *** |".to_string(),
                };
                screen.emit_str(left, top, "-------", TextStyle::Plain)?;
                screen.emit_str(left, top + 1, "|     |", TextStyle::Plain)?;
                screen.emit_str(left, top + 2, &contents, TextStyle::Plain)?;
                screen.emit_str(left, top + 3, "|     |", TextStyle::Plain)?;
                screen.emit_str(left, top + 4, "-------", TextStyle::Plain)?;
            }
        }
        Ok(())
    }
}

pub struct QuitPresenter;

impl QuitPresenter {
    pub fn show(screen: &mut dyn Screen) -> GameResult<()> {
        let (width, height) = screen.size();
        let msg = "Do you wish to quit (Y/N)?";
        screen.emit_str(centered(width, msg), height / 2, msg, TextStyle::Bold)?;
        Ok(())
    }
}

pub struct EndPresenter;

impl EndPresenter {
    pub fn show_victory(summary: &VictorySummary, screen: &mut dyn Screen) -> GameResult<()> {
        let lines = vec![
            format!(
                "On Stardate {}, the Enterprise successfully destroyed the",
                summary.stardate
            ),
            "last Klingon ship and won the war.".to_string(),
            String::new(),
            format!(
                "It took {:.1} Stardates to win the war.",
                summary.stardates_taken
            ),
            format!(
                "This is an average of {:.1} Stardates per enemy.",
                summary.stardates_per_hostile
            ),
            "Starfleet Command congratulates you on your victory, and you".to_string(),
            "are hereby promoted to Admiral.".to_string(),
        ];
        Self::show_framed(&lines, screen)
    }

    pub fn show_defeat(summary: &DefeatSummary, screen: &mut dyn Screen) -> GameResult<()> {
        let mut lines = vec![
            format!(
                "The Enterprise was destroyed on Stardate {} with all hands lost.",
                summary.stardate
            ),
            String::new(),
        ];
        if summary.hostiles_destroyed == 0 {
            lines.extend(
                [
                    "You suffered an ignominious defeat, failing to destroy even one enemy ship.",
                    "Your humiliation is lessened only by the fact that your ship was destroyed,",
                    "lost with all of its crew - including you!",
                    "Your tactics will be studied through the ages as an example of",
                    "how not to conduct a war!",
                ]
                .map(String::from),
            );
        } else {
            lines.push(format!(
                "While you managed to defeat {} enemies, the remaining {} Klingons destroyed",
                summary.hostiles_destroyed, summary.hostiles_remaining
            ));
            lines.push("all the Starbases and won the war!".to_string());
            lines.push("Your defeat will go down in the annals of history!".to_string());
        }
        Self::show_framed(&lines, screen)
    }

    fn show_framed(lines: &[String], screen: &mut dyn Screen) -> GameResult<()> {
        let (width, _) = screen.size();
        screen.draw_box(2, 2, width.saturating_sub(5), 16)?;
        let mut row = 4;
        for line in lines {
            screen.emit_str(centered(width, line), row, line, TextStyle::Plain)?;
            row += 1;
        }
        let prompt = "Press ESC to quit";
        screen.emit_str(centered(width, prompt), row + 2, prompt, TextStyle::Bold)?;
        Ok(())
    }
}
