//! Terminal view regions the renderers write into.
//!
//! Each region is replaced wholesale by its renderer; nothing is merged with
//! what a previous poll produced.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryGrid {
    cards: Vec<SummaryCard>,
}

impl SummaryGrid {
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.cards.push(SummaryCard {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn cards(&self) -> &[SummaryCard] {
        &self.cards
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorRow {
    pub name: String,
    pub state: &'static str,
    pub fault: &'static str,
    pub recovery: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotorTable {
    rows: Vec<MotorRow>,
}

impl MotorTable {
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn push(&mut self, row: MotorRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[MotorRow] {
        &self.rows
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLine(String);

impl TextLine {
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub summary: SummaryGrid,
    pub motors: MotorTable,
    pub authority: TextLine,
    pub status_ts: TextLine,
    pub command_output: TextLine,
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Boiler Dashboard ==")?;
        writeln!(f, "{}", self.status_ts.text())?;
        writeln!(f, "{}", self.authority.text())?;

        writeln!(f)?;
        writeln!(f, "Summary")?;
        for card in self.summary.cards() {
            writeln!(f, "  {:<10} {}", card.key, card.value)?;
        }

        writeln!(f)?;
        writeln!(f, "Motors")?;
        writeln!(f, "  {:<10} {:<5} {:<5} {}", "NAME", "STATE", "FAULT", "RECOVERY")?;
        for row in self.motors.rows() {
            writeln!(
                f,
                "  {:<10} {:<5} {:<5} {}",
                row.name, row.state, row.fault, row.recovery
            )?;
        }

        if !self.command_output.text().is_empty() {
            writeln!(f)?;
            writeln!(f, "Command output")?;
            for line in self.command_output.text().lines() {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}
