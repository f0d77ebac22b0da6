//! Shared visual vocabulary: tenant brand colors, progress bars, and money
//! formatting.

use ratzilla::ratatui::style::{Color, Modifier, Style};

use crate::session::{BrandColor, Tenant};

/// Terminal color for a tenant's brand color.
pub fn brand_color(color: BrandColor) -> Color {
    match color {
        BrandColor::Emerald => Color::Green,
        BrandColor::Blue => Color::Blue,
        BrandColor::Violet => Color::Magenta,
    }
}

/// Accent color for the current context; indigo-ish cyan outside any tenant.
pub fn accent(tenant: Option<&Tenant>) -> Color {
    tenant.map_or(Color::Cyan, |t| brand_color(t.color))
}

pub fn title_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn label() -> Style {
    Style::default().fg(Color::Gray)
}

/// A textual progress bar, `pct` clamped to 0..=100.
pub fn progress_bar(pct: u8, width: u16) -> String {
    let pct = pct.min(100);
    let width = width as usize;
    let filled = (usize::from(pct) * width) / 100;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// Format a lira amount with dot thousands separators: `1699` → `"₺1.699"`.
pub fn format_lira(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('₺');
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
