use client_core::StarRow;
use eframe::egui;
use shared::domain::Rating;

use crate::controller::events::{hover_transition, UiEvent};

const STAR_ACCENT: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);

/// Named glyphs used across the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    BookOpen,
    ArrowLeft,
    ArrowRight,
    User,
    Calendar,
    Star,
    StarFilled,
    PenSquare,
    TrendingUp,
    Clock,
    Image,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BookOpen => "📖",
            Icon::ArrowLeft => "⬅",
            Icon::ArrowRight => "➡",
            Icon::User => "👤",
            Icon::Calendar => "📅",
            Icon::Star => "☆",
            Icon::StarFilled => "★",
            Icon::PenSquare => "✏",
            Icon::TrendingUp => "📈",
            Icon::Clock => "🕑",
            Icon::Image => "🖼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTone {
    Primary,
    Muted,
    Accent,
}

impl IconTone {
    fn color(self, visuals: &egui::Visuals) -> egui::Color32 {
        match self {
            IconTone::Primary => visuals.hyperlink_color,
            IconTone::Muted => visuals.weak_text_color(),
            IconTone::Accent => STAR_ACCENT,
        }
    }
}

pub fn icon(visuals: &egui::Visuals, icon: Icon, size: f32, tone: IconTone) -> egui::RichText {
    egui::RichText::new(icon.glyph())
        .size(size)
        .color(tone.color(visuals))
}

pub fn icon_label(
    visuals: &egui::Visuals,
    glyph: Icon,
    text: &str,
    size: f32,
    tone: IconTone,
) -> egui::RichText {
    egui::RichText::new(format!("{} {text}", glyph.glyph()))
        .size(size)
        .color(tone.color(visuals))
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().selection.bg_fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().strong());
        });
}

/// Five clickable stars plus the seeded aggregate. Pushes hover/leave/click events for
/// the row; `hovered_before` is the store's current hover value for this article.
pub fn star_rating(
    ui: &mut egui::Ui,
    row: &StarRow,
    hovered_before: Option<Rating>,
    events: &mut Vec<UiEvent>,
) {
    ui.horizontal(|ui| {
        let mut hovered_now = None;
        for cell in &row.cells {
            let (glyph, tone) = if cell.lit {
                (Icon::StarFilled, IconTone::Accent)
            } else {
                (Icon::Star, IconTone::Muted)
            };
            let text = icon(ui.visuals(), glyph, 20.0, tone);
            let response = ui
                .add(egui::Button::new(text).frame(false))
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.hovered() {
                hovered_now = Some(cell.star);
            }
            if response.clicked() {
                events.push(UiEvent::ClickStar {
                    article_id: row.article_id,
                    star: cell.star,
                });
            }
        }

        if let Some(event) = hover_transition(row.article_id, hovered_now, hovered_before) {
            events.push(event);
        }

        let muted = ui.visuals().weak_text_color();
        ui.label(
            egui::RichText::new(&row.aggregate_label)
                .small()
                .color(muted),
        );
    });
}
