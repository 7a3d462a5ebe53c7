use client_core::{BlogSession, DEFAULT_RATINGS_ENDPOINT};
use eframe::egui;
use shared::domain::Article;

use crate::controller::{events::UiEvent, reducer};
use crate::ui::widgets::{badge, icon, icon_label, star_rating, Icon, IconTone};

const BRAND: &str = "TechBlog";
const CARD_WIDTH: f32 = 340.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RATINGS_ENDPOINT.to_string(),
        }
    }
}

pub struct BlogApp {
    session: BlogSession,
}

impl BlogApp {
    pub fn new(session: BlogSession) -> Self {
        Self { session }
    }

    fn show_nav_bar(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let reading = self.session.selected().is_some();
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let brand_icon = icon(ui.visuals(), Icon::BookOpen, 28.0, IconTone::Primary);
                ui.label(brand_icon);
                ui.heading(egui::RichText::new(BRAND).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if reading {
                        let back = icon_label(
                            ui.visuals(),
                            Icon::ArrowLeft,
                            "Назад",
                            16.0,
                            IconTone::Primary,
                        );
                        if ui.add(egui::Button::new(back).frame(false)).clicked() {
                            events.push(UiEvent::Back);
                        }
                    } else {
                        // Navigation entries without a destination yet.
                        let write = format!("{} Написать", Icon::PenSquare.glyph());
                        let _ = ui.button(write);
                        let _ = ui.add(egui::Button::new("Статьи").frame(false));
                        let _ = ui.add(egui::Button::new("Главная").frame(false));
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.weak("© 2024 TechBlog. Создано с ❤️ для сообщества разработчиков");
                ui.add_space(8.0);
            });
        });
    }

    fn show_listing(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        self.show_footer(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_hero(ui);
                ui.add_space(24.0);
                self.show_section_header(ui);
                ui.add_space(12.0);

                ui.horizontal_wrapped(|ui| {
                    for article in self.session.catalog().articles() {
                        ui.allocate_ui(egui::vec2(CARD_WIDTH, 0.0), |ui| {
                            self.show_card(ui, article, events);
                        });
                    }
                });
            });
        });
    }

    fn show_hero(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(egui::RichText::new("Исследуйте мир").size(40.0).strong());
            let accent = ui.visuals().hyperlink_color;
            ui.label(
                egui::RichText::new("технологий")
                    .size(40.0)
                    .strong()
                    .color(accent),
            );
            ui.add_space(12.0);
            ui.weak("Статьи о разработке, дизайне и современных технологиях от ведущих экспертов");
            ui.add_space(12.0);
            let start = format!("Начать читать {}", Icon::ArrowRight.glyph());
            let _ = ui.button(egui::RichText::new(start).size(18.0));
        });
    }

    fn show_section_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Популярные статьи").size(26.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let _ = ui.button(format!("{} Новое", Icon::Clock.glyph()));
                let _ = ui.button(format!("{} Популярное", Icon::TrendingUp.glyph()));
            });
        });
    }

    fn show_card(&self, ui: &mut egui::Ui, article: &Article, events: &mut Vec<UiEvent>) {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH - 24.0);
                badge(ui, &article.category);
                let cover = icon_label(ui.visuals(), Icon::Image, "обложка", 13.0, IconTone::Muted);
                ui.hyperlink_to(cover, &article.image);
                ui.add_space(6.0);

                // Only the title opens the article, so star clicks stay on the card.
                let title = egui::RichText::new(&article.title).size(20.0).strong();
                if ui.link(title).clicked() {
                    events.push(UiEvent::OpenArticle(article.id));
                }
                ui.weak(&article.excerpt);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.small(&article.author);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(&article.date);
                    });
                });
                ui.add_space(6.0);
                self.show_stars(ui, article, events);
            });
    }

    fn show_stars(&self, ui: &mut egui::Ui, article: &Article, events: &mut Vec<UiEvent>) {
        let row = self.session.star_row(article);
        let hovered_before = self.session.ratings().hovered(article.id);
        star_rating(ui, &row, hovered_before, events);
    }

    fn show_article(&self, ctx: &egui::Context, article: &Article, events: &mut Vec<UiEvent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(24.0);
                badge(ui, &article.category);
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&article.title).size(36.0).strong());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let author =
                        icon_label(ui.visuals(), Icon::User, &article.author, 15.0, IconTone::Muted);
                    ui.label(author);
                    ui.add_space(16.0);
                    let date =
                        icon_label(ui.visuals(), Icon::Calendar, &article.date, 15.0, IconTone::Muted);
                    ui.label(date);
                });
                ui.add_space(12.0);

                let cover =
                    icon_label(ui.visuals(), Icon::Image, &article.title, 14.0, IconTone::Primary);
                ui.hyperlink_to(cover, &article.image);
                ui.add_space(16.0);

                ui.label(egui::RichText::new(&article.content).size(18.0));
                ui.add_space(24.0);

                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Оцените статью").size(20.0).strong());
                        ui.add_space(8.0);
                        self.show_stars(ui, article, events);
                        if self.session.has_rated(article.id) {
                            ui.add_space(8.0);
                            ui.weak("Спасибо за вашу оценку! ⭐");
                        }
                    });
                ui.add_space(24.0);
            });
        });
    }
}

impl eframe::App for BlogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        self.show_nav_bar(ctx, &mut events);
        match self.session.selected().cloned() {
            Some(article) => self.show_article(ctx, &article, &mut events),
            None => self.show_listing(ctx, &mut events),
        }

        if reducer::apply_all(&mut self.session, events) > 0 {
            ctx.request_repaint();
        }
    }
}
