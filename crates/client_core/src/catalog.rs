//! Articles seeded at startup. The set is fixed for the lifetime of the process.

use shared::domain::{Article, ArticleId};

#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn seeded() -> Self {
        Self::new(seeded_articles())
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

const IMAGE_BASE: &str =
    "https://cdn.poehali.dev/projects/9b2f358b-88ff-43ae-b205-163c8156c591/files";

fn image_url(file: &str) -> String {
    format!("{IMAGE_BASE}/{file}")
}

pub fn seeded_articles() -> Vec<Article> {
    vec![
        Article {
            id: ArticleId(1),
            title: "Будущее веб-разработки в 2025".into(),
            excerpt: "Разбираем главные тренды и технологии, которые изменят индустрию".into(),
            content: "Веб-разработка переживает период стремительных изменений. Искусственный интеллект становится неотъемлемой частью процесса создания сайтов и приложений. Новые фреймворки и инструменты делают разработку быстрее и доступнее. В этой статье мы рассмотрим ключевые технологии, которые определят будущее веб-разработки: от серверных компонентов React до edge computing и WebAssembly. Каждая из этих технологий открывает новые возможности для создания быстрых, масштабируемых и удобных веб-приложений.".into(),
            image: image_url("b31280e1-1e46-474a-bf7c-ad9e3bb6cd68.jpg"),
            author: "Анна Смирнова".into(),
            date: "15 ноября 2024".into(),
            category: "Технологии".into(),
            rating: 4.5,
            rating_count: 127,
        },
        Article {
            id: ArticleId(2),
            title: "Искусство создания UX/UI дизайна".into(),
            excerpt: "Практические советы по созданию интуитивных интерфейсов".into(),
            content: "Хороший дизайн незаметен. Пользователь должен легко достигать своих целей, не задумываясь о том, как устроен интерфейс. В этой статье мы разберем основные принципы создания эффективного UX/UI дизайна: от исследования пользователей до прототипирования и тестирования. Узнаете, как правильно структурировать информацию, выбирать цветовую палитру и создавать визуальную иерархию. Рассмотрим реальные примеры удачных и неудачных решений в интерфейсах популярных сервисов.".into(),
            image: image_url("f327e7a3-64a7-4f14-88df-65ceff966c77.jpg"),
            author: "Дмитрий Волков".into(),
            date: "12 ноября 2024".into(),
            category: "Дизайн".into(),
            rating: 4.8,
            rating_count: 203,
        },
        Article {
            id: ArticleId(3),
            title: "TypeScript: Полное руководство".into(),
            excerpt: "Углубляемся в мир типизированного JavaScript".into(),
            content: "TypeScript стал стандартом де-факто для крупных JavaScript проектов. Он добавляет систему типов, которая помогает избежать ошибок на этапе разработки и делает код более понятным и поддерживаемым. В этом подробном руководстве вы узнаете всё о TypeScript: от базовых типов до продвинутых паттернов с дженериками и условными типами. Научитесь правильно типизировать React компоненты, работать с асинхронным кодом и настраивать конфигурацию компилятора для максимальной строгости проверок.".into(),
            image: image_url("1e3fde4c-e31d-4ab0-b9bf-79085ccf66ae.jpg"),
            author: "Елена Петрова".into(),
            date: "10 ноября 2024".into(),
            category: "Разработка".into(),
            rating: 4.6,
            rating_count: 156,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seeded_catalog_has_unique_ids_and_bounded_ratings() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);

        let ids: HashSet<ArticleId> = catalog.articles().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog.len());

        for article in catalog.articles() {
            assert!((0.0..=5.0).contains(&article.rating));
            assert!(article.image.starts_with("https://"));
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.get(ArticleId(2)).map(|a| a.author.as_str()),
            Some("Дмитрий Волков")
        );
        assert!(catalog.get(ArticleId(99)).is_none());
    }
}
