//! Built-in fallback articles shown when the live API is unavailable or
//! returns nothing useful.

use crate::policy::FallbackSize;
use crate::state::{Article, View};

const MINIMAL_LEN: usize = 3;

/// The fallback dataset for a view: Trending has its own set, every other
/// view shares the generic one.
pub fn fallback_for(view: View, size: FallbackSize) -> Vec<Article> {
    let mut articles = match view {
        View::Trending => trending_fallback(),
        _ => generic_fallback(),
    };
    if size == FallbackSize::Minimal {
        articles.truncate(MINIMAL_LEN);
    }
    articles
}

fn generic_fallback() -> Vec<Article> {
    vec![
        Article::new(
            "Understanding React Development",
            Some("A deep dive into how components, state, and props work."),
            "#",
            Some("https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400"),
        ),
        Article::new(
            "Next.js 15 Features",
            Some("Exploring server components and streaming capabilities."),
            "#",
            Some("https://images.unsplash.com/photo-1618477247222-acbdb0e159b3?w=400"),
        ),
        Article::new(
            "AI in Software Engineering",
            Some("How LLMs are changing the way developers debug."),
            "#",
            Some("https://images.unsplash.com/photo-1677442136019-21780ecad995?w=400"),
        ),
        Article::new(
            "Cybersecurity Basics",
            Some("Protecting your web applications from vulnerabilities."),
            "#",
            Some("https://images.unsplash.com/photo-1563986768609-322da13575f3?w=400"),
        ),
        Article::new(
            "The Future of Web 3.0",
            Some("Decentralized applications and user ownership."),
            "#",
            Some("https://images.unsplash.com/photo-1621416895569-26154d5d3ba7?w=400"),
        ),
    ]
}

fn trending_fallback() -> Vec<Article> {
    vec![
        Article::new(
            "SpaceX Starship Launch",
            Some("Latest countdown and mission objectives."),
            "#",
            Some("https://images.unsplash.com/photo-1541185933-ef5d8ed016c2?w=400"),
        ),
        Article::new(
            "New Smartphone Launch",
            Some("All the leaked specs for the upcoming flagship."),
            "#",
            Some("https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400"),
        ),
        Article::new(
            "Global Climate Summit",
            Some("Renewable energy policy shifts."),
            "#",
            Some("https://images.unsplash.com/photo-1473341617437-09edad10d144?w=400"),
        ),
    ]
}
