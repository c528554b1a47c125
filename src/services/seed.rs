//! First-run reference data

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Category, NewBook},
    repository::LibraryStore,
};

pub const AUTHORS: [&str; 5] = [
    "George Orwell",
    "Gabriel Garcia Marquez",
    "J.R.R. Tolkien",
    "J.K. Rowling",
    "Ray Bradbury",
];

pub const CATEGORIES: [&str; 3] = ["Dystopian", "Magical Realism", "Fantasy"];

/// A seeded book, linked to its author and category by name
#[derive(Debug, Clone, Copy)]
pub struct SeedBook {
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

pub const BOOKS: [SeedBook; 5] = [
    SeedBook {
        title: "1984",
        author: "George Orwell",
        category: "Dystopian",
    },
    SeedBook {
        title: "One Hundred Years of Solitude",
        author: "Gabriel Garcia Marquez",
        category: "Magical Realism",
    },
    SeedBook {
        title: "The Hobbit",
        author: "J.R.R. Tolkien",
        category: "Fantasy",
    },
    SeedBook {
        title: "Harry Potter and the Philosopher's Stone",
        author: "J.K. Rowling",
        category: "Fantasy",
    },
    SeedBook {
        title: "Fahrenheit 451",
        author: "Ray Bradbury",
        category: "Dystopian",
    },
];

/// Rows written by a seeding run. Empty when the store already had authors.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedReport {
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
    pub books: Vec<Book>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.categories.is_empty() && self.books.is_empty()
    }
}

/// Insert the reference authors, categories and books if no author exists yet.
///
/// Books are linked through the ids the store hands back for each author and
/// category, so nothing depends on how the store numbers rows.
pub async fn seed_reference_data<S>(store: &mut S) -> AppResult<SeedReport>
where
    S: LibraryStore + ?Sized,
{
    seed(store).await.map_err(AppError::seed)
}

async fn seed<S>(store: &mut S) -> AppResult<SeedReport>
where
    S: LibraryStore + ?Sized,
{
    let existing = store.count_authors().await?;
    if existing > 0 {
        tracing::debug!("Found {} authors, skipping seed", existing);
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();

    for name in AUTHORS {
        report.authors.push(store.insert_author(name).await?);
    }

    for name in CATEGORIES {
        report.categories.push(store.insert_category(name).await?);
    }

    for entry in BOOKS {
        let author_id = report
            .authors
            .iter()
            .find(|a| a.name == entry.author)
            .map(|a| a.id)
            .ok_or_else(|| {
                AppError::SeedData(format!(
                    "book {:?} names unknown author {:?}",
                    entry.title, entry.author
                ))
            })?;
        let category_id = report
            .categories
            .iter()
            .find(|c| c.name == entry.category)
            .map(|c| c.id)
            .ok_or_else(|| {
                AppError::SeedData(format!(
                    "book {:?} names unknown category {:?}",
                    entry.title, entry.category
                ))
            })?;

        let book = NewBook {
            title: entry.title.to_string(),
            author_id,
            category_id,
        };
        report.books.push(store.insert_book(&book).await?);
    }

    tracing::info!(
        "Seeded {} authors, {} categories, {} books",
        report.authors.len(),
        report.categories.len(),
        report.books.len()
    );

    Ok(report)
}
