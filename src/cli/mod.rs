//! Command-line interface for boekenplank.
//!
//! Provides commands for searching the catalog, pulling trending picks,
//! selecting a current book, and managing the persisted reading lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::book::{BookId, BookRecord};
use crate::catalog::CatalogClient;
use crate::config;
use crate::store::{FileStorage, ListName, ReadingListStore};

type Store = ReadingListStore<FileStorage>;

/// boekenplank - Gutendex catalog companion with local reading lists
#[derive(Parser, Debug)]
#[command(name = "boekenplank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog by title or author
    Search {
        /// Free-text query
        query: String,
    },

    /// Show a handful of random catalog picks
    Trending {
        /// Number of picks to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Select a book as the current one (read back with `show`)
    Select {
        /// Book id
        id: u64,
    },

    /// Show the currently selected book in detail
    Show,

    /// Add a book to a reading list
    Add {
        /// Target list
        #[arg(value_enum)]
        list: ListKind,

        /// Book id
        id: u64,
    },

    /// Remove a book from a reading list
    Remove {
        /// Target list
        #[arg(value_enum)]
        list: ListKind,

        /// Book id
        id: u64,
    },

    /// Print the contents of the reading lists
    Lists {
        /// Limit output to one list
        #[arg(value_enum)]
        list: Option<ListKind>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Reading list for CLI (maps to ListName)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListKind {
    /// Books to read later
    WantToRead,

    /// Books already read
    Read,
}

impl From<ListKind> for ListName {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::WantToRead => ListName::WantToRead,
            ListKind::Read => ListName::Read,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let client = CatalogClient::new(config::base_url()?);
        let store = ReadingListStore::new(FileStorage::new(config::lists_dir()?));

        match self.command {
            Commands::Search { query } => search(&client, &store, &query).await,
            Commands::Trending { count } => trending(&client, count).await,
            Commands::Select { id } => select(&client, &store, BookId::new(id)).await,
            Commands::Show => show(&store).await,
            Commands::Add { list, id } => {
                add(&client, &store, list.into(), BookId::new(id)).await
            }
            Commands::Remove { list, id } => remove(&store, list.into(), BookId::new(id)).await,
            Commands::Lists { list } => lists(&store, list.map(Into::into)).await,
            Commands::Config => show_config(),
        }
    }
}

/// Search the catalog and print one card line per result
async fn search(client: &CatalogClient, store: &Store, query: &str) -> Result<()> {
    let results = client
        .search(query)
        .await
        .with_context(|| format!("Search for \"{}\" failed", query))?;

    if results.books.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    println!("{} results for \"{}\"", results.total, query);
    for book in &results.books {
        print_card(store, book).await;
    }

    Ok(())
}

/// Show picks from a random catalog page
async fn trending(client: &CatalogClient, count: usize) -> Result<()> {
    let books = client
        .trending(count)
        .await
        .context("Failed to load trending books")?;

    for book in &books {
        println!(
            "  {:>6}  {} - {}",
            book.id, book.title, book.author_name
        );
    }

    Ok(())
}

/// Fetch a record by id and write it to the selection slot
async fn select(client: &CatalogClient, store: &Store, id: BookId) -> Result<()> {
    let book = lookup_one(client, &id).await?;

    store
        .select(&book)
        .await
        .context("Failed to persist selection")?;

    println!("Selected \"{}\" ({})", book.title, book.id);
    Ok(())
}

/// Print the current selection in detail
async fn show(store: &Store) -> Result<()> {
    let Some(book) = store.selection().await else {
        println!("No book selected. Use `boekenplank select <id>` first.");
        return Ok(());
    };

    println!("{}", book.title);
    println!("  Author:      {}", book.author);
    println!("  Year:        {}", book.display_year());
    println!("  Languages:   {}", book.languages);
    println!("  Downloads:   {}", book.downloads_formatted);
    println!("  Media type:  {}", book.media_type);
    println!("  Cover:       {}", book.cover);
    println!("  Description: {}", book.description);

    if !book.subjects.is_empty() {
        println!("  Subjects:");
        for subject in &book.subjects {
            println!("    - {}", subject);
        }
    }

    if !book.bookshelves.is_empty() {
        println!("  Bookshelves:");
        for shelf in &book.bookshelves {
            println!("    - {}", shelf);
        }
    }

    Ok(())
}

/// Fetch a record by id and append it to a list
async fn add(client: &CatalogClient, store: &Store, list: ListName, id: BookId) -> Result<()> {
    let book = lookup_one(client, &id).await?;

    let added = store
        .add(&book, list)
        .await
        .with_context(|| format!("Failed to persist list {}", list))?;

    if added {
        println!("Added \"{}\" to {}", book.title, list.label());
    } else {
        println!("\"{}\" is already on {}", book.title, list.label());
    }

    Ok(())
}

/// Remove a record from a list by id
async fn remove(store: &Store, list: ListName, id: BookId) -> Result<()> {
    let removed = store
        .remove(&id, list)
        .await
        .with_context(|| format!("Failed to persist list {}", list))?;

    if removed {
        println!("Removed {} from {}", id, list.label());
    } else {
        println!("Book {} was not on {}", id, list.label());
    }

    Ok(())
}

/// Print the persisted lists
async fn lists(store: &Store, only: Option<ListName>) -> Result<()> {
    let names = match only {
        Some(list) => vec![list],
        None => vec![ListName::WantToRead, ListName::Read],
    };

    for list in names {
        let books = store.books(list).await;
        println!("{} ({})", list.label(), books.len());

        if books.is_empty() {
            println!("  (empty)");
            continue;
        }

        for book in &books {
            println!("  {:>6}  {} - {}", book.id, book.title, book.author_name);
        }
    }

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("home:      {}", config.home.display());
    println!("lists:     {}", config.home.join("lists").display());
    println!("base_url:  {}", config.base_url);
    match &config.config_file {
        Some(path) => println!("config:    {}", path.display()),
        None => println!("config:    (none found)"),
    }

    Ok(())
}

/// One card line with reading-list membership markers
async fn print_card(store: &Store, book: &BookRecord) {
    let mut markers = String::new();
    if store.contains(&book.id, ListName::WantToRead).await {
        markers.push_str(" [W]");
    }
    if store.contains(&book.id, ListName::Read).await {
        markers.push_str(" [R]");
    }

    println!(
        "  {:>6}  {} - {} ({} downloads){}",
        book.id, book.title, book.author_name, book.downloads_formatted, markers
    );
}

/// Fetch exactly one record by id
async fn lookup_one(client: &CatalogClient, id: &BookId) -> Result<BookRecord> {
    let books = client
        .lookup(std::slice::from_ref(id))
        .await
        .context("Catalog lookup failed")?;

    books
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No catalog record with id {}", id))
}
