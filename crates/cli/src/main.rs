use std::num::NonZeroUsize;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use bookshelf_app::modules::books::booklist::Booklist;
use bookshelf_app::modules::books::models::{Constraint, FilterCriteria};
use bookshelf_app::modules::books::preview::{self, PreviewCard, ShowMoreButton};
use bookshelf_kernel::settings::Settings;

/// Browse the book catalog from the terminal, or serve it over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve,

    /// List the catalog a page at a time
    List {
        /// Number of pages to reveal
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Filter the catalog by title, author and genre
    Search {
        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        title: String,

        /// Author id, or "any"
        #[arg(long)]
        author: Option<String>,

        /// Genre id, or "any"
        #[arg(long)]
        genre: Option<String>,

        /// Number of pages to reveal
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Show one book's details
    Show {
        /// Book id
        id: String,
    },

    /// List author filter options
    Authors,

    /// List genre filter options
    Genres,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    items: Vec<PreviewCard>,
    total: usize,
    page_index: usize,
    empty: bool,
    show_more: ShowMoreButton,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry);

    tracing::debug!(env = ?settings.environment, command = ?cli.command, "bookshelf CLI starting");

    match cli.command {
        Command::Serve => bookshelf_app::app::run(settings).await,
        Command::List { pages } => browse(&settings, FilterCriteria::default(), pages, cli.json),
        Command::Search {
            title,
            author,
            genre,
            pages,
        } => {
            let criteria = FilterCriteria::new(
                &title,
                Constraint::from_field(author.as_deref()),
                Constraint::from_field(genre.as_deref()),
            );
            browse(&settings, criteria, pages, cli.json)
        }
        Command::Show { id } => show(&settings, &id, cli.json),
        Command::Authors => {
            let catalog = bookshelf_app::app::load_catalog(&settings)?;
            print_options(&preview::author_options(&catalog), cli.json)
        }
        Command::Genres => {
            let catalog = bookshelf_app::app::load_catalog(&settings)?;
            print_options(&preview::genre_options(&catalog), cli.json)
        }
    }
}

fn browse(
    settings: &Settings,
    criteria: FilterCriteria,
    pages: usize,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = bookshelf_app::app::load_catalog(settings)?;
    let page_size = NonZeroUsize::new(settings.catalog.page_size)
        .ok_or_else(|| anyhow!("catalog.page_size must be greater than zero"))?;

    let mut booklist = Booklist::new(catalog, page_size);
    booklist.search(criteria);
    for _ in 1..pages {
        if booklist.show_more().items.is_empty() {
            break;
        }
    }

    let output = ListOutput {
        items: preview::preview_cards(booklist.catalog(), booklist.visible()),
        total: booklist.matches().len(),
        page_index: booklist.page_index(),
        empty: booklist.is_empty(),
        show_more: booklist.button(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.empty {
        println!("No results found. Your filters might be too narrow.");
        return Ok(());
    }
    for card in &output.items {
        println!("{:<6} {} by {}", card.id, card.title, card.author);
    }
    if !output.show_more.disabled {
        println!("{}", output.show_more.label);
    }
    Ok(())
}

fn show(settings: &Settings, id: &str, json: bool) -> anyhow::Result<()> {
    let catalog = bookshelf_app::app::load_catalog(settings)?;
    let Some(book) = catalog.book(id) else {
        bail!("no book with id '{id}'");
    };
    let detail = preview::book_detail(&catalog, book);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("{}\n{}\n\n{}", detail.title, detail.subtitle, detail.description);
    }
    Ok(())
}

fn print_options(options: &[preview::DropdownOption], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(options)?);
    } else {
        for option in options {
            println!("{:<6} {}", option.value, option.label);
        }
    }
    Ok(())
}
