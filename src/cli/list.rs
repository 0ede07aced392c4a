//! `list` command: print a single page without the TUI

use std::io::{self, Write};

use crate::cli::commands::ListArgs;
use crate::core::catalog::{Catalog, DataSource};
use crate::core::pagination::CardList;
use crate::core::product::Product;
use crate::error::{CardListError, Result};

/// Handle the list command
pub fn handle_list(source: &DataSource, args: ListArgs) -> Result<()> {
    let catalog = Catalog::load(source)?;
    let list = build_list(catalog, args.search.as_deref(), args.page)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&mut out, &list)
    } else {
        write_page(&mut out, &list)
    }
}

/// Apply the search and move to the requested page
pub fn build_list(catalog: Catalog, search: Option<&str>, page: usize) -> Result<CardList> {
    let mut list = CardList::new(catalog);
    if let Some(term) = search {
        list.filter(term);
    }
    if !list.go_to_page(page) {
        return Err(CardListError::PageOutOfRange {
            page,
            pages: list.page_count(),
        });
    }
    Ok(list)
}

/// Print the current page as cards followed by the range summary
pub fn write_page<W: Write>(out: &mut W, list: &CardList) -> Result<()> {
    let page = list.page();
    if page.is_empty() {
        writeln!(out, "No products found matching your search.")?;
    } else {
        for product in page {
            write_card(out, product)?;
            writeln!(out)?;
        }
    }

    writeln!(
        out,
        "{}  (page {} of {})",
        list.summary(),
        list.page_number(),
        list.page_count()
    )?;
    Ok(())
}

/// Print the current page as a JSON array, fields passed through as loaded
pub fn write_json<W: Write>(out: &mut W, list: &CardList) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &list.page())?;
    writeln!(out)?;
    Ok(())
}

fn write_card<W: Write>(out: &mut W, product: &Product) -> Result<()> {
    let id = format!("#{}", product.id);
    match product.price() {
        Some(price) => writeln!(out, "{:<7} {}  ${:.2}", id, product.display_title(), price)?,
        None => writeln!(out, "{:<7} {}", id, product.display_title())?,
    }

    if let Some(description) = product.description() {
        writeln!(out, "        {}", description)?;
    }

    let tags: Vec<&str> = product.tag_titles().collect();
    if !tags.is_empty() {
        writeln!(out, "        tags: {}", tags.join(", "))?;
    }
    Ok(())
}
