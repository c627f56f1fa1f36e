use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

use crate::menu::{MenuBook, MenuError, SampleLoadMode};
use crate::models::{Course, MenuDraft, MenuItem};

#[derive(Parser)]
#[command(name = "chef-menu")]
#[command(about = "Chef Menu Manager - build a menu of dishes in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run in CLI mode (print output and exit, no interactive TUI); implied by a subcommand
    #[arg(long, global = true)]
    pub cli: bool,

    /// Start the TUI with the sample menu already loaded
    #[arg(long)]
    pub load_sample: bool,

    /// How loading the sample menu treats existing items (replace, append)
    #[arg(long)]
    pub sample_mode: Option<SampleLoadMode>,
}

impl Cli {
    /// A subcommand implies `--cli`; there is no TUI counterpart for one
    pub fn is_cli_mode(&self) -> bool {
        self.cli || self.command.is_some()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sample menu
    Sample {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate and build one menu item, then print it
    Add {
        /// Dish name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Dish description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Course (Starters, Mains, Dessert)
        #[arg(short, long, default_value = "Starters")]
        course: Course,

        /// Price, e.g. 12.99
        #[arg(short, long, default_value = "")]
        price: String,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Print menu items as an aligned table
pub fn write_table<W: Write>(out: &mut W, items: &[MenuItem], currency: &str) -> Result<()> {
    writeln!(
        out,
        "{:<14} {:<24} {:<10} {:>8}  {}",
        "ID", "Dish", "Course", "Price", "Description"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;
    for item in items {
        writeln!(
            out,
            "{:<14} {:<24} {:<10} {:>8}  {}",
            item.id,
            item.dish_name,
            item.course.as_str(),
            format!("{}{}", currency, item.price),
            item.description
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} items", items.len())?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, items: &[MenuItem]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)?;
    Ok(())
}

/// `sample`: print the sample menu
pub fn run_sample<W: Write>(out: &mut W, json: bool, currency: &str) -> Result<()> {
    let mut book = MenuBook::new();
    book.load_sample(SampleLoadMode::Replace);
    if json {
        write_json(out, book.items())
    } else {
        write_table(out, book.items(), currency)
    }
}

/// `add`: run the add-item operation once against an empty menu.
///
/// Validation failures come back as `Err(MenuError)` inside `Ok` so the
/// caller can choose the exit code.
pub fn run_add<W: Write>(
    out: &mut W,
    draft: &MenuDraft,
    image_url: Option<String>,
    json: bool,
    currency: &str,
) -> Result<std::result::Result<(), MenuError>> {
    let mut book = MenuBook::new().with_default_image_url(image_url);
    if let Err(e) = book.add_custom(draft) {
        return Ok(Err(e));
    }
    if json {
        write_json(out, book.items())?;
    } else {
        write_table(out, book.items(), currency)?;
    }
    Ok(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_table() {
        let mut out = Vec::new();
        run_sample(&mut out, false, "$").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Garlic Shrimp"));
        assert!(text.contains("$28.00"));
        assert!(text.contains("Total: 3 items"));
    }

    #[test]
    fn test_sample_json() {
        let mut out = Vec::new();
        run_sample(&mut out, true, "$").unwrap();
        let items: Vec<MenuItem> = serde_json::from_slice(&out).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].course, Course::Dessert);
    }

    #[test]
    fn test_add_reports_validation_error() {
        let mut out = Vec::new();
        let draft = MenuDraft::new("Soup", "", Course::Mains, "3");
        let result = run_add(&mut out, &draft, None, false, "$").unwrap();
        assert!(matches!(result, Err(MenuError::MissingFields(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_add_prints_item() {
        let mut out = Vec::new();
        let draft = MenuDraft::new("Soup", "Tomato", Course::Mains, " 3.50 ");
        run_add(&mut out, &draft, None, true, "$").unwrap().unwrap();
        let items: Vec<MenuItem> = serde_json::from_slice(&out).unwrap();
        assert_eq!(items[0].price, "3.50");
        assert_eq!(items[0].course, Course::Mains);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "chef-menu", "--cli", "add", "--name", "Soup", "--course", "dessert", "--price", "2",
        ])
        .unwrap();
        assert!(cli.cli);
        match cli.command {
            Some(Commands::Add { name, course, .. }) => {
                assert_eq!(name, "Soup");
                assert_eq!(course, Course::Dessert);
            }
            _ => panic!("expected add command"),
        }

        let cli = Cli::try_parse_from(["chef-menu", "--load-sample", "--sample-mode", "append"]).unwrap();
        assert!(cli.load_sample);
        assert_eq!(cli.sample_mode, Some(SampleLoadMode::Append));
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_subcommand_selects_cli_mode() {
        let cli = Cli::try_parse_from(["chef-menu", "sample", "--json"]).unwrap();
        assert!(!cli.cli);
        assert!(cli.is_cli_mode());
        assert!(matches!(cli.command, Some(Commands::Sample { json: true })));

        let cli = Cli::try_parse_from(["chef-menu", "--cli"]).unwrap();
        assert!(cli.is_cli_mode());
        assert!(cli.command.is_none());
    }
}
