//! # Interactive Menu
//!
//! Read-eval-print loop over a [`Store`].
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Store Menu                                                            │
//! │   ----------                                                            │
//! │   1. List all products in store ──► numbered describe() lines           │
//! │   2. Show total amount in store ──► Store::total_quantity               │
//! │   3. Make an order ───────────────► prompt pairs until empty input      │
//! │        "Which product # do you want?"   (empty → place order)           │
//! │        "What amount do you want?"                                       │
//! │           └──► Store::order ──► total or error message                  │
//! │   4. Quit                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad keystrokes and domain errors are reported and the loop continues.
//! Only terminal I/O errors end it early; end of input behaves like Quit.

use std::io::{self, BufRead, Write};

use shopfront_core::{OrderLine, ProductId, Store};
use tracing::{debug, info};

/// The interactive menu, generic over its input and output so tests can
/// drive it with in-memory buffers.
pub struct Menu<'a, R, W> {
    store: &'a mut Store,
    title: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut Store, title: &'a str, input: R, output: W) -> Self {
        Menu {
            store,
            title,
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!(title = %self.title, "Menu started");

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Please choose a number: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    self.list_products()?;
                }
                "2" => self.show_total_quantity()?,
                "3" => {
                    if !self.make_order()? {
                        break;
                    }
                }
                "4" => break,
                other => {
                    debug!(choice = other, "Unknown menu choice");
                    writeln!(self.output, "Error with your choice! Try again!")?;
                }
            }
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        info!("Menu closed");
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let heading = format!("{} Menu", self.title);
        writeln!(self.output)?;
        writeln!(self.output, "   {}", heading)?;
        writeln!(self.output, "   {}", "-".repeat(heading.chars().count()))?;
        writeln!(self.output, "1. List all products in store")?;
        writeln!(self.output, "2. Show total amount in store")?;
        writeln!(self.output, "3. Make an order")?;
        writeln!(self.output, "4. Quit")
    }

    /// Writes `text`, then reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prints the active products, numbered from 1, and returns their ids in
    /// the same order.
    fn list_products(&mut self) -> io::Result<Vec<ProductId>> {
        let products = self.store.all_products();

        writeln!(self.output, "------")?;
        for (index, product) in products.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, product.describe())?;
        }
        writeln!(self.output, "------")?;

        Ok(products.iter().map(|p| p.id()).collect())
    }

    fn show_total_quantity(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Total of {} items in store",
            self.store.total_quantity()
        )
    }

    /// Collects order lines and places the order.
    ///
    /// Returns `false` when input ended while collecting.
    fn make_order(&mut self) -> io::Result<bool> {
        let listed = self.list_products()?;
        writeln!(self.output, "When you want to finish order, enter empty text.")?;

        let mut lines = Vec::new();
        let mut input_open = true;

        loop {
            let Some(number) = self.prompt("Which product # do you want? ")? else {
                input_open = false;
                break;
            };
            if number.is_empty() {
                break;
            }

            let Some(product_id) = parse_product_number(&number, &listed) else {
                writeln!(self.output, "Error adding product! Choose a number from the list.")?;
                continue;
            };

            let Some(amount) = self.prompt("What amount do you want? ")? else {
                input_open = false;
                break;
            };
            let Some(quantity) = parse_amount(&amount) else {
                writeln!(self.output, "Error adding product! Amount must be a positive number.")?;
                continue;
            };

            lines.push(OrderLine::new(product_id, quantity));
            writeln!(self.output, "Product added to list!")?;
        }

        if !input_open {
            return Ok(false);
        }

        if lines.is_empty() {
            writeln!(self.output, "No products ordered.")?;
            return Ok(true);
        }

        match self.store.order(&lines) {
            Ok(total) => {
                writeln!(self.output, "********")?;
                writeln!(self.output, "Order made! Total payment: ${}", total)?;
            }
            Err(err) => {
                debug!(code = err.code(), "Order failed");
                writeln!(self.output, "Error while making order! {}", err)?;
            }
        }

        Ok(true)
    }
}

/// Maps a 1-based product number from the listing to its id.
fn parse_product_number(text: &str, listed: &[ProductId]) -> Option<ProductId> {
    let number: usize = text.parse().ok()?;
    number.checked_sub(1).and_then(|index| listed.get(index)).copied()
}

/// Parses an order amount; only positive integers are accepted.
fn parse_amount(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().filter(|amount| *amount > 0)
}

// =============================================================================
// Unit Tests
// =============================================================================
