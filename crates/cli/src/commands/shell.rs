//! Interactive session.
//!
//! Reads one command per line and runs it against a single [`AppState`], so
//! the search term, sort key and catalog edits carry over between commands.
//! Words are split like a shell would: quotes group words and a backslash
//! escapes the next character.

use std::io::{self, Write};

use cake_shop_storefront::config::StorefrontConfig;
use cake_shop_storefront::prompt::Prompt;
use cake_shop_storefront::storage::LocalStorage;
use cake_shop_storefront::AppState;
use clap::{Parser, Subcommand};
use thiserror::Error;

use super::{CommandError, dispatch};
use crate::ShopCommand;

#[derive(Parser)]
#[command(name = "cake-shop", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Shop(ShopCommand),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unterminated quote")]
struct UnterminatedQuote;

/// Lines from stdin, locking it only while a line is read so prompts can
/// read their answers in between.
pub fn stdin_lines() -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    })
}

/// Run commands from `input` until it ends or the user types `exit`.
///
/// Command failures are printed and the session goes on.
///
/// # Errors
///
/// Returns `CommandError::Output` if input cannot be read or output cannot
/// be written.
pub async fn run<S: LocalStorage>(
    shop: &mut AppState<S>,
    prompt: &mut impl Prompt,
    config: &StorefrontConfig,
    input: impl IntoIterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    writeln!(
        out,
        "Cake shop: {} cakes, {} items in your cart. Type `help` for commands, `exit` to leave.",
        shop.catalog().len(),
        shop.cart_item_count()
    )?;

    let mut input = input.into_iter();
    loop {
        write!(out, "{}> ", shop.view())?;
        out.flush()?;

        let Some(line) = input.next() else {
            writeln!(out)?;
            break;
        };
        let words = match split_words(&line?) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(&words) {
            Ok(ShellLine {
                command: ShellCommand::Shop(command),
            }) => command,
            Ok(ShellLine {
                command: ShellCommand::Exit,
            }) => break,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        match dispatch(shop, command, &mut *prompt, config, out).await {
            Ok(()) => {}
            Err(CommandError::App(e)) => {
                tracing::debug!(error = %e, "Shell command failed");
                writeln!(out, "error: {e}")?;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(cart_items = shop.cart_item_count(), "Shell session ended");
    Ok(())
}

fn split_words(line: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => current.extend(chars.next()),
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    current.extend(chars.next());
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
