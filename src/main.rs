mod args;
mod config;
mod reader;
mod writer;

use clv::fixture::sample_cards;
use clv::ids::CardId;
use clv::input::load_cards;
use clv::provider::StaticCards;
use clv::view::RetainedSurface;
use clv::{Command, Result, ViewController};

use std::io::{self, BufRead};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Loading cards...");

    let cards = load_provider()?;

    let mut controller = ViewController::new(cards)?;
    let mut surface = RetainedSurface::new();

    controller.mount(&mut surface);
    report_to_std_out(&surface)?;

    log::debug!("View mounted. Reading selections from stdin...");

    process_selections(&mut controller, &mut surface)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Cards from the input files when given, the bundled sample otherwise
fn load_provider() -> Result<StaticCards> {
    let input_paths = match args::parse_input_args()? {
        Some(input_paths) => input_paths,
        None => return sample_cards(),
    };

    log::debug!("Found input paths: {input_paths:?}");

    let mut cards_rdr = reader::build_csv_reader(input_paths.cards)?;
    let mut transactions_rdr = reader::build_csv_reader(input_paths.transactions)?;

    load_cards(&mut cards_rdr, &mut transactions_rdr)
}

/// Each stdin line is a card id to select. The view is written out after every selection.
fn process_selections(
    controller: &mut ViewController<StaticCards>,
    surface: &mut RetainedSurface,
) -> Result {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let id = match line.parse::<u32>() {
            Ok(id) => CardId(id),
            Err(e) => {
                log::warn!("Ignoring selection {line:?}: {e}");
                continue;
            }
        };

        if let Err(e) = controller.dispatch(Command::Select(id), surface) {
            log::warn!("{e}");
        }

        report_to_std_out(surface)?;
    }

    Ok(())
}

fn report_to_std_out(surface: &RetainedSurface) -> Result {
    let output = writer::write_to_string(surface)?;

    println!("{}", output);

    Ok(())
}
