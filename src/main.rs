use std::process;

use env_logger::Env;
use foretell_data::error::Error;
use foretell_data::model::trinket::DuplicatePolicy;
use foretell_data::parsers;
use foretell_data::services::convert::{self, TellsJob, TrinketsJob};
use foretell_data::services::{encoding, foretell, qa};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = cli::Foretell::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(opt: cli::Foretell) -> Result<(), Error> {
    match opt {
        cli::Foretell::Tells(t) => {
            convert::convert_tells(&TellsJob {
                src: t.src,
                dst: t.dst,
                encoding: t.encoding,
            })?;
        }

        cli::Foretell::Trinkets(t) => {
            let duplicates = t.duplicates();
            convert::convert_trinkets(&TrinketsJob {
                src: t.src,
                dst: t.dst,
                encoding: t.encoding,
                capacity: t.capacity,
                duplicates,
            })?;
        }

        cli::Foretell::Check(c) => {
            let src = c.src();
            let text = encoding::read_text(&src, c.encoding)?;
            let issues = match c.kind {
                cli::Kind::Tells => qa::run_tells(&parsers::tells::parse(&text)?),
                cli::Kind::Trinkets => {
                    let (table, overwritten) = parsers::trinkets::parse_with_overwrites(
                        &text,
                        c.capacity,
                        DuplicatePolicy::Overwrite,
                    )?;
                    qa::run_trinkets(&table, &overwritten)
                }
            };

            if c.json {
                println!("{}", serde_json::to_string_pretty(&issues)?);
            } else {
                for issue in &issues {
                    println!("{}\t{}\t{}", issue.location, issue.code, issue.message);
                }
            }

            if issues.is_empty() {
                info!("{}: no issues", src.display());
            } else {
                warn!("{}: {} issues", src.display(), issues.len());
            }
        }

        cli::Foretell::Draw(d) => {
            let tells = foretell::load_tells(&d.src);
            let mut rng = rand::thread_rng();
            if let Some(tell) = foretell::pick(&tells, &mut rng) {
                match d.lang {
                    cli::Side::Ch => println!("{}", tell.ch),
                    cli::Side::En => println!("{}", tell.en),
                }
            }
        }
    };
    Ok(())
}
