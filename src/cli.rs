//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use foretell_data::model::trinket::DuplicatePolicy;
use foretell_data::services::encoding::InputEncoding;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "foretell", about = "fortune-teller data tools.")]
/// Holds every command that is callable by the `foretell` command.
pub enum Foretell {
    #[structopt(about = "Convert alternating en/ch lines into tells JSON")]
    Tells(Tells),
    #[structopt(about = "Convert quoted id/name/description lines into trinkets JSON")]
    Trinkets(Trinkets),
    #[structopt(about = "Report suspicious entries in a tells or trinkets text file")]
    Check(Check),
    #[structopt(name = "foretell", about = "Print a random tell from a tells JSON file")]
    Draw(Draw),
}

#[derive(Debug, StructOpt)]
/// Tells conversion.
/// ```sh
/// USAGE:
///     foretell tells [OPTIONS] [ARGS]
///
/// OPTIONS:
///     -e, --encoding <encoding>    input encoding label, or "auto" [default: utf-8]
///
/// ARGS:
///     <src>    alternating en/ch lines [default: tells.txt]
///     <dst>    json destination [default: output.json]
/// ```
pub struct Tells {
    #[structopt(
        parse(from_os_str),
        help = "alternating en/ch lines",
        default_value = "tells.txt"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "json destination",
        default_value = "output.json"
    )]
    pub dst: PathBuf,
    #[structopt(
        short = "e",
        long = "encoding",
        help = "input encoding label, or \"auto\"",
        default_value = "utf-8"
    )]
    pub encoding: InputEncoding,
}

#[derive(Debug, StructOpt)]
/// Trinkets conversion.
pub struct Trinkets {
    #[structopt(
        parse(from_os_str),
        help = "one \"id\",\"name\",\"description\" per line",
        default_value = "trinkets.txt"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "json destination",
        default_value = "output.json"
    )]
    pub dst: PathBuf,
    #[structopt(
        short = "c",
        long = "capacity",
        help = "number of slots (highest valid id)",
        default_value = "189"
    )]
    pub capacity: usize,
    #[structopt(long = "reject-duplicates", help = "fail when an id appears twice")]
    pub reject_duplicates: bool,
    #[structopt(
        short = "e",
        long = "encoding",
        help = "input encoding label, or \"auto\"",
        default_value = "utf-8"
    )]
    pub encoding: InputEncoding,
}

impl Trinkets {
    pub fn duplicates(&self) -> DuplicatePolicy {
        if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Overwrite
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Tells,
    Trinkets,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tells" => Ok(Kind::Tells),
            "trinkets" => Ok(Kind::Trinkets),
            other => Err(format!("unknown kind '{other}' (expected tells or trinkets)")),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(help = "tells or trinkets", possible_values = &["tells", "trinkets"])]
    pub kind: Kind,
    #[structopt(
        parse(from_os_str),
        help = "source text file. Defaults to tells.txt or trinkets.txt."
    )]
    pub src: Option<PathBuf>,
    #[structopt(
        short = "c",
        long = "capacity",
        help = "number of slots (trinkets only)",
        default_value = "189"
    )]
    pub capacity: usize,
    #[structopt(
        short = "e",
        long = "encoding",
        help = "input encoding label, or \"auto\"",
        default_value = "utf-8"
    )]
    pub encoding: InputEncoding,
    #[structopt(long = "json", help = "print issues as json")]
    pub json: bool,
}

impl Check {
    pub fn src(&self) -> PathBuf {
        self.src.clone().unwrap_or_else(|| match self.kind {
            Kind::Tells => PathBuf::from("tells.txt"),
            Kind::Trinkets => PathBuf::from("trinkets.txt"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    En,
    Ch,
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Side::En),
            "ch" => Ok(Side::Ch),
            other => Err(format!("unknown language '{other}' (expected en or ch)")),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Random tell.
pub struct Draw {
    #[structopt(
        parse(from_os_str),
        help = "tells json file",
        default_value = "tells.json"
    )]
    pub src: PathBuf,
    #[structopt(
        long = "lang",
        help = "which side of the tell to print",
        default_value = "ch",
        possible_values = &["ch", "en"]
    )]
    pub lang: Side,
}
