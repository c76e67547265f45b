use std::path::PathBuf;

use serde::Serialize;

use crate::error::Error;
use crate::model::tell::TellBook;
use crate::model::trinket::{DuplicatePolicy, DEFAULT_CAPACITY};
use crate::parsers;
use crate::services::encoding::{self, InputEncoding};
use crate::services::output;

#[derive(Debug, Clone)]
pub struct TellsJob {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub encoding: InputEncoding,
}

#[derive(Debug, Clone)]
pub struct TrinketsJob {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub encoding: InputEncoding,
    pub capacity: usize,
    pub duplicates: DuplicatePolicy,
}

impl TrinketsJob {
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            encoding: InputEncoding::default(),
            capacity: DEFAULT_CAPACITY,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub records: usize,
    pub slots: usize,
    pub empty_slots: usize,
}

pub fn convert_tells(job: &TellsJob) -> Result<ConvertReport, Error> {
    let text = encoding::read_text(&job.src, job.encoding)?;
    let tells = parsers::tells::parse(&text)?;
    let book = TellBook::from(tells);

    output::write_json(&job.dst, &book)?;

    let report = ConvertReport {
        records: book.tells.len(),
        slots: book.tells.len(),
        empty_slots: 0,
    };
    info!(
        "{} -> {}: {} tells",
        job.src.display(),
        job.dst.display(),
        report.records
    );

    Ok(report)
}

pub fn convert_trinkets(job: &TrinketsJob) -> Result<ConvertReport, Error> {
    let text = encoding::read_text(&job.src, job.encoding)?;
    let table = parsers::trinkets::parse(&text, job.capacity, job.duplicates)?;

    output::write_json(&job.dst, &table)?;

    let report = ConvertReport {
        records: table.filled(),
        slots: table.capacity(),
        empty_slots: table.capacity() - table.filled(),
    };
    info!(
        "{} -> {}: {} trinkets in {} slots",
        job.src.display(),
        job.dst.display(),
        report.records,
        report.slots
    );
    if report.empty_slots > 0 {
        warn!(
            "{} slots left empty (ids {:?})",
            report.empty_slots,
            table.empty_ids()
        );
    }

    Ok(report)
}
