//! Service layer for the sheetpost application.
//!
//! This module contains the ingestion steps:
//! - Source fetching with candidate fallback (`SourceFetcher`)
//! - CSV decoding (`CsvDecoder`)
//! - Record to post mapping (`PostNormalizer`)
//! - Summary statistics (`Aggregator`)

mod aggregator;
mod csv;
mod fetcher;
mod normalizer;

pub use aggregator::Aggregator;
pub use csv::CsvDecoder;
pub use fetcher::{
    FetchedSource, HttpResponse, HttpTransport, Rejection, ReqwestTransport, SourceFetcher,
};
pub use normalizer::PostNormalizer;

#[cfg(test)]
pub(crate) use fetcher::tests::{FakeTransport, source_config};
