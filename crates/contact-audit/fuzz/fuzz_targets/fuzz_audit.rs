//! Fuzz target for the loader, classifier and dry-run engine.
//!
//! Arbitrary UTF-8 input is split the way the loader splits a file, then
//! run through both pipelines. Invalid UTF-8 is skipped since the loader
//! rejects it before splitting. Nothing may panic, and every proposed row must
//! match the extended header's width.

#![no_main]

use std::path::PathBuf;

use contact_audit::{Classifier, Dataset, Loader, SourceMetadata, TransformEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let rows = Loader::new().parse_str(text);
    let source = SourceMetadata::new(PathBuf::from("fuzz.tsv"), String::new(), data.len() as u64, rows.len());
    let dataset = Dataset::new(rows, source);

    let _ = Classifier::new().classify(&dataset);

    if let Ok(engine) = TransformEngine::from_dataset(&dataset) {
        let width = engine.proposed_header().len();
        for row in engine.run(dataset.data_rows()).rows {
            assert_eq!(row.values.len(), width);
        }
    }
});
