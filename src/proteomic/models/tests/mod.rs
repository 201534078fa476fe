mod protein;
mod precursor;
