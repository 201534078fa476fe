pub mod amino_acids;
pub mod enzyms;
pub mod mass;
pub mod protein;
pub mod peptide;
pub mod precursor;
pub mod coverage;
#[cfg(test)]
mod tests;
