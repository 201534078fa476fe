pub mod amino_acid;
pub mod modification;
#[cfg(test)]
mod tests;
