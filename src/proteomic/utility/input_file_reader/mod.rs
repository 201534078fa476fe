pub mod fasta_reader;
