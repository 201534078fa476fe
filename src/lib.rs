pub mod proteomic;
