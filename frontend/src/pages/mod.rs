pub mod labour_summary;
