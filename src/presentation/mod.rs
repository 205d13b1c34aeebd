// Presentation layer - command line and dry-run output
pub mod cli;
pub mod dry_run;
