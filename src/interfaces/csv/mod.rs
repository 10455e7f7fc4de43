pub mod expense_reader;
pub mod report_writer;
pub mod roster_reader;
