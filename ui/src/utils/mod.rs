pub mod colors;
pub mod csv_saver;
