pub mod writer;

pub use writer::LocaleWriter;
