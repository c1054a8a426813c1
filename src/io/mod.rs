pub mod json_io;
